//! Terminal host for the wave engine: interactive loop and headless modes

use crate::config::RunConfig;
use crate::terminal::Terminal;
use crossterm::event::{KeyCode, KeyModifiers};
use crossterm::style::Color;
use std::io::{self, Write};
use std::time::{Duration, Instant};
use wavefill::colors::ColorState;
use wavefill::raster::{self, Viewport};
use wavefill::ticker::FixedTicker;
use wavefill::wave::{EngineState, PathCmd, Tick, TickHandle, WaveEngine};

const FILL_CHAR: char = '█';
const IDLE_SLEEP: Duration = Duration::from_millis(50);

const KEYS_HELP: &str = "q quit  s stop  r restart  +/- waves  </> speed  u/d level  !..) colors";

/// Paint every outline back to front (wave 0 first)
pub fn draw_frame(term: &mut Terminal, engine: &mut WaveEngine, viewport: &Viewport) {
    term.clear();
    let style = engine.fill_style();
    for outline in engine.outlines() {
        raster::fill(&outline, &style, viewport, |col, row, rgb| {
            term.set(col as i32, row as i32, FILL_CHAR, Some(Color::from(rgb)), false);
        });
    }
}

fn draw_status(term: &mut Terminal, engine: &WaveEngine) {
    let (_, height) = term.size();
    let config = engine.requested_config();
    let state = match engine.state() {
        EngineState::Idle => "idle",
        EngineState::Running => "running",
        EngineState::StoppingPending => "stopping",
    };
    let pending = if engine.has_pending_reset() { " (r to apply)" } else { "" };
    let line = format!(
        " {} | waves {} | speed {:.1} | offset {:.2}{} | {}",
        state, config.wave_count, config.base_speed, config.speed_offset_ratio, pending, KEYS_HELP
    );
    term.set_str(0, height as i32 - 1, &line, Some(Color::White), true);
}

/// Runtime controls of the interactive loop
struct Controls {
    colors: ColorState,
    level_step: f32,
}

enum Action {
    Quit,
    Stop,
    Restart,
    None,
}

impl Controls {
    /// Apply a keypress to the engine. Config keys restart right away, like a
    /// button that changes a setting and calls start.
    fn handle_key(&mut self, engine: &mut WaveEngine, code: KeyCode, _mods: KeyModifiers) -> Action {
        let config = *engine.requested_config();
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
            KeyCode::Char('s') => return Action::Stop,
            KeyCode::Char('r') | KeyCode::Char(' ') => return Action::Restart,
            KeyCode::Char('+') | KeyCode::Char('=') => engine.set_wave_count(config.wave_count + 1),
            KeyCode::Char('-') => engine.set_wave_count(config.wave_count.saturating_sub(1).max(1)),
            KeyCode::Char('>') | KeyCode::Char('.') => engine.set_base_speed(config.base_speed.abs() + 5.0),
            KeyCode::Char('<') | KeyCode::Char(',') => engine.set_base_speed((config.base_speed.abs() - 5.0).max(1.0)),
            KeyCode::Char('u') => engine.set_level_line(engine.geometry().level_line - self.level_step),
            KeyCode::Char('d') => engine.set_level_line(engine.geometry().level_line + self.level_step),
            code => {
                if !self.colors.handle_key(code) {
                    return Action::None;
                }
                let (begin, end) = self.colors.gradient();
                engine.set_begin_color(Some(begin));
                engine.set_end_color(Some(end));
            }
        }
        Action::Restart
    }
}

/// Restart so a new size takes effect. A graceful stop in progress carries over.
fn restart_keeping_stop(engine: &mut WaveEngine) -> TickHandle {
    let stopping = engine.state() == EngineState::StoppingPending;
    let handle = engine.start();
    if stopping {
        engine.stop();
    }
    handle
}

/// Run the interactive animation until the user quits
pub fn run(config: RunConfig) -> io::Result<()> {
    let mut term = Terminal::new(true)?;
    let (mut width, mut height) = term.size();
    // last row holds the status line
    let mut viewport = config.viewport(width, height.saturating_sub(1));

    let mut engine = WaveEngine::new(config.wave);
    let (w, h) = viewport.pixel_size();
    engine.on_size_known(w, h);

    let mut controls = Controls {
        colors: ColorState::new(config.scheme),
        level_step: config.cell.height,
    };
    let mut ticker = FixedTicker::new(config.interval, Instant::now());
    let mut schedule: Option<TickHandle> = Some(engine.start());

    loop {
        let (new_w, new_h) = crossterm::terminal::size().unwrap_or((width, height));
        if new_w != width || new_h != height {
            width = new_w;
            height = new_h;
            term.resize(width, height);
            term.clear_screen()?;
            viewport = config.viewport(width, height.saturating_sub(1));
            let (w, h) = viewport.pixel_size();
            engine.on_size_known(w, h);
            if engine.is_running() {
                schedule = Some(restart_keeping_stop(&mut engine));
                ticker.restart(Instant::now());
            }
        }

        if let Some((code, mods)) = term.check_key()? {
            match controls.handle_key(&mut engine, code, mods) {
                Action::Quit => break,
                Action::Stop => engine.stop(),
                Action::Restart => {
                    schedule = Some(engine.start());
                    ticker.restart(Instant::now());
                }
                Action::None => {}
            }
        }

        if let Some(handle) = schedule {
            let due = ticker.due(Instant::now());
            match engine.tick_n(handle, due) {
                Tick::Continue => {}
                Tick::Halted | Tick::Cancelled => schedule = None,
            }
        }

        draw_frame(&mut term, &mut engine, &viewport);
        draw_status(&mut term, &engine);
        term.present()?;

        let pause = match schedule {
            Some(_) => ticker.until_next(Instant::now()),
            None => IDLE_SLEEP,
        };
        term.sleep(pause);
    }

    Ok(())
}

/// Advance `ticks` ticks headless and print one frame with ANSI colours
pub fn print(config: RunConfig, cols: u16, rows: u16, ticks: u32, out: &mut impl Write) -> io::Result<()> {
    let viewport = config.viewport(cols, rows);
    let mut engine = headless_engine(&config, &viewport, ticks);
    let mut term = Terminal::offscreen(cols, rows);
    draw_frame(&mut term, &mut engine, &viewport);
    term.write_ansi(out)
}

/// Advance `ticks` ticks headless and print the wave state and outlines as text
pub fn dump(config: RunConfig, cols: u16, rows: u16, ticks: u32, out: &mut impl Write) -> io::Result<()> {
    let viewport = config.viewport(cols, rows);
    let mut engine = headless_engine(&config, &viewport, ticks);
    let g = *engine.geometry();
    writeln!(
        out,
        "view {}x{} wavelength {} amplitude {} level_line {} ticks {}",
        g.view_width, g.view_height, g.wavelength, g.amplitude, g.level_line, ticks
    )?;
    writeln!(out, "fill {:?}", engine.fill_style())?;

    let outlines = engine.outlines();
    for (k, (wave, outline)) in engine.waves().iter().zip(&outlines).enumerate() {
        writeln!(
            out,
            "wave {} speed {} accumulated_move {} left_edge {}",
            k,
            wave.speed(),
            wave.accumulated_move(),
            wave.left_edge()
        )?;
        let points: Vec<String> = wave.points().iter().map(|p| format!("({}, {})", p.x, p.y)).collect();
        writeln!(out, "  points {}", points.join(" "))?;
        for cmd in outline.commands() {
            match cmd {
                PathCmd::MoveTo(p) => writeln!(out, "  M {} {}", p.x, p.y)?,
                PathCmd::QuadTo { ctrl, to } => writeln!(out, "  Q {} {} {} {}", ctrl.x, ctrl.y, to.x, to.y)?,
                PathCmd::LineTo(p) => writeln!(out, "  L {} {}", p.x, p.y)?,
                PathCmd::Close => writeln!(out, "  Z")?,
            }
        }
    }
    Ok(())
}

fn headless_engine(config: &RunConfig, viewport: &Viewport, ticks: u32) -> WaveEngine {
    let mut engine = WaveEngine::new(config.wave);
    let (w, h) = viewport.pixel_size();
    engine.on_size_known(w, h);
    let handle = engine.start();
    engine.tick_n(handle, ticks);
    engine
}
