//! The wave engine: config, lifecycle state machine and tick scheduling

use super::animator;
use super::geometry::{generate, Geometry};
use super::path::{build_path, Outline};
use super::state::{non_zero, WaveConfig, WaveState};
use crate::colors::Rgb;
use log::{debug, info};

/// Lifecycle of an engine: `Idle → Running → StoppingPending → Idle`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Running,
    /// A stop was requested; ticking goes on until the crests are apart
    StoppingPending,
}

/// Token for one tick schedule. Restarting the engine invalidates older handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickHandle {
    epoch: u64,
}

/// Outcome of a scheduled tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// State advanced, keep scheduling
    Continue,
    /// State advanced and the engine went idle; stop scheduling
    Halted,
    /// The handle belongs to a cancelled schedule; nothing was touched
    Cancelled,
}

/// How the backend should paint every outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FillStyle {
    Solid(Rgb),
    /// Vertical gradient from `begin` at y = 0 to `end` at y = `height`
    Gradient { begin: Rgb, end: Rgb, height: f32 },
}

impl FillStyle {
    pub fn color_at(&self, y: f32) -> Rgb {
        match *self {
            FillStyle::Solid(c) => c,
            FillStyle::Gradient { begin, end, height } => {
                if height > 0.0 {
                    begin.lerp(end, y / height)
                } else {
                    begin
                }
            }
        }
    }
}

/// Multi-wave animation engine driven by an external ticker
pub struct WaveEngine {
    config: WaveConfig,
    /// Requested config, swapped in on the next `start()`
    pending: Option<WaveConfig>,
    view_width: f32,
    view_height: f32,
    sized: bool,
    size_dirty: bool,
    geometry: Geometry,
    waves: Vec<WaveState>,
    generated: bool,
    state: EngineState,
    epoch: u64,
}

impl WaveEngine {
    pub fn new(config: WaveConfig) -> Self {
        Self {
            config,
            pending: None,
            view_width: 0.0,
            view_height: 0.0,
            sized: false,
            size_dirty: false,
            geometry: Geometry::default(),
            waves: Vec::new(),
            generated: false,
            state: EngineState::Idle,
            epoch: 0,
        }
    }

    /// Laid-out size of the drawable area. The first call generates immediately
    /// so the host can draw before starting; later changes wait for `start()`.
    pub fn on_size_known(&mut self, width: f32, height: f32) {
        if self.sized && width == self.view_width && height == self.view_height {
            return;
        }
        self.view_width = width;
        self.view_height = height;
        if self.sized {
            // back to the size the waves were built for: nothing to redo
            self.size_dirty = width != self.geometry.view_width || height != self.geometry.view_height;
        } else {
            self.sized = true;
            self.regenerate();
        }
    }

    /// Begin a fresh tick schedule. Any previous schedule is cancelled first and a
    /// pending reconfiguration is applied, so this is always a clean restart.
    pub fn start(&mut self) -> TickHandle {
        self.epoch += 1;
        if let Some(next) = self.pending.take() {
            self.config = next;
            self.regenerate();
        } else if self.size_dirty || !self.generated {
            self.regenerate();
        }
        self.state = EngineState::Running;
        info!("wave engine started (schedule {})", self.epoch);
        TickHandle { epoch: self.epoch }
    }

    /// Ask the animation to halt once the waves are visibly out of phase
    pub fn stop(&mut self) {
        if self.state == EngineState::Running {
            self.state = EngineState::StoppingPending;
        }
    }

    /// Run one tick of the schedule behind `handle`
    pub fn tick(&mut self, handle: TickHandle) -> Tick {
        if handle.epoch != self.epoch || self.state == EngineState::Idle {
            return Tick::Cancelled;
        }
        if self.advance() {
            Tick::Continue
        } else {
            Tick::Halted
        }
    }

    /// Run `ticks` ticks in a row, stopping early if the engine halts
    pub fn tick_n(&mut self, handle: TickHandle, ticks: u32) -> Tick {
        for _ in 0..ticks {
            match self.tick(handle) {
                Tick::Continue => {}
                other => return other,
            }
        }
        if handle.epoch != self.epoch || self.state == EngineState::Idle {
            Tick::Cancelled
        } else {
            Tick::Continue
        }
    }

    /// Advance every wave one step regardless of schedule. Returns false once a
    /// requested stop has taken effect.
    pub fn advance(&mut self) -> bool {
        self.ensure_generated();
        let stop_requested = self.state == EngineState::StoppingPending;
        let keep_going = animator::advance(
            &mut self.waves,
            &self.geometry,
            stop_requested,
            self.config.stop_threshold,
        );
        if !keep_going {
            info!("wave engine halted");
            self.state = EngineState::Idle;
        }
        keep_going
    }

    /// Outlines in paint order: wave 0 first (behind), last wave on top
    pub fn outlines(&mut self) -> Vec<Outline> {
        self.ensure_generated();
        self.waves.iter().map(build_path).collect()
    }

    /// Shared fill for every outline. A complete begin/end pair wins over the solid colour.
    pub fn fill_style(&self) -> FillStyle {
        let colors = self.config.colors;
        match (colors.begin, colors.end) {
            (Some(begin), Some(end)) => FillStyle::Gradient {
                begin,
                end,
                height: self.geometry.view_height,
            },
            _ => FillStyle::Solid(colors.wave),
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state != EngineState::Idle
    }

    /// Config the current waves were generated from
    pub fn config(&self) -> &WaveConfig {
        &self.config
    }

    /// Config the next `start()` will use
    pub fn requested_config(&self) -> &WaveConfig {
        self.pending.as_ref().unwrap_or(&self.config)
    }

    pub fn has_pending_reset(&self) -> bool {
        self.pending.is_some() || self.size_dirty
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn waves(&self) -> &[WaveState] {
        &self.waves
    }

    pub fn set_wave_count(&mut self, count: usize) {
        self.update(|c| c.wave_count = count);
    }

    pub fn set_base_speed(&mut self, speed: f32) {
        self.update(|c| c.base_speed = speed);
    }

    pub fn set_speed_offset_ratio(&mut self, ratio: f32) {
        self.update(|c| c.speed_offset_ratio = ratio);
    }

    /// Zero restores the computed default
    pub fn set_level_line(&mut self, level: f32) {
        self.update(|c| c.level_line = non_zero(Some(level)));
    }

    /// Zero restores the computed default
    pub fn set_amplitude(&mut self, amplitude: f32) {
        self.update(|c| c.amplitude = non_zero(Some(amplitude)));
    }

    pub fn set_stop_threshold(&mut self, threshold: f32) {
        self.update(|c| c.stop_threshold = threshold);
    }

    pub fn set_wave_color(&mut self, color: Rgb) {
        self.update(|c| c.colors.wave = color);
    }

    pub fn set_begin_color(&mut self, color: Option<Rgb>) {
        self.update(|c| c.colors.begin = color);
    }

    pub fn set_end_color(&mut self, color: Option<Rgb>) {
        self.update(|c| c.colors.end = color);
    }

    /// Record a config change for the next start; identical values are a no-op
    fn update(&mut self, change: impl FnOnce(&mut WaveConfig)) {
        let mut next = *self.requested_config();
        change(&mut next);
        if next == *self.requested_config() {
            return;
        }
        debug!("config change pending: {:?}", next);
        self.pending = if next == self.config { None } else { Some(next) };
    }

    fn ensure_generated(&mut self) {
        if !self.generated {
            // Drawn before layout: placeholder pass with whatever size is known
            self.regenerate();
        }
    }

    fn regenerate(&mut self) {
        let (geometry, waves) = generate(&self.config, self.view_width, self.view_height);
        debug!(
            "generated {} waves for {}x{} view",
            waves.len(),
            self.view_width,
            self.view_height
        );
        self.geometry = geometry;
        self.waves = waves;
        self.generated = true;
        self.size_dirty = false;
    }
}

impl Default for WaveEngine {
    fn default() -> Self {
        Self::new(WaveConfig::default())
    }
}
