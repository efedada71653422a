use crate::settings::Settings;
use clap::Args;
use std::time::Duration;
use wavefill::colors::{scheme_gradient, Rgb};
use wavefill::raster::Viewport;
use wavefill::ticker::DEFAULT_INTERVAL;
use wavefill::wave::{WaveColors, WaveConfig};

/// Virtual pixels covered by one terminal cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSize {
    pub width: f32,
    pub height: f32,
}

impl Default for CellSize {
    fn default() -> Self {
        // terminal cells are roughly twice as tall as wide
        Self { width: 10.0, height: 20.0 }
    }
}

/// Parse `WxH`, e.g. `10x20`
pub fn parse_cell(s: &str) -> Result<CellSize, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("invalid cell size '{}': expected WxH", s))?;
    let parse = |v: &str| -> Result<f32, String> {
        let v: f32 = v.trim().parse().map_err(|_| format!("invalid cell size '{}'", s))?;
        if v > 0.0 && v.is_finite() {
            Ok(v)
        } else {
            Err(format!("invalid cell size '{}': must be positive", s))
        }
    };
    Ok(CellSize { width: parse(w)?, height: parse(h)? })
}

/// Wave options shared by every subcommand. Unset options fall back to the
/// settings file, then to the built-in defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct WaveArgs {
    /// Number of waves
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Pixels the slowest wave moves per tick (negative values are flipped)
    #[arg(short, long, allow_negative_numbers = true)]
    pub speed: Option<f32>,

    /// Speed ratio between neighbouring waves (0.7 = each wave 70% faster)
    #[arg(short, long)]
    pub offset: Option<f32>,

    /// Crest height in pixels [default: width / 20]
    #[arg(long)]
    pub height: Option<f32>,

    /// Level line y in pixels [default: half the height]
    #[arg(short, long)]
    pub level: Option<f32>,

    /// Phase distance all waves need before a stop takes effect
    #[arg(long)]
    pub stop_threshold: Option<f32>,

    /// Solid wave colour (#rrggbb)
    #[arg(short, long)]
    pub color: Option<Rgb>,

    /// Gradient colour at the top edge (#rrggbb)
    #[arg(long)]
    pub begin: Option<Rgb>,

    /// Gradient colour at the bottom edge (#rrggbb)
    #[arg(long)]
    pub end: Option<Rgb>,

    /// Gradient preset 0-9 (sea, fire, ice, pink, gold, electric, lava, mono, rainbow, neon)
    #[arg(long)]
    pub scheme: Option<u8>,

    /// Milliseconds per tick
    #[arg(short, long)]
    pub interval: Option<u64>,

    /// Virtual pixels per terminal cell, WxH
    #[arg(long, value_parser = parse_cell)]
    pub cell: Option<CellSize>,

    /// Mirror vertically so the fill rises from the bottom edge
    #[arg(long)]
    pub flip: bool,
}

/// Everything a host needs to drive and draw the engine
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub wave: WaveConfig,
    pub interval: Duration,
    pub cell: CellSize,
    pub flip: bool,
    pub scheme: u8,
}

impl RunConfig {
    pub fn resolve(args: &WaveArgs, settings: &Settings) -> Self {
        let s = &settings.wave;
        let d = &settings.display;
        let defaults = WaveConfig::default();

        let solid = args.color.or(s.color);
        let scheme = args.scheme.or(d.scheme);
        // a preset gradient unless the user only asked for a solid colour
        let preset = (scheme.is_some() || solid.is_none()).then(|| scheme_gradient(scheme.unwrap_or(0)));
        let colors = WaveColors {
            wave: solid.unwrap_or(defaults.colors.wave),
            begin: args.begin.or(s.begin_color).or(preset.map(|p| p.0)),
            end: args.end.or(s.end_color).or(preset.map(|p| p.1)),
        };

        let cell = args
            .cell
            .or_else(|| d.cell.as_deref().and_then(|c| parse_cell(c).ok()))
            .unwrap_or_default();

        Self {
            wave: WaveConfig {
                amplitude: args.height.or(s.height),
                level_line: args.level.or(s.level),
                base_speed: args.speed.or(s.speed).unwrap_or(defaults.base_speed),
                speed_offset_ratio: args.offset.or(s.speed_offset).unwrap_or(defaults.speed_offset_ratio),
                wave_count: args.count.or(s.count).unwrap_or(defaults.wave_count),
                stop_threshold: args.stop_threshold.or(s.stop_threshold).unwrap_or(defaults.stop_threshold),
                colors,
            },
            interval: args
                .interval
                .or(d.interval_ms)
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_INTERVAL),
            cell,
            flip: args.flip || d.flip.unwrap_or(false),
            scheme: scheme.unwrap_or(0),
        }
    }

    pub fn viewport(&self, cols: u16, rows: u16) -> Viewport {
        let mut viewport = Viewport::new(cols, rows, self.cell.width, self.cell.height);
        viewport.flip = self.flip;
        viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_cell_sizes() {
        assert_eq!(parse_cell("10x20"), Ok(CellSize { width: 10.0, height: 20.0 }));
        assert_eq!(parse_cell("8X16"), Ok(CellSize { width: 8.0, height: 16.0 }));
        assert!(parse_cell("10").is_err());
        assert!(parse_cell("0x20").is_err());
        assert!(parse_cell("ax2").is_err());
    }

    #[test]
    fn defaults_without_args_or_settings() {
        let config = RunConfig::resolve(&WaveArgs::default(), &Settings::default());
        assert_eq!(config.wave.wave_count, 3);
        assert_eq!(config.wave.base_speed, 5.0);
        assert_eq!(config.wave.speed_offset_ratio, 0.7);
        assert_eq!(config.interval, Duration::from_millis(10));
        assert_eq!(config.cell, CellSize::default());
        let (begin, end) = scheme_gradient(0);
        assert_eq!(config.wave.colors.begin, Some(begin));
        assert_eq!(config.wave.colors.end, Some(end));
    }

    #[test]
    fn args_override_settings() {
        let settings = Settings::parse("[wave]\ncount = 5\nspeed = 2.0\n[display]\ninterval_ms = 40\n").unwrap();
        let args = WaveArgs {
            count: Some(2),
            ..WaveArgs::default()
        };
        let config = RunConfig::resolve(&args, &settings);
        assert_eq!(config.wave.wave_count, 2);
        assert_eq!(config.wave.base_speed, 2.0);
        assert_eq!(config.interval, Duration::from_millis(40));
    }

    #[test]
    fn solid_colour_alone_disables_preset() {
        let args = WaveArgs {
            color: Some(Rgb::new(1, 2, 3)),
            ..WaveArgs::default()
        };
        let config = RunConfig::resolve(&args, &Settings::default());
        assert_eq!(config.wave.colors.wave, Rgb::new(1, 2, 3));
        assert_eq!(config.wave.colors.begin, None);
        assert_eq!(config.wave.colors.end, None);
    }

    #[test]
    fn viewport_carries_cell_and_flip() {
        let args = WaveArgs {
            flip: true,
            cell: Some(CellSize { width: 5.0, height: 10.0 }),
            ..WaveArgs::default()
        };
        let viewport = RunConfig::resolve(&args, &Settings::default()).viewport(80, 24);
        assert!(viewport.flip);
        assert_eq!(viewport.pixel_size(), (400.0, 240.0));
    }
}
