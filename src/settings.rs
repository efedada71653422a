use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use wavefill::colors::Rgb;

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub wave: WaveSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

/// `[wave]` table: defaults for the engine config
#[derive(Debug, Default, Deserialize)]
pub struct WaveSettings {
    pub count: Option<usize>,
    pub speed: Option<f32>,
    pub speed_offset: Option<f32>,
    pub height: Option<f32>,        // Crest height in virtual pixels
    pub level: Option<f32>,         // Level line y in virtual pixels
    pub stop_threshold: Option<f32>,
    pub color: Option<Rgb>,         // "#rrggbb"
    pub begin_color: Option<Rgb>,
    pub end_color: Option<Rgb>,
}

/// `[display]` table: how the terminal host draws
#[derive(Debug, Default, Deserialize)]
pub struct DisplaySettings {
    pub interval_ms: Option<u64>,
    pub cell: Option<String>,       // "WxH" virtual pixels per cell
    pub flip: Option<bool>,
    pub scheme: Option<u8>,
}

impl Settings {
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content).unwrap_or_else(|e| {
                eprintln!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wavefill")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        let settings = Settings::parse("").unwrap();
        assert!(settings.wave.count.is_none());
        assert!(settings.display.flip.is_none());
    }

    #[test]
    fn reads_both_tables() {
        let settings = Settings::parse(
            r##"
            [wave]
            count = 4
            speed = 3.5
            color = "#102030"
            begin_color = "#fff"

            [display]
            interval_ms = 16
            cell = "8x16"
            flip = true
            "##,
        )
        .unwrap();
        assert_eq!(settings.wave.count, Some(4));
        assert_eq!(settings.wave.speed, Some(3.5));
        assert_eq!(settings.wave.color, Some(Rgb::new(0x10, 0x20, 0x30)));
        assert_eq!(settings.wave.begin_color, Some(Rgb::new(255, 255, 255)));
        assert_eq!(settings.display.interval_ms, Some(16));
        assert_eq!(settings.display.cell.as_deref(), Some("8x16"));
        assert_eq!(settings.display.flip, Some(true));
    }

    #[test]
    fn bad_colour_is_an_error() {
        assert!(Settings::parse("[wave]\ncolor = \"teal\"\n").is_err());
    }
}
