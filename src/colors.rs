use crossterm::event::KeyCode;
use crossterm::style::Color;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// 24-bit colour passed through the engine to the fill backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend towards `other`, `t` clamped to 0..=1
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb { r: c.r, g: c.g, b: c.b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Accepts `#rrggbb`, `rrggbb`, `#rgb` and `rgb`
impl FromStr for Rgb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("invalid colour '{}': expected hex digits", s));
        }
        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|e| e.to_string());
        match hex.len() {
            6 => Ok(Rgb::new(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
            3 => {
                // #abc is shorthand for #aabbcc
                let r = channel(&hex[0..1])? * 17;
                let g = channel(&hex[1..2])? * 17;
                let b = channel(&hex[2..3])? * 17;
                Ok(Rgb::new(r, g, b))
            }
            _ => Err(format!("invalid colour '{}': expected #rrggbb or #rgb", s)),
        }
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Default solid wave colour (a material-ish primary blue)
pub const DEFAULT_WAVE: Rgb = Rgb::new(0x3f, 0x51, 0xb5);

/// Shared color scheme state, switched with Shift+digit like the other visualizations
#[derive(Clone, Copy)]
pub struct ColorState {
    pub scheme: u8,
}

impl ColorState {
    pub fn new(default_scheme: u8) -> Self {
        Self { scheme: default_scheme }
    }

    /// Handle color scheme key input. Returns true if key was handled.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('!') => self.scheme = 1,  // Shift+1: fire
            KeyCode::Char('@') => self.scheme = 2,  // Shift+2: ice
            KeyCode::Char('#') => self.scheme = 3,  // Shift+3: pink
            KeyCode::Char('$') => self.scheme = 4,  // Shift+4: gold
            KeyCode::Char('%') => self.scheme = 5,  // Shift+5: electric
            KeyCode::Char('^') => self.scheme = 6,  // Shift+6: lava
            KeyCode::Char('&') => self.scheme = 7,  // Shift+7: mono
            KeyCode::Char('*') => self.scheme = 8,  // Shift+8: rainbow
            KeyCode::Char('(') => self.scheme = 9,  // Shift+9: neon
            KeyCode::Char(')') => self.scheme = 0,  // Shift+0: sea
            _ => return false,
        }
        true
    }

    /// (begin, end) gradient colours for the current scheme
    pub fn gradient(&self) -> (Rgb, Rgb) {
        scheme_gradient(self.scheme)
    }
}

/// Top and bottom colours of the vertical fill gradient for a scheme
pub fn scheme_gradient(scheme: u8) -> (Rgb, Rgb) {
    match scheme {
        1 => (Rgb::new(0xff, 0xd5, 0x4f), Rgb::new(0x8b, 0x00, 0x00)),  // fire
        2 => (Rgb::new(0xe0, 0xf7, 0xfa), Rgb::new(0x00, 0x60, 0x64)),  // ice
        3 => (Rgb::new(0xf8, 0xbb, 0xd0), Rgb::new(0x88, 0x0e, 0x4f)),  // pink
        4 => (Rgb::new(0xff, 0xf1, 0x76), Rgb::new(0xbf, 0x84, 0x00)),  // gold
        5 => (Rgb::new(0x84, 0xff, 0xff), Rgb::new(0x00, 0x91, 0xea)),  // electric
        6 => (Rgb::new(0xff, 0x6e, 0x40), Rgb::new(0x4a, 0x00, 0x72)),  // lava
        7 => (Rgb::new(0xee, 0xee, 0xee), Rgb::new(0x42, 0x42, 0x42)),  // mono
        8 => (Rgb::new(0xff, 0xeb, 0x3b), Rgb::new(0x4c, 0xaf, 0x50)),  // rainbow
        9 => (Rgb::new(0xea, 0x80, 0xfc), Rgb::new(0x1a, 0x23, 0x7e)),  // neon
        _ => (Rgb::new(0x4f, 0xc3, 0xf7), Rgb::new(0x0d, 0x47, 0xa1)),  // sea
    }
}
