//! Wave configuration and per-wave mutable state

use crate::colors::{Rgb, DEFAULT_WAVE};

pub const DEFAULT_SPEED: f32 = 5.0;
pub const DEFAULT_SPEED_OFFSET: f32 = 0.7;
pub const DEFAULT_WAVE_COUNT: usize = 3;
pub const DEFAULT_STOP_THRESHOLD: f32 = 200.0;

/// A coordinate on a wave outline (top-left origin, y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Colours handed through to the fill backend untouched
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveColors {
    pub wave: Rgb,
    pub begin: Option<Rgb>,
    pub end: Option<Rgb>,
}

impl Default for WaveColors {
    fn default() -> Self {
        Self {
            wave: DEFAULT_WAVE,
            begin: None,
            end: None,
        }
    }
}

/// Tunables for one animation session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveConfig {
    /// Crest height; `None` (or zero) means view width / 20
    pub amplitude: Option<f32>,
    /// y of the level line; `None` (or zero) means half the view height
    pub level_line: Option<f32>,
    /// Horizontal step per tick of wave 0. Negative values are used as their magnitude.
    pub base_speed: f32,
    /// Each wave runs `1 + speed_offset_ratio` times faster than the one before
    pub speed_offset_ratio: f32,
    pub wave_count: usize,
    /// Minimum pairwise phase distance before a requested stop may take effect
    pub stop_threshold: f32,
    pub colors: WaveColors,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            amplitude: None,
            level_line: None,
            base_speed: DEFAULT_SPEED,
            speed_offset_ratio: DEFAULT_SPEED_OFFSET,
            wave_count: DEFAULT_WAVE_COUNT,
            stop_threshold: DEFAULT_STOP_THRESHOLD,
            colors: WaveColors::default(),
        }
    }
}

/// Treat zero the same as "not set"
pub(crate) fn non_zero(v: Option<f32>) -> Option<f32> {
    v.filter(|v| *v != 0.0)
}

/// Mutable state of a single scrolling wave
#[derive(Debug, Clone, PartialEq)]
pub struct WaveState {
    pub(crate) points: Vec<Point>,
    pub(crate) speed: f32,
    pub(crate) accumulated_move: f32,
    pub(crate) left_edge: f32,
}

impl WaveState {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Displacement since the last period reset
    pub fn accumulated_move(&self) -> f32 {
        self.accumulated_move
    }

    /// x of the leftmost (normally off-screen) point
    pub fn left_edge(&self) -> f32 {
        self.left_edge
    }
}
