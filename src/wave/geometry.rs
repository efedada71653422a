//! Initial control-point layout for each wave

use super::state::{non_zero, Point, WaveConfig, WaveState};
use log::debug;

/// Resolved numbers a generation pass used. Period resets and paths read these
/// instead of the config so that defaults computed from the view stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Geometry {
    pub view_width: f32,
    pub view_height: f32,
    pub wavelength: f32,
    pub amplitude: f32,
    pub control_height: f32,
    pub level_line: f32,
}

impl Geometry {
    pub fn resolve(config: &WaveConfig, view_width: f32, view_height: f32) -> Self {
        let amplitude = non_zero(config.amplitude).unwrap_or(view_width / 20.0);
        let level_line = non_zero(config.level_line).unwrap_or(view_height / 2.0);
        // One period spans the whole view, so only a gentle slice of a hump is visible
        let wavelength = view_width;
        Self {
            view_width,
            view_height,
            wavelength,
            amplitude,
            control_height: amplitude * 2.0,
            level_line,
        }
    }

    /// Visible periods. Rounds `width / wavelength + 0.5` up, so an exact fit
    /// still gets an extra period. Zero for a zero-width view.
    pub fn periods(&self) -> usize {
        if self.wavelength.is_nan() || self.wavelength <= 0.0 || !self.view_width.is_finite() {
            return 0;
        }
        (self.view_width / self.wavelength + 0.5).ceil() as usize
    }

    /// Four points per period, plus one hidden period on the left and the closing anchor
    pub fn point_count(&self) -> usize {
        4 * self.periods() + 5
    }

    /// Generated x of point `i`
    pub fn home_x(&self, i: usize) -> f32 {
        i as f32 * self.wavelength / 4.0 - self.wavelength
    }

    /// y of point `i`: anchors on the level line, control points alternating below/above
    pub fn pattern_y(&self, i: usize) -> f32 {
        match i % 4 {
            1 => self.level_line + self.control_height,
            3 => self.level_line - self.control_height,
            _ => self.level_line,
        }
    }

    fn layout(&self) -> Vec<Point> {
        (0..self.point_count())
            .map(|i| Point::new(self.home_x(i), self.pattern_y(i)))
            .collect()
    }
}

/// Per-wave speeds: |base| first, then geometric growth by `1 + ratio`
pub fn speeds(config: &WaveConfig) -> Vec<f32> {
    let factor = 1.0 + config.speed_offset_ratio;
    std::iter::successors(Some(config.base_speed.abs()), |s| Some(s * factor))
        .take(config.wave_count)
        .collect()
}

/// Build fresh wave states for a view of the given size
pub fn generate(config: &WaveConfig, view_width: f32, view_height: f32) -> (Geometry, Vec<WaveState>) {
    let geometry = Geometry::resolve(config, view_width, view_height);
    let waves: Vec<WaveState> = speeds(config)
        .into_iter()
        .enumerate()
        .map(|(k, speed)| {
            let points = geometry.layout();
            debug!("wave {}: {} points, speed {}", k, points.len(), speed);
            WaveState {
                points,
                speed,
                accumulated_move: 0.0,
                left_edge: -geometry.wavelength,
            }
        })
        .collect();
    (geometry, waves)
}

/// Snap every point back to its generated x, one full period behind
pub fn reset_points(wave: &mut WaveState, geometry: &Geometry) {
    wave.left_edge = -geometry.wavelength;
    for (i, p) in wave.points.iter_mut().enumerate() {
        p.x = geometry.home_x(i);
    }
}
