//! Scanline fill of wave outlines into a character-cell grid

use crate::colors::Rgb;
use crate::wave::{FillStyle, Outline, Point};

/// Line segments per quadratic curve when flattening
const CURVE_STEPS: usize = 8;

/// Maps the engine's virtual pixel space onto terminal cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    pub cell_width: f32,
    pub cell_height: f32,
    /// Mirror vertically so the region hangs from the bottom edge instead of the top
    pub flip: bool,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, cell_width: f32, cell_height: f32) -> Self {
        Self {
            cols,
            rows,
            cell_width,
            cell_height,
            flip: false,
        }
    }

    /// Size of the drawable area in virtual pixels
    pub fn pixel_size(&self) -> (f32, f32) {
        (
            self.cols as f32 * self.cell_width,
            self.rows as f32 * self.cell_height,
        )
    }

    /// Engine-space y sampled for a cell row (the row's vertical centre)
    fn sample_y(&self, row: u16) -> f32 {
        let y = (row as f32 + 0.5) * self.cell_height;
        if self.flip {
            self.pixel_size().1 - y
        } else {
            y
        }
    }
}

/// x positions where a horizontal line at `y` crosses the polygon, sorted
fn crossings(poly: &[Point], y: f32) -> Vec<f32> {
    let mut xs: Vec<f32> = poly
        .iter()
        .zip(poly.iter().cycle().skip(1))
        .filter(|(a, b)| (a.y <= y) != (b.y <= y))
        .map(|(a, b)| a.x + (y - a.y) * (b.x - a.x) / (b.y - a.y))
        .collect();
    xs.sort_by(f32::total_cmp);
    xs
}

/// Fill one outline with the even-odd rule, calling `plot(col, row, colour)` for
/// every cell whose centre lies inside.
pub fn fill(outline: &Outline, style: &FillStyle, viewport: &Viewport, mut plot: impl FnMut(u16, u16, Rgb)) {
    let Some((lo, hi)) = outline.bounds() else {
        return;
    };
    let poly = outline.flatten(CURVE_STEPS);
    if poly.len() < 3 || viewport.cell_width <= 0.0 {
        return;
    }

    for row in 0..viewport.rows {
        let y = viewport.sample_y(row);
        if y < lo.y || y > hi.y {
            continue;
        }
        let color = style.color_at(y);
        for span in crossings(&poly, y).chunks_exact(2) {
            // first and last column whose centre falls in [x0, x1)
            let first = (span[0] / viewport.cell_width - 0.5).ceil().max(0.0);
            let last = (span[1] / viewport.cell_width - 0.5).ceil() - 1.0;
            if last < first {
                continue;
            }
            let last = last.min(viewport.cols as f32 - 1.0);
            let mut col = first as u16;
            while (col as f32) <= last {
                plot(col, row, color);
                col += 1;
            }
        }
    }
}
