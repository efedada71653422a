//! Closed fill outlines built from a wave's control points

use super::state::{Point, WaveState};

/// Drawing command for a backend path (same vocabulary as tiny-skia / canvas APIs)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCmd {
    MoveTo(Point),
    QuadTo { ctrl: Point, to: Point },
    LineTo(Point),
    Close,
}

/// A closed region ready to be filled
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Outline {
    cmds: Vec<PathCmd>,
}

impl Outline {
    pub fn from_commands(cmds: Vec<PathCmd>) -> Self {
        Self { cmds }
    }

    pub fn commands(&self) -> &[PathCmd] {
        &self.cmds
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Polygon approximation with `steps` line segments per quadratic curve
    pub fn flatten(&self, steps: usize) -> Vec<Point> {
        let steps = steps.max(1);
        let mut poly = Vec::new();
        let mut current = Point::default();
        for cmd in &self.cmds {
            match *cmd {
                PathCmd::MoveTo(p) | PathCmd::LineTo(p) => {
                    poly.push(p);
                    current = p;
                }
                PathCmd::QuadTo { ctrl, to } => {
                    for s in 1..=steps {
                        let t = s as f32 / steps as f32;
                        poly.push(quad_point(current, ctrl, to, t));
                    }
                    current = to;
                }
                PathCmd::Close => {}
            }
        }
        poly
    }

    /// (min, max) corners over every point the commands mention, control points included
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let mut iter = self.cmds.iter().flat_map(|cmd| match *cmd {
            PathCmd::MoveTo(p) | PathCmd::LineTo(p) => vec![p],
            PathCmd::QuadTo { ctrl, to } => vec![ctrl, to],
            PathCmd::Close => Vec::new(),
        });
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), p| {
            (
                Point::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        }))
    }
}

fn quad_point(from: Point, ctrl: Point, to: Point, t: f32) -> Point {
    let u = 1.0 - t;
    Point::new(
        u * u * from.x + 2.0 * u * t * ctrl.x + t * t * to.x,
        u * u * from.y + 2.0 * u * t * ctrl.y + t * t * to.y,
    )
}

/// Outline of one wave: quadratic humps through the even-indexed anchors
/// (odd points only steer the curves), then straight up to y = 0 and back to
/// the hidden left edge.
pub fn build_path(wave: &WaveState) -> Outline {
    let points = wave.points();
    let Some(first) = points.first() else {
        return Outline::default();
    };

    let mut cmds = Vec::with_capacity(points.len() / 2 + 4);
    cmds.push(PathCmd::MoveTo(*first));
    let mut i = 0;
    while i + 2 < points.len() {
        cmds.push(PathCmd::QuadTo {
            ctrl: points[i + 1],
            to: points[i + 2],
        });
        i += 2;
    }
    cmds.push(PathCmd::LineTo(Point::new(points[i].x, 0.0)));
    cmds.push(PathCmd::LineTo(Point::new(wave.left_edge(), 0.0)));
    cmds.push(PathCmd::Close);
    Outline { cmds }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wave::animator::step;
    use crate::wave::geometry::generate;
    use crate::wave::state::WaveConfig;

    fn config() -> WaveConfig {
        WaveConfig {
            amplitude: Some(10.0),
            level_line: Some(100.0),
            wave_count: 1,
            ..WaveConfig::default()
        }
    }

    #[test]
    fn outline_shape() {
        let (_, waves) = generate(&config(), 400.0, 300.0);
        let outline = build_path(&waves[0]);
        let cmds = outline.commands();
        // 13 points: move + 6 quads + 2 lines + close
        assert_eq!(cmds.len(), 10);
        assert_eq!(cmds[0], PathCmd::MoveTo(Point::new(-400.0, 100.0)));
        assert_eq!(
            cmds[1],
            PathCmd::QuadTo {
                ctrl: Point::new(-300.0, 120.0),
                to: Point::new(-200.0, 100.0),
            }
        );
        assert_eq!(cmds[7], PathCmd::LineTo(Point::new(800.0, 0.0)));
        assert_eq!(cmds[8], PathCmd::LineTo(Point::new(-400.0, 0.0)));
        assert_eq!(cmds[9], PathCmd::Close);
    }

    #[test]
    fn anchors_are_even_points() {
        let (_, waves) = generate(&config(), 400.0, 300.0);
        let outline = build_path(&waves[0]);
        let targets: Vec<Point> = outline
            .commands()
            .iter()
            .filter_map(|c| match c {
                PathCmd::QuadTo { to, .. } => Some(*to),
                _ => None,
            })
            .collect();
        let anchors: Vec<Point> = waves[0].points().iter().skip(2).step_by(2).copied().collect();
        assert_eq!(targets, anchors);
    }

    #[test]
    fn closure_follows_left_edge() {
        let (geometry, mut waves) = generate(&config(), 400.0, 300.0);
        step(&mut waves[0], &geometry);
        let outline = build_path(&waves[0]);
        let cmds = outline.commands();
        assert_eq!(cmds[cmds.len() - 2], PathCmd::LineTo(Point::new(-395.0, 0.0)));
    }

    #[test]
    fn building_twice_is_identical() {
        let (_, waves) = generate(&config(), 400.0, 300.0);
        assert_eq!(build_path(&waves[0]), build_path(&waves[0]));
    }

    #[test]
    fn flatten_hits_anchors() {
        let (_, waves) = generate(&config(), 400.0, 300.0);
        let poly = build_path(&waves[0]).flatten(4);
        // move + 6 quads * 4 + 2 lines
        assert_eq!(poly.len(), 1 + 24 + 2);
        assert_eq!(poly[4], Point::new(-200.0, 100.0));
        // the curve peaks halfway between anchor and control point
        assert_eq!(poly[2], Point::new(-300.0, 110.0));
    }

    #[test]
    fn bounds_include_control_points() {
        let (_, waves) = generate(&config(), 400.0, 300.0);
        let (lo, hi) = build_path(&waves[0]).bounds().unwrap();
        assert_eq!(lo, Point::new(-400.0, 0.0));
        assert_eq!(hi, Point::new(800.0, 120.0));
        assert!(Outline::default().bounds().is_none());
    }
}
