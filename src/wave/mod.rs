//! Scrolling Bezier wave engine
//!
//! Each wave is a row of quadratic control points laid out one period to the
//! left of the view. Every tick shifts the points right by the wave's speed;
//! after a full wavelength they snap back to their original layout, which is
//! seamless because the pattern repeats exactly. Waves run at geometrically
//! increasing speeds so their crests drift in and out of phase.

pub mod animator;
pub mod engine;
pub mod geometry;
pub mod path;
pub mod state;

pub use engine::{EngineState, FillStyle, Tick, TickHandle, WaveEngine};
pub use geometry::Geometry;
pub use path::{build_path, Outline, PathCmd};
pub use state::{Point, WaveColors, WaveConfig, WaveState};
