//! Animated Bezier wave fills: the engine plus a scanline backend and a
//! fixed-interval ticker for hosts that draw into a cell grid.

pub mod colors;
pub mod raster;
pub mod ticker;
pub mod wave;
