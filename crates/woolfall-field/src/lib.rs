//! Wool ball field simulation and rendering.
//!
//! A [`BallField`] owns a fixed set of [`WoolBall`]s that fall under gravity
//! and bounce off the edges of a [`Surface`]. A [`FrameLoop`] steps the field
//! once per frame and asks a host [`FrameScheduler`] for the next one.
//! [`PixelSurface`] is the terminal surface: an RGB raster rendered with
//! half-block glyphs through ratatui.

mod ball;
mod field;
mod frame_loop;
mod pixel;
mod surface;

#[cfg(test)]
mod testing;

pub use ball::{Physics, Strands, WoolBall};
pub use field::BallField;
pub use frame_loop::{FrameLoop, FrameScheduler, LoopState};
pub use pixel::PixelSurface;
pub use surface::{Point, Surface, Transform};
