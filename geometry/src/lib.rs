//! Pixel geometry and colors shared by the font generator crates.

mod color;
mod tile_grid;

pub use color::*;
pub use tile_grid::*;

pub struct PixelUnit;
pub type SizePx = euclid::Size2D<u32, PixelUnit>;
pub type VectorPx = euclid::Vector2D<i32, PixelUnit>;
pub type PointPx = euclid::Point2D<i32, PixelUnit>;
