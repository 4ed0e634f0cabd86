//! Font resolution, metrics and glyph rasterization for the texture font generator.
//!
//! The generator only talks to [`FontResource`]. [`CosmicFont`] implements it on top of the host
//! font database (cosmic-text / fontdb) and swash.

mod cosmic_font;
mod descriptor;
mod error;
mod font_manager;
mod rasterization;
mod resource;

pub use cosmic_font::*;
pub use descriptor::*;
pub use error::*;
pub use font_manager::*;
pub use resource::*;
