use std::ops::Range;

use serde::{Deserialize, Serialize};
use texfont_font::FontDescriptor;
use texfont_geometry::{Color, TileGrid};

use crate::{Error, Result};

/// Everything a generator run needs, fixed before the run starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub font: FontDescriptor,
    /// Width and height of the atlas in pixels.
    #[serde(default = "defaults::atlas_size")]
    pub atlas_size: u32,
    /// Number of rows and columns.
    #[serde(default = "defaults::tile_count")]
    pub tile_count: u32,
    #[serde(default = "defaults::start_character")]
    pub start_character: u32,
    /// Expected to be translucent, but not enforced.
    #[serde(default = "defaults::background")]
    pub background: Color,
    #[serde(default = "defaults::text_color")]
    pub text_color: Color,
    #[serde(default = "defaults::enabled")]
    pub anti_alias: bool,
    #[serde(default = "defaults::enabled")]
    pub kerning: bool,
    /// Draws the cell boundaries in this color, for debugging layouts.
    #[serde(default)]
    pub grid_lines: Option<Color>,
}

mod defaults {
    use texfont_geometry::Color;

    pub fn atlas_size() -> u32 {
        512
    }

    pub fn tile_count() -> u32 {
        16
    }

    pub fn start_character() -> u32 {
        ' ' as u32
    }

    pub fn background() -> Color {
        Color::TRANSPARENT
    }

    pub fn text_color() -> Color {
        Color::WHITE
    }

    pub fn enabled() -> bool {
        true
    }
}

impl GenerationConfig {
    pub fn new(font: FontDescriptor) -> Self {
        Self {
            font,
            atlas_size: defaults::atlas_size(),
            tile_count: defaults::tile_count(),
            start_character: defaults::start_character(),
            background: defaults::background(),
            text_color: defaults::text_color(),
            anti_alias: true,
            kerning: true,
            grid_lines: None,
        }
    }

    pub fn with_atlas_size(mut self, atlas_size: u32) -> Self {
        self.atlas_size = atlas_size;
        self
    }

    pub fn with_tile_count(mut self, tile_count: u32) -> Self {
        self.tile_count = tile_count;
        self
    }

    pub fn with_start_character(mut self, start_character: u32) -> Self {
        self.start_character = start_character;
        self
    }

    pub fn with_kerning(mut self, kerning: bool) -> Self {
        self.kerning = kerning;
        self
    }

    pub fn with_anti_alias(mut self, anti_alias: bool) -> Self {
        self.anti_alias = anti_alias;
        self
    }

    pub fn with_colors(mut self, background: Color, text_color: Color) -> Self {
        self.background = background;
        self.text_color = text_color;
        self
    }

    pub fn with_grid_lines(mut self, color: Option<Color>) -> Self {
        self.grid_lines = color;
        self
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(Error::InvalidConfig(msg));

        if self.atlas_size == 0 {
            return invalid("atlas size must be at least one pixel".into());
        }
        if self.tile_count == 0 {
            return invalid("tile count must be at least one".into());
        }
        if self.tile_count > self.atlas_size {
            return invalid(format!(
                "{} tiles do not fit into an atlas of {} pixels",
                self.tile_count, self.atlas_size
            ));
        }
        if self.font.point_size == 0 {
            return invalid("point size must be at least one".into());
        }

        let tiles = self.tile_count as u64;
        let last = self.start_character as u64 + tiles * tiles - 1;
        if last > char::MAX as u64 {
            return invalid(format!(
                "character range ends at {last:#x}, beyond the last codepoint {:#x}",
                char::MAX as u32
            ));
        }

        Ok(())
    }

    pub fn grid(&self) -> TileGrid {
        TileGrid::new(self.atlas_size, self.tile_count)
    }

    /// The generated codepoints, in row-major cell order.
    ///
    /// Only valid after [`validate`](Self::validate) succeeded.
    pub fn codepoints(&self) -> Range<u32> {
        self.start_character..self.start_character + self.tile_count * self.tile_count
    }
}
