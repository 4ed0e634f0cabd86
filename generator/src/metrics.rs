use std::ops::Range;

use texfont_font::{FontResource, is_drawable};

/// Returns the character of a codepoint if it can be shaped and drawn.
pub fn drawable_char(codepoint: u32) -> Option<char> {
    char::from_u32(codepoint).filter(|ch| is_drawable(*ch))
}

/// Converts a pixel distance into atlas-relative units.
pub fn normalize(pixels: i32, atlas_size: u32) -> f32 {
    pixels as f32 / atlas_size as f32
}

/// Pixel advance widths of every codepoint in the generated range, queried once per codepoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidthTable {
    range: Range<u32>,
    widths: Vec<i32>,
}

impl WidthTable {
    pub fn measure(range: Range<u32>, font: &impl FontResource) -> Self {
        let widths = range
            .clone()
            .map(|codepoint| {
                drawable_char(codepoint)
                    .map(|ch| font.advance_width(ch).max(0))
                    .unwrap_or(0)
            })
            .collect();

        Self { range, widths }
    }

    /// Advance width of a codepoint in pixels.
    ///
    /// Panics if the codepoint is outside of the measured range.
    pub fn pixel_width(&self, codepoint: u32) -> i32 {
        assert!(
            self.range.contains(&codepoint),
            "{codepoint:#x} is not in {:?}",
            self.range
        );
        self.widths[(codepoint - self.range.start) as usize]
    }
}
