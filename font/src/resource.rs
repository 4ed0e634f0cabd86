/// A font that has been resolved for one size, as the generator needs it.
///
/// All widths are whole pixels. Implementations must be deterministic: the same query always
/// returns the same answer.
pub trait FontResource {
    /// Distance from the top of a line to its baseline.
    fn ascent(&self) -> i32;

    /// Horizontal advance of a single character, without any kerning.
    fn advance_width(&self, ch: char) -> i32;

    /// Total advance of a character sequence as laid out by the font, kerning included.
    fn string_width(&self, text: &[char]) -> i32;

    /// Renders the glyphs of `ch`. Bitmap positions are relative to the pen origin on the
    /// baseline. An empty result means there is nothing to draw.
    fn rasterize(&self, ch: char, anti_alias: bool) -> Vec<GlyphBitmap>;
}

/// A rendered glyph image positioned relative to the pen origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphBitmap {
    /// Offset from the pen origin to the left edge.
    pub left: i32,
    /// Offset from the baseline up to the top edge.
    pub top: i32,
    pub width: u32,
    pub height: u32,
    pub content: BitmapContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitmapContent {
    /// One coverage byte per pixel.
    Coverage(Vec<u8>),
    /// Four bytes per pixel, RGBA (color emoji fonts).
    Color(Vec<u8>),
}

impl GlyphBitmap {
    /// Returns the coverage / alpha value at `(x, y)`, and for color bitmaps the pixel's RGB.
    pub fn pixel(&self, x: u32, y: u32) -> (u8, Option<[u8; 3]>) {
        let i = (y * self.width + x) as usize;
        match &self.content {
            BitmapContent::Coverage(data) => (data[i], None),
            BitmapContent::Color(data) => {
                let p = &data[i * 4..i * 4 + 4];
                (p[3], Some([p[0], p[1], p[2]]))
            }
        }
    }
}

/// Whether a character can be shaped and drawn at all. Control characters produce no output.
pub fn is_drawable(ch: char) -> bool {
    !ch.is_control()
}
