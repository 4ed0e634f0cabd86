//! A deterministic font with synthetic metrics.

use std::{cell::Cell, collections::HashMap};

use texfont_font::{BitmapContent, FontResource, GlyphBitmap};

/// Every glyph is a solid box, as wide as its advance and as high as the ascent.
#[derive(Debug, Clone)]
pub struct SyntheticFont {
    ascent: i32,
    default_width: i32,
    widths: HashMap<char, i32>,
    pairs: HashMap<(char, char), i32>,
    advance_queries: Cell<usize>,
    string_queries: Cell<usize>,
}

impl SyntheticFont {
    pub fn new(default_width: i32) -> Self {
        Self {
            ascent: 8,
            default_width,
            widths: HashMap::new(),
            pairs: HashMap::new(),
            advance_queries: Cell::new(0),
            string_queries: Cell::new(0),
        }
    }

    pub fn with_ascent(mut self, ascent: i32) -> Self {
        self.ascent = ascent;
        self
    }

    pub fn with_width(mut self, ch: char, width: i32) -> Self {
        self.widths.insert(ch, width);
        self
    }

    /// Adjusts the laid out width of `first` followed by `second`.
    pub fn with_pair(mut self, first: char, second: char, adjustment: i32) -> Self {
        self.pairs.insert((first, second), adjustment);
        self
    }

    pub fn advance_queries(&self) -> usize {
        self.advance_queries.get()
    }

    pub fn string_queries(&self) -> usize {
        self.string_queries.get()
    }

    fn width(&self, ch: char) -> i32 {
        self.widths.get(&ch).copied().unwrap_or(self.default_width)
    }
}

impl FontResource for SyntheticFont {
    fn ascent(&self) -> i32 {
        self.ascent
    }

    fn advance_width(&self, ch: char) -> i32 {
        self.advance_queries.set(self.advance_queries.get() + 1);
        self.width(ch)
    }

    fn string_width(&self, text: &[char]) -> i32 {
        self.string_queries.set(self.string_queries.get() + 1);
        let advances: i32 = text.iter().map(|ch| self.width(*ch)).sum();
        let adjustments: i32 = text
            .windows(2)
            .filter_map(|pair| self.pairs.get(&(pair[0], pair[1])))
            .sum();
        advances + adjustments
    }

    fn rasterize(&self, ch: char, _anti_alias: bool) -> Vec<GlyphBitmap> {
        let width = self.width(ch).max(0) as u32;
        let height = self.ascent.max(0) as u32;
        if ch == ' ' || width == 0 || height == 0 {
            return Vec::new();
        }

        vec![GlyphBitmap {
            left: 0,
            top: self.ascent,
            width,
            height,
            content: BitmapContent::Coverage(vec![u8::MAX; (width * height) as usize]),
        }]
    }
}
