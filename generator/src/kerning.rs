//! Kerning pairs.
//!
//! A pair `(c, next)` is recorded when the font lays out `c` followed by `next` narrower or wider
//! than the sum of their advances. The recorded value is not a symmetric kerning offset: it is the
//! advance of `c` to use instead of its default advance when `next` follows, normalized by the
//! atlas size.

use std::collections::BTreeMap;

use texfont_font::FontResource;

use crate::metrics::{WidthTable, normalize};

/// Corrected advances of one character, keyed by the following character.
pub type KerningMap = BTreeMap<u32, f32>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KerningStats {
    /// Number of recorded pairs over all glyphs.
    pub pairs: usize,
}

/// Only letters and decimal digits take part in kerning.
pub fn is_kerning_candidate(codepoint: u32) -> bool {
    char::from_u32(codepoint).is_some_and(|ch| is_letter(ch) || ch.is_ascii_digit())
}

/// Alphabetic, but not a letter number like `Ⅳ`.
fn is_letter(ch: char) -> bool {
    ch.is_alphabetic() && !ch.is_numeric()
}

/// Computes the kerning pairs of every candidate in `candidates` with every other candidate,
/// including itself.
pub struct KerningCalculator<'a, F> {
    font: &'a F,
    widths: &'a WidthTable,
    candidates: Vec<char>,
    atlas_size: u32,
}

impl<'a, F: FontResource> KerningCalculator<'a, F> {
    pub fn new(
        font: &'a F,
        widths: &'a WidthTable,
        codepoints: impl Iterator<Item = u32>,
        atlas_size: u32,
    ) -> Self {
        let candidates = codepoints
            .filter(|cp| is_kerning_candidate(*cp))
            .filter_map(char::from_u32)
            .collect();

        Self {
            font,
            widths,
            candidates,
            atlas_size,
        }
    }

    /// The kerning map of `codepoint`. Empty for characters that are not candidates.
    pub fn kerning(&self, codepoint: u32) -> KerningMap {
        let Some(ch) = char::from_u32(codepoint).filter(|_| is_kerning_candidate(codepoint)) else {
            return KerningMap::new();
        };

        let advance = self.widths.pixel_width(codepoint);

        self.candidates
            .iter()
            .filter_map(|&next| {
                let next_width = self.widths.pixel_width(next as u32);
                let total = self.font.string_width(&[ch, next]);
                if total == advance + next_width {
                    return None;
                }
                log::debug!("Kerning pair {ch:?} {next:?}: {total} != {advance} + {next_width}");
                Some((next as u32, normalize(total - next_width, self.atlas_size)))
            })
            .collect()
    }
}
