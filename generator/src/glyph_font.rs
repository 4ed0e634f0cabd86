use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, kerning::KerningMap};

/// Layout metadata of a texture font.
///
/// `glyphs[i]` describes codepoint `start_character + i`, drawn in cell `i` of a row-major
/// `tile_count x tile_count` grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlyphFont {
    pub start_character: u32,
    pub tile_count: u32,
    pub glyphs: Vec<Glyph>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glyph {
    pub codepoint: u32,
    /// Horizontal advance, divided by the atlas size.
    pub advance: f32,
    /// Advances to use instead of `advance` when followed by the key's character, divided by
    /// the atlas size.
    pub kerning: KerningMap,
}

impl GlyphFont {
    /// Combines glyphs listed in cell order into a font.
    pub fn assemble(start_character: u32, tile_count: u32, glyphs: Vec<Glyph>) -> Self {
        let font = Self {
            start_character,
            tile_count,
            glyphs,
        };
        debug_assert!(font.check_invariants().is_ok());
        font
    }

    /// The glyph of a codepoint, if it is part of this font.
    pub fn glyph(&self, codepoint: u32) -> Option<&Glyph> {
        let index = codepoint.checked_sub(self.start_character)?;
        self.glyphs.get(index as usize)
    }

    pub fn kerning_pairs(&self) -> usize {
        self.glyphs.iter().map(|g| g.kerning.len()).sum()
    }

    fn check_invariants(&self) -> Result<()> {
        let malformed = |msg: String| Err(Error::MalformedDocument(msg));

        let expected = self.tile_count as u64 * self.tile_count as u64;
        if self.glyphs.len() as u64 != expected {
            return malformed(format!(
                "{} glyphs for {} tiles, expected {expected}",
                self.glyphs.len(),
                self.tile_count
            ));
        }

        for (i, glyph) in self.glyphs.iter().enumerate() {
            let expected = self.start_character as u64 + i as u64;
            if glyph.codepoint as u64 != expected {
                return malformed(format!(
                    "glyph {i} has codepoint {}, expected {expected}",
                    glyph.codepoint
                ));
            }
        }

        Ok(())
    }
}

// Codec

impl GlyphFont {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::MalformedDocument(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Self::checked(serde_json::from_str(json))
    }

    pub fn write_to(&self, mut writer: impl Write) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()
    }

    /// Reads a document, any failure to parse it, including I/O errors, is reported as
    /// [`Error::MalformedDocument`].
    pub fn read_from(reader: impl io::Read) -> Result<Self> {
        Self::checked(serde_json::from_reader(reader))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(Error::io(path))?;
        self.write_to(BufWriter::new(file)).map_err(Error::io(path))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(Error::io(path))?;
        Self::read_from(BufReader::new(file))
    }

    fn checked(parsed: serde_json::Result<Self>) -> Result<Self> {
        let font = parsed.map_err(|e| Error::MalformedDocument(e.to_string()))?;
        font.check_invariants()?;
        Ok(font)
    }
}
