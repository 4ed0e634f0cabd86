//! Offline generator for texture fonts: a square grid of glyphs rendered into an image, plus the
//! glyph metadata a mesh builder needs to lay out text with it.

mod atlas;
mod config;
mod error;
mod glyph_font;
mod kerning;
mod metrics;
#[cfg(test)]
mod test_font;

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use image::{ImageError, ImageFormat};
use texfont_font::FontResource;

pub use atlas::{AtlasImage, rasterize};
pub use config::*;
pub use error::*;
pub use glyph_font::*;
pub use kerning::{KerningMap, KerningStats, is_kerning_candidate};
pub use metrics::{WidthTable, normalize};

use kerning::KerningCalculator;

pub const IMAGE_EXTENSION: &str = "png";
pub const METADATA_EXTENSION: &str = "json";

/// The generated atlas image and its metadata.
#[derive(Debug)]
pub struct TextureFont {
    pub image: AtlasImage,
    pub metadata: GlyphFont,
    pub kerning: KerningStats,
}

/// Generates the atlas image and glyph metadata for the configured character range.
pub fn generate(config: &GenerationConfig, font: &impl FontResource) -> Result<TextureFont> {
    config.validate()?;

    let grid = config.grid();
    log::info!(
        "Rasterizing {} glyphs into a {}x{} grid of {}px cells",
        grid.len(),
        grid.tile_count(),
        grid.tile_count(),
        grid.cell_size()
    );
    let image = rasterize(config, font)?;

    log::info!("Measuring glyphs");
    let (glyphs, kerning) = compute_glyphs(config, font)?;
    let metadata = GlyphFont::assemble(config.start_character, config.tile_count, glyphs);

    Ok(TextureFont {
        image,
        metadata,
        kerning,
    })
}

/// Computes the advance and kerning pairs of every glyph, in cell order.
pub fn compute_glyphs(
    config: &GenerationConfig,
    font: &impl FontResource,
) -> Result<(Vec<Glyph>, KerningStats)> {
    config.validate()?;

    let widths = WidthTable::measure(config.codepoints(), font);
    let calculator = config.kerning.then(|| {
        KerningCalculator::new(font, &widths, config.codepoints(), config.atlas_size)
    });

    let glyphs: Vec<Glyph> = config
        .codepoints()
        .map(|codepoint| Glyph {
            codepoint,
            advance: normalize(widths.pixel_width(codepoint), config.atlas_size),
            kerning: calculator
                .as_ref()
                .map(|c| c.kerning(codepoint))
                .unwrap_or_default(),
        })
        .collect();

    let stats = KerningStats {
        pairs: glyphs.iter().map(|g| g.kerning.len()).sum(),
    };

    Ok((glyphs, stats))
}

impl TextureFont {
    /// Writes the image and the metadata next to each other, `<base>.png` and `<base>.json`.
    ///
    /// Returns the paths written.
    pub fn write(&self, base: &Path) -> Result<(PathBuf, PathBuf)> {
        let image_path = with_extension(base, IMAGE_EXTENSION);
        let metadata_path = with_extension(base, METADATA_EXTENSION);

        log::info!("Writing texture font image `{}`", image_path.display());
        self.image
            .save_with_format(&image_path, ImageFormat::Png)
            .map_err(|e| match e {
                ImageError::IoError(source) => Error::Io {
                    path: image_path.clone(),
                    source,
                },
                source => Error::Image {
                    path: image_path.clone(),
                    source,
                },
            })?;

        log::info!("Writing metadata `{}`", metadata_path.display());
        self.metadata.save(&metadata_path)?;

        Ok((image_path, metadata_path))
    }
}

/// Appends an extension, keeping dots that are already part of the name.
fn with_extension(base: &Path, extension: &str) -> PathBuf {
    let mut path = OsString::from(base.as_os_str());
    path.push(".");
    path.push(extension);
    path.into()
}
