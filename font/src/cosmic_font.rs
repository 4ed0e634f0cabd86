use cosmic_text::{
    Attrs, AttrsList, BufferLine, Family, FontSystem, LayoutGlyph, LineEnding, Shaping, Wrap,
};
use derive_more::Debug;
use parking_lot::Mutex;
use swash::scale::ScaleContext;

use crate::{
    FontDescriptor, FontError, FontManager, FontResource, GlyphBitmap,
    rasterization::{RasterizationParam, into_bitmap, rasterize_glyph},
};

/// A [`FontResource`] backed by the host's fonts: cosmic-text for shaping, swash for metrics and
/// rasterization.
#[derive(Debug)]
pub struct CosmicFont {
    manager: FontManager,
    descriptor: FontDescriptor,
    ascent: i32,
    #[debug(skip)]
    scale_context: Mutex<ScaleContext>,
}

impl CosmicFont {
    /// Resolves the descriptor against the fonts known to the manager.
    ///
    /// Fails if no face of the requested family is available.
    pub fn resolve(manager: FontManager, descriptor: FontDescriptor) -> Result<Self, FontError> {
        let not_found = || FontError::NotFound {
            family: descriptor.family.clone(),
            style: descriptor.style,
        };

        let id = manager.query(&descriptor).ok_or_else(not_found)?;
        let font = manager
            .get_font(id, descriptor.style.weight())
            .ok_or_else(not_found)?;

        let metrics = font.as_swash().metrics(&[]).scale(descriptor.font_size());
        let ascent = metrics.ascent.ceil() as i32;

        log::info!(
            "Resolved font `{}` ({}, {}pt), ascent {ascent}px",
            descriptor.family,
            descriptor.style,
            descriptor.point_size
        );

        Ok(Self {
            manager,
            descriptor,
            ascent,
            scale_context: Mutex::new(ScaleContext::new()),
        })
    }

    fn attrs(&self) -> Attrs<'_> {
        Attrs::new()
            .family(Family::Name(&self.descriptor.family))
            .weight(self.descriptor.style.weight())
            .style(self.descriptor.style.style())
    }

    /// Shapes a single line of text without wrapping.
    fn layout(&self, font_system: &mut FontSystem, text: &str) -> Vec<LayoutGlyph> {
        let attrs_list = AttrsList::new(&self.attrs());
        let mut line = BufferLine::new(text, LineEnding::None, attrs_list, Shaping::Advanced);
        line.layout(
            font_system,
            self.descriptor.font_size(),
            None,
            Wrap::None,
            None,
            0,
        )
        .iter()
        .flat_map(|l| l.glyphs.iter().cloned())
        .collect()
    }

    /// Whole pixel width of shaped text. Each glyph's advance is rounded on its own, so that a
    /// sequence's width is the sum of its glyphs' widths unless shaping adjusted them.
    fn width(&self, text: &str) -> i32 {
        let mut font_system = self.manager.lock();
        self.layout(&mut font_system, text)
            .iter()
            .map(|glyph| glyph.w.round() as i32)
            .sum()
    }
}

impl FontResource for CosmicFont {
    fn ascent(&self) -> i32 {
        self.ascent
    }

    fn advance_width(&self, ch: char) -> i32 {
        self.width(ch.encode_utf8(&mut [0; 4]))
    }

    fn string_width(&self, text: &[char]) -> i32 {
        self.width(&text.iter().collect::<String>())
    }

    fn rasterize(&self, ch: char, anti_alias: bool) -> Vec<GlyphBitmap> {
        let param = RasterizationParam {
            hinted: !anti_alias,
            weight: self.descriptor.style.weight(),
            anti_alias,
        };

        let mut font_system = self.manager.lock();
        let mut context = self.scale_context.lock();

        let glyphs = self.layout(&mut font_system, ch.encode_utf8(&mut [0; 4]));
        glyphs
            .iter()
            .filter_map(|glyph| {
                let physical = glyph.physical((0.0, 0.0), 1.0);
                let image =
                    rasterize_glyph(&mut font_system, &mut context, physical.cache_key, param)?;
                into_bitmap(image, (physical.x, physical.y), anti_alias)
            })
            .collect()
    }
}
