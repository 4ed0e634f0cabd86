use cosmic_text as text;
use swash::{
    scale::{Render, ScaleContext, Source, StrikeWith},
    zeno::{Format, Vector},
};

use crate::{BitmapContent, FontWeight, GlyphBitmap};

/// Coverage at and above this value becomes opaque when anti-aliasing is off.
const ALIAS_THRESHOLD: u8 = 128;

#[derive(Debug, Clone, Copy)]
pub struct RasterizationParam {
    pub hinted: bool,
    pub weight: FontWeight,
    pub anti_alias: bool,
}

pub fn rasterize_glyph(
    font_system: &mut text::FontSystem,
    context: &mut ScaleContext,
    cache_key: text::CacheKey,
    param: RasterizationParam,
) -> Option<text::SwashImage> {
    let font = match font_system.get_font(cache_key.font_id, param.weight) {
        Some(some) => some,
        None => {
            log::warn!("did not find font {:?}", cache_key.font_id);
            return None;
        }
    };

    let mut scaler = context
        .builder(font.as_swash())
        .size(f32::from_bits(cache_key.font_size_bits))
        .hint(param.hinted)
        .variations(&[("wght", param.weight.0 as f32)])
        .build();

    let offset = Vector::new(cache_key.x_bin.as_float(), cache_key.y_bin.as_float());

    Render::new(&[
        // Color outline with the first palette
        Source::ColorOutline(0),
        // Color bitmap with best fit selection mode
        Source::ColorBitmap(StrikeWith::BestFit),
        // Standard scalable outline
        Source::Outline,
    ])
    .format(Format::Alpha)
    .offset(offset)
    .render(&mut scaler, cache_key.glyph_id)
}

/// Converts a swash image into a [`GlyphBitmap`] whose placement is relative to the pen origin
/// `(x, y)` of the glyph.
pub fn into_bitmap(
    image: text::SwashImage,
    (x, y): (i32, i32),
    anti_alias: bool,
) -> Option<GlyphBitmap> {
    let placement = image.placement;
    if placement.width == 0 || placement.height == 0 {
        return None;
    }

    let content = match image.content {
        text::SwashContent::Mask => {
            let mut data = image.data;
            if !anti_alias {
                alias(&mut data);
            }
            BitmapContent::Coverage(data)
        }
        text::SwashContent::Color => BitmapContent::Color(image.data),
        text::SwashContent::SubpixelMask => {
            log::warn!("unexpected subpixel mask, glyph skipped");
            return None;
        }
    };

    Some(GlyphBitmap {
        left: placement.left + x,
        top: placement.top - y,
        width: placement.width,
        height: placement.height,
        content,
    })
}

fn alias(coverage: &mut [u8]) {
    for v in coverage {
        *v = if *v >= ALIAS_THRESHOLD { u8::MAX } else { 0 };
    }
}
