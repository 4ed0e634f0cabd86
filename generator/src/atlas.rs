//! Renders the character range into a square grid image.

use image::{Rgba, RgbaImage};
use texfont_font::{FontResource, GlyphBitmap};
use texfont_geometry::{Color, PointPx, TileGrid, VectorPx};

use crate::{GenerationConfig, Result, metrics::drawable_char};

pub type AtlasImage = RgbaImage;

/// Draws every glyph of the configured range into its cell.
///
/// Each glyph's pen origin is the left edge of its cell, one ascent below the cell's top. All
/// cells share the same baseline offset.
pub fn rasterize(config: &GenerationConfig, font: &impl FontResource) -> Result<AtlasImage> {
    config.validate()?;

    let grid = config.grid();
    let size = grid.atlas_size();
    let mut image = RgbaImage::from_pixel(
        size.width,
        size.height,
        Rgba(config.background.to_rgba_u8()),
    );

    let baseline = VectorPx::new(0, font.ascent());

    for (index, codepoint) in config.codepoints().enumerate() {
        let Some(ch) = drawable_char(codepoint) else {
            continue;
        };
        let origin = grid.origin(index as u32) + baseline;
        for bitmap in font.rasterize(ch, config.anti_alias) {
            draw_bitmap(&mut image, &bitmap, origin, config.text_color);
        }
    }

    if let Some(color) = config.grid_lines {
        draw_grid_lines(&mut image, &grid, color);
    }

    Ok(image)
}

/// Blends a glyph bitmap onto the image, clipping everything outside of it.
fn draw_bitmap(image: &mut RgbaImage, bitmap: &GlyphBitmap, origin: PointPx, color: Color) {
    let left = origin.x + bitmap.left;
    let top = origin.y - bitmap.top;

    for y in 0..bitmap.height {
        for x in 0..bitmap.width {
            let (alpha, rgb) = bitmap.pixel(x, y);
            if alpha == 0 {
                continue;
            }

            let src = match rgb {
                Some(rgb) => Color::rgba_u8([rgb[0], rgb[1], rgb[2], alpha]),
                None => color.with_alpha(color.alpha * alpha as f32 / 255.0),
            };

            blend_pixel(image, left + x as i32, top + y as i32, src);
        }
    }
}

fn draw_grid_lines(image: &mut RgbaImage, grid: &TileGrid, color: Color) {
    let w = grid.cell_size();
    let on_line = |v: u32| v % w == 0 && v / w < grid.tile_count();

    // Each pixel is blended at most once, also where lines cross.
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        if on_line(x) || on_line(y) {
            pixel.0 = color.over(Color::rgba_u8(pixel.0)).to_rgba_u8();
        }
    }
}

fn blend_pixel(image: &mut RgbaImage, x: i32, y: i32, src: Color) {
    let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
        return;
    };
    let Some(pixel) = image.get_pixel_mut_checked(x, y) else {
        return;
    };
    let dst = Color::rgba_u8(pixel.0);
    pixel.0 = src.over(dst).to_rgba_u8();
}

#[cfg(test)]
mod tests {
    use texfont_font::{FontDescriptor, FontStyle};

    use super::*;
    use crate::test_font::SyntheticFont;

    const CLEAR: [u8; 4] = [0, 0, 0, 0];
    const WHITE: [u8; 4] = [255, 255, 255, 255];

    fn config(atlas_size: u32, tile_count: u32, start: char) -> GenerationConfig {
        GenerationConfig::new(FontDescriptor::new("Synthetic", FontStyle::Plain, 8))
            .with_atlas_size(atlas_size)
            .with_tile_count(tile_count)
            .with_start_character(start as u32)
    }

    #[test]
    fn image_has_atlas_dimensions_and_background() {
        let config = config(20, 2, ' ').with_colors(Color::rgb(1.0, 0.0, 0.0), Color::WHITE);
        // Space draws nothing, the other three cells draw 0 width boxes.
        let image = rasterize(&config, &SyntheticFont::new(0)).unwrap();
        assert_eq!(image.dimensions(), (20, 20));
        assert!(image.pixels().all(|p| p.0 == [255, 0, 0, 255]));
    }

    #[test]
    fn glyphs_are_drawn_into_their_cells_on_a_shared_baseline() {
        // Cells are 10x10, glyphs are 3 wide and 4 high, sitting on the baseline at y = 4.
        let font = SyntheticFont::new(3).with_ascent(4);
        let image = rasterize(&config(21, 2, 'A'), &font).unwrap();

        for (cell_x, cell_y) in [(0, 0), (10, 0), (0, 10), (10, 10)] {
            assert_eq!(image.get_pixel(cell_x, cell_y).0, WHITE);
            assert_eq!(image.get_pixel(cell_x + 2, cell_y + 3).0, WHITE);
            assert_eq!(image.get_pixel(cell_x + 3, cell_y).0, CLEAR);
            assert_eq!(image.get_pixel(cell_x, cell_y + 4).0, CLEAR);
        }
        // The margin stays untouched.
        assert!((0..21).all(|i| image.get_pixel(20, i).0 == CLEAR));
    }

    #[test]
    fn glyphs_outside_of_the_atlas_are_clipped() {
        let font = SyntheticFont::new(30).with_ascent(30);
        let image = rasterize(&config(16, 1, 'W'), &font).unwrap();
        assert!(image.pixels().all(|p| p.0 == WHITE));
    }

    #[test]
    fn invalid_config_draws_nothing() {
        let font = SyntheticFont::new(3);
        let err = rasterize(&config(16, 0, 'A'), &font).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidConfig(_)));
        assert!(rasterize(&config(16, 2, char::MAX), &font).is_err());
    }

    #[test]
    fn coverage_scales_text_alpha() {
        let bitmap = GlyphBitmap {
            left: 0,
            top: 1,
            width: 2,
            height: 1,
            content: texfont_font::BitmapContent::Coverage(vec![255, 51]),
        };
        let mut image = RgbaImage::new(2, 1);
        draw_bitmap(&mut image, &bitmap, PointPx::new(0, 1), Color::WHITE);
        assert_eq!(image.get_pixel(0, 0).0, WHITE);
        assert_eq!(image.get_pixel(1, 0).0, [255, 255, 255, 51]);
    }

    #[test]
    fn grid_lines_mark_cell_boundaries() {
        let config = config(8, 2, ' ').with_grid_lines(Some(Color::rgb(0.0, 1.0, 1.0)));
        let image = rasterize(&config, &SyntheticFont::new(0)).unwrap();
        let cyan = [0, 255, 255, 255];
        assert_eq!(image.get_pixel(0, 5).0, cyan);
        assert_eq!(image.get_pixel(4, 7).0, cyan);
        assert_eq!(image.get_pixel(6, 4).0, cyan);
        assert_eq!(image.get_pixel(5, 5).0, CLEAR);
        assert_eq!(image.get_pixel(7, 7).0, CLEAR);
    }

    #[test]
    fn translucent_grid_lines_are_blended_once_where_they_cross() {
        let color = Color::WHITE.with_alpha(0.5);
        let config = config(8, 2, ' ').with_grid_lines(Some(color));
        let image = rasterize(&config, &SyntheticFont::new(0)).unwrap();
        assert_eq!(image.get_pixel(4, 4).0, image.get_pixel(4, 6).0);
        assert_eq!(image.get_pixel(0, 4).0, image.get_pixel(2, 4).0);
        assert_eq!(image.get_pixel(4, 4).0, [255, 255, 255, 128]);
    }
}
