//! Latitude/longitude grid texture.
//!
//! On a correctly mapped sphere the vertical lines become meridians and the
//! horizontal ones parallels, which makes projection mistakes easy to spot.

use pixelate_raster::{Bitmap, Color, RasterResult};

/// Background color.
pub const GRATICULE_BACKGROUND: Color = Color::rgb(16, 24, 48);
/// Grid line color.
pub const GRATICULE_LINE: Color = Color::WHITE;
/// Equator and prime meridian color.
pub const GRATICULE_AXIS: Color = Color::RED;

/// Draws a grid with lines every `spacing` pixels. The middle row and the
/// first column are drawn in `GRATICULE_AXIS`.
///
/// A `spacing` of zero is treated as one.
///
/// # Errors
///
/// Returns `RasterError::InvalidDimensions` if either side is zero.
pub fn graticule(width: u32, height: u32, spacing: u32) -> RasterResult<Bitmap> {
    let mut bitmap = Bitmap::filled(width, height, GRATICULE_BACKGROUND)?;
    let spacing = i32::try_from(spacing.max(1)).unwrap_or(i32::MAX);
    let (w, h) = (bitmap.w(), bitmap.h());

    for x in (0..w).step_by(spacing as usize) {
        bitmap.draw_line(x, 0, x, h - 1, GRATICULE_LINE);
    }
    for y in (0..h).step_by(spacing as usize) {
        bitmap.draw_line(0, y, w - 1, y, GRATICULE_LINE);
    }
    bitmap.draw_line(0, h / 2, w - 1, h / 2, GRATICULE_AXIS);
    bitmap.draw_line(0, 0, 0, h - 1, GRATICULE_AXIS);

    Ok(bitmap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_lines() {
        let grid = graticule(64, 32, 8).unwrap();
        assert_eq!(grid.get_pixel(8, 3), Some(GRATICULE_LINE));
        assert_eq!(grid.get_pixel(3, 8), Some(GRATICULE_LINE));
        assert_eq!(grid.get_pixel(3, 3), Some(GRATICULE_BACKGROUND));
        assert_eq!(grid.get_pixel(5, 16), Some(GRATICULE_AXIS));
        assert_eq!(grid.get_pixel(0, 5), Some(GRATICULE_AXIS));
    }

    #[test]
    fn test_zero_spacing() {
        let grid = graticule(4, 4, 0).unwrap();
        assert_eq!(grid.count_pixels(|c| c == GRATICULE_BACKGROUND), 0);
    }
}
