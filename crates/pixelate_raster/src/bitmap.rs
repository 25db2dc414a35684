//! # Bitmap
//!
//! Row-major RGB pixel buffer. Coordinates are signed so that drawing code
//! can compute positions relative to a center and let the bitmap clip
//! whatever falls outside.

use crate::color::Color;
use crate::error::{RasterError, RasterResult};

/// RGB pixel buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Bitmap {
    /// Creates a black bitmap.
    ///
    /// # Errors
    ///
    /// Returns `RasterError::InvalidDimensions` if either side is zero.
    pub fn new(width: u32, height: u32) -> RasterResult<Self> {
        Self::filled(width, height, Color::BLACK)
    }

    /// Creates a bitmap filled with one color.
    ///
    /// # Errors
    ///
    /// Returns `RasterError::InvalidDimensions` if either side is zero.
    pub fn filled(width: u32, height: u32, color: Color) -> RasterResult<Self> {
        let len = pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![color; len],
        })
    }

    /// Wraps an existing row-major pixel vector.
    ///
    /// # Errors
    ///
    /// Returns `RasterError::InvalidDimensions` for a zero side and
    /// `RasterError::PixelCountMismatch` when `pixels` has the wrong length.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> RasterResult<Self> {
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(RasterError::PixelCountMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Width in pixels.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Width as a signed drawing coordinate.
    #[inline]
    #[must_use]
    pub fn w(&self) -> i32 {
        i32::try_from(self.width).unwrap_or(i32::MAX)
    }

    /// Height as a signed drawing coordinate.
    #[inline]
    #[must_use]
    pub fn h(&self) -> i32 {
        i32::try_from(self.height).unwrap_or(i32::MAX)
    }

    /// All pixels, row-major.
    #[must_use]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Pixels as raw RGB bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Returns true if `(x, y)` is inside the bitmap.
    #[inline]
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.w() && y < self.h()
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.contains(x, y) {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Fills the whole bitmap.
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Sets one pixel; coordinates outside the bitmap are ignored.
    #[inline]
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Reads one pixel, `None` outside the bitmap.
    #[inline]
    #[must_use]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Copies a `width` x `height` block from `src` at `(src_x, src_y)` to
    /// `(dest_x, dest_y)`. Both ends are clipped.
    #[allow(clippy::too_many_arguments)]
    pub fn blit(
        &mut self,
        src: &Self,
        src_x: i32,
        src_y: i32,
        dest_x: i32,
        dest_y: i32,
        width: i32,
        height: i32,
    ) {
        for dy in 0..height {
            for dx in 0..width {
                if let Some(c) = src.get_pixel(src_x + dx, src_y + dy) {
                    self.put_pixel(dest_x + dx, dest_y + dy, c);
                }
            }
        }
    }

    /// Counts the pixels matching a predicate.
    #[must_use]
    pub fn count_pixels(&self, pred: impl Fn(Color) -> bool) -> usize {
        self.pixels.iter().filter(|&&c| pred(c)).count()
    }
}

impl std::fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

fn pixel_count(width: u32, height: u32) -> RasterResult<usize> {
    if width == 0 || height == 0 || i32::try_from(width).is_err() || i32::try_from(height).is_err()
    {
        return Err(RasterError::InvalidDimensions { width, height });
    }
    Ok(width as usize * height as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            Bitmap::new(0, 10),
            Err(RasterError::InvalidDimensions { width: 0, height: 10 })
        ));
        assert!(Bitmap::new(10, 0).is_err());
    }

    #[test]
    fn test_put_pixel_clips() {
        let mut bmp = Bitmap::new(4, 3).unwrap();
        bmp.put_pixel(-1, 0, Color::WHITE);
        bmp.put_pixel(4, 0, Color::WHITE);
        bmp.put_pixel(0, 3, Color::WHITE);
        assert_eq!(bmp.count_pixels(|c| c != Color::BLACK), 0);

        bmp.put_pixel(3, 2, Color::RED);
        assert_eq!(bmp.get_pixel(3, 2), Some(Color::RED));
        assert_eq!(bmp.get_pixel(3, 3), None);
    }

    #[test]
    fn test_from_pixels_length_checked() {
        let err = Bitmap::from_pixels(2, 2, vec![Color::BLACK; 3]).unwrap_err();
        assert!(matches!(
            err,
            RasterError::PixelCountMismatch { expected: 4, actual: 3 }
        ));
    }

    #[test]
    fn test_blit_clips() {
        let src = Bitmap::filled(4, 4, Color::BLUE).unwrap();
        let mut dest = Bitmap::new(4, 4).unwrap();
        dest.blit(&src, 0, 0, 2, 2, 4, 4);
        assert_eq!(dest.count_pixels(|c| c == Color::BLUE), 4);
        assert_eq!(dest.get_pixel(3, 3), Some(Color::BLUE));
        assert_eq!(dest.get_pixel(1, 1), Some(Color::BLACK));
    }

    #[test]
    fn test_as_bytes_row_major() {
        let mut bmp = Bitmap::new(2, 1).unwrap();
        bmp.put_pixel(1, 0, Color::rgb(1, 2, 3));
        assert_eq!(bmp.as_bytes(), &[0, 0, 0, 1, 2, 3]);
    }
}
