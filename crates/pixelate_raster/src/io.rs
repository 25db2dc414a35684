//! Image file I/O through the `image` crate.
//!
//! Whatever the source format, loaded images are converted to RGB24.
//! The output format follows the file extension.

use std::path::Path;

use image::RgbImage;

use crate::bitmap::Bitmap;
use crate::color::Color;
use crate::error::{RasterError, RasterResult};

impl Bitmap {
    /// Loads an image file as a bitmap.
    ///
    /// # Errors
    ///
    /// Returns `RasterError::Load` if the file cannot be read or decoded,
    /// `RasterError::InvalidDimensions` for an empty image.
    pub fn load(path: impl AsRef<Path>) -> RasterResult<Self> {
        let path = path.as_ref();
        let image = image::open(path)
            .map_err(|source| RasterError::Load {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgb8();
        let bitmap = Self::from_rgb_image(&image)?;
        tracing::debug!(
            path = %path.display(),
            width = bitmap.width(),
            height = bitmap.height(),
            "loaded bitmap"
        );
        Ok(bitmap)
    }

    /// Writes the bitmap to an image file.
    ///
    /// # Errors
    ///
    /// Returns `RasterError::Save` if encoding or writing fails.
    pub fn save(&self, path: impl AsRef<Path>) -> RasterResult<()> {
        let path = path.as_ref();
        self.to_rgb_image()
            .save(path)
            .map_err(|source| RasterError::Save {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(path = %path.display(), "saved bitmap");
        Ok(())
    }

    /// Converts an `image` RGB buffer.
    ///
    /// # Errors
    ///
    /// Returns `RasterError::InvalidDimensions` for an empty image.
    pub fn from_rgb_image(image: &RgbImage) -> RasterResult<Self> {
        let pixels: Vec<Color> = bytemuck::cast_slice(image.as_raw()).to_vec();
        Self::from_pixels(image.width(), image.height(), pixels)
    }

    /// Copies the pixels into an `image` RGB buffer.
    #[must_use]
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width(), self.height(), |x, y| {
            let c = self.pixels()[y as usize * self.width() as usize + x as usize];
            image::Rgb(c.to_array())
        })
    }
}
