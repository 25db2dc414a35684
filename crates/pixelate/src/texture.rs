//! Texture selection for the mapping demos.

use pixelate_procedural::{graticule, PlanetTexture, TextureSeed};
use pixelate_raster::Bitmap;

use crate::config::{TextureConfig, TextureSource};
use crate::error::AppResult;

/// Produces the texture described by `config`.
///
/// # Errors
///
/// Returns `AppError::Raster` if the file cannot be loaded or the texture
/// dimensions are invalid.
pub fn load_texture(config: &TextureConfig) -> AppResult<Bitmap> {
    let texture = match config.source {
        TextureSource::File => Bitmap::load(&config.path)?,
        TextureSource::Procedural => {
            PlanetTexture::new(TextureSeed::new(config.seed)).generate(config.width, config.height)?
        }
        TextureSource::Graticule => graticule(config.width, config.height, config.spacing)?,
    };
    tracing::info!(
        source = ?config.source,
        width = texture.width(),
        height = texture.height(),
        "texture ready"
    );
    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_generated_sources() {
        let mut config = TextureConfig {
            width: 32,
            height: 16,
            ..TextureConfig::default()
        };
        let planet = load_texture(&config).unwrap();
        assert_eq!((planet.width(), planet.height()), (32, 16));

        config.source = TextureSource::Graticule;
        let grid = load_texture(&config).unwrap();
        assert_ne!(grid, planet);
    }

    #[test]
    fn test_missing_file() {
        let config = TextureConfig {
            source: TextureSource::File,
            path: "does/not/exist.bmp".into(),
            ..TextureConfig::default()
        };
        assert!(matches!(load_texture(&config), Err(AppError::Raster(_))));
    }
}
