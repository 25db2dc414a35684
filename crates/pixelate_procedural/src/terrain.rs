//! # Planet Texture
//!
//! Equirectangular terrain map: column = longitude, row = latitude.
//!
//! Three noise channels drive the climate:
//! - Elevation (ocean vs land, mountains)
//! - Humidity (desert vs forest)
//! - Temperature (from latitude, colder at altitude)
//!
//! Elevation and humidity repeat around the globe, so the texture has no
//! seam where its left and right edges meet on a sphere.

use pixelate_raster::{Bitmap, Color, RasterResult};

use crate::noise::{SimplexNoise, TextureSeed};

/// Terrain classes, from the sea floor up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Terrain {
    /// Deep ocean
    DeepOcean = 0,
    /// Shallow ocean
    Ocean = 1,
    /// Coastline
    Beach = 2,
    /// Grassland
    Plains = 3,
    /// Forest
    Forest = 4,
    /// Arid desert
    Desert = 5,
    /// High mountains
    Mountains = 6,
    /// Polar ice and snow caps
    Ice = 7,
}

impl Terrain {
    /// Every terrain class.
    pub const ALL: [Self; 8] = [
        Self::DeepOcean,
        Self::Ocean,
        Self::Beach,
        Self::Plains,
        Self::Forest,
        Self::Desert,
        Self::Mountains,
        Self::Ice,
    ];

    /// Map color.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::DeepOcean => Color::rgb(12, 32, 96),
            Self::Ocean => Color::rgb(28, 70, 160),
            Self::Beach => Color::rgb(214, 196, 140),
            Self::Plains => Color::rgb(96, 160, 64),
            Self::Forest => Color::rgb(34, 100, 40),
            Self::Desert => Color::rgb(200, 166, 92),
            Self::Mountains => Color::rgb(120, 108, 96),
            Self::Ice => Color::rgb(236, 240, 248),
        }
    }
}

/// Generator for planet textures.
pub struct PlanetTexture {
    elevation_noise: SimplexNoise,
    humidity_noise: SimplexNoise,
}

impl PlanetTexture {
    /// Noise units per trip around the equator.
    const LONGITUDE_PERIOD: f64 = 6.0;
    /// Noise units from pole to pole.
    const LATITUDE_SPAN: f64 = 3.0;

    const DEEP_OCEAN: f64 = -0.25;
    const SEA_LEVEL: f64 = 0.0;
    const BEACH: f64 = 0.03;
    const MOUNTAINS: f64 = 0.3;
    const FREEZING: f64 = 0.12;

    /// Creates a generator for `seed`.
    #[must_use]
    pub fn new(seed: TextureSeed) -> Self {
        Self {
            elevation_noise: SimplexNoise::new(seed.derive(1)),
            humidity_noise: SimplexNoise::new(seed.derive(2)),
        }
    }

    /// Elevation in `[-1, 1]` at texture coordinates `u` (longitude, 0..1)
    /// and `v` (latitude, 0 = north pole, 1 = south pole).
    #[must_use]
    pub fn elevation(&self, u: f64, v: f64) -> f64 {
        let (x, y) = Self::noise_coords(u, v);
        let base = self
            .elevation_noise
            .octaved_wrapped(x, y, Self::LONGITUDE_PERIOD, 5, 0.5, 2.0);
        // Stretch: wrapping averages two fields and flattens the contrast.
        (base * 1.6).clamp(-1.0, 1.0)
    }

    /// Humidity in `[-1, 1]`.
    #[must_use]
    pub fn humidity(&self, u: f64, v: f64) -> f64 {
        let (x, y) = Self::noise_coords(u, v);
        self.humidity_noise
            .octaved_wrapped(x, y + 17.0, Self::LONGITUDE_PERIOD, 3, 0.5, 2.0)
    }

    /// Temperature in `[0, 1]`: hot at the equator, cold at the poles and
    /// on high ground.
    #[must_use]
    pub fn temperature(v: f64, elevation: f64) -> f64 {
        let latitude = ((v - 0.5) * 2.0).abs();
        (1.0 - latitude - elevation.max(0.0) * 0.5).clamp(0.0, 1.0)
    }

    fn noise_coords(u: f64, v: f64) -> (f64, f64) {
        (u * Self::LONGITUDE_PERIOD, v * Self::LATITUDE_SPAN)
    }

    /// Terrain class at `(u, v)`.
    #[must_use]
    pub fn classify(&self, u: f64, v: f64) -> Terrain {
        let elevation = self.elevation(u, v);
        let temperature = Self::temperature(v, elevation);
        if temperature < Self::FREEZING {
            return Terrain::Ice;
        }
        if elevation < Self::DEEP_OCEAN {
            return Terrain::DeepOcean;
        }
        if elevation < Self::SEA_LEVEL {
            return Terrain::Ocean;
        }
        if elevation < Self::BEACH {
            return Terrain::Beach;
        }
        if elevation > Self::MOUNTAINS {
            return Terrain::Mountains;
        }
        let humidity = self.humidity(u, v);
        if temperature > 0.6 && humidity < -0.15 {
            Terrain::Desert
        } else if humidity > 0.05 {
            Terrain::Forest
        } else {
            Terrain::Plains
        }
    }

    /// Renders a `width` x `height` texture.
    ///
    /// # Errors
    ///
    /// Returns `RasterError::InvalidDimensions` if either side is zero.
    pub fn generate(&self, width: u32, height: u32) -> RasterResult<Bitmap> {
        let mut bitmap = Bitmap::new(width, height)?;
        for y in 0..bitmap.h() {
            let v = (f64::from(y) + 0.5) / f64::from(height);
            for x in 0..bitmap.w() {
                let u = f64::from(x) / f64::from(width);
                bitmap.put_pixel(x, y, self.classify(u, v).color());
            }
        }
        tracing::debug!(width, height, "generated planet texture");
        Ok(bitmap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longitude_wraps() {
        let planet = PlanetTexture::new(TextureSeed::new(42));
        for i in 0..32 {
            let v = f64::from(i) / 32.0;
            assert_eq!(planet.elevation(0.0, v), planet.elevation(1.0, v));
            assert_eq!(planet.classify(0.0, v), planet.classify(1.0, v));
        }
    }

    #[test]
    fn test_poles_frozen() {
        let planet = PlanetTexture::new(TextureSeed::new(42));
        for i in 0..16 {
            let u = f64::from(i) / 16.0;
            assert_eq!(planet.classify(u, 0.0), Terrain::Ice);
            assert_eq!(planet.classify(u, 1.0), Terrain::Ice);
        }
    }

    #[test]
    fn test_temperature_falls_with_latitude_and_height() {
        assert!(PlanetTexture::temperature(0.5, 0.0) > PlanetTexture::temperature(0.2, 0.0));
        assert!(PlanetTexture::temperature(0.5, 0.0) > PlanetTexture::temperature(0.5, 0.8));
        assert!((PlanetTexture::temperature(0.0, 0.0)).abs() < 1e-12);
    }

    #[test]
    fn test_colors_distinct() {
        for (i, a) in Terrain::ALL.iter().enumerate() {
            for b in &Terrain::ALL[i + 1..] {
                assert_ne!(a.color(), b.color());
            }
        }
    }
}
