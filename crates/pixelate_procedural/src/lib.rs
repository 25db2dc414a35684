//! # PIXELATE Procedural Textures
//!
//! Textures for the sphere demos, generated instead of loaded from disk.
//!
//! ## Design Principles
//!
//! 1. **Deterministic** - the same seed always produces the same texture
//! 2. **Seamless** - planet textures wrap in longitude
//! 3. **Plain bitmaps** - output is a `pixelate_raster::Bitmap`
//!
//! ## Example
//!
//! ```rust
//! use pixelate_procedural::{PlanetTexture, TextureSeed};
//!
//! let planet = PlanetTexture::new(TextureSeed::new(12345));
//! let texture = planet.generate(64, 32).unwrap();
//! assert_eq!((texture.width(), texture.height()), (64, 32));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod graticule;
pub mod noise;
pub mod terrain;

pub use graticule::graticule;
pub use noise::{SimplexNoise, TextureSeed};
pub use terrain::{PlanetTexture, Terrain};
