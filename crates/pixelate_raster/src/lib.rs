//! # PIXELATE Raster
//!
//! Software pixel buffers for headless rendering.
//!
//! ## Design Principles
//!
//! 1. **One pixel format** - `Color` is packed RGB24, castable to bytes
//! 2. **Clipping, not panicking** - drawing outside the bitmap is a no-op
//! 3. **Signed coordinates** - callers draw relative to a center point
//!
//! ## Example
//!
//! ```rust
//! use pixelate_raster::{Bitmap, Color};
//!
//! let mut screen = Bitmap::new(320, 240).unwrap();
//! screen.draw_circle(160, 120, 10, Color::BLUE);
//! screen.draw_line(160, 120, 169, 120, Color::RED);
//! assert_eq!(screen.get_pixel(169, 120), Some(Color::RED));
//! assert_eq!(screen.get_pixel(-1, 0), None);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod bitmap;
pub mod color;
pub mod error;
pub mod io;
pub mod primitives;

pub use bitmap::Bitmap;
pub use color::Color;
pub use error::{RasterError, RasterResult};
