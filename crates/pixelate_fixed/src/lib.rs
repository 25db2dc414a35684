//! # PIXELATE Fixed-Point Math
//!
//! Integer trigonometry for pixel-pushing code.
//!
//! ## Design Principles
//!
//! 1. **16.16 fixed-point** - `Fixed` wraps an `i32`; no floats in the hot loop
//! 2. **Binary angles** - a full circle is 256 units, so wrapping is a mask
//! 3. **Lookup tables** - sin/cos/tan are one table read, built once on first use
//! 4. **Saturating operators** - overflow clamps instead of trapping; the
//!    `checked_*`/`try_*` forms report it as `FixedError`
//!
//! ## Example
//!
//! ```rust
//! use pixelate_fixed::{Fixed, FixedMatrix, FixedVec3};
//!
//! // A point 100 pixels out at a quarter turn.
//! let angle = Fixed::from_int(64);
//! let x = 100 * angle.cos();
//! let y = 100 * angle.sin();
//! assert_eq!((x.to_int(), y.to_int()), (0, 100));
//!
//! // Spin a globe a quarter turn around its poles.
//! let m = FixedMatrix::planet_rotation(angle, Fixed::ZERO, Fixed::ZERO);
//! let rotated = m.apply(FixedVec3::Z);
//! assert_eq!(rotated, FixedVec3::X);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod error;
pub mod fixed;
pub mod matrix;
pub mod trig;
pub mod vector;

pub use error::{FixedError, FixedResult};
pub use fixed::Fixed;
pub use matrix::FixedMatrix;
pub use trig::{FULL_CIRCLE, HALF_CIRCLE, QUARTER_CIRCLE};
pub use vector::FixedVec3;
