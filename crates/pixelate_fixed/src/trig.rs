//! # Binary-Angle Trigonometry
//!
//! Angles are `Fixed` values on a 256-unit circle:
//!
//! ```text
//!   0 → east      64 → south (screen y grows downward)
//! 128 → west     192 → north      256 == 0
//! ```
//!
//! Sine, cosine and tangent are single table lookups at half-unit
//! resolution. The inverses use an arccosine table over `[-1, 1]` and a
//! binary search of the tangent table.
//!
//! ## Wrapping
//!
//! Masking the raw value with `0xFF_FFFF` maps any angle into `[0, 256)`:
//! -64 and 192 are the same direction, and positive numbers are easier to
//! scale into texture columns.

use std::f64::consts::PI;
use std::sync::OnceLock;

use crate::error::{FixedError, FixedResult};
use crate::fixed::Fixed;

/// A full circle (256 units).
pub const FULL_CIRCLE: Fixed = Fixed::from_int(256);

/// Half a circle (128 units).
pub const HALF_CIRCLE: Fixed = Fixed::from_int(128);

/// A right angle (64 units).
pub const QUARTER_CIRCLE: Fixed = Fixed::from_int(64);

/// Mask that wraps a raw angle into `[0, 256)`.
const ANGLE_MASK: i32 = 0x00FF_FFFF;

/// Cosine entries: one per half unit over a full circle.
const COS_ENTRIES: usize = 512;

/// Tangent entries: one per half unit over half a circle.
const TAN_ENTRIES: usize = 256;

/// Arccosine entries: 512 steps over `[-1, 1]`, both ends included.
const ACOS_ENTRIES: usize = 513;

/// Pre-computed lookup tables, raw 16.16 values.
struct TrigTables {
    cos: [i32; COS_ENTRIES],
    tan: [i32; TAN_ENTRIES],
    acos: [i32; ACOS_ENTRIES],
}

impl TrigTables {
    fn new() -> Self {
        let mut cos = [0i32; COS_ENTRIES];
        for (i, entry) in cos.iter_mut().enumerate() {
            *entry = Fixed::from_f64((i as f64 * PI / 256.0).cos()).raw();
        }

        // Entry 128 is tan(pi/2); from_f64 saturates it to MAX.
        let mut tan = [0i32; TAN_ENTRIES];
        for (i, entry) in tan.iter_mut().enumerate() {
            *entry = Fixed::from_f64((i as f64 * PI / 256.0).tan()).raw();
        }

        let mut acos = [0i32; ACOS_ENTRIES];
        for (i, entry) in acos.iter_mut().enumerate() {
            let value = (i as f64 - 256.0) / 256.0;
            *entry = Fixed::from_f64(value.acos() * 128.0 / PI).raw();
        }

        tracing::debug!(
            cos = COS_ENTRIES,
            tan = TAN_ENTRIES,
            acos = ACOS_ENTRIES,
            "built trig lookup tables"
        );

        Self { cos, tan, acos }
    }
}

fn tables() -> &'static TrigTables {
    static TABLES: OnceLock<TrigTables> = OnceLock::new();
    TABLES.get_or_init(TrigTables::new)
}

/// Half-unit table index of a raw angle, rounded to nearest.
#[inline]
fn half_unit_index(raw: i32) -> i32 {
    raw.wrapping_add(0x4000) >> 15
}

impl Fixed {
    /// Wraps an angle into `[0, 256)`.
    #[inline]
    #[must_use]
    pub const fn wrap_angle(self) -> Self {
        Self::from_raw(self.raw() & ANGLE_MASK)
    }

    /// Cosine of a binary angle.
    #[must_use]
    pub fn cos(self) -> Self {
        let index = (half_unit_index(self.raw()) & 0x1FF) as usize;
        Self::from_raw(tables().cos[index])
    }

    /// Sine of a binary angle.
    #[must_use]
    pub fn sin(self) -> Self {
        (self - QUARTER_CIRCLE).cos()
    }

    /// Tangent of a binary angle. Saturates at the poles.
    #[must_use]
    pub fn tan(self) -> Self {
        let index = (half_unit_index(self.raw()) & 0xFF) as usize;
        Self::from_raw(tables().tan[index])
    }

    /// Arccosine in `[0, 128]`.
    ///
    /// # Errors
    ///
    /// Returns `FixedError::Domain` if `self` is outside `[-1, 1]`.
    pub fn try_acos(self) -> FixedResult<Self> {
        if self < -Self::ONE || self > Self::ONE {
            return Err(FixedError::Domain {
                operation: "acos",
                input: self,
            });
        }
        let index = ((self.raw() + 0x1_0000 + 127) >> 8) as usize;
        Ok(Self::from_raw(tables().acos[index]))
    }

    /// Arccosine in `[0, 128]`; input is clamped to `[-1, 1]`.
    #[must_use]
    pub fn acos(self) -> Self {
        self.clamp(-Self::ONE, Self::ONE)
            .try_acos()
            .unwrap_or(Self::ZERO)
    }

    /// Arcsine in `[-64, 64]`.
    ///
    /// # Errors
    ///
    /// Returns `FixedError::Domain` if `self` is outside `[-1, 1]`.
    pub fn try_asin(self) -> FixedResult<Self> {
        match self.try_acos() {
            Ok(acos) => Ok(QUARTER_CIRCLE - acos),
            Err(_) => Err(FixedError::Domain {
                operation: "asin",
                input: self,
            }),
        }
    }

    /// Arcsine in `[-64, 64]`; input is clamped to `[-1, 1]`.
    #[must_use]
    pub fn asin(self) -> Self {
        QUARTER_CIRCLE - self.acos()
    }

    /// Arctangent in `(-64, 64)`.
    ///
    /// Binary search over the tangent table; the result has half-unit
    /// resolution.
    #[must_use]
    pub fn atan(self) -> Self {
        let tan = &tables().tan;
        let x = self.raw();
        let (mut low, mut high) = if x >= 0 { (0_i32, 127_i32) } else { (128, 255) };
        let mut mid;
        loop {
            mid = (low + high) >> 1;
            let diff = i64::from(x) - i64::from(tan[mid as usize]);
            if diff > 0 {
                low = mid + 1;
            } else if diff < 0 {
                high = mid - 1;
            }
            if diff == 0 || low > high {
                break;
            }
        }
        if x >= 0 {
            Self::from_raw(mid << 15)
        } else {
            Self::from_raw(-0x80_0000 + (mid << 15))
        }
    }

    /// Full-circle arctangent of `self / x` in `[-128, 128]`, where `self`
    /// is the y component.
    ///
    /// # Errors
    ///
    /// Returns `FixedError::Domain` when both components are zero.
    pub fn try_atan2(self, x: Self) -> FixedResult<Self> {
        let y = self;
        if x.is_zero() {
            if y.is_zero() {
                return Err(FixedError::Domain {
                    operation: "atan2",
                    input: y,
                });
            }
            return Ok(if y.is_negative() {
                -QUARTER_CIRCLE
            } else {
                QUARTER_CIRCLE
            });
        }
        let angle = (y / x).atan();
        Ok(if !x.is_negative() {
            angle
        } else if y.is_negative() {
            angle - HALF_CIRCLE
        } else {
            angle + HALF_CIRCLE
        })
    }

    /// Full-circle arctangent of `self / x`; `(0, 0)` yields zero.
    #[must_use]
    pub fn atan2(self, x: Self) -> Self {
        self.try_atan2(x).unwrap_or(Self::ZERO)
    }

    /// Converts a binary angle to radians.
    #[must_use]
    pub fn angle_to_radians(self) -> f64 {
        self.to_f64() * PI / 128.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Fixed, b: f64, tolerance: f64) -> bool {
        (a.to_f64() - b).abs() <= tolerance
    }

    #[test]
    fn test_cardinal_directions() {
        assert_eq!(Fixed::ZERO.cos(), Fixed::ONE);
        assert_eq!(Fixed::ZERO.sin(), Fixed::ZERO);
        assert_eq!(QUARTER_CIRCLE.sin(), Fixed::ONE);
        assert_eq!(HALF_CIRCLE.cos(), -Fixed::ONE);
        assert_eq!(Fixed::from_int(192).sin(), -Fixed::ONE);
        assert_eq!(FULL_CIRCLE.cos(), Fixed::ONE);
    }

    #[test]
    fn test_negative_angles_wrap() {
        assert_eq!(Fixed::from_int(-64).sin(), Fixed::from_int(192).sin());
        assert_eq!(Fixed::from_int(-64).wrap_angle(), Fixed::from_int(192));
        assert_eq!(Fixed::from_int(300).wrap_angle(), Fixed::from_int(44));
    }

    #[test]
    fn test_tan() {
        assert!(close(Fixed::from_int(32).tan(), 1.0, 0.001));
        assert!(close(Fixed::from_int(-32).tan(), -1.0, 0.001));
        assert_eq!(QUARTER_CIRCLE.tan(), Fixed::MAX);
    }

    #[test]
    fn test_asin_acos_range() {
        assert_eq!(Fixed::ONE.asin(), QUARTER_CIRCLE);
        assert_eq!((-Fixed::ONE).asin(), -QUARTER_CIRCLE);
        assert_eq!(Fixed::ZERO.asin(), Fixed::ZERO);
        assert_eq!(Fixed::ONE.acos(), Fixed::ZERO);
        assert_eq!((-Fixed::ONE).acos(), HALF_CIRCLE);
        assert!(close(Fixed::HALF.asin(), 256.0 / 12.0, 0.3));
    }

    #[test]
    fn test_asin_out_of_range() {
        let too_big = Fixed::from_f64(1.5);
        assert_eq!(too_big.asin(), QUARTER_CIRCLE);
        assert!(matches!(
            too_big.try_asin(),
            Err(FixedError::Domain { operation: "asin", .. })
        ));
    }

    #[test]
    fn test_atan() {
        assert_eq!(Fixed::ZERO.atan(), Fixed::ZERO);
        assert!(close(Fixed::ONE.atan(), 32.0, 0.5));
        assert!(close((-Fixed::ONE).atan(), -32.0, 0.5));
    }

    #[test]
    fn test_atan2_quadrants() {
        let one = Fixed::ONE;
        assert!(close(one.atan2(one), 32.0, 0.5));
        assert!(close(one.atan2(-one), 96.0, 0.5));
        assert!(close((-one).atan2(-one), -96.0, 0.5));
        assert!(close((-one).atan2(one), -32.0, 0.5));
        assert_eq!(one.atan2(Fixed::ZERO), QUARTER_CIRCLE);
        assert_eq!((-one).atan2(Fixed::ZERO), -QUARTER_CIRCLE);
    }

    #[test]
    fn test_atan2_origin() {
        assert_eq!(Fixed::ZERO.atan2(Fixed::ZERO), Fixed::ZERO);
        assert!(Fixed::ZERO.try_atan2(Fixed::ZERO).is_err());
    }

    #[test]
    fn test_radian_conversion() {
        assert!((HALF_CIRCLE.angle_to_radians() - PI).abs() < 1e-9);
        assert!((QUARTER_CIRCLE.angle_to_radians() - PI / 2.0).abs() < 1e-9);
    }
}
