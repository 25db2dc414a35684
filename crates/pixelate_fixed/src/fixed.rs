//! # Fixed-Point Arithmetic
//!
//! 16.16 signed fixed-point numbers for integer-only graphics math.
//!
//! ## Layout
//!
//! - 16 integer bits (sign included) and 16 fraction bits
//! - `Fixed::ONE` is `0x0001_0000`
//! - Range: -32768.0 to 32767.99998
//!
//! ## Why Fixed-Point?
//!
//! - Deterministic: same pixels on every machine
//! - Angles live on a power-of-two circle and wrap with a bit mask
//! - Trigonometry is a table lookup instead of a libm call

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::error::{FixedError, FixedResult};

/// Number of fraction bits.
pub const FRACTION_BITS: u32 = 16;

/// The raw value of 1.0.
const MULTIPLIER: i32 = 1 << FRACTION_BITS;

/// The raw value of 1.0 as a float.
const MULTIPLIER_F64: f64 = 65_536.0;

/// Largest whole number that converts without saturating.
const MAX_WHOLE: i32 = i32::MAX >> FRACTION_BITS;

/// Smallest whole number that converts without saturating.
const MIN_WHOLE: i32 = i32::MIN >> FRACTION_BITS;

/// Fixed-point number with 16 fraction bits.
///
/// Internally stores `value * 65536` as an `i32`.
///
/// # Example
///
/// ```rust
/// use pixelate_fixed::Fixed;
///
/// let half = Fixed::from_f64(0.5);
/// let three = Fixed::from_int(3);
/// assert_eq!((three * half).to_f64(), 1.5);
/// assert_eq!((three * half).to_int(), 2); // halves round up
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Fixed(i32);

impl Fixed {
    /// Zero.
    pub const ZERO: Self = Self(0);

    /// One (1.0).
    pub const ONE: Self = Self(MULTIPLIER);

    /// One half (0.5).
    pub const HALF: Self = Self(MULTIPLIER / 2);

    /// Maximum representable value.
    pub const MAX: Self = Self(i32::MAX);

    /// Minimum representable value.
    pub const MIN: Self = Self(i32::MIN);

    /// Creates a fixed-point number from a whole number.
    ///
    /// Saturates outside -32768..=32767.
    #[inline]
    #[must_use]
    pub const fn from_int(whole: i32) -> Self {
        if whole > MAX_WHOLE {
            Self::MAX
        } else if whole < MIN_WHOLE {
            Self::MIN
        } else {
            Self(whole << FRACTION_BITS)
        }
    }

    /// Creates a fixed-point number from its raw representation.
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Returns the raw internal value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Converts a float, rounding half away from zero.
    ///
    /// # Errors
    ///
    /// Returns `FixedError::Overflow` if the value is out of range and
    /// `FixedError::NotANumber` for NaN.
    pub fn try_from_f64(value: f64) -> FixedResult<Self> {
        if value.is_nan() {
            return Err(FixedError::NotANumber);
        }
        let scaled = value * MULTIPLIER_F64;
        let rounded = if scaled < 0.0 { scaled - 0.5 } else { scaled + 0.5 };
        if rounded >= 2_147_483_648.0 || rounded <= -2_147_483_649.0 {
            return Err(FixedError::Overflow);
        }
        Ok(Self(rounded as i32))
    }

    /// Converts a float, saturating on overflow. NaN converts to zero.
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        match Self::try_from_f64(value) {
            Ok(fixed) => fixed,
            Err(FixedError::NotANumber) => Self::ZERO,
            Err(_) if value < 0.0 => Self::MIN,
            Err(_) => Self::MAX,
        }
    }

    /// Converts to the nearest whole number; halves round up.
    #[inline]
    #[must_use]
    pub const fn to_int(self) -> i32 {
        (self.0 >> FRACTION_BITS) + ((self.0 & 0x8000) >> 15)
    }

    /// Converts to a float. Exact.
    #[inline]
    #[must_use]
    pub fn to_f64(self) -> f64 {
        f64::from(self.0) / MULTIPLIER_F64
    }

    /// Checked multiplication. Returns `None` on overflow.
    #[inline]
    #[must_use]
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        let product = (i64::from(self.0) * i64::from(rhs.0)) >> FRACTION_BITS;
        i32::try_from(product).ok().map(Self)
    }

    /// Saturating multiplication.
    #[inline]
    #[must_use]
    pub fn saturating_mul(self, rhs: Self) -> Self {
        self.checked_mul(rhs).unwrap_or(
            if (self.0 < 0) == (rhs.0 < 0) { Self::MAX } else { Self::MIN },
        )
    }

    /// Checked division.
    ///
    /// # Errors
    ///
    /// Returns `FixedError::DivisionByZero` for a zero divisor and
    /// `FixedError::Overflow` if the quotient does not fit.
    pub fn checked_div(self, rhs: Self) -> FixedResult<Self> {
        if rhs.0 == 0 {
            return Err(FixedError::DivisionByZero);
        }
        Self::try_from_f64(self.to_f64() / rhs.to_f64())
    }

    /// Saturating division. A zero divisor yields `MAX` or `MIN` by the
    /// sign of the dividend.
    #[must_use]
    pub fn saturating_div(self, rhs: Self) -> Self {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(FixedError::DivisionByZero) if self.0 < 0 => Self::MIN,
            Err(FixedError::DivisionByZero) => Self::MAX,
            Err(_) if (self.0 < 0) == (rhs.0 < 0) => Self::MAX,
            Err(_) => Self::MIN,
        }
    }

    /// Square root.
    ///
    /// # Errors
    ///
    /// Returns `FixedError::Domain` for negative input.
    pub fn try_sqrt(self) -> FixedResult<Self> {
        if self.0 < 0 {
            return Err(FixedError::Domain {
                operation: "sqrt",
                input: self,
            });
        }
        Ok(Self::from_f64(self.to_f64().sqrt()))
    }

    /// Square root; negative input yields zero.
    #[must_use]
    pub fn sqrt(self) -> Self {
        self.try_sqrt().unwrap_or(Self::ZERO)
    }

    /// Absolute value, saturating at `MAX`.
    #[inline]
    #[must_use]
    pub const fn abs(self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Returns true if the value is below zero.
    #[inline]
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Returns true if the value is zero.
    #[inline]
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Add for Fixed {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.wrapping_add(rhs.0))
    }
}

impl AddAssign for Fixed {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.wrapping_add(rhs.0);
    }
}

impl Sub for Fixed {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.wrapping_sub(rhs.0))
    }
}

impl SubAssign for Fixed {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self.0.wrapping_sub(rhs.0);
    }
}

impl Neg for Fixed {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(self.0.wrapping_neg())
    }
}

impl Mul for Fixed {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.saturating_mul(rhs)
    }
}

/// Scales the raw value: `100 * cos(a)` stays in fixed-point.
impl Mul<i32> for Fixed {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: i32) -> Self::Output {
        Self(self.0.saturating_mul(rhs))
    }
}

impl Mul<Fixed> for i32 {
    type Output = Fixed;

    #[inline]
    fn mul(self, rhs: Fixed) -> Self::Output {
        rhs * self
    }
}

impl Div for Fixed {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        self.saturating_div(rhs)
    }
}

/// Divides the raw value, truncating toward zero.
///
/// # Panics
///
/// Panics if `rhs` is zero.
impl Div<i32> for Fixed {
    type Output = Self;

    #[inline]
    fn div(self, rhs: i32) -> Self::Output {
        Self(self.0 / rhs)
    }
}

impl From<i32> for Fixed {
    fn from(whole: i32) -> Self {
        Self::from_int(whole)
    }
}

impl fmt::Debug for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fixed({})", self.to_f64())
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f64())
    }
}
