//! Fixed-point 3D vectors.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::fixed::Fixed;

/// 3D vector - surface points, normals, light directions
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FixedVec3 {
    /// X component
    pub x: Fixed,
    /// Y component
    pub y: Fixed,
    /// Z component
    pub z: Fixed,
}

impl FixedVec3 {
    /// Zero vector
    pub const ZERO: Self = Self::new(Fixed::ZERO, Fixed::ZERO, Fixed::ZERO);

    /// Unit X vector
    pub const X: Self = Self::new(Fixed::ONE, Fixed::ZERO, Fixed::ZERO);

    /// Unit Y vector
    pub const Y: Self = Self::new(Fixed::ZERO, Fixed::ONE, Fixed::ZERO);

    /// Unit Z vector
    pub const Z: Self = Self::new(Fixed::ZERO, Fixed::ZERO, Fixed::ONE);

    /// Creates a new vector
    #[must_use]
    pub const fn new(x: Fixed, y: Fixed, z: Fixed) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector from whole numbers
    #[must_use]
    pub const fn from_ints(x: i32, y: i32, z: i32) -> Self {
        Self::new(Fixed::from_int(x), Fixed::from_int(y), Fixed::from_int(z))
    }

    /// Dot product
    #[must_use]
    pub fn dot(self, other: Self) -> Fixed {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Length squared (avoids sqrt)
    #[must_use]
    pub fn length_squared(self) -> Fixed {
        self.dot(self)
    }

    /// Length
    #[must_use]
    pub fn length(self) -> Fixed {
        self.length_squared().sqrt()
    }

    /// Direction on the unit sphere for a longitude/latitude pair of
    /// binary angles: `(sin lon·cos lat, sin lat, cos lon·cos lat)`.
    ///
    /// Longitude 0 and latitude 0 point along +Z, toward the viewer.
    #[must_use]
    pub fn from_longitude_latitude(longitude: Fixed, latitude: Fixed) -> Self {
        let cos_lat = latitude.cos();
        Self::new(
            longitude.sin() * cos_lat,
            latitude.sin(),
            longitude.cos() * cos_lat,
        )
    }
}

impl Add for FixedVec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for FixedVec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for FixedVec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<Fixed> for FixedVec3 {
    type Output = Self;
    fn mul(self, rhs: Fixed) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Divides each raw component: a sphere point over its radius gives the
/// surface normal.
impl Div<i32> for FixedVec3 {
    type Output = Self;
    fn div(self, rhs: i32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_operations() {
        let a = FixedVec3::from_ints(1, 2, 3);
        let b = FixedVec3::from_ints(4, 5, 6);

        let sum = a + b;
        assert_eq!(sum, FixedVec3::from_ints(5, 7, 9));

        let dot = a.dot(b);
        assert_eq!(dot, Fixed::from_int(32)); // 1*4 + 2*5 + 3*6
    }

    #[test]
    fn test_normal_from_sphere_point() {
        let point = FixedVec3::from_ints(30, 40, 0);
        let normal = point / 50;
        assert!((normal.length() - Fixed::ONE).abs().raw() < 8);
    }

    #[test]
    fn test_longitude_latitude() {
        let front = FixedVec3::from_longitude_latitude(Fixed::ZERO, Fixed::ZERO);
        assert_eq!(front, FixedVec3::Z);

        let east = FixedVec3::from_longitude_latitude(Fixed::from_int(64), Fixed::ZERO);
        assert_eq!(east, FixedVec3::X);

        let pole = FixedVec3::from_longitude_latitude(Fixed::from_int(96), Fixed::from_int(64));
        assert_eq!(pole.y, Fixed::ONE);
        assert!(pole.x.abs().raw() < 4 && pole.z.abs().raw() < 4);
    }
}
