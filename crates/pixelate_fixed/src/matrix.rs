//! # Fixed-Point Matrices
//!
//! 3x3 rotation/scale part plus a translation column:
//!
//! ```text
//! ┌ v00 v01 v02 ┐ ┌ x ┐   ┌ t0 ┐
//! │ v10 v11 v12 │ │ y │ + │ t1 │
//! └ v20 v21 v22 ┘ └ z ┘   └ t2 ┘
//! ```
//!
//! Rotation angles are binary angles (256 units per turn).

use crate::fixed::Fixed;
use crate::vector::FixedVec3;

/// Affine transform on fixed-point vectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FixedMatrix {
    /// Rotation/scale rows.
    pub v: [[Fixed; 3]; 3],
    /// Translation.
    pub t: [Fixed; 3],
}

impl Default for FixedMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl FixedMatrix {
    /// Identity transform.
    pub const IDENTITY: Self = Self {
        v: [
            [Fixed::ONE, Fixed::ZERO, Fixed::ZERO],
            [Fixed::ZERO, Fixed::ONE, Fixed::ZERO],
            [Fixed::ZERO, Fixed::ZERO, Fixed::ONE],
        ],
        t: [Fixed::ZERO; 3],
    };

    /// Pure translation.
    #[must_use]
    pub const fn translation(x: Fixed, y: Fixed, z: Fixed) -> Self {
        let mut m = Self::IDENTITY;
        m.t = [x, y, z];
        m
    }

    /// Rotation around the X axis.
    #[must_use]
    pub fn rotate_x(angle: Fixed) -> Self {
        let (sin, cos) = (angle.sin(), angle.cos());
        let mut m = Self::IDENTITY;
        m.v[1][1] = cos;
        m.v[1][2] = -sin;
        m.v[2][1] = sin;
        m.v[2][2] = cos;
        m
    }

    /// Rotation around the Y axis.
    #[must_use]
    pub fn rotate_y(angle: Fixed) -> Self {
        let (sin, cos) = (angle.sin(), angle.cos());
        let mut m = Self::IDENTITY;
        m.v[0][0] = cos;
        m.v[0][2] = sin;
        m.v[2][0] = -sin;
        m.v[2][2] = cos;
        m
    }

    /// Rotation around the Z axis.
    #[must_use]
    pub fn rotate_z(angle: Fixed) -> Self {
        let (sin, cos) = (angle.sin(), angle.cos());
        let mut m = Self::IDENTITY;
        m.v[0][0] = cos;
        m.v[0][1] = -sin;
        m.v[1][0] = sin;
        m.v[1][1] = cos;
        m
    }

    /// Combined rotation around all three axes.
    ///
    /// Built in one pass from the nine products of the axis sines and
    /// cosines. Note the handedness: `rotation(a, 0, 0)` turns the
    /// opposite way to `rotate_x(a)`.
    #[must_use]
    pub fn rotation(x: Fixed, y: Fixed, z: Fixed) -> Self {
        let (sin_x, cos_x) = (x.sin(), x.cos());
        let (sin_y, cos_y) = (y.sin(), y.cos());
        let (sin_z, cos_z) = (z.sin(), z.cos());

        let sinx_siny = sin_x * sin_y;
        let cosx_siny = cos_x * sin_y;

        Self {
            v: [
                [cos_y * cos_z, cos_y * sin_z, -sin_y],
                [
                    sinx_siny * cos_z - cos_x * sin_z,
                    sinx_siny * sin_z + cos_x * cos_z,
                    sin_x * cos_y,
                ],
                [
                    cosx_siny * cos_z + sin_x * sin_z,
                    cosx_siny * sin_z - sin_x * cos_z,
                    cos_x * cos_y,
                ],
            ],
            t: [Fixed::ZERO; 3],
        }
    }

    /// Rotation for a globe.
    ///
    /// A plain Euler rotation spins the globe around the wrong axis once
    /// it is tilted. Here the tilt (`axis_x`, `axis_z`) is composed with
    /// `spin` around the Y axis, which is the axis through the poles.
    #[must_use]
    pub fn planet_rotation(spin: Fixed, axis_x: Fixed, axis_z: Fixed) -> Self {
        Self::rotation(axis_x, Fixed::ZERO, axis_z).then(&Self::rotate_y(spin))
    }

    /// Returns the transform equivalent to applying `self`, then `next`.
    #[must_use]
    pub fn then(&self, next: &Self) -> Self {
        let mut out = Self::IDENTITY;
        for i in 0..3 {
            for j in 0..3 {
                out.v[i][j] = self.v[0][j] * next.v[i][0]
                    + self.v[1][j] * next.v[i][1]
                    + self.v[2][j] * next.v[i][2];
            }
        }
        let t = next.apply(FixedVec3::new(self.t[0], self.t[1], self.t[2]));
        out.t = [t.x, t.y, t.z];
        out
    }

    /// Transforms a point.
    #[must_use]
    pub fn apply(&self, p: FixedVec3) -> FixedVec3 {
        let row = |r: &[Fixed; 3], t: Fixed| p.x * r[0] + p.y * r[1] + p.z * r[2] + t;
        FixedVec3::new(
            row(&self.v[0], self.t[0]),
            row(&self.v[1], self.t[1]),
            row(&self.v[2], self.t[2]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quarter() -> Fixed {
        Fixed::from_int(64)
    }

    #[test]
    fn test_identity_apply() {
        let p = FixedVec3::from_ints(3, -4, 5);
        assert_eq!(FixedMatrix::IDENTITY.apply(p), p);
        assert_eq!(
            FixedMatrix::rotation(Fixed::ZERO, Fixed::ZERO, Fixed::ZERO),
            FixedMatrix::IDENTITY
        );
    }

    #[test]
    fn test_axis_rotations() {
        let rx = FixedMatrix::rotate_x(quarter());
        assert_eq!(rx.apply(FixedVec3::Y), FixedVec3::Z);

        let ry = FixedMatrix::rotate_y(quarter());
        assert_eq!(ry.apply(FixedVec3::X), -FixedVec3::Z);

        let rz = FixedMatrix::rotate_z(quarter());
        assert_eq!(rz.apply(FixedVec3::X), FixedVec3::Y);
    }

    #[test]
    fn test_then_composes_in_order() {
        let rz = FixedMatrix::rotate_z(quarter());
        let rx = FixedMatrix::rotate_x(quarter());
        // X -(z)-> Y -(x)-> Z
        assert_eq!(rz.then(&rx).apply(FixedVec3::X), FixedVec3::Z);
        // X -(x)-> X -(z)-> Y
        assert_eq!(rx.then(&rz).apply(FixedVec3::X), FixedVec3::Y);
    }

    #[test]
    fn test_then_carries_translation() {
        let shift = FixedMatrix::translation(Fixed::ONE, Fixed::ZERO, Fixed::ZERO);
        let rz = FixedMatrix::rotate_z(quarter());
        let moved = shift.then(&rz).apply(FixedVec3::ZERO);
        assert_eq!(moved, FixedVec3::Y);
    }

    #[test]
    fn test_planet_spin_keeps_poles() {
        let m = FixedMatrix::planet_rotation(Fixed::from_int(40), Fixed::ZERO, Fixed::ZERO);
        assert_eq!(m.apply(FixedVec3::Y), FixedVec3::Y);
    }
}
