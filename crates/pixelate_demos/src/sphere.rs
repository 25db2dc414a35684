//! # Sphere Mapping
//!
//! Equirectangular textures on a sphere of radius `r`, centered at
//! `(cx, cy)`:
//!
//! ```text
//! latitude   a = asin(y / r)             → q = (a + 64) · (map.h - 1) / 128
//! half-width qc = cos(a) · r
//! longitude  b = asin(x / qc)            → p = wrap(b) · (map.w - 1) / 256
//! ```
//!
//! The rotated form lifts each silhouette pixel onto the surface
//! (`z = sqrt(r² - x² - y²)`), rotates it, and reads latitude and longitude
//! off the rotated point instead.

use std::ops::Range;

use pixelate_fixed::{Fixed, FixedMatrix, FixedVec3, QUARTER_CIRCLE};
use pixelate_raster::Bitmap;

/// Columns drawn on row `y` of a sphere of radius `r`.
///
/// One pixel is trimmed at either end of the row so that rounding never
/// puts a pixel outside the silhouette.
#[must_use]
pub fn row_span(y: i32, r: i32) -> Range<i32> {
    let half_width = ((-(Fixed::from_int(y) / r).asin()).cos() * r).to_int();
    -half_width + 1..half_width - 1
}

/// Calls `f(x, y)` for every pixel offset the sphere covers.
pub fn for_each_disc_pixel(r: i32, mut f: impl FnMut(i32, i32)) {
    if r <= 0 {
        return;
    }
    for y in -r..r {
        for x in row_span(y, r) {
            f(x, y);
        }
    }
}

/// Depth of the front surface above pixel offset `(x, y)`.
#[must_use]
pub fn surface_z(x: i32, y: i32, r: i32) -> Fixed {
    let (x, y, r) = (i64::from(x), i64::from(y), i64::from(r));
    let squared = (r * r - x * x - y * y).max(0);
    Fixed::from_f64((squared as f64).sqrt())
}

/// Texture row for a latitude in `[-64, 64]`.
#[inline]
fn row_for_latitude(latitude: Fixed, map_height: i32) -> i32 {
    (latitude + QUARTER_CIRCLE).to_int() * (map_height - 1) / 128
}

/// Texture column for any longitude.
#[inline]
fn column_for_longitude(longitude: Fixed, map_width: i32) -> i32 {
    longitude.wrap_angle().to_int() * (map_width - 1) / 256
}

/// Source texel `(p, q)` for pixel offset `(x, y)` of an unrotated sphere.
#[must_use]
pub fn sphere_texel(x: i32, y: i32, r: i32, map_width: i32, map_height: i32) -> (i32, i32) {
    let latitude = (Fixed::from_int(y) / r).asin();
    let half_width = latitude.cos() * r;
    let longitude = Fixed::from_int(x)
        .checked_div(half_width)
        .map_or(Fixed::ZERO, Fixed::asin);
    (
        column_for_longitude(longitude, map_width),
        row_for_latitude(latitude, map_height),
    )
}

/// Source texel `(p, q)` for a point on a sphere of radius `r` that has
/// already been rotated.
///
/// At the poles, where `x` and `z` are both zero, longitude is taken as 0.
#[must_use]
pub fn rotated_texel(point: FixedVec3, r: i32, map_width: i32, map_height: i32) -> (i32, i32) {
    let latitude = (point.y / r).asin();
    let longitude = point.x.atan2(point.z);
    (
        column_for_longitude(longitude, map_width),
        row_for_latitude(latitude, map_height),
    )
}

/// Draws `map` on a sphere.
pub fn mapped_sphere(target: &mut Bitmap, cx: i32, cy: i32, r: i32, map: &Bitmap) {
    let (map_w, map_h) = (map.w(), map.h());
    for_each_disc_pixel(r, |x, y| {
        let (p, q) = sphere_texel(x, y, r, map_w, map_h);
        if let Some(c) = map.get_pixel(p, q) {
            target.put_pixel(x + cx, y + cy, c);
        }
    });
    tracing::trace!(cx, cy, r, "drew mapped sphere");
}

/// Draws `map` on a sphere turned by `rotation`.
pub fn mapped_sphere_ex(
    target: &mut Bitmap,
    cx: i32,
    cy: i32,
    r: i32,
    map: &Bitmap,
    rotation: &FixedMatrix,
) {
    let (map_w, map_h) = (map.w(), map.h());
    for_each_disc_pixel(r, |x, y| {
        let rotated = rotation.apply(surface_point(x, y, r));
        let (p, q) = rotated_texel(rotated, r, map_w, map_h);
        if let Some(c) = map.get_pixel(p, q) {
            target.put_pixel(x + cx, y + cy, c);
        }
    });
    tracing::trace!(cx, cy, r, "drew rotated sphere");
}

/// The surface point in front of pixel offset `(x, y)`.
#[must_use]
pub fn surface_point(x: i32, y: i32, r: i32) -> FixedVec3 {
    FixedVec3::new(Fixed::from_int(x), Fixed::from_int(y), surface_z(x, y, r))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelate_raster::Color;

    #[test]
    fn test_row_span_shape() {
        assert_eq!(row_span(0, 100), -99..99);
        assert!(row_span(-100, 100).is_empty());
        assert!(row_span(-60, 100).len() < row_span(-30, 100).len());
    }

    #[test]
    fn test_disc_inside_radius() {
        let r = 40;
        let mut count = 0;
        for_each_disc_pixel(r, |x, y| {
            assert!(x * x + y * y <= r * r, "({x}, {y})");
            count += 1;
        });
        // close to the disc area
        let area = std::f64::consts::PI * f64::from(r * r);
        assert!((f64::from(count) / area) > 0.9);
    }

    #[test]
    fn test_surface_z() {
        assert_eq!(surface_z(0, 0, 50), Fixed::from_int(50));
        assert_eq!(surface_z(30, 40, 50), Fixed::ZERO);
        assert_eq!(surface_z(3, 4, 13), Fixed::from_int(12));
        // r² overflows i32 fixed arithmetic at this size
        assert_eq!(surface_z(0, 0, 300), Fixed::from_int(300));
    }

    #[test]
    fn test_sphere_texel_center_and_poles() {
        assert_eq!(sphere_texel(0, 0, 100, 257, 129), (0, 64));
        let (_, top) = sphere_texel(0, -100, 100, 257, 129);
        assert_eq!(top, 0);
    }

    #[test]
    fn test_identity_rotation_matches_plain_mapping() {
        let r = 50;
        let mut mismatched = 0;
        let mut total = 0;
        for_each_disc_pixel(r, |x, y| {
            let plain = sphere_texel(x, y, r, 256, 128);
            let rotated = rotated_texel(surface_point(x, y, r), r, 256, 128);
            total += 1;
            if (plain.0 - rotated.0).abs() > 2 || (plain.1 - rotated.1).abs() > 1 {
                mismatched += 1;
            }
        });
        // the two formulas round differently near the rim
        assert!(mismatched * 20 < total, "{mismatched} of {total}");
    }

    #[test]
    fn test_mapped_sphere_uses_texture() {
        let map = Bitmap::filled(32, 16, Color::BLUE).unwrap();
        let mut target = Bitmap::new(64, 64).unwrap();
        mapped_sphere(&mut target, 32, 32, 20, &map);
        assert_eq!(target.get_pixel(32, 32), Some(Color::BLUE));
        assert_eq!(target.get_pixel(2, 2), Some(Color::BLACK));

        let mut rotated = Bitmap::new(64, 64).unwrap();
        mapped_sphere_ex(&mut rotated, 32, 32, 20, &map, &FixedMatrix::IDENTITY);
        assert_eq!(rotated, target);
    }
}
