//! # Lighting
//!
//! Lambertian shading with one directional light. The light is placed by
//! longitude and latitude, as if it stood straight above that spot on the
//! globe. A surface gets `max(0, normal · light)` of full brightness.

use pixelate_fixed::{Fixed, FixedMatrix, FixedVec3};
use pixelate_raster::{Bitmap, Color};

use crate::sphere::{for_each_disc_pixel, rotated_texel, surface_point};

/// Directional light.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LightSource {
    /// Binary angle around the poles.
    pub longitude: Fixed,
    /// Binary angle above (negative) or below (positive) the equator.
    pub latitude: Fixed,
}

impl LightSource {
    /// Places the light above `(longitude, latitude)`, in whole binary
    /// angle units.
    #[must_use]
    pub const fn new(longitude: i32, latitude: i32) -> Self {
        Self {
            longitude: Fixed::from_int(longitude),
            latitude: Fixed::from_int(latitude),
        }
    }

    /// Unit vector pointing at the light.
    #[must_use]
    pub fn direction(&self) -> FixedVec3 {
        FixedVec3::from_longitude_latitude(self.longitude, self.latitude)
    }
}

/// Light level `0..=255` for a unit surface normal.
#[must_use]
pub fn light_level(normal: FixedVec3, light: FixedVec3) -> u8 {
    let light = normal.dot(light).max(Fixed::ZERO);
    (light * 255).to_int().clamp(0, 255) as u8
}

/// Draws a plain sphere in shades of gray.
pub fn lit_sphere(target: &mut Bitmap, cx: i32, cy: i32, r: i32, light: LightSource) {
    let direction = light.direction();
    for_each_disc_pixel(r, |x, y| {
        let level = light_level(surface_point(x, y, r) / r, direction);
        target.put_pixel(x + cx, y + cy, Color::gray(level));
    });
    tracing::trace!(cx, cy, r, "drew lit sphere");
}

/// Draws a rotated, textured sphere with lighting.
///
/// The light stays fixed relative to the viewer while the globe turns
/// under it: the normal comes from the unrotated point.
#[allow(clippy::too_many_arguments)]
pub fn mapped_lit_sphere(
    target: &mut Bitmap,
    cx: i32,
    cy: i32,
    r: i32,
    map: &Bitmap,
    rotation: &FixedMatrix,
    light: LightSource,
) {
    let direction = light.direction();
    let (map_w, map_h) = (map.w(), map.h());
    for_each_disc_pixel(r, |x, y| {
        let point = surface_point(x, y, r);
        let (p, q) = rotated_texel(rotation.apply(point), r, map_w, map_h);
        if let Some(c) = map.get_pixel(p, q) {
            let level = light_level(point / r, direction);
            target.put_pixel(x + cx, y + cy, c.lit(level));
        }
    });
    tracing::trace!(cx, cy, r, "drew lit mapped sphere");
}

/// Draws `map` stretched over the whole target, lit as if every texel sat
/// on a globe: rows are latitudes from -64 to 64, columns longitudes from
/// 0 to 256.
pub fn lit_projection(target: &mut Bitmap, map: &Bitmap, light: LightSource) {
    let direction = light.direction();
    let (tw, th) = (target.w(), target.h());
    let (map_w, map_h) = (map.w(), map.h());

    for y in 0..th {
        let q = scale(y, map_h, th);
        let latitude = (Fixed::from_int(y) / th) * 128 - Fixed::from_int(64);
        for x in 0..tw {
            let p = scale(x, map_w, tw);
            let longitude = (Fixed::from_int(x) / tw) * 256;
            let normal = FixedVec3::from_longitude_latitude(longitude, latitude);
            if let Some(c) = map.get_pixel(p, q) {
                target.put_pixel(x, y, c.lit(light_level(normal, direction)));
            }
        }
    }
    tracing::debug!(width = tw, height = th, "drew lit projection");
}

/// `value * num / den` without intermediate overflow.
fn scale(value: i32, num: i32, den: i32) -> i32 {
    (i64::from(value) * i64::from(num) / i64::from(den)) as i32
}
