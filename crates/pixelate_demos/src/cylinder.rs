//! Texture mapping onto a cylinder.
//!
//! A column `x` of the cylinder's silhouette, `-r <= x < r`, sees the
//! surface at angle `asin(x / r)`. Wrapping that angle to `[0, 256)` and
//! scaling it to the texture width picks the source column. Rows map
//! linearly.

use pixelate_fixed::Fixed;
use pixelate_raster::Bitmap;

/// Source column for silhouette column `x` of a cylinder of radius `r`.
///
/// The left half of the cylinder shows the far end of the texture
/// (angles 192..256), the right half the start (0..64).
#[must_use]
pub fn cylinder_column(x: i32, r: i32, map_width: i32) -> i32 {
    let angle = (Fixed::from_int(x) / r).asin().wrap_angle();
    angle.to_int() * (map_width - 1) / 256
}

/// Draws `map` wrapped around an upright cylinder centered on column `cx`,
/// with its top edge at row `top`.
pub fn mapped_cylinder(target: &mut Bitmap, cx: i32, top: i32, r: i32, h: i32, map: &Bitmap) {
    if r <= 0 || h <= 0 {
        return;
    }
    let (map_w, map_h) = (map.w(), map.h());
    let columns: Vec<i32> = (-r..r).map(|x| cylinder_column(x, r, map_w)).collect();

    for y in 0..h {
        let q = (i64::from(y) * i64::from(map_h) / i64::from(h)) as i32;
        for (x, &p) in (-r..r).zip(&columns) {
            if let Some(c) = map.get_pixel(p, q) {
                target.put_pixel(x + cx, top + y, c);
            }
        }
    }
    tracing::debug!(cx, top, r, h, "drew mapped cylinder");
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelate_raster::Color;

    #[test]
    fn test_columns_in_range() {
        for r in [1, 7, 100, 300] {
            for x in -r..r {
                let p = cylinder_column(x, r, 512);
                assert!((0..512).contains(&p), "r={r} x={x} p={p}");
            }
        }
    }

    #[test]
    fn test_center_column_is_texture_start() {
        assert_eq!(cylinder_column(0, 100, 256), 0);
        // just left of center wraps to the far end
        assert!(cylinder_column(-1, 100, 256) > 250);
    }

    #[test]
    fn test_fills_silhouette() {
        let map = Bitmap::filled(16, 8, Color::RED).unwrap();
        let mut target = Bitmap::new(100, 60).unwrap();
        mapped_cylinder(&mut target, 50, 10, 20, 40, &map);
        assert_eq!(target.count_pixels(|c| c == Color::RED), 40 * 40);
        assert_eq!(target.get_pixel(30, 10), Some(Color::RED));
        assert_eq!(target.get_pixel(70, 10), Some(Color::BLACK));
        assert_eq!(target.get_pixel(50, 50), Some(Color::BLACK));
    }
}
