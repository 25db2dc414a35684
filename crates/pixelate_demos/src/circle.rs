//! # Circles and the Sine Plot
//!
//! The same point set three ways:
//! - radians and `f64` trig, truncated to pixels
//! - binary angles and table trig, rounded to pixels
//! - the fixed-point sine laid out along the x axis
//!
//! Offsets are relative to the circle's center. Screen y grows downward,
//! so angle 64 is straight down and the sine plot comes out upside down.

use std::f64::consts::TAU;

use pixelate_fixed::{Fixed, FULL_CIRCLE};
use pixelate_raster::{Bitmap, Color};

/// Radius used by the circle demos.
pub const CIRCLE_LENGTH: i32 = 100;

/// Angle step of the float circle, in radians.
pub const FLOAT_STEP: f64 = 0.1;

/// Angle step of the fixed-point circle and the sine plot, in binary units.
pub const FIXED_STEP: Fixed = Fixed::from_int(5);

/// Binary angles visited by the fixed-point routines: 0, 5, 10, ... while
/// the angle is below a full circle.
pub fn fixed_angles() -> impl Iterator<Item = Fixed> {
    std::iter::successors(Some(Fixed::ZERO), |a| Some(*a + FIXED_STEP))
        .take_while(|a| a.to_int() < FULL_CIRCLE.to_int())
}

/// Offsets of the float circle.
#[must_use]
pub fn circle_offsets_float(length: f64) -> Vec<(i32, i32)> {
    std::iter::successors(Some(0.0_f64), |a| Some(a + FLOAT_STEP))
        .take_while(|a| *a < TAU)
        .map(|a| ((length * a.cos()) as i32, (length * a.sin()) as i32))
        .collect()
}

/// Offsets of the fixed-point circle.
#[must_use]
pub fn circle_offsets_fixed(length: i32) -> Vec<(i32, i32)> {
    fixed_angles()
        .map(|a| ((length * a.cos()).to_int(), (length * a.sin()).to_int()))
        .collect()
}

/// Points of the sine plot: x is twice the angle, y the scaled sine
/// around `baseline`.
#[must_use]
pub fn sine_points(length: i32, baseline: i32) -> Vec<(i32, i32)> {
    fixed_angles()
        .map(|a| (a.to_int() * 2, (length * a.sin()).to_int() + baseline))
        .collect()
}

/// Plots the float circle in white around the screen center.
pub fn draw_circle_float(target: &mut Bitmap, length: i32) {
    let (cx, cy) = (target.w() / 2, target.h() / 2);
    let points = circle_offsets_float(f64::from(length));
    for &(x, y) in &points {
        target.put_pixel(x + cx, y + cy, Color::WHITE);
    }
    tracing::debug!(points = points.len(), length, "drew float circle");
}

/// Plots the fixed-point circle in white around the screen center.
pub fn draw_circle_fixed(target: &mut Bitmap, length: i32) {
    let (cx, cy) = (target.w() / 2, target.h() / 2);
    let points = circle_offsets_fixed(length);
    for &(x, y) in &points {
        target.put_pixel(x + cx, y + cy, Color::WHITE);
    }
    tracing::debug!(points = points.len(), length, "drew fixed circle");
}

/// Plots one period of the sine in white, centered vertically.
pub fn draw_sine(target: &mut Bitmap, length: i32) {
    let points = sine_points(length, target.h() / 2);
    for &(x, y) in &points {
        target.put_pixel(x, y, Color::WHITE);
    }
    tracing::debug!(points = points.len(), length, "drew sine");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_angle_count() {
        // 0..=255 in steps of 5
        assert_eq!(fixed_angles().count(), 52);
        assert_eq!(fixed_angles().last(), Some(Fixed::from_int(255)));
    }

    #[test]
    fn test_float_circle_count() {
        // 0.0, 0.1, ... 6.2
        assert_eq!(circle_offsets_float(100.0).len(), 63);
    }

    #[test]
    fn test_fixed_circle_cardinals() {
        let points = circle_offsets_fixed(100);
        assert_eq!(points[0], (100, 0));
        // angle 65 is just past straight down
        assert!(points.contains(&(-2, 100)) || points.contains(&(-3, 100)));
    }

    #[test]
    fn test_sine_layout() {
        let points = sine_points(100, 240);
        assert_eq!(points[0], (0, 240));
        // angle 65 peaks near the bottom of the plot
        assert_eq!(points[13].0, 130);
        assert!((points[13].1 - 340).abs() <= 1);
    }

    #[test]
    fn test_draw_clips_small_target() {
        let mut target = Bitmap::new(50, 50).unwrap();
        draw_circle_fixed(&mut target, CIRCLE_LENGTH);
        assert_eq!(target.count_pixels(|c| c == Color::WHITE), 0);
        draw_circle_fixed(&mut target, 10);
        assert!(target.count_pixels(|c| c == Color::WHITE) > 0);
    }
}
