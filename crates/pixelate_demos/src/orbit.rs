//! A point circling the screen center.
//!
//! With different horizontal and vertical radii the path becomes an
//! ellipse.

use pixelate_fixed::Fixed;
use pixelate_raster::{Bitmap, Color};

use crate::simulation::{Flow, Simulation};

/// Orbit parameters and the current angle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Orbit {
    radius_x: i32,
    radius_y: i32,
    step: Fixed,
    angle: Fixed,
}

impl Default for Orbit {
    fn default() -> Self {
        Self::new(100, 100, Fixed::ONE)
    }
}

impl Orbit {
    /// Starts at angle 0 (right of center), advancing `step` per tick.
    #[must_use]
    pub const fn new(radius_x: i32, radius_y: i32, step: Fixed) -> Self {
        Self {
            radius_x,
            radius_y,
            step,
            angle: Fixed::ZERO,
        }
    }

    /// Current angle in `[0, 256)`.
    #[must_use]
    pub const fn angle(&self) -> Fixed {
        self.angle
    }

    /// Offset of the point from the center.
    #[must_use]
    pub fn offset(&self) -> (i32, i32) {
        (
            (self.radius_x * self.angle.cos()).to_int(),
            (self.radius_y * self.angle.sin()).to_int(),
        )
    }

    /// Moves the point one step along the orbit.
    pub fn advance(&mut self) {
        self.angle = (self.angle + self.step).wrap_angle();
    }

    /// Clears the frame and plots the point in white.
    pub fn draw(&self, target: &mut Bitmap) {
        target.clear(Color::BLACK);
        let (x, y) = self.offset();
        target.put_pixel(x + target.w() / 2, y + target.h() / 2, Color::WHITE);
    }
}

/// Drives an `Orbit` so that each frame shows the point before the step,
/// as the per-tick loop does: compute, plot, advance.
#[derive(Clone, Copy, Debug)]
pub struct OrbitRun {
    /// Orbit state; the angle drawn at tick n is `n * step`.
    pub orbit: Orbit,
    started: bool,
}

impl OrbitRun {
    /// Wraps an orbit.
    #[must_use]
    pub const fn new(orbit: Orbit) -> Self {
        Self {
            orbit,
            started: false,
        }
    }
}

impl Simulation for OrbitRun {
    fn tick(&mut self, _tick: u32) -> Flow {
        if self.started {
            self.orbit.advance();
        }
        self.started = true;
        Flow::Continue
    }

    fn draw(&self, target: &mut Bitmap) {
        self.orbit.draw(target);
    }
}
