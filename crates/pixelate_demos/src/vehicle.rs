//! # Racing Car
//!
//! A top-down car steered with sin and cos. The heading is a binary angle,
//! the speed a fixed-point length; each tick the velocity vector
//! `(speed·cos, speed·sin)` is added to the position, which wraps around
//! the screen edges.
//!
//! Keyboard input is replaced by a `ControlScript`: a list of
//! `(ticks, held controls)` steps played back in order.

use serde::{Deserialize, Serialize};

use pixelate_fixed::Fixed;
use pixelate_raster::{Bitmap, Color};

use crate::simulation::{Flow, Simulation};

/// Top speed (exclusive bound for accelerating).
pub const MAX_SPEED: Fixed = Fixed::from_int(4);

/// Radius of the car body.
pub const CAR_RADIUS: i32 = 10;

/// Length of the heading line.
pub const HEADING_LENGTH: i32 = 9;

/// Speed change per tick while accelerating or braking.
#[must_use]
pub fn speed_step() -> Fixed {
    Fixed::from_f64(0.01)
}

/// One input the car reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    /// Speed up (up arrow).
    Accelerate,
    /// Slow down (down arrow).
    Brake,
    /// Turn counter-clockwise on screen.
    Left,
    /// Turn clockwise on screen.
    Right,
    /// End the run (escape).
    Quit,
}

/// Set of controls held during one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    /// Speed up.
    pub accelerate: bool,
    /// Slow down.
    pub brake: bool,
    /// Turn left.
    pub left: bool,
    /// Turn right.
    pub right: bool,
    /// End the run.
    pub quit: bool,
}

impl Controls {
    /// Nothing held.
    pub const NONE: Self = Self {
        accelerate: false,
        brake: false,
        left: false,
        right: false,
        quit: false,
    };

    /// Marks `control` as held.
    #[must_use]
    pub const fn with(mut self, control: Control) -> Self {
        match control {
            Control::Accelerate => self.accelerate = true,
            Control::Brake => self.brake = true,
            Control::Left => self.left = true,
            Control::Right => self.right = true,
            Control::Quit => self.quit = true,
        }
        self
    }
}

impl FromIterator<Control> for Controls {
    fn from_iter<I: IntoIterator<Item = Control>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, Self::with)
    }
}

/// The car itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RacingCar {
    heading: Fixed,
    speed: Fixed,
    x: Fixed,
    y: Fixed,
    width: Fixed,
    height: Fixed,
}

impl RacingCar {
    /// A parked car in the middle of a `width` x `height` screen, facing
    /// right.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            heading: Fixed::ZERO,
            speed: Fixed::ZERO,
            x: Fixed::from_int(width / 2),
            y: Fixed::from_int(height / 2),
            width: Fixed::from_int(width),
            height: Fixed::from_int(height),
        }
    }

    /// Heading as a binary angle in `[0, 256)`.
    #[must_use]
    pub const fn heading(&self) -> Fixed {
        self.heading
    }

    /// Current speed in pixels per tick.
    #[must_use]
    pub const fn speed(&self) -> Fixed {
        self.speed
    }

    /// Position in fixed-point pixels.
    #[must_use]
    pub const fn position(&self) -> (Fixed, Fixed) {
        (self.x, self.y)
    }

    /// Applies one tick of input and moves the car.
    pub fn step(&mut self, controls: Controls) {
        if controls.accelerate && self.speed < MAX_SPEED {
            self.speed += speed_step();
        }
        if controls.brake && self.speed > Fixed::ZERO {
            self.speed -= speed_step();
        }
        if controls.left {
            self.heading = (self.heading - Fixed::ONE).wrap_angle();
        }
        if controls.right {
            self.heading = (self.heading + Fixed::ONE).wrap_angle();
        }

        let vel_x = self.speed * self.heading.cos();
        let vel_y = self.speed * self.heading.sin();
        self.x = wrap(self.x + vel_x, self.width);
        self.y = wrap(self.y + vel_y, self.height);
    }

    /// Clears the frame and draws the car: a blue body and a red line
    /// pointing where it is heading.
    pub fn draw(&self, target: &mut Bitmap) {
        target.clear(Color::BLACK);
        let (x, y) = (self.x.to_int(), self.y.to_int());
        target.draw_circle(x, y, CAR_RADIUS, Color::BLUE);
        target.draw_line(
            x,
            y,
            (self.x + HEADING_LENGTH * self.heading.cos()).to_int(),
            (self.y + HEADING_LENGTH * self.heading.sin()).to_int(),
            Color::RED,
        );
    }
}

/// Brings a coordinate back inside `[0, size)`, however far it moved.
/// A screen side of zero pins the car to 0.
fn wrap(value: Fixed, size: Fixed) -> Fixed {
    value
        .raw()
        .checked_rem_euclid(size.raw())
        .map_or(Fixed::ZERO, Fixed::from_raw)
}

/// One step of a control script.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptStep {
    /// How many ticks the controls are held.
    pub ticks: u32,
    /// Controls held during those ticks.
    #[serde(default)]
    pub controls: Vec<Control>,
}

/// Playback of scripted input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ControlScript {
    /// (first tick after this step, held controls)
    steps: Vec<(u32, Controls)>,
}

impl ControlScript {
    /// Builds a script from its steps. Ticks after the last step hold
    /// nothing.
    #[must_use]
    pub fn new(steps: &[ScriptStep]) -> Self {
        let mut end = 0u32;
        let steps = steps
            .iter()
            .map(|step| {
                end = end.saturating_add(step.ticks);
                (end, step.controls.iter().copied().collect())
            })
            .collect();
        Self { steps }
    }

    /// Total scripted ticks.
    #[must_use]
    pub fn len(&self) -> u32 {
        self.steps.last().map_or(0, |(end, _)| *end)
    }

    /// Returns true if the script holds nothing at any tick.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Controls held at `tick`.
    #[must_use]
    pub fn at(&self, tick: u32) -> Controls {
        self.steps
            .iter()
            .find(|(end, _)| tick < *end)
            .map_or(Controls::NONE, |(_, controls)| *controls)
    }

    /// A lap: speed up, sweep a wide right-hand curve, straighten out,
    /// brake to a stop.
    #[must_use]
    pub fn demo_lap() -> Self {
        use Control::{Accelerate, Brake, Right};
        Self::new(&[
            ScriptStep {
                ticks: 200,
                controls: vec![Accelerate],
            },
            ScriptStep {
                ticks: 128,
                controls: vec![Right],
            },
            ScriptStep {
                ticks: 120,
                controls: vec![],
            },
            ScriptStep {
                ticks: 64,
                controls: vec![Right, Accelerate],
            },
            ScriptStep {
                ticks: 250,
                controls: vec![Brake],
            },
        ])
    }
}

/// A car driven by a script.
#[derive(Clone, Debug)]
pub struct ScriptedCar {
    /// The car.
    pub car: RacingCar,
    /// Its input.
    pub script: ControlScript,
}

impl Simulation for ScriptedCar {
    fn tick(&mut self, tick: u32) -> Flow {
        let controls = self.script.at(tick);
        self.car.step(controls);
        if controls.quit {
            Flow::Quit
        } else {
            Flow::Continue
        }
    }

    fn draw(&self, target: &mut Bitmap) {
        self.car.draw(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(controls: &[Control]) -> Controls {
        controls.iter().copied().collect()
    }

    #[test]
    fn test_parked_car_stays() {
        let mut car = RacingCar::new(640, 480);
        car.step(Controls::NONE);
        assert_eq!(car.position(), (Fixed::from_int(320), Fixed::from_int(240)));
    }

    #[test]
    fn test_speed_limits() {
        let mut car = RacingCar::new(640, 480);
        for _ in 0..1000 {
            car.step(held(&[Control::Accelerate]));
        }
        assert!(car.speed() >= MAX_SPEED);
        assert!(car.speed() < MAX_SPEED + speed_step() + speed_step());

        for _ in 0..1000 {
            car.step(held(&[Control::Brake]));
        }
        assert_eq!(car.speed(), Fixed::ZERO);
    }

    #[test]
    fn test_steering_wraps() {
        let mut car = RacingCar::new(640, 480);
        car.step(held(&[Control::Left]));
        assert_eq!(car.heading(), Fixed::from_int(255));
        car.step(held(&[Control::Right]));
        car.step(held(&[Control::Right]));
        assert_eq!(car.heading(), Fixed::ONE);
    }

    #[test]
    fn test_moves_along_heading() {
        let mut car = RacingCar::new(640, 480);
        for _ in 0..100 {
            car.step(held(&[Control::Accelerate]));
        }
        let (x, y) = car.position();
        assert!(x > Fixed::from_int(320));
        assert_eq!(y, Fixed::from_int(240));
    }

    #[test]
    fn test_wraps_around_edges() {
        assert_eq!(wrap(Fixed::from_int(641), Fixed::from_int(640)), Fixed::ONE);
        assert_eq!(wrap(-Fixed::ONE, Fixed::from_int(640)), Fixed::from_int(639));
        assert_eq!(wrap(Fixed::from_int(640), Fixed::from_int(640)), Fixed::ZERO);
    }

    #[test]
    fn test_wrap_moves_longer_than_screen() {
        let two = Fixed::from_int(2);
        assert_eq!(wrap(Fixed::from_f64(5.5), two), Fixed::from_f64(1.5));
        assert_eq!(wrap(Fixed::from_f64(-3.25), two), Fixed::from_f64(0.75));
        assert_eq!(wrap(Fixed::from_int(7), Fixed::ZERO), Fixed::ZERO);
    }

    #[test]
    fn test_draw_body_and_heading() {
        let mut target = Bitmap::new(64, 48).unwrap();
        target.put_pixel(0, 0, Color::WHITE);
        RacingCar::new(64, 48).draw(&mut target);
        assert_eq!(target.get_pixel(0, 0), Some(Color::BLACK));
        assert_eq!(target.get_pixel(42, 24), Some(Color::BLUE));
        assert_eq!(target.get_pixel(41, 24), Some(Color::RED));
        assert_eq!(target.get_pixel(32, 24), Some(Color::RED));
    }

    #[test]
    fn test_script_playback() {
        let script = ControlScript::new(&[
            ScriptStep {
                ticks: 2,
                controls: vec![Control::Accelerate],
            },
            ScriptStep {
                ticks: 1,
                controls: vec![Control::Left, Control::Quit],
            },
        ]);
        assert_eq!(script.len(), 3);
        assert!(script.at(0).accelerate);
        assert!(script.at(1).accelerate);
        assert!(script.at(2).left && script.at(2).quit);
        assert_eq!(script.at(3), Controls::NONE);
    }

    #[test]
    fn test_control_names() {
        let step: ScriptStep =
            toml::from_str("ticks = 5\ncontrols = [\"accelerate\", \"right\"]").unwrap();
        assert_eq!(step.controls, vec![Control::Accelerate, Control::Right]);
    }
}
