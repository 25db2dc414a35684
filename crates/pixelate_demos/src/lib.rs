//! # PIXELATE Demos
//!
//! Trigonometry for pixel graphics, one routine at a time.
//!
//! ## Core Components
//!
//! - `circle`: points on a circle with float and fixed-point trig, the sine plot
//! - `vehicle`: a racing car steered by heading and speed
//! - `orbit`: a point circling the center
//! - `cylinder`, `sphere`: equirectangular texture mapping
//! - `lighting`: Lambertian shading of spheres and flat maps
//! - `scenes`: the full-screen layouts
//! - `simulation`: the fixed-step loop behind the moving demos
//!
//! Every routine draws into a caller-supplied `Bitmap`; nothing here touches
//! the filesystem.
//!
//! ## Example
//!
//! ```rust
//! use pixelate_demos::scenes;
//! use pixelate_raster::{Bitmap, Color};
//!
//! let map = Bitmap::filled(64, 32, Color::BLUE).unwrap();
//! let mut screen = Bitmap::new(320, 240).unwrap();
//! scenes::sphere_scene(&mut screen, &map);
//! assert_eq!(screen.get_pixel(160, 120), Some(Color::BLUE));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod circle;
pub mod cylinder;
pub mod layout;
pub mod lighting;
pub mod orbit;
pub mod scenes;
pub mod simulation;
pub mod sphere;
pub mod vehicle;

pub use layout::Grid;
pub use lighting::LightSource;
pub use orbit::{Orbit, OrbitRun};
pub use simulation::{run, Flow, RunSummary, Simulation};
pub use vehicle::{Control, ControlScript, Controls, RacingCar, ScriptStep, ScriptedCar};
