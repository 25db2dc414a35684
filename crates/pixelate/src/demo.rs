//! # Demo Catalogue
//!
//! Maps demo names to drawing routines and writes the results:
//! - still demos draw one frame into `<name>.png`
//! - moving demos save frames as `<name>_<tick>.png`
//!
//! The texture for the mapping demos is built on first use and shared by
//! every demo of the session.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use pixelate_demos::circle::{self, CIRCLE_LENGTH};
use pixelate_demos::{run, scenes, Orbit, OrbitRun, RacingCar, ScriptedCar};
use pixelate_fixed::Fixed;
use pixelate_raster::Bitmap;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::texture::load_texture;

/// The demos.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Demo {
    /// Circle with floating-point trig.
    Circle,
    /// Circle with fixed-point trig.
    CircleFixed,
    /// Sine plot.
    Sine,
    /// Steerable racing car.
    RacingCar,
    /// Point orbiting the center.
    Orbit,
    /// Texture on a cylinder.
    Cylinder,
    /// Texture on a sphere.
    Sphere,
    /// Grid of rotated globes.
    SphereRotations,
    /// Grid of lit gray spheres.
    LitSpheres,
    /// Grid of lit, spinning globes.
    LitPlanets,
    /// Flat map lit as a globe.
    LitProjection,
}

impl Demo {
    /// Every demo, in tutorial order.
    pub const ALL: [Self; 11] = [
        Self::Circle,
        Self::CircleFixed,
        Self::Sine,
        Self::RacingCar,
        Self::Orbit,
        Self::Cylinder,
        Self::Sphere,
        Self::SphereRotations,
        Self::LitSpheres,
        Self::LitPlanets,
        Self::LitProjection,
    ];

    /// Name used on the command line, for binaries and output files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::CircleFixed => "circle_fixed",
            Self::Sine => "sine",
            Self::RacingCar => "racing_car",
            Self::Orbit => "orbit",
            Self::Cylinder => "cylinder",
            Self::Sphere => "sphere",
            Self::SphereRotations => "sphere_rotations",
            Self::LitSpheres => "lit_spheres",
            Self::LitPlanets => "lit_planets",
            Self::LitProjection => "lit_projection",
        }
    }

    /// One-line description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Circle => "circle from float sin/cos",
            Self::CircleFixed => "circle from fixed-point sin/cos",
            Self::Sine => "one period of the fixed-point sine",
            Self::RacingCar => "top-down car driven by a control script",
            Self::Orbit => "point circling the screen center",
            Self::Cylinder => "texture wrapped around a cylinder",
            Self::Sphere => "texture mapped onto a sphere",
            Self::SphereRotations => "globes rotated about each axis",
            Self::LitSpheres => "gray spheres lit from different sides",
            Self::LitPlanets => "spinning globes with lighting",
            Self::LitProjection => "flat map lit as if on a globe",
        }
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Demo {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|demo| demo.name() == s)
            .ok_or_else(|| AppError::Usage(format!("unknown demo '{s}'")))
    }
}

/// Renders demos into one output directory.
pub struct Session<'a> {
    config: &'a Config,
    out_dir: PathBuf,
    texture: Option<Bitmap>,
}

impl<'a> Session<'a> {
    /// Creates `out_dir` if needed.
    ///
    /// # Errors
    ///
    /// Returns `AppError::OutputDir` if the directory cannot be created.
    pub fn new(config: &'a Config, out_dir: &Path) -> AppResult<Self> {
        std::fs::create_dir_all(out_dir).map_err(|source| AppError::OutputDir {
            path: out_dir.to_path_buf(),
            source,
        })?;
        Ok(Self {
            config,
            out_dir: out_dir.to_path_buf(),
            texture: None,
        })
    }

    fn screen(&self) -> AppResult<Bitmap> {
        Ok(Bitmap::new(self.config.screen.width, self.config.screen.height)?)
    }

    fn texture(&mut self) -> AppResult<&Bitmap> {
        let texture = match self.texture.take() {
            Some(texture) => texture,
            None => load_texture(&self.config.texture)?,
        };
        Ok(self.texture.insert(texture))
    }

    fn save(&self, bitmap: &Bitmap, file_name: &str) -> AppResult<PathBuf> {
        let path = self.out_dir.join(file_name);
        bitmap.save(&path)?;
        tracing::info!(path = %path.display(), "wrote image");
        Ok(path)
    }

    fn save_frame(&self, demo: Demo, tick: u32, frame: &Bitmap) -> AppResult<PathBuf> {
        self.save(frame, &format!("{}_{tick:04}.png", demo.name()))
    }

    /// Renders `demo` and returns the files written.
    ///
    /// # Errors
    ///
    /// Fails if the texture cannot be produced or an image cannot be
    /// written.
    pub fn render(&mut self, demo: Demo) -> AppResult<Vec<PathBuf>> {
        tracing::info!(%demo, "rendering");
        let mut screen = self.screen()?;

        match demo {
            Demo::Circle => circle::draw_circle_float(&mut screen, CIRCLE_LENGTH),
            Demo::CircleFixed => circle::draw_circle_fixed(&mut screen, CIRCLE_LENGTH),
            Demo::Sine => circle::draw_sine(&mut screen, CIRCLE_LENGTH),
            Demo::RacingCar => return self.render_racing_car(&mut screen),
            Demo::Orbit => return self.render_orbit(&mut screen),
            Demo::Cylinder => scenes::cylinder_scene(&mut screen, self.texture()?),
            Demo::Sphere => scenes::sphere_scene(&mut screen, self.texture()?),
            Demo::SphereRotations => {
                scenes::sphere_rotations_scene(&mut screen, self.texture()?);
            }
            Demo::LitSpheres => scenes::lit_spheres_scene(&mut screen),
            Demo::LitPlanets => scenes::lit_planets_scene(&mut screen, self.texture()?),
            Demo::LitProjection => scenes::lit_projection_scene(&mut screen, self.texture()?),
        }

        let path = self.save(&screen, &format!("{}.png", demo.name()))?;
        Ok(vec![path])
    }

    fn render_racing_car(&self, screen: &mut Bitmap) -> AppResult<Vec<PathBuf>> {
        let settings = &self.config.racing_car;
        let mut sim = ScriptedCar {
            car: RacingCar::new(screen.w(), screen.h()),
            script: settings.control_script(),
        };
        let mut written = Vec::new();
        let (ticks, every) = (settings.ticks, settings.snapshot_every);
        let summary = run(&mut sim, screen, ticks, every, |tick, frame| {
            written.push(self.save_frame(Demo::RacingCar, tick, frame)?);
            Ok::<(), AppError>(())
        })?;
        let (x, y) = sim.car.position();
        tracing::info!(
            ticks = summary.ticks,
            quit = summary.quit,
            x = %x,
            y = %y,
            speed = %sim.car.speed(),
            "racing car parked"
        );
        Ok(written)
    }

    fn render_orbit(&self, screen: &mut Bitmap) -> AppResult<Vec<PathBuf>> {
        let settings = &self.config.orbit;
        let orbit = Orbit::new(
            settings.radius_x,
            settings.radius_y,
            Fixed::from_f64(settings.step),
        );
        let mut sim = OrbitRun::new(orbit);
        let mut written = Vec::new();
        let (ticks, every) = (settings.ticks, settings.snapshot_every);
        run(&mut sim, screen, ticks, every, |tick, frame| {
            written.push(self.save_frame(Demo::Orbit, tick, frame)?);
            Ok::<(), AppError>(())
        })?;
        Ok(written)
    }
}
