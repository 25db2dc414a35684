//! # Configuration
//!
//! Optional TOML file; every key has a default, so an empty file (or no
//! file at all) gives the classic 640x480 setup.
//!
//! ```toml
//! output_dir = "out"
//!
//! [screen]
//! width = 640
//! height = 480
//!
//! [texture]
//! source = "procedural"   # or "file", "graticule"
//! path = "earth.bmp"
//! seed = 42
//!
//! [racing_car]
//! ticks = 800
//! snapshot_every = 100
//!
//! [[racing_car.script]]
//! ticks = 200
//! controls = ["accelerate"]
//!
//! [orbit]
//! radius_x = 200
//! radius_y = 100
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use pixelate_demos::{ControlScript, ScriptStep};

use crate::error::{AppError, AppResult};

/// File looked for in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "pixelate.toml";

/// Largest screen side; pixel coordinates must stay representable as
/// fixed-point numbers.
pub const MAX_SCREEN_SIDE: u32 = 16_384;

/// Top-level configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Where images are written.
    pub output_dir: PathBuf,
    /// Target bitmap size.
    pub screen: ScreenConfig,
    /// Texture for the mapping demos.
    pub texture: TextureConfig,
    /// Racing car run.
    pub racing_car: RacingCarConfig,
    /// Orbit run.
    pub orbit: OrbitConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("out"),
            screen: ScreenConfig::default(),
            texture: TextureConfig::default(),
            racing_car: RacingCarConfig::default(),
            orbit: OrbitConfig::default(),
        }
    }
}

/// Target bitmap size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScreenConfig {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
        }
    }
}

/// Where the texture comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureSource {
    /// Generated planet.
    #[default]
    Procedural,
    /// Image file at `path`.
    File,
    /// Latitude/longitude grid.
    Graticule,
}

/// Texture settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextureConfig {
    /// Where the texture comes from.
    pub source: TextureSource,
    /// Image file, for `source = "file"`.
    pub path: PathBuf,
    /// Planet seed.
    pub seed: u64,
    /// Generated texture width.
    pub width: u32,
    /// Generated texture height.
    pub height: u32,
    /// Graticule line spacing in pixels.
    pub spacing: u32,
}

impl Default for TextureConfig {
    fn default() -> Self {
        Self {
            source: TextureSource::Procedural,
            path: PathBuf::from("earth.bmp"),
            seed: 42,
            width: 512,
            height: 256,
            spacing: 32,
        }
    }
}

/// Racing car run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RacingCarConfig {
    /// Maximum ticks to simulate, at least 1 so a frame is written.
    pub ticks: u32,
    /// Save every n-th frame; 0 saves only the last.
    pub snapshot_every: u32,
    /// Scripted input; empty drives the built-in lap.
    pub script: Vec<ScriptStep>,
}

impl Default for RacingCarConfig {
    fn default() -> Self {
        Self {
            ticks: 800,
            snapshot_every: 100,
            script: Vec::new(),
        }
    }
}

impl RacingCarConfig {
    /// The input to play back.
    #[must_use]
    pub fn control_script(&self) -> ControlScript {
        if self.script.is_empty() {
            ControlScript::demo_lap()
        } else {
            ControlScript::new(&self.script)
        }
    }
}

/// Orbit run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrbitConfig {
    /// Horizontal radius in pixels.
    pub radius_x: i32,
    /// Vertical radius in pixels.
    pub radius_y: i32,
    /// Angle advance per tick, in binary angle units.
    pub step: f64,
    /// Ticks to simulate, at least 1.
    pub ticks: u32,
    /// Save every n-th frame; 0 saves only the last.
    pub snapshot_every: u32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            radius_x: 100,
            radius_y: 100,
            step: 1.0,
            ticks: 256,
            snapshot_every: 32,
        }
    }
}

impl Config {
    /// Parses and validates a TOML document. `origin` names it in errors.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ConfigParse` for malformed TOML or unknown keys,
    /// `AppError::InvalidConfig` for out-of-range values.
    pub fn from_toml_str(text: &str, origin: &Path) -> AppResult<Self> {
        let config: Self = toml::from_str(text).map_err(|source| AppError::ConfigParse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a config file.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ConfigRead` if the file cannot be read, otherwise
    /// as `from_toml_str`.
    pub fn load(path: &Path) -> AppResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text, path)?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Loads `explicit` if given, else `pixelate.toml` from `dir` if it
    /// exists, else the defaults.
    ///
    /// # Errors
    ///
    /// As `load`. A missing explicit file is an error; a missing default
    /// file is not.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> AppResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let fallback = dir.join(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            Self::load(&fallback)
        } else {
            tracing::debug!("no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidConfig` naming the first bad key.
    pub fn validate(&self) -> AppResult<()> {
        let side = |key: &str, value: u32| {
            if value == 0 || value > MAX_SCREEN_SIDE {
                Err(AppError::InvalidConfig(format!(
                    "{key} must be between 1 and {MAX_SCREEN_SIDE}, got {value}"
                )))
            } else {
                Ok(())
            }
        };
        side("screen.width", self.screen.width)?;
        side("screen.height", self.screen.height)?;
        side("texture.width", self.texture.width)?;
        side("texture.height", self.texture.height)?;

        for (key, ticks) in [
            ("racing_car.ticks", self.racing_car.ticks),
            ("orbit.ticks", self.orbit.ticks),
        ] {
            if ticks == 0 {
                return Err(AppError::InvalidConfig(format!("{key} must be at least 1, got 0")));
            }
        }

        if !self.orbit.step.is_finite() || self.orbit.step.abs() > 128.0 {
            return Err(AppError::InvalidConfig(format!(
                "orbit.step must be within [-128, 128], got {}",
                self.orbit.step
            )));
        }
        let limit = i32::try_from(MAX_SCREEN_SIDE).unwrap_or(i32::MAX);
        for (key, radius) in [
            ("orbit.radius_x", self.orbit.radius_x),
            ("orbit.radius_y", self.orbit.radius_y),
        ] {
            if radius.abs() > limit {
                return Err(AppError::InvalidConfig(format!(
                    "{key} must be within [-{limit}, {limit}], got {radius}"
                )));
            }
        }
        Ok(())
    }
}
