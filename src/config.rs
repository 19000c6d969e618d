//! Tunable constants, optionally overridden by `rustroids.toml`.
//!
//! Every field has a default, so a file only needs the keys it changes.

use std::f64::consts::PI;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::sim::field::FieldParams;

pub const CONFIG_FILE: &str = "rustroids.toml";

const MAX_FPS: u32 = 1000;
const MAX_ROIDS: usize = 1000;
const MAX_ROID_VERTICES: u32 = 256;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Ticks per second.
    pub fps: u32,
    /// Ship height in pixels.
    pub ship_size: f64,
    /// Degrees per second.
    pub turn_speed: f64,
    /// Acceleration in pixels per second.
    pub ship_thrust: f64,
    /// 0 = no friction, 1 = lots.
    pub friction: f64,
    pub roids_num: usize,
    /// Asteroid diameter in pixels.
    pub roids_size: f64,
    /// Max asteroid speed in pixels per second.
    pub roids_speed: f64,
    /// Average asteroid vertex count.
    pub roids_vert: u32,
    pub canvas_width: f64,
    pub canvas_height: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fps: 30,
            ship_size: 30.0,
            turn_speed: 360.0,
            ship_thrust: 5.0,
            friction: 0.79,
            roids_num: 3,
            roids_size: 100.0,
            roids_speed: 50.0,
            roids_vert: 10,
            canvas_width: 760.0,
            canvas_height: 570.0,
        }
    }
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Missing file means defaults. A broken file is logged and ignored.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                log::info!("loaded config from {}", path.display());
                config
            }
            Err(ConfigError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                log::info!("no config at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Looks next to the executable, like the log file.
    pub fn default_path() -> PathBuf {
        beside_exe(CONFIG_FILE)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // The tick interval is whole milliseconds.
        if !(1..=MAX_FPS).contains(&self.fps) {
            return Err(invalid("fps", "must be within 1..=1000"));
        }
        if self.roids_num > MAX_ROIDS {
            return Err(invalid("roids_num", "must be at most 1000"));
        }
        if self.roids_vert > MAX_ROID_VERTICES {
            return Err(invalid("roids_vert", "must be at most 256"));
        }
        if !(0.0..=1.0).contains(&self.friction) {
            return Err(invalid("friction", "must be within 0..=1"));
        }
        let non_negative = [
            ("ship_size", self.ship_size),
            ("turn_speed", self.turn_speed),
            ("ship_thrust", self.ship_thrust),
            ("roids_size", self.roids_size),
            ("roids_speed", self.roids_speed),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, "must be a non-negative number"));
            }
        }
        for (field, value) in [("canvas_width", self.canvas_width), ("canvas_height", self.canvas_height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(field, "must be positive"));
            }
        }
        Ok(())
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.fps))
    }

    /// Turn rate in radians per tick.
    pub fn turn_speed_per_tick(&self) -> f64 {
        self.turn_speed / 180.0 * PI / f64::from(self.fps)
    }

    pub fn field_params(&self) -> FieldParams {
        FieldParams {
            max_speed: self.roids_speed / f64::from(self.fps),
            radius: self.roids_size / 2.0,
            mean_vertices: self.roids_vert,
        }
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid { field, reason: reason.to_string() }
}

pub fn beside_exe(file_name: &str) -> PathBuf {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            return dir.join(file_name);
        }
    }
    PathBuf::from(file_name)
}
