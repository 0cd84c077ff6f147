//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use orrery_system::{BuildOptions, SceneScale};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

/// Top-level orrery configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Scene scale, solver and playback settings.
    pub simulation: SimulationConfig,
    /// Where body data comes from.
    pub catalog: CatalogConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Scene distance units per AU.
    pub distance_scale: f64,
    /// Days of orbital period per scene time unit.
    pub days_per_time_unit: f64,
    /// Spin radians per time unit per hour of day length.
    pub spin_time_factor: f64,
    /// Segments per precomputed orbit path.
    pub path_segments: u32,
    /// Kepler solver convergence tolerance.
    pub kepler_tolerance: f64,
    /// Playback speed multiplier. Zero freezes time, negative runs backwards.
    pub speed: f64,
    /// Real seconds per headless frame.
    pub frame_dt: f64,
    /// Number of headless frames to run.
    pub frames: u32,
    /// Seed for phase offsets. A random seed is drawn when unset.
    pub phase_seed: Option<u64>,
}

/// Catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    /// RON manifest of hand-authored bodies.
    pub planets: PathBuf,
    /// Optional SBDB JSON export of minor bodies.
    pub asteroids: Option<PathBuf>,
    /// Star every minor body orbits.
    pub root_name: String,
    /// Keep at most this many minor bodies.
    pub asteroid_limit: Option<usize>,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for SimulationConfig {
    fn default() -> Self {
        let build = BuildOptions::default();
        Self {
            distance_scale: build.scale.distance_scale,
            days_per_time_unit: build.scale.days_per_time_unit,
            spin_time_factor: build.scale.spin_time_factor,
            path_segments: build.path_segments,
            kepler_tolerance: build.kepler_tolerance,
            speed: 1.0,
            frame_dt: 1.0 / 60.0,
            frames: 600,
            phase_seed: None,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            planets: PathBuf::from("assets/planets.ron"),
            asteroids: None,
            root_name: "Sun".to_string(),
            asteroid_limit: None,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl SimulationConfig {
    /// Registry build options for the given phase seed.
    pub fn build_options(&self, phase_seed: u64) -> BuildOptions {
        BuildOptions {
            scale: SceneScale {
                distance_scale: self.distance_scale,
                days_per_time_unit: self.days_per_time_unit,
                spin_time_factor: self.spin_time_factor,
            },
            path_segments: self.path_segments,
            phase_seed,
            kepler_tolerance: self.kepler_tolerance,
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(config_dir.join(CONFIG_FILE_NAME), serialized)
            .map_err(ConfigError::WriteError)
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE_NAME))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        ron::from_str(&contents).map_err(ConfigError::ParseError)
    }
}
