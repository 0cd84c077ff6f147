//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Orrery command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "orrery", about = "Headless solar system simulation")]
pub struct CliArgs {
    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// RON manifest of planets, moons and rings.
    #[arg(long)]
    pub planets: Option<PathBuf>,

    /// SBDB JSON export of minor bodies.
    #[arg(long)]
    pub asteroids: Option<PathBuf>,

    /// Playback speed multiplier (negative runs backwards).
    #[arg(long, allow_negative_numbers = true)]
    pub speed: Option<f64>,

    /// Number of frames to simulate.
    #[arg(long)]
    pub frames: Option<u32>,

    /// Phase offset seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Segments per orbit path.
    #[arg(long)]
    pub segments: Option<u32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref planets) = args.planets {
            self.catalog.planets = planets.clone();
        }
        if let Some(ref asteroids) = args.asteroids {
            self.catalog.asteroids = Some(asteroids.clone());
        }
        if let Some(speed) = args.speed {
            self.simulation.speed = speed;
        }
        if let Some(frames) = args.frames {
            self.simulation.frames = frames;
        }
        if let Some(seed) = args.seed {
            self.simulation.phase_seed = Some(seed);
        }
        if let Some(segments) = args.segments {
            self.simulation.path_segments = segments;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
