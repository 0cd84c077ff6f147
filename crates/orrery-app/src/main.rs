//! Headless orrery driver.
//!
//! Loads the planet manifest and an optional minor-body dataset, builds the
//! body hierarchy, and steps it with a simulation clock for a fixed number of
//! frames, logging each traversable body's final state.
//!
//! Run with: `cargo run -p orrery-app -- --asteroids assets/sbdb_sample.json`

mod error;
mod scene;

use std::path::PathBuf;

use clap::Parser;
use orrery_config::{CliArgs, Config};
use orrery_system::{BodyRegistry, SimulationClock};
use tracing::{error, info};

use crate::error::AppError;

fn main() {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(|| {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("orrery")
    });

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    orrery_log::init_logging(
        Some(&config_dir.join("logs")),
        cfg!(debug_assertions),
        Some(&config),
    );

    if let Err(e) = run(&config) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), AppError> {
    let descriptors = scene::load_descriptors(&config.catalog)?;

    let seed = config.simulation.phase_seed.unwrap_or_else(rand::random);
    info!(seed, "phase offsets seeded");

    let mut registry =
        BodyRegistry::build(&descriptors, &config.simulation.build_options(seed))?;
    let mut clock = SimulationClock::new(config.simulation.speed);

    let summary = scene::run_frames(
        &mut registry,
        &mut clock,
        config.simulation.frames,
        config.simulation.frame_dt,
    );
    info!(
        frames = summary.frames,
        elapsed = summary.elapsed,
        failures = summary.failures,
        bodies = registry.len(),
        "simulation finished"
    );
    Ok(())
}
