//! Configuration for the orrery.
//!
//! Settings persist to disk as RON, can be overridden from the command line,
//! and tolerate missing or unknown fields so older files keep loading.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{CONFIG_FILE_NAME, CatalogConfig, Config, DebugConfig, SimulationConfig};
pub use error::ConfigError;
