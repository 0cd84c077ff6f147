//! Body catalogs: hand-authored planet manifests (RON) and minor-body
//! ingestion from JPL Small-Body Database exports (JSON).

mod error;
mod ingest;
mod manifest;
mod sbdb;

pub use error::CatalogError;
pub use ingest::{
    DEFAULT_ROOT_NAME, IngestOptions, IngestReport, MIN_ASTEROID_RADIUS, derived_radius, normalize,
    scaled_semi_major_axis,
};
pub use manifest::{PlanetManifest, load_planet_manifest, merge, parse_planet_manifest};
pub use sbdb::{RawAsteroidRecord, load_sbdb_json, parse_sbdb_json};
