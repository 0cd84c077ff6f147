//! Hand-authored planet manifest in RON.

use std::path::Path;

use orrery_system::BodyDescriptor;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::CatalogError;

/// Top-level RON manifest: an ordered list of body descriptors.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanetManifest {
    /// Bodies in authoring order.
    pub bodies: Vec<BodyDescriptor>,
}

/// Load a planet manifest from disk.
///
/// # Errors
///
/// Returns [`CatalogError`] on I/O or parse failures.
pub fn load_planet_manifest(path: &Path) -> Result<PlanetManifest, CatalogError> {
    let contents = std::fs::read_to_string(path)?;
    let manifest = parse_planet_manifest(&contents)?;
    info!(path = %path.display(), bodies = manifest.bodies.len(), "loaded planet manifest");
    Ok(manifest)
}

/// Parse a planet manifest from a RON string.
///
/// # Errors
///
/// Returns [`CatalogError::Ron`] for invalid RON.
pub fn parse_planet_manifest(ron_str: &str) -> Result<PlanetManifest, CatalogError> {
    Ok(ron::from_str(ron_str)?)
}

/// Hand-authored bodies first, ingested bodies after.
pub fn merge(planets: PlanetManifest, minor_bodies: Vec<BodyDescriptor>) -> Vec<BodyDescriptor> {
    let mut all = planets.bodies;
    all.extend(minor_bodies);
    all
}
