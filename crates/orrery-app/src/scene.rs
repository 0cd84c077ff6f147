//! Scene assembly and the headless frame loop.

use glam::DVec3;
use orrery_catalog::{
    CatalogError, IngestOptions, load_planet_manifest, load_sbdb_json, merge, normalize,
};
use orrery_config::CatalogConfig;
use orrery_system::{BodyDescriptor, BodyRegistry, CelestialBody, SimulationClock};
use tracing::{debug, info, warn};

/// Planets from the manifest, followed by any ingested minor bodies.
pub fn load_descriptors(catalog: &CatalogConfig) -> Result<Vec<BodyDescriptor>, CatalogError> {
    let planets = load_planet_manifest(&catalog.planets)?;

    let minor_bodies = match &catalog.asteroids {
        Some(path) => {
            let records = load_sbdb_json(path)?;
            let report = normalize(
                &records,
                &IngestOptions {
                    root: catalog.root_name.clone(),
                    limit: catalog.asteroid_limit,
                },
            );
            if report.skipped() > 0 {
                info!(skipped = report.skipped(), "some minor bodies were left out");
            }
            report.descriptors
        }
        None => Vec::new(),
    };

    Ok(merge(planets, minor_bodies))
}

/// Sum of `body`'s position and every ancestor's position.
///
/// Only translations are composed. Ancestor tilt and spin are not applied,
/// so a moon's offset is not carried around by its planet's rotation. A
/// renderer that nests child meshes under rotating parents will place bodies
/// differently.
pub fn world_position(registry: &BodyRegistry, body: &CelestialBody) -> DVec3 {
    let mut position = body.position();
    let mut parent = body.parent();
    while let Some(id) = parent {
        let Some(p) = registry.get(id) else { break };
        position += p.position();
        parent = p.parent();
    }
    position
}

/// Totals from a headless run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunSummary {
    pub frames: u32,
    pub elapsed: f64,
    pub failures: usize,
}

/// Advance `clock` by `frame_dt` for `frames` frames, ticking the registry
/// each time.
pub fn run_frames(
    registry: &mut BodyRegistry,
    clock: &mut SimulationClock,
    frames: u32,
    frame_dt: f64,
) -> RunSummary {
    let mut summary = RunSummary::default();
    registry.tick(clock.elapsed());

    for frame in 0..frames {
        let elapsed = clock.tick(frame_dt);
        let failures = registry.tick(elapsed);
        if !failures.is_empty() {
            warn!(frame, count = failures.len(), "frame had propagation failures");
        }
        summary.failures += failures.len();
        summary.frames += 1;
    }
    summary.elapsed = clock.elapsed();

    for body in registry.iter().filter(|b| b.is_traversable()) {
        let p = world_position(registry, body);
        debug!(
            body = body.name(),
            x = p.x,
            y = p.y,
            z = p.z,
            spin = body.spin_angle(),
            "final state"
        );
    }
    summary
}
