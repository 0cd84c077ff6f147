//! Body registry: hierarchy resolution, dependent periods, and per-frame tick.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::f64::consts::TAU;

use orrery_orbit::{
    BodyState, DEFAULT_KEPLER_TOLERANCE, DEFAULT_PATH_SEGMENTS, OrbitError, OrbitPath,
    OrbitalElements, propagate,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::body::{BodyId, CelestialBody};
use crate::descriptor::{BodyDescriptor, OrbitalPeriod};
use crate::scale::SceneScale;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Fatal errors while building the hierarchy.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Two descriptors share a name.
    #[error("duplicate body name: {0}")]
    DuplicateName(String),

    /// A descriptor names a parent that no descriptor defines.
    #[error("body {body} orbits unknown parent {parent}")]
    UnresolvedParent {
        /// The orphaned body.
        body: String,
        /// The missing parent name.
        parent: String,
    },

    /// The parent relation contains a cycle.
    #[error("cyclic parent chain among: {}", .0.join(", "))]
    CyclicDependency(Vec<String>),

    /// No descriptors, so no root.
    #[error("no root body")]
    MissingRoot,

    /// More than one parentless descriptor.
    #[error("multiple root bodies: {}", .0.join(", "))]
    MultipleRoots(Vec<String>),

    /// A descriptor's resolved elements fail validation.
    #[error("body {body}: {source}")]
    InvalidElements {
        /// The offending body.
        body: String,
        /// The validation failure.
        #[source]
        source: OrbitError,
    },
}

/// A body whose propagation failed during a tick. It keeps its previous state.
#[derive(Debug, Clone, PartialEq)]
pub struct TickFailure {
    pub body: BodyId,
    pub error: OrbitError,
}

// ---------------------------------------------------------------------------
// BuildOptions
// ---------------------------------------------------------------------------

/// Parameters fixed at build time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BuildOptions {
    /// Source-to-scene unit conversion.
    pub scale: SceneScale,
    /// Segments per orbit path.
    pub path_segments: u32,
    /// Seed for phase offsets of descriptors that give none.
    pub phase_seed: u64,
    /// Kepler solver tolerance used by [`BodyRegistry::tick`].
    pub kepler_tolerance: f64,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            scale: SceneScale::default(),
            path_segments: DEFAULT_PATH_SEGMENTS,
            phase_seed: 0,
            kepler_tolerance: DEFAULT_KEPLER_TOLERANCE,
        }
    }
}

// ---------------------------------------------------------------------------
// BodyRegistry
// ---------------------------------------------------------------------------

/// Owns every body of a system, stored so that parents precede children.
///
/// Structure is immutable after [`BodyRegistry::build`].
pub struct BodyRegistry {
    bodies: Vec<CelestialBody>,
    name_to_id: HashMap<String, BodyId>,
    root: BodyId,
    traversable: Vec<String>,
    spin_time_factor: f64,
    kepler_tolerance: f64,
}

impl BodyRegistry {
    /// Resolve the hierarchy and construct every body.
    ///
    /// Descriptors may appear in any order; bodies are built parents-first,
    /// otherwise preserving input order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] for duplicate names, unknown parents,
    /// cycles, a root count other than one, or invalid elements.
    pub fn build(
        descriptors: &[BodyDescriptor],
        options: &BuildOptions,
    ) -> Result<Self, RegistryError> {
        let mut index_of: HashMap<&str, usize> = HashMap::with_capacity(descriptors.len());
        for (i, desc) in descriptors.iter().enumerate() {
            if index_of.insert(desc.name.as_str(), i).is_some() {
                return Err(RegistryError::DuplicateName(desc.name.clone()));
            }
        }

        let parent_index = descriptors
            .iter()
            .map(|desc| match &desc.parent {
                None => Ok(None),
                Some(parent) => index_of.get(parent.as_str()).map(|&p| Some(p)).ok_or_else(
                    || RegistryError::UnresolvedParent {
                        body: desc.name.clone(),
                        parent: parent.clone(),
                    },
                ),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let order = topological_order(descriptors, &parent_index)?;

        let roots: Vec<usize> = (0..descriptors.len())
            .filter(|&i| parent_index[i].is_none())
            .collect();
        match roots.as_slice() {
            [] => return Err(RegistryError::MissingRoot),
            [_] => {}
            _ => {
                return Err(RegistryError::MultipleRoots(
                    roots.iter().map(|&i| descriptors[i].name.clone()).collect(),
                ));
            }
        }

        let mut rng = ChaCha8Rng::seed_from_u64(options.phase_seed);
        let mut bodies: Vec<CelestialBody> = Vec::with_capacity(descriptors.len());
        let mut name_to_id: HashMap<String, BodyId> = HashMap::with_capacity(descriptors.len());

        for &i in &order {
            let desc = &descriptors[i];
            let id = BodyId(bodies.len());
            let invalid = |source: OrbitError| RegistryError::InvalidElements {
                body: desc.name.clone(),
                source,
            };

            let (parent, elements, path) = match parent_index[i] {
                None => (None, root_elements(desc).map_err(invalid)?, None),
                Some(p) => {
                    let parent_desc = &descriptors[p];
                    let parent_id = name_to_id[parent_desc.name.as_str()];
                    let period_days = resolve_period(desc, parent_desc).map_err(invalid)?;
                    let phase_offset = desc
                        .phase_offset
                        .unwrap_or_else(|| rng.random_range(0.0..TAU));

                    let elements = OrbitalElements {
                        eccentricity: desc.eccentricity,
                        semi_major_axis: options.scale.distance(desc.semi_major_axis),
                        orbital_period: options.scale.period(period_days),
                        inclination: desc.inclination.to_radians(),
                        longitude_ascending_node: desc.longitude_ascending_node.to_radians(),
                        spin_period: desc.day_length,
                        axial_tilt: desc.tilt.to_radians(),
                        phase_offset,
                    }
                    .validated()
                    .map_err(invalid)?;

                    let path = OrbitPath::new(&elements, options.path_segments).map_err(invalid)?;
                    bodies[parent_id.index()].children.push(id);
                    (Some(parent_id), elements, Some(path))
                }
            };

            bodies.push(CelestialBody {
                id,
                name: desc.name.clone(),
                kind: desc.kind,
                parent,
                children: Vec::new(),
                radius: desc.radius,
                elements,
                path,
                labels: desc.labels.clone(),
                traversable: desc.traversable,
                state: BodyState::default(),
            });
            name_to_id.insert(desc.name.clone(), id);
        }

        let traversable = bodies
            .iter()
            .filter(|b| b.traversable)
            .map(|b| b.name.clone())
            .collect::<Vec<_>>();

        info!(
            bodies = bodies.len(),
            traversable = traversable.len(),
            "body registry built"
        );

        Ok(Self {
            bodies,
            name_to_id,
            root: BodyId(0),
            traversable,
            spin_time_factor: options.scale.spin_time_factor,
            kepler_tolerance: options.kepler_tolerance,
        })
    }

    /// Propagate every body to `elapsed`.
    ///
    /// Bodies are independent, so order does not matter. A body that fails
    /// keeps its last state and is reported; the rest of the frame proceeds.
    pub fn tick(&mut self, elapsed: f64) -> Vec<TickFailure> {
        let mut failures = Vec::new();
        for body in &mut self.bodies {
            match propagate(
                &body.elements,
                elapsed,
                self.spin_time_factor,
                self.kepler_tolerance,
                &body.state,
            ) {
                Ok(state) => body.state = state,
                Err(error) => {
                    warn!(body = %body.name, %error, "propagation failed, holding last state");
                    failures.push(TickFailure {
                        body: body.id,
                        error,
                    });
                }
            }
        }
        failures
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// The parentless star.
    pub fn root(&self) -> &CelestialBody {
        &self.bodies[self.root.index()]
    }

    pub fn get(&self, id: BodyId) -> Option<&CelestialBody> {
        self.bodies.get(id.index())
    }

    /// Look up a body by exact name.
    pub fn find(&self, name: &str) -> Option<&CelestialBody> {
        self.id_of(name).and_then(|id| self.get(id))
    }

    pub fn id_of(&self, name: &str) -> Option<BodyId> {
        self.name_to_id.get(name).copied()
    }

    /// Bodies in build order: every parent precedes its children.
    pub fn iter(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter()
    }

    /// Direct children of `id`, empty for unknown ids.
    pub fn children(&self, id: BodyId) -> impl Iterator<Item = &CelestialBody> {
        self.get(id)
            .map(|b| b.children.as_slice())
            .unwrap_or_default()
            .iter()
            .map(|&c| &self.bodies[c.index()])
    }

    /// Names of bodies the camera may navigate to, in build order.
    pub fn traversable(&self) -> &[String] {
        &self.traversable
    }
}

/// Period in days, deriving tidally locked periods from the parent's day length.
/// The root never orbits, so only its spin is checked.
fn root_elements(desc: &BodyDescriptor) -> Result<OrbitalElements, OrbitError> {
    if desc.period == OrbitalPeriod::TidallyLocked {
        return Err(OrbitError::InvalidElements {
            reason: "the root body has no parent to be tidally locked to".to_string(),
        });
    }
    if !(desc.day_length.is_finite() && desc.day_length >= 0.0) {
        return Err(OrbitError::InvalidElements {
            reason: format!("day length {} must be zero or positive", desc.day_length),
        });
    }
    if !desc.tilt.is_finite() {
        return Err(OrbitError::InvalidElements {
            reason: "tilt must be finite".to_string(),
        });
    }
    Ok(OrbitalElements::stationary(
        desc.day_length,
        desc.tilt.to_radians(),
    ))
}

fn resolve_period(desc: &BodyDescriptor, parent: &BodyDescriptor) -> Result<f64, OrbitError> {
    match desc.period {
        OrbitalPeriod::Days(days) => Ok(days),
        OrbitalPeriod::TidallyLocked => {
            if parent.day_length <= 0.0 {
                return Err(OrbitError::InvalidElements {
                    reason: format!(
                        "tidally locked to {}, which has no day length",
                        parent.name
                    ),
                });
            }
            let days = desc.day_length / parent.day_length;
            debug!(body = %desc.name, parent = %parent.name, days, "derived tidal-lock period");
            Ok(days)
        }
    }
}

/// Kahn's algorithm over the parent relation, always taking the lowest
/// ready input index so that an already-ordered input is left unchanged.
fn topological_order(
    descriptors: &[BodyDescriptor],
    parent_index: &[Option<usize>],
) -> Result<Vec<usize>, RegistryError> {
    let n = descriptors.len();
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (i, parent) in parent_index.iter().enumerate() {
        if let Some(p) = *parent {
            children[p].push(i);
        }
    }

    let mut ready: BinaryHeap<Reverse<usize>> = (0..n)
        .filter(|&i| parent_index[i].is_none())
        .map(Reverse)
        .collect();
    let mut placed = vec![false; n];
    let mut order = Vec::with_capacity(n);

    while let Some(Reverse(i)) = ready.pop() {
        placed[i] = true;
        order.push(i);
        ready.extend(children[i].iter().copied().map(Reverse));
    }

    if order.len() < n {
        let stuck = (0..n)
            .filter(|&i| !placed[i])
            .map(|i| descriptors[i].name.clone())
            .collect();
        return Err(RegistryError::CyclicDependency(stuck));
    }

    Ok(order)
}
