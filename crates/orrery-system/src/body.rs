//! Celestial bodies owned by the registry.

use glam::{DQuat, DVec3};
use orrery_orbit::{BodyState, OrbitPath, OrbitalElements};

use crate::descriptor::{BodyKind, PointOfInterest, SpinAxis};

/// Minimum camera distance as a multiple of body radius.
const MIN_VIEW_DISTANCE_RADII: f64 = 3.5;

/// Dense index of a body in its registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub usize);

impl BodyId {
    /// Position in the registry's body list.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A body in the hierarchy. Structure and elements are fixed after build;
/// only [`BodyState`] changes per frame.
#[derive(Clone, Debug)]
pub struct CelestialBody {
    pub(crate) id: BodyId,
    pub(crate) name: String,
    pub(crate) kind: BodyKind,
    pub(crate) parent: Option<BodyId>,
    pub(crate) children: Vec<BodyId>,
    pub(crate) radius: f64,
    pub(crate) elements: OrbitalElements,
    pub(crate) path: Option<OrbitPath>,
    pub(crate) labels: Vec<PointOfInterest>,
    pub(crate) traversable: bool,
    pub(crate) state: BodyState,
}

impl CelestialBody {
    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> BodyKind {
        self.kind
    }

    /// The body this one orbits, `None` for the root star.
    pub fn parent(&self) -> Option<BodyId> {
        self.parent
    }

    /// Direct children in build order.
    pub fn children(&self) -> &[BodyId] {
        &self.children
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Resolved elements in scene units.
    pub fn elements(&self) -> &OrbitalElements {
        &self.elements
    }

    /// Static orbit polyline. `None` for the root.
    pub fn path(&self) -> Option<&OrbitPath> {
        self.path.as_ref()
    }

    pub fn labels(&self) -> &[PointOfInterest] {
        &self.labels
    }

    pub fn is_traversable(&self) -> bool {
        self.traversable
    }

    /// State written by the last tick.
    pub fn state(&self) -> &BodyState {
        &self.state
    }

    /// Position in the parent's local frame.
    pub fn position(&self) -> DVec3 {
        self.state.position
    }

    pub fn spin_angle(&self) -> f64 {
        self.state.spin_angle
    }

    /// Closest the orbit camera may approach this body.
    pub fn min_view_distance(&self) -> f64 {
        self.radius * MIN_VIEW_DISTANCE_RADII
    }

    /// Local orientation: axial tilt about X, then spin about the kind's axis.
    pub fn orientation(&self) -> DQuat {
        let tilt = DQuat::from_rotation_x(self.elements.axial_tilt);
        let spin = match self.kind.spin_axis() {
            SpinAxis::Polar => DQuat::from_rotation_y(self.state.spin_angle),
            SpinAxis::Normal => DQuat::from_rotation_z(self.state.spin_angle),
        };
        tilt * spin
    }
}
