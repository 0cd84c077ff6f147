//! Hierarchical body model: descriptors, the body registry, and the
//! simulation clock that drives it.
//!
//! The registry exclusively owns every [`CelestialBody`]. Rendering code reads
//! bodies through shared references or [`BodyId`]s and never mutates orbital
//! state; the only per-frame mutation is [`BodyRegistry::tick`].

mod body;
mod clock;
mod descriptor;
mod registry;
mod scale;

pub use body::{BodyId, CelestialBody};
pub use clock::SimulationClock;
pub use descriptor::{BodyDescriptor, BodyKind, OrbitalPeriod, PointOfInterest, SpinAxis};
pub use registry::{BodyRegistry, BuildOptions, RegistryError, TickFailure};
pub use scale::{
    DEFAULT_DAYS_PER_TIME_UNIT, DEFAULT_DISTANCE_SCALE, DEFAULT_SPIN_TIME_FACTOR, SceneScale,
};
