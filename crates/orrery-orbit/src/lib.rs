//! Simplified Keplerian orbital mechanics: orbital elements, the Kepler solver,
//! per-frame position propagation, and static orbit path sampling.
//!
//! Orbits are fixed ellipses around the parent body's focus. Every position
//! returned by this crate is expressed in the parent's local frame; composing
//! ancestor frames is left to the scene graph that consumes it.

mod elements;
mod error;
mod kepler;
mod path;
mod propagate;

pub use elements::{OrbitalElements, orient};
pub use error::OrbitError;
pub use kepler::{
    DEFAULT_KEPLER_TOLERANCE, MAX_KEPLER_ITERATIONS, solve_eccentric_anomaly,
    solve_eccentric_anomaly_with_tolerance, true_anomaly,
};
pub use path::{DEFAULT_PATH_SEGMENTS, OrbitPath, sample_path};
pub use propagate::{
    BodyState, mean_anomaly, position, position_with_tolerance, propagate, spin_angle,
};
