//! Orbit computation error types.

/// Errors produced while validating elements or propagating an orbit.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrbitError {
    /// The elements cannot describe a closed orbit.
    #[error("invalid orbital elements: {reason}")]
    InvalidElements {
        /// Which constraint was violated.
        reason: String,
    },

    /// Newton-Raphson did not reach the requested tolerance.
    #[error(
        "kepler solver diverged after {iterations} iterations (M={mean_anomaly}, e={eccentricity})"
    )]
    NumericDivergence {
        /// Mean anomaly the solver was given.
        mean_anomaly: f64,
        /// Eccentricity the solver was given.
        eccentricity: f64,
        /// Iterations spent before giving up.
        iterations: u32,
    },
}

impl OrbitError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidElements {
            reason: reason.into(),
        }
    }
}
