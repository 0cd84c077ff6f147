//! Conversion from authored source units (AU, days, degrees) into scene units.

use serde::{Deserialize, Serialize};

/// Scene distance units per astronomical unit.
pub const DEFAULT_DISTANCE_SCALE: f64 = 10.0;

/// Days of orbital period per scene time unit. One sidereal year maps to ten units.
pub const DEFAULT_DAYS_PER_TIME_UNIT: f64 = 365.26 / 10.0;

/// Spin radians per elapsed time unit per hour of day length.
/// One elapsed second advances a body's rotation by eight simulated hours.
pub const DEFAULT_SPIN_TIME_FACTOR: f64 = 8.0 * std::f64::consts::TAU;

/// Fixed scale constants applied once when bodies are constructed.
///
/// These are artistic, not physical. Tests are free to pick convenient values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneScale {
    /// Multiplier from source semi-major axis to scene distance.
    pub distance_scale: f64,
    /// Divisor from source period (days) to scene time.
    pub days_per_time_unit: f64,
    /// See [`DEFAULT_SPIN_TIME_FACTOR`].
    pub spin_time_factor: f64,
}

impl Default for SceneScale {
    fn default() -> Self {
        Self {
            distance_scale: DEFAULT_DISTANCE_SCALE,
            days_per_time_unit: DEFAULT_DAYS_PER_TIME_UNIT,
            spin_time_factor: DEFAULT_SPIN_TIME_FACTOR,
        }
    }
}

impl SceneScale {
    /// Identity scale: source units pass through and spin uses `2pi` per unit.
    pub fn unit() -> Self {
        Self {
            distance_scale: 1.0,
            days_per_time_unit: 1.0,
            spin_time_factor: std::f64::consts::TAU,
        }
    }

    /// Source semi-major axis to scene distance.
    pub fn distance(&self, source: f64) -> f64 {
        source * self.distance_scale
    }

    /// Source period in days to scene time.
    pub fn period(&self, days: f64) -> f64 {
        days / self.days_per_time_unit
    }
}
