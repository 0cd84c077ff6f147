//! Orbital elements for simplified Keplerian motion.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::OrbitError;

/// Orbit and spin parameters of a single body, in scene units.
///
/// Elements are validated once via [`OrbitalElements::validated`] and never
/// mutated afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    /// Eccentricity in [0, 1). 0 = circular orbit.
    pub eccentricity: f64,
    /// Semi-major axis in scene distance units.
    pub semi_major_axis: f64,
    /// Orbital period in scene time units.
    pub orbital_period: f64,
    /// Inclination in radians, applied as a rotation about the x axis.
    pub inclination: f64,
    /// Longitude of ascending node in radians, applied about the orbit normal
    /// after inclination.
    pub longitude_ascending_node: f64,
    /// Day length. Zero means the body does not rotate.
    pub spin_period: f64,
    /// Axial tilt in radians.
    pub axial_tilt: f64,
    /// Mean anomaly at `t = 0`, in radians.
    pub phase_offset: f64,
}

impl OrbitalElements {
    /// Elements for a body that sits at the origin of its frame and only spins.
    pub fn stationary(spin_period: f64, axial_tilt: f64) -> Self {
        Self {
            eccentricity: 0.0,
            semi_major_axis: 0.0,
            orbital_period: f64::INFINITY,
            inclination: 0.0,
            longitude_ascending_node: 0.0,
            spin_period,
            axial_tilt,
            phase_offset: 0.0,
        }
    }

    /// Returns `true` for elements built by [`OrbitalElements::stationary`].
    pub fn is_stationary(&self) -> bool {
        self.semi_major_axis == 0.0 && self.orbital_period.is_infinite()
    }

    /// Checks that the elements describe a closed, non-degenerate orbit.
    ///
    /// # Errors
    ///
    /// Returns [`OrbitError::InvalidElements`] for an eccentricity outside
    /// `[0, 1)`, a non-positive period or semi-major axis, a negative spin
    /// period, or any non-finite angle.
    pub fn validated(self) -> Result<Self, OrbitError> {
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(OrbitError::invalid(format!(
                "eccentricity {} outside [0, 1)",
                self.eccentricity
            )));
        }
        if !(self.orbital_period.is_finite() && self.orbital_period > 0.0) {
            return Err(OrbitError::invalid(format!(
                "orbital period {} must be positive",
                self.orbital_period
            )));
        }
        if !(self.semi_major_axis.is_finite() && self.semi_major_axis > 0.0) {
            return Err(OrbitError::invalid(format!(
                "semi-major axis {} must be positive",
                self.semi_major_axis
            )));
        }
        if !(self.spin_period.is_finite() && self.spin_period >= 0.0) {
            return Err(OrbitError::invalid(format!(
                "spin period {} must be zero or positive",
                self.spin_period
            )));
        }
        let angles = [
            self.inclination,
            self.longitude_ascending_node,
            self.axial_tilt,
            self.phase_offset,
        ];
        if angles.iter().any(|a| !a.is_finite()) {
            return Err(OrbitError::invalid("angles must be finite"));
        }
        Ok(self)
    }

    /// Semi-latus rectum `a(1 - e^2)`.
    pub fn semi_latus_rectum(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity * self.eccentricity)
    }

    /// Closest approach to the focus.
    pub fn periapsis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Farthest distance from the focus.
    pub fn apoapsis(&self) -> f64 {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    /// Rotate an in-plane point into the parent frame using this orbit's
    /// inclination and ascending node.
    pub fn orient(&self, x: f64, z: f64) -> DVec3 {
        orient(x, z, self.inclination, self.longitude_ascending_node)
    }
}

/// Rotate a point `(x, 0, z)` of the orbital plane into the parent frame.
///
/// Inclination is applied first as a rotation about the x axis, then the
/// ascending node rotates the tilted plane about the normal.
pub fn orient(x: f64, z: f64, inclination: f64, longitude_ascending_node: f64) -> DVec3 {
    let y = 0.0;
    let (sin_i, cos_i) = inclination.sin_cos();
    let (sin_o, cos_o) = longitude_ascending_node.sin_cos();

    let z_inclined = z * cos_i - y * sin_i;
    let y_inclined = z * sin_i + y * cos_i;

    let x_rotated = x * cos_o - z_inclined * sin_o;
    let z_rotated = x * sin_o + z_inclined * cos_o;

    DVec3::new(x_rotated, y_inclined, z_rotated)
}
