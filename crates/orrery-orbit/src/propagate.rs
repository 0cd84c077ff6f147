//! Per-frame position and spin propagation.

use std::f64::consts::TAU;

use glam::DVec3;

use crate::elements::OrbitalElements;
use crate::error::OrbitError;
use crate::kepler::{DEFAULT_KEPLER_TOLERANCE, solve_eccentric_anomaly_with_tolerance, true_anomaly};

/// Render-facing state of a body in its parent's local frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BodyState {
    /// Offset from the parent's origin.
    pub position: DVec3,
    /// Accumulated rotation about the body's spin axis, in radians. Not wrapped.
    pub spin_angle: f64,
}

/// Mean anomaly at `elapsed`, wrapped into `[0, 2pi)`.
///
/// Negative elapsed time is well defined and runs the orbit backwards.
///
/// # Errors
///
/// Returns [`OrbitError::InvalidElements`] for a zero or non-finite period.
pub fn mean_anomaly(elements: &OrbitalElements, elapsed: f64) -> Result<f64, OrbitError> {
    if elements.orbital_period == 0.0 || elements.orbital_period.is_nan() {
        return Err(OrbitError::invalid("orbital period must be non-zero"));
    }
    let m = TAU * elapsed / elements.orbital_period + elements.phase_offset;
    Ok(m.rem_euclid(TAU))
}

/// Position at `elapsed` with the default solver tolerance.
///
/// # Errors
///
/// See [`position_with_tolerance`].
pub fn position(elements: &OrbitalElements, elapsed: f64) -> Result<DVec3, OrbitError> {
    position_with_tolerance(elements, elapsed, DEFAULT_KEPLER_TOLERANCE)
}

/// Position at `elapsed` in the parent frame. Stationary elements stay at
/// the origin.
///
/// # Errors
///
/// Returns [`OrbitError::InvalidElements`] for a zero period and
/// [`OrbitError::NumericDivergence`] when Kepler's equation cannot be solved.
pub fn position_with_tolerance(
    elements: &OrbitalElements,
    elapsed: f64,
    tolerance: f64,
) -> Result<DVec3, OrbitError> {
    if elements.is_stationary() {
        return Ok(DVec3::ZERO);
    }

    let e = elements.eccentricity;
    let m = mean_anomaly(elements, elapsed)?;
    let e_anom = solve_eccentric_anomaly_with_tolerance(m, e, tolerance)?;
    let nu = true_anomaly(e_anom, e);

    let r = elements.semi_major_axis * (1.0 - e * e_anom.cos());
    let (sin_nu, cos_nu) = nu.sin_cos();

    Ok(elements.orient(r * cos_nu, r * sin_nu))
}

/// Spin angle at `elapsed`, or `None` for a body that does not rotate.
///
/// `time_factor` maps one unit of elapsed time onto the unit of
/// `spin_period`, including the `2pi` per revolution.
pub fn spin_angle(elements: &OrbitalElements, elapsed: f64, time_factor: f64) -> Option<f64> {
    (elements.spin_period > 0.0).then(|| elapsed * time_factor / elements.spin_period)
}

/// Advance a body to `elapsed`. Non-rotating bodies keep the previous spin angle.
///
/// # Errors
///
/// See [`position_with_tolerance`].
pub fn propagate(
    elements: &OrbitalElements,
    elapsed: f64,
    spin_time_factor: f64,
    tolerance: f64,
    previous: &BodyState,
) -> Result<BodyState, OrbitError> {
    let position = position_with_tolerance(elements, elapsed, tolerance)?;
    let spin_angle =
        spin_angle(elements, elapsed, spin_time_factor).unwrap_or(previous.spin_angle);
    Ok(BodyState {
        position,
        spin_angle,
    })
}
