//! Newton-Raphson solution of Kepler's equation `E - e*sin(E) = M`.

use crate::error::OrbitError;

/// Default convergence tolerance on `|E - e*sin(E) - M|`.
pub const DEFAULT_KEPLER_TOLERANCE: f64 = 1e-6;

/// Iteration bound. Eccentricities below 0.99 converge in well under 20 steps.
pub const MAX_KEPLER_ITERATIONS: u32 = 100;

/// Solve for the eccentric anomaly with [`DEFAULT_KEPLER_TOLERANCE`].
///
/// # Errors
///
/// See [`solve_eccentric_anomaly_with_tolerance`].
pub fn solve_eccentric_anomaly(mean_anomaly: f64, eccentricity: f64) -> Result<f64, OrbitError> {
    solve_eccentric_anomaly_with_tolerance(mean_anomaly, eccentricity, DEFAULT_KEPLER_TOLERANCE)
}

/// Solve Kepler's equation for the eccentric anomaly, seeded with `E0 = M`.
///
/// # Errors
///
/// Returns [`OrbitError::NumericDivergence`] if the residual is still above
/// `tolerance` after [`MAX_KEPLER_ITERATIONS`] steps, or if any input is not
/// finite.
pub fn solve_eccentric_anomaly_with_tolerance(
    mean_anomaly: f64,
    eccentricity: f64,
    tolerance: f64,
) -> Result<f64, OrbitError> {
    let diverged = |iterations| OrbitError::NumericDivergence {
        mean_anomaly,
        eccentricity,
        iterations,
    };

    if !(mean_anomaly.is_finite() && eccentricity.is_finite()) {
        return Err(diverged(0));
    }

    // The root always lies within e of M; Newton steps that leave the
    // bracket fall back to bisection.
    let mut lo = mean_anomaly - eccentricity;
    let mut hi = mean_anomaly + eccentricity;
    let mut e_anom = mean_anomaly;
    for iteration in 0..MAX_KEPLER_ITERATIONS {
        let residual = e_anom - eccentricity * e_anom.sin() - mean_anomaly;
        if residual.abs() <= tolerance {
            return Ok(e_anom);
        }
        if residual < 0.0 {
            lo = e_anom;
        } else {
            hi = e_anom;
        }

        let derivative = 1.0 - eccentricity * e_anom.cos();
        let newton = e_anom - residual / derivative;
        e_anom = if newton > lo && newton < hi {
            newton
        } else {
            0.5 * (lo + hi)
        };
        if !e_anom.is_finite() {
            return Err(diverged(iteration + 1));
        }
    }

    let residual = e_anom - eccentricity * e_anom.sin() - mean_anomaly;
    if residual.abs() <= tolerance {
        Ok(e_anom)
    } else {
        Err(diverged(MAX_KEPLER_ITERATIONS))
    }
}

/// True anomaly from the eccentric anomaly, in (-pi, pi].
pub fn true_anomaly(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    let half = eccentric_anomaly / 2.0;
    2.0 * ((1.0 + eccentricity).sqrt() * half.sin()).atan2((1.0 - eccentricity).sqrt() * half.cos())
}
