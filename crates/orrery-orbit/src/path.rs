//! Static orbit path sampling for display of the orbit ellipse.

use std::f64::consts::TAU;

use glam::DVec3;

use crate::elements::OrbitalElements;
use crate::error::OrbitError;

/// Default number of line segments per orbit.
pub const DEFAULT_PATH_SEGMENTS: u32 = 1024;

/// One full revolution of an orbit as an ordered polyline in the parent frame.
///
/// Computed once; the ellipse never changes, only the body's place on it.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitPath {
    points: Vec<DVec3>,
}

impl OrbitPath {
    /// Sample `elements` into `segments + 1` points.
    ///
    /// # Errors
    ///
    /// See [`sample_path`].
    pub fn new(elements: &OrbitalElements, segments: u32) -> Result<Self, OrbitError> {
        Ok(Self {
            points: sample_path(elements, segments)?,
        })
    }

    /// Polyline vertices. The first and last coincide within float tolerance.
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Number of line segments.
    pub fn segments(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Points narrowed to `f32` for vertex upload.
    pub fn to_f32(&self) -> Vec<[f32; 3]> {
        self.points
            .iter()
            .map(|p| [p.x as f32, p.y as f32, p.z as f32])
            .collect()
    }
}

/// Sample the orbit ellipse using the polar orbit equation about the focus,
/// `r = a(1 - e^2) / (1 + e cos(theta))`.
///
/// # Errors
///
/// Returns [`OrbitError::InvalidElements`] when `segments` is zero.
pub fn sample_path(elements: &OrbitalElements, segments: u32) -> Result<Vec<DVec3>, OrbitError> {
    if segments == 0 {
        return Err(OrbitError::invalid("orbit path needs at least one segment"));
    }

    let p = elements.semi_latus_rectum();
    let e = elements.eccentricity;
    let points = (0..=segments)
        .map(|i| {
            let theta = i as f64 / segments as f64 * TAU;
            let (sin_t, cos_t) = theta.sin_cos();
            let r = p / (1.0 + e * cos_t);
            elements.orient(r * cos_t, r * sin_t)
        })
        .collect();

    Ok(points)
}
