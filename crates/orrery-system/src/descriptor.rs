//! Authored body descriptors, in source units, as read from manifests or
//! produced by minor-body ingestion.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Closed set of body kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyKind {
    /// The central body. Exactly one per system.
    Star,
    /// A body orbiting the star.
    Planet,
    /// A body orbiting a planet.
    Moon,
    /// A flat ring attached to a planet.
    Ring,
    /// A minor body from the ingested dataset.
    Asteroid,
}

/// Axis a body rotates about in its own frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpinAxis {
    /// Local +Y, through the poles.
    Polar,
    /// Local +Z, the normal of a ring's plane.
    Normal,
}

impl SpinAxis {
    /// Unit vector of this axis in the body's local frame.
    pub fn axis(self) -> DVec3 {
        match self {
            Self::Polar => DVec3::Y,
            Self::Normal => DVec3::Z,
        }
    }
}

impl BodyKind {
    /// Spin axis policy for this kind.
    pub fn spin_axis(self) -> SpinAxis {
        match self {
            Self::Ring => SpinAxis::Normal,
            Self::Star | Self::Planet | Self::Moon | Self::Asteroid => SpinAxis::Polar,
        }
    }
}

/// Orbital period of a descriptor, in days.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum OrbitalPeriod {
    /// Explicit period in days.
    Days(f64),
    /// Tidally locked: the period is the body's day length expressed as a
    /// multiple of its parent's day length.
    TidallyLocked,
}

impl Default for OrbitalPeriod {
    fn default() -> Self {
        Self::Days(0.0)
    }
}

/// A labelled point on a body's surface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    /// Display text.
    pub name: String,
    /// Latitude in degrees, north positive.
    pub latitude: f64,
    /// Longitude in degrees, east positive.
    pub longitude: f64,
}

impl PointOfInterest {
    /// Point on a sphere of `radius` in the body's unrotated local frame (+Y up).
    pub fn surface_position(&self, radius: f64) -> DVec3 {
        let lat = self.latitude.to_radians();
        let lon = self.longitude.to_radians();
        DVec3::new(
            radius * lat.cos() * lon.cos(),
            radius * lat.sin(),
            -radius * lat.cos() * lon.sin(),
        )
    }
}

/// One body as authored. Distances are in AU-like source units, periods in
/// days, day length in hours, and angles in degrees.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BodyDescriptor {
    /// Unique, case-sensitive name.
    pub name: String,
    /// Body kind.
    pub kind: BodyKind,
    /// Name of the body this one orbits. `None` only for the star.
    #[serde(default)]
    pub parent: Option<String>,
    /// Display radius in scene units.
    #[serde(default)]
    pub radius: f64,
    /// Orbital period.
    #[serde(default)]
    pub period: OrbitalPeriod,
    /// Day length in hours. Zero disables self-rotation.
    #[serde(default)]
    pub day_length: f64,
    /// Orbit eccentricity.
    #[serde(default)]
    pub eccentricity: f64,
    /// Semi-major axis in source units.
    #[serde(default)]
    pub semi_major_axis: f64,
    /// Inclination in degrees.
    #[serde(default)]
    pub inclination: f64,
    /// Longitude of ascending node in degrees.
    #[serde(default)]
    pub longitude_ascending_node: f64,
    /// Axial tilt in degrees.
    #[serde(default)]
    pub tilt: f64,
    /// Initial mean anomaly in radians. Drawn from the build seed when absent.
    #[serde(default)]
    pub phase_offset: Option<f64>,
    /// Surface labels.
    #[serde(default)]
    pub labels: Vec<PointOfInterest>,
    /// Whether the camera may navigate to this body.
    #[serde(default)]
    pub traversable: bool,
}

impl BodyDescriptor {
    /// A descriptor with the given identity and every orbital field zeroed.
    pub fn new(name: impl Into<String>, kind: BodyKind, parent: Option<&str>) -> Self {
        Self {
            name: name.into(),
            kind,
            parent: parent.map(str::to_string),
            radius: 1.0,
            period: OrbitalPeriod::default(),
            day_length: 0.0,
            eccentricity: 0.0,
            semi_major_axis: 0.0,
            inclination: 0.0,
            longitude_ascending_node: 0.0,
            tilt: 0.0,
            phase_offset: None,
            labels: Vec::new(),
            traversable: false,
        }
    }
}
