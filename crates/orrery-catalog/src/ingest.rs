//! Minor-body ingestion: filter raw dataset records and derive the fields the
//! body model needs.

use orrery_system::{BodyDescriptor, BodyKind, OrbitalPeriod};
use tracing::{debug, info};

use crate::sbdb::RawAsteroidRecord;

/// Display radius floor, so tiny bodies never produce degenerate geometry.
pub const MIN_ASTEROID_RADIUS: f64 = 0.1;

/// Parent assigned to every ingested body.
pub const DEFAULT_ROOT_NAME: &str = "Sun";

/// Ingestion settings.
#[derive(Clone, Debug, PartialEq)]
pub struct IngestOptions {
    /// Name of the star the minor bodies orbit.
    pub root: String,
    /// Keep at most this many accepted records.
    pub limit: Option<usize>,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            root: DEFAULT_ROOT_NAME.to_string(),
            limit: None,
        }
    }
}

/// Normalized descriptors plus a count of dropped records per reason.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IngestReport {
    /// Accepted bodies, in dataset order.
    pub descriptors: Vec<BodyDescriptor>,
    /// Records without a diameter.
    pub missing_diameter: usize,
    /// Records with a diameter but no rotation period.
    pub missing_rotation: usize,
    /// Records whose orbit is not a closed ellipse, or has non-finite values.
    pub unbound: usize,
    /// Records with a negative or non-finite rotation period.
    pub invalid_rotation: usize,
}

impl IngestReport {
    /// Total records dropped for any reason.
    pub fn skipped(&self) -> usize {
        self.missing_diameter + self.missing_rotation + self.unbound + self.invalid_rotation
    }
}

/// Empirical log fit from diameter (km) to display radius, floored at
/// [`MIN_ASTEROID_RADIUS`].
///
/// The fit only turns positive above roughly 1806 km, so in practice nearly
/// every catalogued asteroid gets the floor.
pub fn derived_radius(diameter: f64) -> f64 {
    let radius = 0.3257 * (diameter / 2.0).ln() - 2.2167;
    if radius > 0.0 {
        radius
    } else {
        MIN_ASTEROID_RADIUS
    }
}

/// Visual compression of the belt: `a * 1.1629 * a^-0.156`.
pub fn scaled_semi_major_axis(a: f64) -> f64 {
    a * (1.1629 * a.powf(-0.156))
}

/// Turn raw dataset records into descriptors attached to the root star.
///
/// Records missing a diameter or rotation period are dropped and counted,
/// as are records whose orbit or spin the body model cannot represent.
pub fn normalize(records: &[RawAsteroidRecord], options: &IngestOptions) -> IngestReport {
    let mut report = IngestReport::default();

    for record in records {
        if options
            .limit
            .is_some_and(|limit| report.descriptors.len() >= limit)
        {
            break;
        }

        let Some(diameter) = record.diameter else {
            report.missing_diameter += 1;
            continue;
        };
        let Some(rot_per) = record.rot_per else {
            report.missing_rotation += 1;
            continue;
        };
        if !(rot_per.is_finite() && rot_per >= 0.0) {
            debug!(
                name = %record.full_name.trim(),
                rot_per,
                "dropping invalid rotation period"
            );
            report.invalid_rotation += 1;
            continue;
        }
        if !is_bound(record) || !diameter.is_finite() {
            debug!(
                name = %record.full_name.trim(),
                e = record.e,
                a = record.a,
                "dropping unbound orbit"
            );
            report.unbound += 1;
            continue;
        }

        report.descriptors.push(BodyDescriptor {
            radius: derived_radius(diameter),
            period: OrbitalPeriod::Days(record.per),
            day_length: rot_per,
            eccentricity: record.e,
            semi_major_axis: scaled_semi_major_axis(record.a),
            inclination: record.i,
            longitude_ascending_node: record.om,
            tilt: 0.0,
            traversable: true,
            ..BodyDescriptor::new(
                record.full_name.trim(),
                BodyKind::Asteroid,
                Some(options.root.as_str()),
            )
        });
    }

    info!(
        accepted = report.descriptors.len(),
        missing_diameter = report.missing_diameter,
        missing_rotation = report.missing_rotation,
        unbound = report.unbound,
        invalid_rotation = report.invalid_rotation,
        "ingested minor bodies"
    );
    report
}

fn is_bound(record: &RawAsteroidRecord) -> bool {
    (0.0..1.0).contains(&record.e)
        && record.a.is_finite()
        && record.a > 0.0
        && record.per.is_finite()
        && record.per > 0.0
        && record.i.is_finite()
        && record.om.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_system::{BodyRegistry, BuildOptions};

    fn record(name: &str, diameter: Option<f64>, rot_per: Option<f64>) -> RawAsteroidRecord {
        RawAsteroidRecord {
            full_name: name.to_string(),
            diameter,
            rot_per,
            e: 0.0785,
            a: 2.767,
            i: 10.59,
            om: 80.25,
            per: 1681.6,
        }
    }

    #[test]
    fn test_null_diameter_dropped() {
        let report = normalize(
            &[
                record("A", None, Some(5.0)),
                record("B", Some(939.4), Some(9.07)),
            ],
            &IngestOptions::default(),
        );
        assert_eq!(report.descriptors.len(), 1);
        assert_eq!(report.descriptors[0].name, "B");
        assert_eq!(report.missing_diameter, 1);
        assert_eq!(report.skipped(), 1);
    }

    #[test]
    fn test_null_rotation_dropped() {
        let report = normalize(&[record("A", Some(10.0), None)], &IngestOptions::default());
        assert!(report.descriptors.is_empty());
        assert_eq!(report.missing_rotation, 1);
    }

    #[test]
    fn test_small_diameter_clamped() {
        let report = normalize(
            &[record("Small", Some(10.0), Some(24.0))],
            &IngestOptions::default(),
        );
        let desc = &report.descriptors[0];
        // 0.3257 * ln(5) - 2.2167 is negative.
        assert_eq!(desc.radius, MIN_ASTEROID_RADIUS);
        assert_eq!(desc.day_length, 24.0);
    }

    #[test]
    fn test_large_diameter_uses_log_fit() {
        let r = derived_radius(5000.0);
        let expected = 0.3257 * (2500.0f64).ln() - 2.2167;
        assert!((r - expected).abs() < 1e-12);
        assert!(r > MIN_ASTEROID_RADIUS);
    }

    #[test]
    fn test_ceres_is_clamped() {
        // Below ~1806 km the fit is negative.
        assert_eq!(derived_radius(939.4), MIN_ASTEROID_RADIUS);
        assert!(derived_radius(1800.0) <= MIN_ASTEROID_RADIUS);
        assert!(derived_radius(1820.0) > 0.0);
    }

    #[test]
    fn test_semi_major_axis_fit() {
        assert!((scaled_semi_major_axis(1.0) - 1.1629).abs() < 1e-12);
        let a = 2.767;
        assert!((scaled_semi_major_axis(a) - a * 1.1629 * a.powf(-0.156)).abs() < 1e-12);
    }

    #[test]
    fn test_passthrough_and_attachment() {
        let report = normalize(
            &[record("     1 Ceres (A801 AA)  ", Some(939.4), Some(9.07))],
            &IngestOptions {
                root: "Sol".to_string(),
                limit: None,
            },
        );
        let desc = &report.descriptors[0];
        assert_eq!(desc.name, "1 Ceres (A801 AA)");
        assert_eq!(desc.parent.as_deref(), Some("Sol"));
        assert_eq!(desc.kind, BodyKind::Asteroid);
        assert!(desc.traversable);
        assert_eq!(desc.eccentricity, 0.0785);
        assert_eq!(desc.inclination, 10.59);
        assert_eq!(desc.longitude_ascending_node, 80.25);
        assert_eq!(desc.period, OrbitalPeriod::Days(1681.6));
        assert_eq!(desc.tilt, 0.0);
        assert_eq!(desc.phase_offset, None);
    }

    #[test]
    fn test_unbound_orbit_dropped() {
        let mut hyperbolic = record("Oumuamua", Some(0.2), Some(7.3));
        hyperbolic.e = 1.2;
        let report = normalize(&[hyperbolic], &IngestOptions::default());
        assert!(report.descriptors.is_empty());
        assert_eq!(report.unbound, 1);
    }

    #[test]
    fn test_limit_counts_accepted_records() {
        let records = [
            record("A", None, None),
            record("B", Some(100.0), Some(5.0)),
            record("C", Some(100.0), Some(5.0)),
            record("D", Some(100.0), Some(5.0)),
        ];
        let report = normalize(
            &records,
            &IngestOptions {
                limit: Some(2),
                ..IngestOptions::default()
            },
        );
        let names: Vec<&str> = report.descriptors.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["B", "C"]);
        assert_eq!(report.missing_diameter, 1);
    }

    #[test]
    fn test_negative_rotation_dropped_before_build() {
        let sun = BodyDescriptor {
            day_length: 609.12,
            ..BodyDescriptor::new(DEFAULT_ROOT_NAME, BodyKind::Star, None)
        };
        let records = [
            record("Retro", Some(100.0), Some(-3.0)),
            record("Fine", Some(100.0), Some(5.0)),
        ];
        let report = normalize(&records, &IngestOptions::default());
        assert_eq!(report.invalid_rotation, 1);
        assert_eq!(report.skipped(), 1);
        assert_eq!(report.descriptors.len(), 1);

        let mut descriptors = vec![sun];
        descriptors.extend(report.descriptors);
        let registry = BodyRegistry::build(&descriptors, &BuildOptions::default()).unwrap();
        assert!(registry.find("Fine").is_some());
        assert!(registry.find("Retro").is_none());
    }
}
