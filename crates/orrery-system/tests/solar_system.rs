use glam::DVec3;
use orrery_system::{
    BodyDescriptor, BodyKind, BodyRegistry, BuildOptions, OrbitalPeriod, SceneScale,
    SimulationClock,
};

fn system() -> Vec<BodyDescriptor> {
    vec![
        BodyDescriptor {
            radius: 5.0,
            day_length: 609.12,
            traversable: true,
            ..BodyDescriptor::new("Sun", BodyKind::Star, None)
        },
        BodyDescriptor {
            radius: 1.0,
            period: OrbitalPeriod::Days(365.26),
            day_length: 24.0,
            eccentricity: 0.0167,
            semi_major_axis: 1.25,
            tilt: 23.44,
            phase_offset: Some(0.0),
            traversable: true,
            ..BodyDescriptor::new("Earth", BodyKind::Planet, Some("Sun"))
        },
        BodyDescriptor {
            radius: 0.27,
            period: OrbitalPeriod::TidallyLocked,
            day_length: 655.72,
            eccentricity: 0.0549,
            semi_major_axis: 0.25,
            inclination: 5.145,
            phase_offset: Some(0.0),
            traversable: true,
            ..BodyDescriptor::new("Moon", BodyKind::Moon, Some("Earth"))
        },
        BodyDescriptor {
            radius: 9.0,
            period: OrbitalPeriod::Days(10759.22),
            day_length: 10.7,
            eccentricity: 0.0565,
            semi_major_axis: 9.58,
            inclination: 2.485,
            longitude_ascending_node: 113.665,
            tilt: 26.73,
            traversable: true,
            ..BodyDescriptor::new("Saturn", BodyKind::Planet, Some("Sun"))
        },
        BodyDescriptor {
            period: OrbitalPeriod::TidallyLocked,
            day_length: 10.7,
            semi_major_axis: 0.0001,
            tilt: 90.0,
            ..BodyDescriptor::new("Saturn Ring", BodyKind::Ring, Some("Saturn"))
        },
    ]
}

#[test]
fn test_earth_follows_example_orbit() {
    // With the default scale Earth is at a = 12.5 with a period of 10 units.
    let mut registry = BodyRegistry::build(&system(), &BuildOptions::default()).unwrap();

    registry.tick(0.0);
    let start = registry.find("Earth").unwrap().position();
    assert!((start - DVec3::new(12.29125, 0.0, 0.0)).length() < 1e-4, "{start}");

    registry.tick(5.0);
    let half = registry.find("Earth").unwrap().position();
    assert!((half - DVec3::new(-12.70875, 0.0, 0.0)).length() < 1e-3, "{half}");
}

#[test]
fn test_hierarchy_and_derived_periods() {
    let registry = BodyRegistry::build(&system(), &BuildOptions::default()).unwrap();

    let moon = registry.find("Moon").unwrap();
    let scale = SceneScale::default();
    assert!((moon.elements().orbital_period - scale.period(655.72 / 24.0)).abs() < 1e-12);

    // A ring locked to its own planet's day completes one orbit per day.
    let ring = registry.find("Saturn Ring").unwrap();
    assert!((ring.elements().orbital_period - scale.period(1.0)).abs() < 1e-12);
    assert!(!ring.is_traversable());

    assert_eq!(
        registry.traversable(),
        ["Sun", "Earth", "Moon", "Saturn"].map(String::from)
    );
    assert_eq!(registry.len(), 5);
}

#[test]
fn test_clock_driven_frames_are_periodic() {
    let options = BuildOptions {
        phase_seed: 99,
        path_segments: 256,
        ..BuildOptions::default()
    };
    let mut registry = BodyRegistry::build(&system(), &options).unwrap();
    let mut clock = SimulationClock::new(2.0);

    // Ten time units is one Earth year.
    for _ in 0..5 {
        let elapsed = clock.tick(1.0);
        assert!(registry.tick(elapsed).is_empty());
    }
    assert!((clock.elapsed() - 10.0).abs() < 1e-12);
    let after_year = registry.find("Earth").unwrap().position();

    registry.tick(0.0);
    let start = registry.find("Earth").unwrap().position();
    assert!((after_year - start).length() < 1e-6);

    // Every orbiting body's position lies on its precomputed path.
    for body in registry.iter().filter(|b| b.parent().is_some()) {
        let path = body.path().unwrap();
        let nearest = path
            .points()
            .iter()
            .map(|p| p.distance(body.position()))
            .fold(f64::INFINITY, f64::min);
        let a = body.elements().semi_major_axis;
        assert!(nearest < a * 0.05, "{} is {nearest} off its path", body.name());
    }
}

#[test]
fn test_reverse_playback() {
    let mut registry = BodyRegistry::build(&system(), &BuildOptions::default()).unwrap();
    let mut clock = SimulationClock::new(-1.0);
    clock.set_elapsed(2.5);

    let mut elapsed = clock.elapsed();
    while elapsed > -2.5 {
        elapsed = clock.tick(0.5);
        assert!(registry.tick(elapsed).is_empty());
    }
    let reversed = registry.find("Earth").unwrap().position();

    registry.tick(7.5);
    let forward = registry.find("Earth").unwrap().position();
    assert!((reversed - forward).length() < 1e-6);
}
