//! Random location fixtures for tests and benchmarks.

use std::f64::consts::PI;

use rand::Rng;
use uuid::Uuid;

use crate::config::EARTH_RADIUS_METERS;
use crate::location::{Coordinate, Location};

/// Generates `capacity` locations scattered uniformly (by area) within
/// `radius_m` meters of `center`.
///
/// Ids are random v4 UUIDs; names are `Building 0`, `Building 1`, ...
pub fn generate_locations_near(center: &Coordinate, radius_m: f64, capacity: usize) -> Vec<Location> {
    let mut rng = rand::thread_rng();
    (0..capacity)
        .map(|i| {
            let d = radius_m * rng.gen::<f64>().sqrt();
            let theta = rng.gen_range(0.0..360.0);
            Location::new(Uuid::new_v4().to_string(), destination(center, d, theta))
                .with_name(format!("Building {}", i))
                .with_category("Generated")
        })
        .collect()
}

/// Point reached by travelling `distance_m` from `origin` along the
/// initial bearing `bearing_deg`, on a sphere.
pub fn destination(origin: &Coordinate, distance_m: f64, bearing_deg: f64) -> Coordinate {
    let delta = distance_m / EARTH_RADIUS_METERS;
    let theta = bearing_deg.to_radians();
    let phi_1 = origin.latitude.to_radians();
    let lambda_1 = origin.longitude.to_radians();

    let phi_2 = (phi_1.sin() * delta.cos() + phi_1.cos() * delta.sin() * theta.cos()).asin();
    let lambda_2 = lambda_1
        + (theta.sin() * delta.sin() * phi_1.cos()).atan2(delta.cos() - phi_1.sin() * phi_2.sin());

    // wrap into [-180, 180)
    let longitude = (lambda_2.to_degrees() + 540.0) % 360.0 - 180.0;
    Coordinate::new(phi_2.to_degrees(), longitude)
}

#[cfg(test)]
mod generator_tests {
    use super::*;
    use crate::haversine;
    use approx::assert_relative_eq;
    use std::collections::HashSet;

    const CAMPUS: Coordinate = Coordinate::new(6.8905, 3.7200);

    #[test]
    fn test_generated_within_radius() {
        let locations = generate_locations_near(&CAMPUS, 1000.0, 200);
        assert_eq!(locations.len(), 200);
        for location in &locations {
            assert!(location.validate().is_ok());
            // allow for float error at the rim
            assert!(haversine::distance(&CAMPUS, location) <= 1000.0 + 1e-6);
        }
    }

    #[test]
    fn test_generated_ids_unique() {
        let locations = generate_locations_near(&CAMPUS, 500.0, 100);
        let ids: HashSet<_> = locations.iter().map(|l| l.id.clone()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_destination_round_trip() {
        let target = destination(&CAMPUS, 750.0, 45.0);
        assert_relative_eq!(haversine::distance(&CAMPUS, &target), 750.0, max_relative = 1e-9);
        assert_relative_eq!(haversine::bearing(&CAMPUS, &target), 45.0, epsilon = 1e-6);
    }

    #[test]
    fn test_destination_wraps_antimeridian() {
        let target = destination(&Coordinate::new(0.0, 179.9), 50_000.0, 90.0);
        assert!(target.longitude < 0.0);
        assert!(target.validate().is_ok());
    }
}
