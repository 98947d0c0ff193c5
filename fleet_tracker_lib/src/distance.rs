use serde::Serialize;

use crate::coordinate::{Coordinate, PointPair};

pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;
pub const NEAR_THRESHOLD_METERS: f64 = 100.0;

/// Result of comparing two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Proximity {
    pub distance: f64,
    pub near: bool,
}

/// Great-circle distance on a sphere, plus a "near" cut-off.
///
/// The service always uses [`ProximityEvaluator::default`], which is the earth
/// radius and a 100 m threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityEvaluator {
    radius_meters: f64,
    near_threshold_meters: f64,
}

impl Default for ProximityEvaluator {
    fn default() -> Self {
        Self::new(EARTH_RADIUS_METERS, NEAR_THRESHOLD_METERS)
    }
}

impl ProximityEvaluator {
    pub const fn new(radius_meters: f64, near_threshold_meters: f64) -> Self {
        Self {
            radius_meters,
            near_threshold_meters,
        }
    }

    /// Haversine distance in meters between `a` and `b`.
    pub fn distance(&self, a: &Coordinate, b: &Coordinate) -> f64 {
        let d_lat = (b.latitude() - a.latitude()).to_radians();
        let d_lon = (b.longitude() - a.longitude()).to_radians();

        let h = (d_lat / 2.0).sin().powi(2)
            + a.latitude().to_radians().cos() * b.latitude().to_radians().cos() * (d_lon / 2.0).sin().powi(2);
        // Rounding can push h just above 1 for antipodal points.
        let h = h.min(1.0);

        let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
        self.radius_meters * c
    }

    /// Strictly below the threshold.
    pub fn is_near(&self, distance_meters: f64) -> bool {
        distance_meters < self.near_threshold_meters
    }

    pub fn evaluate(&self, pair: &PointPair) -> Proximity {
        let distance = self.distance(pair.a(), pair.b());
        Proximity {
            distance,
            near: self.is_near(distance),
        }
    }
}

pub fn compute_distance(a: &Coordinate, b: &Coordinate) -> f64 {
    ProximityEvaluator::default().distance(a, b)
}

pub fn is_near(distance_meters: f64) -> bool {
    ProximityEvaluator::default().is_near(distance_meters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn point(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate::new(latitude, longitude).unwrap()
    }

    #[test]
    fn one_degree_along_the_equator() {
        let distance = compute_distance(&point(0.0, 0.0), &point(0.0, 1.0));

        assert!((distance - 111_195.0).abs() <= 1.0, "distance was {distance}");
        assert!(!is_near(distance));
    }

    #[test]
    fn half_a_millidegree_is_near() {
        let proximity = ProximityEvaluator::default().evaluate(&PointPair::new(point(0.0, 0.0), point(0.0, 0.0005)));

        assert!(proximity.distance < 100.0);
        assert!(proximity.near);
    }

    #[rstest]
    #[case(point(0.0, 0.0))]
    #[case(point(55.6761, 12.5683))]
    #[case(point(-90.0, 180.0))]
    fn same_point_is_zero(#[case] a: Coordinate) {
        assert_eq!(compute_distance(&a, &a), 0.0);
    }

    #[rstest]
    #[case(point(55.6761, 12.5683), point(51.5074, -0.1278))]
    #[case(point(-33.8688, 151.2093), point(40.7128, -74.0060))]
    #[case(point(0.0, 179.9), point(0.0, -179.9))]
    fn symmetric(#[case] a: Coordinate, #[case] b: Coordinate) {
        let forward = compute_distance(&a, &b);
        let backward = compute_distance(&b, &a);

        assert!((forward - backward).abs() < 1e-6);
        assert!(forward >= 0.0);
    }

    #[test]
    fn antipodes_are_half_a_circumference() {
        let distance = compute_distance(&point(0.0, 0.0), &point(0.0, 180.0));
        assert!((distance - std::f64::consts::PI * EARTH_RADIUS_METERS).abs() < 1e-3);
    }

    #[test]
    fn threshold_is_strict() {
        assert!(is_near(99.999));
        assert!(!is_near(100.0));
    }

    #[test]
    fn alternate_sphere_and_threshold() {
        let unit_sphere = ProximityEvaluator::new(1.0, 0.5);
        let proximity = unit_sphere.evaluate(&PointPair::new(point(0.0, 0.0), point(0.0, 90.0)));

        assert!((proximity.distance - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!(!proximity.near);
    }
}
