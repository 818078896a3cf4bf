//! Great-circle distance on a spherical Earth.

use super::LatLong;

const EARTH_RADIUS_KILOMETERS: f64 = 6371.0;

/// The circumference of the Earth in kilometers, on the spherical model
/// used throughout this module.
pub const EARTH_CIRCUMFERENCE: f64 = 2.0 * std::f64::consts::PI * EARTH_RADIUS_KILOMETERS;

/// Calculates the great-circle distance between two points in kilometers,
/// using the spherical law of cosines:
///
/// `d = R * acos(sin φ1 * sin φ2 + cos φ1 * cos φ2 * cos Δλ)`
///
/// The longitude difference enters the central angle symmetrically; the
/// cosine argument is clamped to `[-1, 1]` so that rounding on identical
/// or antipodal points cannot push `acos` out of its domain.
pub fn great_circle_distance(first: LatLong, second: LatLong) -> f64 {
    if first == second {
        return 0.0;
    }

    let delta_longitude = (first.longitude() - second.longitude()).abs();
    let cos_central_angle = first.latitude().sin() * second.latitude().sin()
        + first.latitude().cos() * second.latitude().cos() * delta_longitude.cos();

    EARTH_RADIUS_KILOMETERS * cos_central_angle.clamp(-1.0, 1.0).acos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_identical_points_are_zero_distance() {
        let p = LatLong::new(0.83, -1.42);
        assert_eq!(great_circle_distance(p, p), 0.0);
    }

    #[test]
    fn test_quarter_arc_along_equator() {
        let origin = LatLong::new(0.0, 0.0);
        let quarter = LatLong::new(0.0, FRAC_PI_2);
        let d = great_circle_distance(origin, quarter);
        assert!((d - EARTH_CIRCUMFERENCE / 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_antipodal_points_are_half_circumference() {
        let origin = LatLong::new(0.0, 0.0);
        let antipode = LatLong::new(0.0, PI);
        let d = great_circle_distance(origin, antipode);
        assert!((d - EARTH_CIRCUMFERENCE / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_pole_to_pole() {
        let north = LatLong::new(FRAC_PI_2, 0.0);
        let south = LatLong::new(-FRAC_PI_2, 0.0);
        let d = great_circle_distance(north, south);
        assert!((d - EARTH_CIRCUMFERENCE / 2.0).abs() < 1e-6);
    }

    // The longitude difference must contribute the full arc on its own:
    // two equatorial points Δλ apart are exactly R * Δλ apart. A formula
    // that folds Δλ into only one cosine factor fails this.
    #[test]
    fn test_longitude_difference_enters_symmetrically() {
        let a = LatLong::new(0.0, 0.4);
        let b = LatLong::new(0.0, 1.1);
        let d = great_circle_distance(a, b);
        assert!((d - EARTH_RADIUS_KILOMETERS * 0.7).abs() < 1e-6);
        assert_eq!(d, great_circle_distance(b, a));
    }
}
