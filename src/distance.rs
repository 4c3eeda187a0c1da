use geo::{GeodesicDistance, Point};

use crate::data::model::{FacilityRecord, ReferencePoint};

/// Geodesic distance in kilometres on the WGS-84 ellipsoid (Karney's
/// algorithm), between two (latitude, longitude) pairs in degrees.
pub fn geodesic_km(from: ReferencePoint, to: ReferencePoint) -> f64 {
    // geo points are (x = longitude, y = latitude)
    let a = Point::new(from.longitude, from.latitude);
    let b = Point::new(to.longitude, to.latitude);
    a.geodesic_distance(&b) / 1000.0
}

/// Distance from `reference` to a facility, in kilometres.
pub fn distance_to(reference: ReferencePoint, record: &FacilityRecord) -> f64 {
    geodesic_km(reference, record.point())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CITY_HALL: ReferencePoint = ReferencePoint {
        latitude: 37.5665,
        longitude: 126.9780,
    };

    #[test]
    fn same_point_is_zero() {
        assert!(geodesic_km(CITY_HALL, CITY_HALL).abs() < 1e-6);
    }

    #[test]
    fn seoul_to_busan() {
        let busan = ReferencePoint::new(35.1796, 129.0756);
        let d = geodesic_km(CITY_HALL, busan);
        assert!((d - 325.0).abs() < 5.0, "got {d}");
    }

    #[test]
    fn symmetric() {
        let other = ReferencePoint::new(37.5656, 126.9784);
        let ab = geodesic_km(CITY_HALL, other);
        let ba = geodesic_km(other, CITY_HALL);
        assert!((ab - ba).abs() < 1e-9);
        // ~100 m south, ~35 m east
        assert!((ab - 0.106).abs() < 0.005, "got {ab}");
    }

    #[test]
    fn ellipsoid_differs_from_sphere_at_long_range() {
        // One degree of latitude near the equator is ~110.57 km on WGS-84,
        // but ~111.19 km on a 6371 km sphere.
        let d = geodesic_km(ReferencePoint::new(0.0, 0.0), ReferencePoint::new(1.0, 0.0));
        assert!((d - 110.574).abs() < 0.01, "got {d}");
    }
}
