// src/services/geo.rs
// DOCUMENTATION: Great-circle distance helpers
// PURPOSE: Haversine distance between user and salon positions

use geo_types::Point;

/// Earth's mean radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points in kilometers
/// Points carry longitude in `x` and latitude in `y`, both in decimal degrees
pub fn haversine_km(from: Point<f64>, to: Point<f64>) -> f64 {
    let lat1 = from.y().to_radians();
    let lat2 = to.y().to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (to.x() - from.x()).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    // Rounding can push `a` just past 1.0 for antipodal points
    let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Distance between two optional coordinate pairs in kilometers
/// DOCUMENTATION: Any missing coordinate yields `f64::INFINITY`, so the pair
/// falls outside every radius instead of collapsing to a zero distance
pub fn distance_km(
    lat1: Option<f64>,
    lon1: Option<f64>,
    lat2: Option<f64>,
    lon2: Option<f64>,
) -> f64 {
    match (lat1, lon1, lat2, lon2) {
        (Some(lat1), Some(lon1), Some(lat2), Some(lon2)) => {
            haversine_km(Point::new(lon1, lat1), Point::new(lon2, lat2))
        }
        _ => f64::INFINITY,
    }
}

/// Round a distance to 2 decimals for display
pub fn round_km(distance: f64) -> f64 {
    (distance * 100.0).round() / 100.0
}
