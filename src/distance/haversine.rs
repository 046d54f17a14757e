//! Haversine great-circle distance on a sphere of the ellipsoid's mean radius.

use crate::coordinate::Coordinate;
use crate::error::DistanceError;

/// Great-circle distance in meters.
pub fn distance(from: &Coordinate, to: &Coordinate) -> Result<f64, DistanceError> {
    let lat1 = from.latitude().to_radians();
    let lat2 = to.latitude().to_radians();
    let half_dlat = (lat2 - lat1) / 2.0;
    let half_dlon = (to.longitude() - from.longitude()).to_radians() / 2.0;

    let a = half_dlat.sin().powi(2) + lat1.cos() * lat2.cos() * half_dlon.sin().powi(2);
    // Rounding can push `a` marginally outside [0, 1] for antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    Ok(from.ellipsoid().arithmetic_mean_radius() * c)
}
