//! Flat (equirectangular) distance approximation.
//!
//! x = Δλ·cos(φm), y = Δφ, d = √(x² + y²)·R·π/180, with R the arithmetic mean
//! radius of the origin's ellipsoid and all angles in degrees.

use crate::coordinate::Coordinate;
use crate::error::DistanceError;

/// Planar distance in meters. Accurate only over short distances.
pub fn distance(from: &Coordinate, to: &Coordinate) -> Result<f64, DistanceError> {
    let mean_latitude = ((from.latitude() + to.latitude()) / 2.0).to_radians();
    let x = (to.longitude() - from.longitude()) * mean_latitude.cos();
    let y = to.latitude() - from.latitude();
    let meters_per_degree = from.ellipsoid().arithmetic_mean_radius().to_radians();
    Ok(x.hypot(y) * meters_per_degree)
}
