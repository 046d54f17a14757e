//! Vincenty's inverse formula on the ellipsoid.
//!
//! Iterates on λ, the longitude difference on the auxiliary sphere, starting
//! from the geodetic longitude difference L. Near-antipodal points may never
//! converge; callers that need a value for such pairs must fall back to the
//! haversine distance themselves.

use crate::coordinate::Coordinate;
use crate::error::DistanceError;

/// Maximum number of λ refinements before giving up.
pub const MAX_ITERATIONS: usize = 200;

/// Convergence threshold on successive λ values, in radians (≈ 0.06 mm).
pub const CONVERGENCE_THRESHOLD: f64 = 1e-12;

/// Ellipsoidal distance in meters, using the origin's ellipsoid.
#[allow(non_snake_case)]
pub fn distance(from: &Coordinate, to: &Coordinate) -> Result<f64, DistanceError> {
    if from.same_position(to) {
        return Ok(0.0);
    }

    let ellipsoid = from.ellipsoid();
    let a = ellipsoid.semi_major_axis();
    let b = ellipsoid.semi_minor_axis();
    let f = ellipsoid.flattening();

    let L = (to.longitude() - from.longitude()).to_radians();
    // Reduced latitudes
    let U1 = ((1.0 - f) * from.latitude().to_radians().tan()).atan();
    let U2 = ((1.0 - f) * to.latitude().to_radians().tan()).atan();
    let (sin_u1, cos_u1) = U1.sin_cos();
    let (sin_u2, cos_u2) = U2.sin_cos();

    let mut lambda = L;
    let mut converged = None;

    for _ in 0..MAX_ITERATIONS {
        let (sin_lambda, cos_lambda) = lambda.sin_cos();
        let sin_sigma = ((cos_u2 * sin_lambda).powi(2)
            + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
        .sqrt();
        if sin_sigma == 0.0 {
            // Coincident points on the auxiliary sphere
            return Ok(0.0);
        }

        let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        let sigma = sin_sigma.atan2(cos_sigma);
        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
        // Equatorial line: cos²α = 0
        let cos_2sigma_m = if cos_sq_alpha == 0.0 {
            0.0
        } else {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
        };

        let C = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
        let previous = lambda;
        lambda = L
            + (1.0 - C)
                * f
                * sin_alpha
                * (sigma
                    + C * sin_sigma
                        * (cos_2sigma_m + C * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

        if !lambda.is_finite() {
            break;
        }
        if (lambda - previous).abs() < CONVERGENCE_THRESHOLD {
            converged = Some((sin_sigma, cos_sigma, sigma, cos_sq_alpha, cos_2sigma_m));
            break;
        }
    }

    let (sin_sigma, cos_sigma, sigma, cos_sq_alpha, cos_2sigma_m) =
        converged.ok_or(DistanceError::VincentyNoConvergence {
            iterations: MAX_ITERATIONS,
        })?;

    let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
    let A = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let B = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
    let delta_sigma = B
        * sin_sigma
        * (cos_2sigma_m
            + B / 4.0
                * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                    - B / 6.0
                        * cos_2sigma_m
                        * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                        * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));

    Ok(b * A * (sigma - delta_sigma))
}
