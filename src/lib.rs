pub mod coordinate;
pub mod distance;
pub mod ellipsoid;
pub mod error;
pub mod unit;

pub use coordinate::Coordinate;
pub use distance::{Distance, DistanceMethod, DistanceReport};
pub use ellipsoid::{Ellipsoid, WGS84};
pub use error::GeoError;
pub use unit::LengthUnit;

/// Parse two coordinate strings on the named ellipsoid and run every
/// distance algorithm, reporting the results in `unit`.
pub fn distance_all(
    origin: &str,
    destination: &str,
    ellipsoid: &str,
    unit: LengthUnit,
) -> Result<DistanceReport, GeoError> {
    let ellipsoid = Ellipsoid::from_name(ellipsoid)?;
    let from = Coordinate::parse(origin, ellipsoid)?;
    let to = Coordinate::parse(destination, ellipsoid)?;
    Ok(Distance::new(from, to).in_unit(unit).all()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoordinateError, DistanceError, EllipsoidError};
    use approx::assert_relative_eq;

    #[test]
    fn test_distance_all_dms_matches_decimal() {
        let dms = distance_all(
            "40° 26.7717, -79° 56.93172",
            "30°16′57″N, 029°48′32″W",
            "AIRY",
            LengthUnit::Meters,
        )
        .unwrap();
        let decimal = distance_all(
            "40.446195, -79.948862",
            "30.2825, -29.808888888888889",
            "AIRY",
            LengthUnit::Meters,
        )
        .unwrap();
        assert_relative_eq!(dms.flat, decimal.flat, epsilon = 1e-3);
        assert_relative_eq!(dms.haversine, decimal.haversine, epsilon = 1e-3);
        assert_relative_eq!(dms.vincenty.unwrap(), decimal.vincenty.unwrap(), epsilon = 1e-3);
        assert_relative_eq!(decimal.flat, 4_684_559.382, epsilon = 1e-2);
        assert_relative_eq!(decimal.haversine, 4_620_254.271, epsilon = 1e-2);
    }

    #[test]
    fn test_distance_all_in_kilometers() {
        let report = distance_all("50.0663, -5.7147", "58.6440, -3.0700", "WGS84", LengthUnit::Kilometers).unwrap();
        assert_relative_eq!(report.flat, 969.072, epsilon = 1e-3);
        assert_relative_eq!(report.haversine, 968.877, epsilon = 1e-3);
        assert_relative_eq!(report.vincenty.unwrap(), 969.955, epsilon = 1e-3);
    }

    #[test]
    fn test_distance_all_reports_vincenty_failure() {
        let report = distance_all("0, 0", "0, 179.9999", "WGS84", LengthUnit::Meters).unwrap();
        assert!(report.flat.is_finite());
        assert!(report.haversine.is_finite());
        assert!(matches!(report.vincenty, Err(DistanceError::VincentyNoConvergence { .. })));
    }

    #[test]
    fn test_distance_all_errors() {
        assert!(matches!(
            distance_all("0, 0", "1, 1", "NONEXISTENT", LengthUnit::Meters),
            Err(GeoError::Ellipsoid(EllipsoidError::Unknown { .. }))
        ));
        assert!(matches!(
            distance_all("0 0", "1, 1", "WGS84", LengthUnit::Meters),
            Err(GeoError::Coordinate(CoordinateError::MissingSeparator(_)))
        ));
        assert!(matches!(
            distance_all("0, 0", "1, 181", "WGS84", LengthUnit::Meters),
            Err(GeoError::Coordinate(CoordinateError::LongitudeOutOfRange(_)))
        ));
    }
}
