use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    #[error("Ellipsoid error: {0}")]
    Ellipsoid(#[from] EllipsoidError),

    #[error("Coordinate error: {0}")]
    Coordinate(#[from] CoordinateError),

    #[error("Distance error: {0}")]
    Distance(#[from] DistanceError),

    #[error("Unit error: {0}")]
    Unit(#[from] UnitError),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EllipsoidError {
    #[error("Unknown ellipsoid \"{name}\", available ellipsoids: {available}")]
    Unknown { name: String, available: String },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Malformed coordinate text or an out-of-range latitude/longitude.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinateError {
    #[error("Missing \",\" separator between latitude and longitude in \"{0}\"")]
    MissingSeparator(String),

    #[error("Expected a single \",\" separator between latitude and longitude in \"{0}\"")]
    DuplicateSeparator(String),

    #[error("Invalid coordinate component \"{component}\": {reason}")]
    InvalidComponent {
        component: String,
        reason: &'static str,
    },

    #[error("Latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("Longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistanceError {
    #[error("Vincenty formula failed to converge after {iterations} iterations")]
    VincentyNoConvergence { iterations: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    #[error("Unsupported unit: {0}")]
    Unsupported(String),
}
