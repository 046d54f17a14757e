//! Latitude/longitude coordinates bound to a reference ellipsoid.

mod parse;

use std::fmt;
use std::str::FromStr;

use crate::ellipsoid::{Ellipsoid, WGS84};
use crate::error::CoordinateError;

/// A latitude/longitude pair in decimal degrees on a reference ellipsoid.
///
/// The latitude is always in \[-90, 90\] and the longitude in \[-180, 180\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
    ellipsoid: Ellipsoid,
}

impl Coordinate {
    /// Create a coordinate from decimal degrees.
    pub fn from_decimal(
        latitude: f64,
        longitude: f64,
        ellipsoid: Ellipsoid,
    ) -> Result<Self, CoordinateError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
            ellipsoid,
        })
    }

    /// Parse a `"latitude, longitude"` string.
    ///
    /// Each side may be signed decimal degrees (`40.446195`) or
    /// degrees/minutes/seconds with optional markers and an optional
    /// hemisphere letter (`40° 26.7717`, `30°16′57″N`, `079° 56.93172W`).
    /// A hemisphere letter takes precedence over the numeric sign.
    pub fn parse(text: &str, ellipsoid: Ellipsoid) -> Result<Self, CoordinateError> {
        let (latitude, longitude) = parse::parse_lat_lon(text)?;
        Self::from_decimal(latitude, longitude, ellipsoid)
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    /// The same position referenced to another ellipsoid. No datum shift is applied.
    pub fn with_ellipsoid(&self, ellipsoid: Ellipsoid) -> Self {
        Self { ellipsoid, ..*self }
    }

    /// True when both coordinates have identical latitude and longitude,
    /// regardless of their ellipsoids.
    pub fn same_position(&self, other: &Self) -> bool {
        self.latitude == other.latitude && self.longitude == other.longitude
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

/// Parses against WGS84.
impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, WGS84)
    }
}
