//! Distance algorithms between two coordinates.
//!
//! Every algorithm takes `(from, to)` and returns meters. When the two
//! coordinates carry different ellipsoids, the origin's ellipsoid is used.

pub mod flat;
pub mod haversine;
pub mod vincenty;

use crate::coordinate::Coordinate;
use crate::error::DistanceError;
use crate::unit::{self, LengthUnit};

/// Available distance algorithms, from fastest to most accurate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DistanceMethod {
    Flat,
    Haversine,
    Vincenty,
}

impl DistanceMethod {
    pub const ALL: [DistanceMethod; 3] = [Self::Flat, Self::Haversine, Self::Vincenty];

    /// Parse from a string name.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "flat" => Some(Self::Flat),
            "haversine" => Some(Self::Haversine),
            "vincenty" => Some(Self::Vincenty),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Haversine => "haversine",
            Self::Vincenty => "vincenty",
        }
    }

    /// Distance in meters.
    pub fn compute(&self, from: &Coordinate, to: &Coordinate) -> Result<f64, DistanceError> {
        match self {
            Self::Flat => flat::distance(from, to),
            Self::Haversine => haversine::distance(from, to),
            Self::Vincenty => vincenty::distance(from, to),
        }
    }
}

/// Distance between an origin and a destination, reported in a chosen unit.
///
/// ```
/// use geodist::{Coordinate, Distance, LengthUnit};
///
/// let from: Coordinate = "50.0663, -5.7147".parse().unwrap();
/// let to: Coordinate = "58.6440, -3.0700".parse().unwrap();
/// let km = Distance::new(from, to).in_unit(LengthUnit::Kilometers).haversine().unwrap();
/// assert!((km - 968.876).abs() < 1e-3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Distance {
    from: Coordinate,
    to: Coordinate,
    unit: LengthUnit,
}

/// Results of all three algorithms for one pair of coordinates.
///
/// The flat and haversine algorithms cannot fail; Vincenty keeps its own
/// result so a convergence failure does not hide the other two values.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceReport {
    pub unit: LengthUnit,
    pub flat: f64,
    pub haversine: f64,
    pub vincenty: Result<f64, DistanceError>,
}

impl Distance {
    pub fn new(from: Coordinate, to: Coordinate) -> Self {
        Self {
            from,
            to,
            unit: LengthUnit::Meters,
        }
    }

    pub fn in_unit(self, unit: LengthUnit) -> Self {
        Self { unit, ..self }
    }

    pub fn origin(&self) -> &Coordinate {
        &self.from
    }

    pub fn destination(&self) -> &Coordinate {
        &self.to
    }

    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    pub fn compute(&self, method: DistanceMethod) -> Result<f64, DistanceError> {
        let meters = method.compute(&self.from, &self.to)?;
        Ok(unit::convert(meters, self.unit))
    }

    pub fn flat(&self) -> Result<f64, DistanceError> {
        self.compute(DistanceMethod::Flat)
    }

    pub fn haversine(&self) -> Result<f64, DistanceError> {
        self.compute(DistanceMethod::Haversine)
    }

    pub fn vincenty(&self) -> Result<f64, DistanceError> {
        self.compute(DistanceMethod::Vincenty)
    }

    /// Run every algorithm. Only a failure of the flat or haversine
    /// algorithm is returned as an error.
    pub fn all(&self) -> Result<DistanceReport, DistanceError> {
        Ok(DistanceReport {
            unit: self.unit,
            flat: self.flat()?,
            haversine: self.haversine()?,
            vincenty: self.vincenty(),
        })
    }
}
