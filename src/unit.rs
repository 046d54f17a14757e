//! Length units and conversion from/to meters.

use std::fmt;
use std::str::FromStr;

use crate::error::UnitError;

pub const METERS_PER_KILOMETER: f64 = 1000.0;
pub const METERS_PER_MILE: f64 = 1609.344;
pub const FEET_PER_METER: f64 = 3.28084;
pub const METERS_PER_NAUTICAL_MILE: f64 = 1852.0;

/// Units a distance can be reported in. Meters are canonical.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    #[default]
    Meters,
    Kilometers,
    Miles,
    Feet,
    NauticalMiles,
}

impl LengthUnit {
    pub const ALL: [LengthUnit; 5] = [
        Self::Meters,
        Self::Kilometers,
        Self::Miles,
        Self::Feet,
        Self::NauticalMiles,
    ];

    /// Parse from a unit tag such as `"km"`, case-insensitive.
    pub fn from_tag(tag: &str) -> Result<Self, UnitError> {
        match tag.to_lowercase().as_str() {
            "m" => Ok(Self::Meters),
            "km" => Ok(Self::Kilometers),
            "mi" => Ok(Self::Miles),
            "ft" => Ok(Self::Feet),
            "nm" | "nmi" => Ok(Self::NauticalMiles),
            _ => Err(UnitError::Unsupported(tag.to_string())),
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Meters => "m",
            Self::Kilometers => "km",
            Self::Miles => "mi",
            Self::Feet => "ft",
            Self::NauticalMiles => "nmi",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for LengthUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
    }
}

/// Convert a distance in meters into `unit`. No rounding is applied.
pub fn convert(meters: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meters => meters,
        LengthUnit::Kilometers => meters / METERS_PER_KILOMETER,
        LengthUnit::Miles => meters / METERS_PER_MILE,
        LengthUnit::Feet => meters * FEET_PER_METER,
        LengthUnit::NauticalMiles => meters / METERS_PER_NAUTICAL_MILE,
    }
}

/// Convert a distance expressed in `unit` back into meters.
pub fn to_meters(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meters => value,
        LengthUnit::Kilometers => value * METERS_PER_KILOMETER,
        LengthUnit::Miles => value * METERS_PER_MILE,
        LengthUnit::Feet => value / FEET_PER_METER,
        LengthUnit::NauticalMiles => value * METERS_PER_NAUTICAL_MILE,
    }
}
