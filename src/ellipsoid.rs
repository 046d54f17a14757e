//! Reference ellipsoids and the static registry of named ellipsoids.

use std::fmt;
use std::str::FromStr;

use crate::error::EllipsoidError;

/// Reference ellipsoid parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    name: &'static str,
    /// Semi-major axis (meters)
    a: f64,
    /// Inverse flattening: 1 / f
    inv_f: f64,
    /// Flattening (dimensionless)
    f: f64,
    /// Semi-minor axis: a * (1 - f)
    b: f64,
}

impl Ellipsoid {
    const fn new(name: &'static str, a: f64, inv_f: f64) -> Self {
        let f = 1.0 / inv_f;
        Self {
            name,
            a,
            inv_f,
            f,
            b: a * (1.0 - f),
        }
    }

    /// Create an ad hoc ellipsoid from its semi-major axis (meters) and
    /// inverse flattening. Both must be finite and strictly positive.
    pub fn custom(semi_major_axis: f64, inverse_flattening: f64) -> Result<Self, EllipsoidError> {
        if !(semi_major_axis.is_finite() && semi_major_axis > 0.0) {
            return Err(EllipsoidError::InvalidParameter(format!(
                "semi-major axis must be positive, got {semi_major_axis}"
            )));
        }
        if !(inverse_flattening.is_finite() && inverse_flattening > 0.0) {
            return Err(EllipsoidError::InvalidParameter(format!(
                "inverse flattening must be positive, got {inverse_flattening}"
            )));
        }
        Ok(Self::new(CUSTOM_NAME, semi_major_axis, inverse_flattening))
    }

    /// Look up a registered ellipsoid by its exact (case-sensitive) name.
    pub fn from_name(name: &str) -> Result<Self, EllipsoidError> {
        ELLIPSOIDS
            .iter()
            .find(|e| e.name == name)
            .copied()
            .ok_or_else(|| EllipsoidError::Unknown {
                name: name.to_string(),
                available: available_names(),
            })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The semi-major axis, *a*
    pub fn semi_major_axis(&self) -> f64 {
        self.a
    }

    /// The semi-minor axis, *b*
    pub fn semi_minor_axis(&self) -> f64 {
        self.b
    }

    /// The flattening, *f = (a - b) / a*
    pub fn flattening(&self) -> f64 {
        self.f
    }

    pub fn inverse_flattening(&self) -> f64 {
        self.inv_f
    }

    /// The squared eccentricity *e² = f (2 - f)*.
    pub fn eccentricity_squared(&self) -> f64 {
        self.f * (2.0 - self.f)
    }

    /// Arithmetic mean radius *(2a + b) / 3*, the sphere radius used by the
    /// flat and haversine approximations.
    pub fn arithmetic_mean_radius(&self) -> f64 {
        (2.0 * self.a + self.b) / 3.0
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        WGS84
    }
}

impl fmt::Display for Ellipsoid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (a = {} m, 1/f = {})", self.name, self.a, self.inv_f)
    }
}

impl FromStr for Ellipsoid {
    type Err = EllipsoidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

const CUSTOM_NAME: &str = "CUSTOM";

pub const WGS84: Ellipsoid = Ellipsoid::new("WGS84", 6_378_137.0, 298.257_223_563);
pub const GRS80: Ellipsoid = Ellipsoid::new("GRS_1980", 6_378_137.0, 298.257_222_101);

// Registry order is the order names are listed in help text.
static ELLIPSOIDS: [Ellipsoid; 22] = [
    Ellipsoid::new("AIRY", 6_377_563.396, 299.324_964_6),
    Ellipsoid::new("MODIFIED_AIRY", 6_377_340.189, 299.324_964_6),
    Ellipsoid::new("AUSTRALIAN_NATIONAL", 6_378_160.0, 298.25),
    Ellipsoid::new("BESSEL_1841", 6_377_397.155, 299.152_812_8),
    Ellipsoid::new("BESSEL_1841_NAMBIA", 6_377_483.865, 299.152_812_8),
    Ellipsoid::new("CLARKE_1866", 6_378_206.4, 294.978_698_2),
    Ellipsoid::new("CLARKE_1880", 6_378_249.145, 293.465),
    Ellipsoid::new("EVEREST", 6_377_276.345, 300.8017),
    Ellipsoid::new("FISCHER_1960_MERCURY", 6_378_166.0, 298.3),
    Ellipsoid::new("FISCHER_1968", 6_378_150.0, 298.3),
    Ellipsoid::new("GRS_1967", 6_378_160.0, 298.247_167_427),
    GRS80,
    Ellipsoid::new("HELMERT_1906", 6_378_200.0, 298.3),
    Ellipsoid::new("HOUGH", 6_378_270.0, 297.0),
    Ellipsoid::new("INTERNATIONAL", 6_378_388.0, 297.0),
    Ellipsoid::new("KRASSOVSKY", 6_378_245.0, 298.3),
    Ellipsoid::new("MODIFIED_EVEREST", 6_377_304.063, 300.8017),
    Ellipsoid::new("SOUTH_AMERICAN_1969", 6_378_160.0, 298.25),
    Ellipsoid::new("WGS60", 6_378_165.0, 298.3),
    Ellipsoid::new("WGS66", 6_378_145.0, 298.25),
    Ellipsoid::new("WGS72", 6_378_135.0, 298.26),
    WGS84,
];

/// Names of every registered ellipsoid, in registry order.
pub fn names() -> impl Iterator<Item = &'static str> + Clone {
    ELLIPSOIDS.iter().map(Ellipsoid::name)
}

/// Registered names joined for help and error text.
pub fn available_names() -> String {
    names().collect::<Vec<_>>().join(", ")
}
