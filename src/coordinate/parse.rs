//! Textual coordinate grammar.
//!
//! A coordinate is `<latitude> , <longitude>`. Each side is tried, in order, as
//! 1. signed decimal degrees (`-79.948862`)
//! 2. degrees, optional minutes, optional seconds, each with an optional
//!    marker (`°`, `'`/`′`, `"`/`″`), plus an optional hemisphere letter before
//!    or after the number (`N 40° 26.7717`, `029°48′32″W`).

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::error::CoordinateError;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Returns `Some(negative)` when `letter` is a hemisphere of this axis.
    fn hemisphere_sign(self, letter: char) -> Option<bool> {
        match (self, letter.to_ascii_uppercase()) {
            (Axis::Latitude, 'N') | (Axis::Longitude, 'E') => Some(false),
            (Axis::Latitude, 'S') | (Axis::Longitude, 'W') => Some(true),
            _ => None,
        }
    }
}

static DECIMAL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)$").expect("Failed to compile decimal degrees regex.")
});

static DMS_REGEX: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(
        r#"(?x)
        ^
        (?P<prefix>[NSEW])?\s*
        (?P<deg>[+-]?(?:\d+(?:\.\d+)?|\.\d+))\s*
        (?:[°º]\s*)?
        (?:
            (?P<min>\d+(?:\.\d+)?)\s*
            (?:['′’]\s*)?
            (?:
                (?P<sec>\d+(?:\.\d+)?)\s*
                (?:(?:''|["″”])\s*)?
            )?
        )?
        (?P<suffix>[NSEW])?
        $
        "#,
    )
    .case_insensitive(true)
    .build()
    .expect("Failed to compile degrees/minutes/seconds regex.")
});

/// Split `text` on its single comma and parse both sides into decimal degrees.
///
/// Range checks are left to the caller.
pub(super) fn parse_lat_lon(text: &str) -> Result<(f64, f64), CoordinateError> {
    let (latitude, longitude) = match text.matches(',').count() {
        0 => return Err(CoordinateError::MissingSeparator(text.to_string())),
        1 => text
            .split_once(',')
            .ok_or_else(|| CoordinateError::MissingSeparator(text.to_string()))?,
        _ => return Err(CoordinateError::DuplicateSeparator(text.to_string())),
    };
    Ok((
        parse_component(latitude, Axis::Latitude)?,
        parse_component(longitude, Axis::Longitude)?,
    ))
}

fn parse_component(raw: &str, axis: Axis) -> Result<f64, CoordinateError> {
    let component = raw.trim();
    if component.is_empty() {
        return Err(invalid(raw, "empty component"));
    }

    if DECIMAL_REGEX.is_match(component) {
        return component
            .parse::<f64>()
            .map_err(|_| invalid(component, "not a decimal number"));
    }

    let caps = DMS_REGEX
        .captures(component)
        .ok_or_else(|| invalid(component, "expected decimal degrees or degrees/minutes/seconds"))?;

    let hemisphere = match (caps.name("prefix"), caps.name("suffix")) {
        (Some(_), Some(_)) => return Err(invalid(component, "more than one hemisphere letter")),
        (Some(m), None) | (None, Some(m)) => m.as_str().chars().next(),
        (None, None) => None,
    };

    let degrees_text = caps.name("deg").map_or("", |m| m.as_str());
    let minutes_text = caps.name("min").map(|m| m.as_str());
    let seconds_text = caps.name("sec").map(|m| m.as_str());

    if minutes_text.is_some() && degrees_text.contains('.') {
        return Err(invalid(component, "fractional degrees cannot be followed by minutes"));
    }
    if seconds_text.is_some() && minutes_text.is_some_and(|m| m.contains('.')) {
        return Err(invalid(component, "fractional minutes cannot be followed by seconds"));
    }

    let degrees = parse_number(degrees_text, component)?;
    let minutes = minutes_text.map_or(Ok(0.0), |m| parse_number(m, component))?;
    let seconds = seconds_text.map_or(Ok(0.0), |s| parse_number(s, component))?;
    if minutes >= 60.0 {
        return Err(invalid(component, "minutes must be less than 60"));
    }
    if seconds >= 60.0 {
        return Err(invalid(component, "seconds must be less than 60"));
    }

    // A hemisphere letter overrides the sign written on the degrees.
    let negative = match hemisphere {
        Some(letter) => axis
            .hemisphere_sign(letter)
            .ok_or_else(|| invalid(component, wrong_hemisphere_reason(axis)))?,
        None => degrees_text.starts_with('-'),
    };

    let magnitude = degrees.abs() + minutes / 60.0 + seconds / 3600.0;
    Ok(if negative { -magnitude } else { magnitude })
}

fn parse_number(text: &str, component: &str) -> Result<f64, CoordinateError> {
    text.parse::<f64>()
        .map_err(|_| invalid(component, "not a decimal number"))
}

fn wrong_hemisphere_reason(axis: Axis) -> &'static str {
    match axis {
        Axis::Latitude => "latitude hemisphere must be N or S",
        Axis::Longitude => "longitude hemisphere must be E or W",
    }
}

fn invalid(component: &str, reason: &'static str) -> CoordinateError {
    CoordinateError::InvalidComponent {
        component: component.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_parses_to(text: &str, latitude: f64, longitude: f64) {
        let (lat, lon) = parse_lat_lon(text).unwrap_or_else(|e| panic!("{text}: {e}"));
        assert_relative_eq!(lat, latitude, epsilon = 1e-6);
        assert_relative_eq!(lon, longitude, epsilon = 1e-6);
    }

    fn assert_invalid_component(text: &str, expected_component: &str) {
        match parse_lat_lon(text) {
            Err(CoordinateError::InvalidComponent { component, .. }) => {
                assert_eq!(component, expected_component, "input: {text}")
            }
            other => panic!("{text}: expected invalid component, got {other:?}"),
        }
    }

    #[test]
    fn test_decimal_degrees() {
        assert_parses_to("40.446195, -79.948862", 40.446195, -79.948862);
        assert_parses_to("40.446195,-79.948862", 40.446195, -79.948862);
        assert_parses_to("  -33.8688 ,\t151.2093  ", -33.8688, 151.2093);
        assert_parses_to("+12, .5", 12.0, 0.5);
        assert_parses_to("0, 0", 0.0, 0.0);
    }

    #[test]
    fn test_degrees_decimal_minutes() {
        assert_parses_to("40° 26.7717, -79° 56.93172", 40.446195, -79.948862);
        assert_parses_to("40 26.7717, -79 56.93172", 40.446195, -79.948862);
        assert_parses_to("40°26.7717', 079° 56.93172W", 40.446195, -79.948862);
    }

    #[test]
    fn test_degrees_minutes_seconds() {
        let lat = 30.0 + 16.0 / 60.0 + 57.0 / 3600.0;
        let lon = -(29.0 + 48.0 / 60.0 + 32.0 / 3600.0);
        assert_parses_to("30°16′57″N, 029°48′32″W", lat, lon);
        assert_parses_to("30°16'57\"N, 029°48'32\"W", lat, lon);
        assert_parses_to("30°16'57''N, 029°48'32''W", lat, lon);
        assert_parses_to("30 16 57 N, 29 48 32 W", lat, lon);
        assert_parses_to("N 30°16′57″, W 029°48′32″", lat, lon);
        assert_parses_to("n30°16′57″, w029°48′32″", lat, lon);
        assert_parses_to("-30 16 57, 29 48 32", -lat, -lon);
    }

    #[test]
    fn test_fractional_seconds() {
        assert_parses_to(
            "37°57'3.7203\"S, 144°25'29.5244\"E",
            -(37.0 + 57.0 / 60.0 + 3.7203 / 3600.0),
            144.0 + 25.0 / 60.0 + 29.5244 / 3600.0,
        );
    }

    #[test]
    fn test_hemisphere_overrides_sign() {
        assert_parses_to("-40.5N, 79.5W", 40.5, -79.5);
        assert_parses_to("40.5 S, -79.5 E", -40.5, 79.5);
    }

    #[test]
    fn test_negative_zero_degrees_keeps_sign() {
        assert_parses_to("-0° 30', -0 15", -0.5, -0.25);
    }

    #[test]
    fn test_missing_separator() {
        assert_eq!(
            parse_lat_lon("40.446195 -79.948862"),
            Err(CoordinateError::MissingSeparator("40.446195 -79.948862".to_string()))
        );
        assert!(matches!(parse_lat_lon(""), Err(CoordinateError::MissingSeparator(_))));
    }

    #[test]
    fn test_duplicate_separator() {
        assert_eq!(
            parse_lat_lon("40,44, -79,94"),
            Err(CoordinateError::DuplicateSeparator("40,44, -79,94".to_string()))
        );
        assert!(matches!(parse_lat_lon("1,2,"), Err(CoordinateError::DuplicateSeparator(_))));
    }

    #[test]
    fn test_invalid_components() {
        assert_invalid_component("abc, 10", "abc");
        assert_invalid_component("10, ten", "ten");
        assert_invalid_component(" , 10", " ");
        assert_invalid_component("10, inf", "inf");
        assert_invalid_component("NaN, 10", "NaN");
        assert_invalid_component("1e3, 10", "1e3");
        assert_invalid_component("40° 26' 12\" 5, 10", "40° 26' 12\" 5");
    }

    #[test]
    fn test_wrong_axis_hemisphere() {
        assert_invalid_component("40.5E, 10", "40.5E");
        assert_invalid_component("40.5, 10N", "10N");
        assert_invalid_component("N 40.5 S, 10", "N 40.5 S");
    }

    #[test]
    fn test_minutes_and_seconds_range() {
        assert_invalid_component("40 60, 10", "40 60");
        assert_invalid_component("40 10 61, 10", "40 10 61");
        assert_invalid_component("40.5 10, 10", "40.5 10");
        assert_invalid_component("40 10.5 30, 10", "40 10.5 30");
    }
}
