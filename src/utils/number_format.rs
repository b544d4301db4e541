//! Number rendering compatible with the link platform's parsers.
//!
//! The platform expects coordinates printed with shortest
//! round-trip digits, no trailing `.0` on integral values, and exponent
//! notation only outside `[1e-6, 1e21)`. Rust's `Display` for `f64` already
//! produces shortest round-trip digits, so only the notation switch, the sign
//! of zero, and the non-finite spellings need handling here.

use serde::{Deserialize, Deserializer, Serialize, Serializer, ser::Error as _};
use serde_json::value::RawValue;

const EXPONENT_UPPER: f64 = 1e21;
const EXPONENT_LOWER: f64 = 1e-6;

/// Formats a number as text.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_number(37.0), "37");
/// assert_eq!(format_number(-122.418028), "-122.418028");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(f64::NAN), "NaN");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (EXPONENT_LOWER..EXPONENT_UPPER).contains(&magnitude) {
        return value.to_string();
    }

    let scientific = format!("{value:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => scientific,
    }
}

/// Serializes an `f64` as a JSON number with [`format_number`] text.
///
/// Non-finite values have no JSON number form and are written as `null`.
/// Intended for `#[serde(serialize_with = "...")]`.
pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if !value.is_finite() {
        return serializer.serialize_none();
    }

    let number = RawValue::from_string(format_number(*value)).map_err(S::Error::custom)?;
    number.serialize(serializer)
}

/// Deserializes an `f64` written by [`serialize`].
///
/// `null` reads back as `NaN`. Infinities were also written as `null`, so they
/// reload as `NaN` too.
pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Deserialize)]
    struct Wrapper {
        #[serde(serialize_with = "serialize", deserialize_with = "deserialize")]
        value: f64,
    }

    fn to_json(value: f64) -> String {
        serde_json::to_string(&Wrapper { value }).unwrap()
    }

    #[test]
    fn test_format_coordinates() {
        assert_eq!(format_number(37.775818), "37.775818");
        assert_eq!(format_number(-122.418028), "-122.418028");
        assert_eq!(format_number(37.802374), "37.802374");
    }

    #[test]
    fn test_format_integral_has_no_fraction() {
        assert_eq!(format_number(37.0), "37");
        assert_eq!(format_number(-180.0), "-180");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_format_shortest_round_trip() {
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_format_small_values() {
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(0.000005), "0.000005");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(-2e-10), "-2e-10");
    }

    #[test]
    fn test_format_large_values() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-1.25e22), "-1.25e+22");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_serialize_json_numbers() {
        assert_eq!(to_json(37.775818), r#"{"value":37.775818}"#);
        assert_eq!(to_json(37.0), r#"{"value":37}"#);
        assert_eq!(to_json(1e21), r#"{"value":1e+21}"#);
    }

    #[test]
    fn test_serialize_non_finite_as_null() {
        assert_eq!(to_json(f64::NAN), r#"{"value":null}"#);
        assert_eq!(to_json(f64::INFINITY), r#"{"value":null}"#);
    }

    #[test]
    fn test_deserialize_numbers() {
        let wrapper: Wrapper = serde_json::from_str(r#"{"value":-122.418028}"#).unwrap();
        assert_eq!(wrapper.value, -122.418028);

        let wrapper: Wrapper = serde_json::from_str(r#"{"value":1e+21}"#).unwrap();
        assert_eq!(wrapper.value, 1e21);
    }

    #[test]
    fn test_deserialize_null_as_nan() {
        let wrapper: Wrapper = serde_json::from_str(r#"{"value":null}"#).unwrap();
        assert!(wrapper.value.is_nan());
    }

    #[test]
    fn test_non_finite_reload_as_nan() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let json = to_json(value);
            let wrapper: Wrapper = serde_json::from_str(&json).unwrap();
            assert!(wrapper.value.is_nan(), "{value} reloaded from {json}");
        }
    }
}
