//! Location entity shared by pickup and drop-off.

use serde::{Deserialize, Serialize};

use crate::utils::number_format;

/// A geographic point with its two address lines.
///
/// The JSON form is the object embedded in web links:
/// `{"latitude":…,"longitude":…,"addressLine1":"…","addressLine2":"…"}`, keys in
/// that order. No range checks are applied; `NaN` or out-of-range coordinates and
/// empty address lines are carried through to the rendered links unchanged.
/// Non-finite coordinates are written as `null` and read back as `NaN`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(
        serialize_with = "number_format::serialize",
        deserialize_with = "number_format::deserialize"
    )]
    latitude: f64,
    #[serde(
        serialize_with = "number_format::serialize",
        deserialize_with = "number_format::deserialize"
    )]
    longitude: f64,
    /// Short label, e.g. `"UberHQ"`. Rendered as `nickname` in deep links.
    address_line1: String,
    /// Full formatted address, e.g. `"1455 Market St, San Francisco, CA 94103"`.
    /// Rendered as `formatted_address` in deep links.
    address_line2: String,
}

impl Location {
    /// Creates a new Location.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let hq = Location::new(
    ///     37.775818,
    ///     -122.418028,
    ///     "UberHQ",
    ///     "1455 Market St, San Francisco, CA 94103",
    /// );
    /// ```
    pub fn new(
        latitude: f64,
        longitude: f64,
        address_line1: impl Into<String>,
        address_line2: impl Into<String>,
    ) -> Self {
        Self {
            latitude,
            longitude,
            address_line1: address_line1.into(),
            address_line2: address_line2.into(),
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn address_line1(&self) -> &str {
        &self.address_line1
    }

    pub fn address_line2(&self) -> &str {
        &self.address_line2
    }

    /// Renders the JSON object embedded in web links.
    pub fn to_json(&self) -> String {
        // Every field serializes to a JSON scalar; number_format emits valid number text.
        serde_json::to_string(self).expect("location always serializes to JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uber_hq() -> Location {
        Location::new(
            37.775818,
            -122.418028,
            "UberHQ",
            "1455 Market St, San Francisco, CA 94103",
        )
    }

    #[test]
    fn test_location_creation() {
        let location = uber_hq();

        assert_eq!(location.latitude(), 37.775818);
        assert_eq!(location.longitude(), -122.418028);
        assert_eq!(location.address_line1(), "UberHQ");
        assert_eq!(
            location.address_line2(),
            "1455 Market St, San Francisco, CA 94103"
        );
    }

    #[test]
    fn test_location_json_key_order() {
        assert_eq!(
            uber_hq().to_json(),
            r#"{"latitude":37.775818,"longitude":-122.418028,"addressLine1":"UberHQ","addressLine2":"1455 Market St, San Francisco, CA 94103"}"#
        );
    }

    #[test]
    fn test_location_json_integral_coordinates() {
        let location = Location::new(48.0, 17.0, "The Spot", "Bottova 2/A, 811 09 Bratislava");
        assert_eq!(
            location.to_json(),
            r#"{"latitude":48,"longitude":17,"addressLine1":"The Spot","addressLine2":"Bottova 2/A, 811 09 Bratislava"}"#
        );
    }

    #[test]
    fn test_location_json_escapes_strings() {
        let location = Location::new(1.5, 2.5, "Joe's \"Bar\"", "");
        assert_eq!(
            location.to_json(),
            r#"{"latitude":1.5,"longitude":2.5,"addressLine1":"Joe's \"Bar\"","addressLine2":""}"#
        );
    }

    #[test]
    fn test_location_json_nan_is_null() {
        let location = Location::new(f64::NAN, 0.0, "a", "b");
        assert_eq!(
            location.to_json(),
            r#"{"latitude":null,"longitude":0,"addressLine1":"a","addressLine2":"b"}"#
        );
    }

    #[test]
    fn test_location_deserialize() {
        let location: Location = serde_json::from_str(
            r#"{"latitude":37.802374,"longitude":-122.405818,"addressLine1":"Coit Tower","addressLine2":"1 Telegraph Hill Blvd, San Francisco, CA 94133"}"#,
        )
        .unwrap();

        assert_eq!(location.latitude(), 37.802374);
        assert_eq!(location.longitude(), -122.405818);
        assert_eq!(location.address_line1(), "Coit Tower");
    }

    #[test]
    fn test_location_deserialize_null_coordinate() {
        let location: Location = serde_json::from_str(
            r#"{"latitude":null,"longitude":0,"addressLine1":"a","addressLine2":"b"}"#,
        )
        .unwrap();

        assert!(location.latitude().is_nan());
        assert_eq!(location.longitude(), 0.0);
    }

    #[test]
    fn test_location_deserialize_requires_all_fields() {
        let result = serde_json::from_str::<Location>(r#"{"latitude":1,"longitude":2}"#);
        assert!(result.is_err());
    }
}
