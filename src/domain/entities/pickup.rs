//! Pickup selection and the argument shapes accepted by
//! [`LinkRequest::set_pickup`](crate::domain::LinkRequest::set_pickup).

use std::fmt;

use serde::de::{self, MapAccess, Visitor, value::MapAccessDeserializer};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::entities::Location;
use crate::error::LinkError;

/// Keyword meaning "use the rider's current device position".
pub const MY_LOCATION: &str = "my_location";

/// Where the ride starts.
///
/// Serialized as the string `"my_location"` or as a [`Location`] object.
#[derive(Debug, Clone, PartialEq)]
pub enum PickupSpec {
    /// Explicit pickup point.
    Location(Location),
    /// The rider's current device-reported position.
    MyLocation,
}

impl From<Location> for PickupSpec {
    fn from(location: Location) -> Self {
        Self::Location(location)
    }
}

impl TryFrom<&str> for PickupSpec {
    type Error = LinkError;

    fn try_from(keyword: &str) -> Result<Self, Self::Error> {
        if keyword == MY_LOCATION {
            Ok(Self::MyLocation)
        } else {
            Err(LinkError::UnknownPickupKeyword(keyword.to_string()))
        }
    }
}

impl Serialize for PickupSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Location(location) => location.serialize(serializer),
            Self::MyLocation => serializer.serialize_str(MY_LOCATION),
        }
    }
}

struct PickupVisitor;

impl<'de> Visitor<'de> for PickupVisitor {
    type Value = PickupSpec;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"my_location\" or a location object")
    }

    fn visit_str<E: de::Error>(self, keyword: &str) -> Result<Self::Value, E> {
        PickupSpec::try_from(keyword).map_err(E::custom)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        Location::deserialize(MapAccessDeserializer::new(map)).map(PickupSpec::Location)
    }
}

impl<'de> Deserialize<'de> for PickupSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PickupVisitor)
    }
}

/// Arguments accepted by `set_pickup`.
///
/// Two call shapes exist:
///
/// - [`PickupArgs::Coordinates`]: positional values, **longitude first**, then
///   latitude and the two address lines. Built from a
///   `(longitude, latitude, address_line1, address_line2)` tuple.
/// - [`PickupArgs::Pickup`]: a ready [`PickupSpec`], built from a [`Location`]
///   or [`PickupSpec::MyLocation`].
///
/// `Coordinates` with a missing companion value cannot form a location. See
/// [`PickupArgs::resolve`] for how that case is handled.
#[derive(Debug, Clone, PartialEq)]
pub enum PickupArgs {
    Coordinates {
        longitude: f64,
        latitude: Option<f64>,
        address_line1: Option<String>,
        address_line2: Option<String>,
    },
    Pickup(PickupSpec),
}

impl PickupArgs {
    /// Resolves the arguments into the pickup to store.
    ///
    /// Complete coordinates become a [`Location`] with each value placed in its
    /// named field. Incomplete coordinates fall back to treating the leading
    /// number as the whole pickup value, which no [`PickupSpec`] can hold, so
    /// they resolve to `None`: the caller's previous pickup is discarded rather
    /// than rejected.
    pub fn resolve(self) -> Option<PickupSpec> {
        match self {
            Self::Coordinates {
                longitude,
                latitude: Some(latitude),
                address_line1: Some(address_line1),
                address_line2: Some(address_line2),
            } => Some(PickupSpec::Location(Location::new(
                latitude,
                longitude,
                address_line1,
                address_line2,
            ))),
            Self::Coordinates { .. } => None,
            Self::Pickup(pickup) => Some(pickup),
        }
    }

    /// Returns true for coordinates missing at least one companion value.
    pub fn is_incomplete(&self) -> bool {
        match self {
            Self::Coordinates {
                latitude,
                address_line1,
                address_line2,
                ..
            } => latitude.is_none() || address_line1.is_none() || address_line2.is_none(),
            Self::Pickup(_) => false,
        }
    }
}

impl<A, B> From<(f64, f64, A, B)> for PickupArgs
where
    A: Into<String>,
    B: Into<String>,
{
    fn from((longitude, latitude, address_line1, address_line2): (f64, f64, A, B)) -> Self {
        Self::Coordinates {
            longitude,
            latitude: Some(latitude),
            address_line1: Some(address_line1.into()),
            address_line2: Some(address_line2.into()),
        }
    }
}

impl From<PickupSpec> for PickupArgs {
    fn from(pickup: PickupSpec) -> Self {
        Self::Pickup(pickup)
    }
}

impl From<Location> for PickupArgs {
    fn from(location: Location) -> Self {
        Self::Pickup(PickupSpec::Location(location))
    }
}
