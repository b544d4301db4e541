//! Core value types of a ride request.
//!
//! - [`Location`] - A point with its nickname and formatted address
//! - [`PickupSpec`] - An explicit pickup location or the current-location keyword
//! - [`PickupArgs`] - The call shapes accepted when setting a pickup

pub mod location;
pub mod pickup;

pub use location::Location;
pub use pickup::{MY_LOCATION, PickupArgs, PickupSpec};
