//! # Ride Link
//!
//! Builds the two outbound links for a ride request: the mobile web fallback
//! URL and the native app deep link.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Ride request entities and the [`LinkRequest`] builder
//! - **Configuration** ([`config`]) - [`LinkOptions`], the JSON-loadable construction options
//! - **Utilities** ([`utils`]) - Query-string and number encoding
//!
//! ## Quick Start
//!
//! ```ignore
//! use ride_link::prelude::*;
//!
//! let mut request = LinkRequest::new();
//! request
//!     .set_pickup((-122.418028, 37.775818, "UberHQ", "1455 Market St, San Francisco, CA 94103"))
//!     .set_drop(Location::new(
//!         37.802374,
//!         -122.405818,
//!         "Coit Tower",
//!         "1 Telegraph Hill Blvd, San Francisco, CA 94133",
//!     ))
//!     .set_product_id("a1111c8c-c720-46c3-8534-2fcdd730040d")
//!     .set_client_id("your-client-id");
//!
//! let web = request.web_url();     // https://m.uber.com/looking?pickup=...
//! let app = request.deep_link();   // uber://riderequest?pickup%5Blatitude%5D=...
//! ```
//!
//! ## Logging
//!
//! Rendering emits `tracing` debug events; the library installs no subscriber.

pub mod config;
pub mod domain;
pub mod error;
pub mod utils;

pub use config::LinkOptions;
pub use domain::LinkRequest;
pub use error::LinkError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::config::LinkOptions;
    pub use crate::domain::entities::{Location, PickupArgs, PickupSpec};
    pub use crate::domain::{DEEP_LINK_BASE, LinkRequest, WEB_URL_BASE};
    pub use crate::error::LinkError;
}
