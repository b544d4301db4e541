//! Domain layer: ride request entities and the link builder.
//!
//! - [`entities`] - Location and pickup value types
//! - [`link_request`] - [`LinkRequest`], which accumulates request fields and
//!   renders the web fallback URL and the native deep link
//!
//! Rendering is a pure function of the current fields and is recomputed on
//! every call.

pub mod entities;
pub mod link_request;

pub use link_request::{DEEP_LINK_BASE, LinkRequest, WEB_URL_BASE};
