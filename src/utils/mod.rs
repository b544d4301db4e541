//! Encoding helpers shared by both link renderings.
//!
//! - [`query_encoder`] - Ordered form-urlencoded query building
//! - [`number_format`] - Number text matching the link platform's parsers

pub mod number_format;
pub mod query_encoder;
