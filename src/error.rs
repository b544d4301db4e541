//! Error types for the serde boundary of the crate.
//!
//! Building links never fails: absent fields are omitted and present values are
//! encoded as-is. Errors only arise when link options are read from JSON.

/// Errors produced while loading link options.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error("Invalid link options: {0}")]
    InvalidOptions(#[from] serde_json::Error),

    #[error("Unknown pickup keyword '{0}', expected 'my_location' or a location object")]
    UnknownPickupKeyword(String),
}
