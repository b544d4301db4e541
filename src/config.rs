//! Link options: the construction-time configuration of a [`LinkRequest`].
//!
//! Options are plain data, usually loaded from JSON. Every key is optional:
//!
//! ```json
//! {
//!   "pickup": "my_location",
//!   "drop": {
//!     "latitude": 37.802374,
//!     "longitude": -122.405818,
//!     "addressLine1": "Coit Tower",
//!     "addressLine2": "1 Telegraph Hill Blvd, San Francisco, CA 94133"
//!   },
//!   "productId": "a1111c8c-c720-46c3-8534-2fcdd730040d",
//!   "linkText": "View team roster",
//!   "partnerDeeplink": "partner://team/9383",
//!   "clientId": "your-client-id"
//! }
//! ```
//!
//! ## Keys
//!
//! - `pickup` - `"my_location"` or a location object
//! - `drop` - location object
//! - `productId` (alias `product_id`) - ride product
//! - `linkText` (alias `link_text`) - deep link only
//! - `partnerDeeplink` (alias `partner_deeplink`) - deep link only
//! - `clientId` (alias `client_id`) - web link only
//!
//! Unknown keys are ignored. No value is validated.
//!
//! [`LinkRequest`]: crate::domain::LinkRequest

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::domain::entities::{Location, PickupSpec};
use crate::error::LinkError;

/// Optional fields a [`LinkRequest`](crate::domain::LinkRequest) can be created with.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkOptions {
    pub pickup: Option<PickupSpec>,
    pub drop: Option<Location>,
    #[serde(alias = "product_id")]
    pub product_id: Option<String>,
    #[serde(alias = "link_text")]
    pub link_text: Option<String>,
    #[serde(alias = "partner_deeplink")]
    pub partner_deeplink: Option<String>,
    #[serde(alias = "client_id")]
    pub client_id: Option<String>,
}

impl LinkOptions {
    /// Parses options from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::InvalidOptions`] if the input is not a JSON object of
    /// the expected shape, including a `pickup` string other than `my_location`.
    pub fn from_json(input: &str) -> Result<Self, LinkError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Serializes options to JSON, omitting unset fields.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::InvalidOptions`] if serialization fails.
    pub fn to_json(&self) -> Result<String, LinkError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Returns true when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Logs a summary of the options (client id masked).
    pub fn log_summary(&self) {
        if self.is_empty() {
            tracing::debug!("link options loaded, all fields unset");
            return;
        }

        let pickup = match &self.pickup {
            Some(PickupSpec::MyLocation) => "my_location",
            Some(PickupSpec::Location(_)) => "location",
            None => "unset",
        };
        let client_id = self
            .client_id
            .as_deref()
            .map_or_else(|| "unset".to_string(), mask_client_id);

        tracing::debug!(
            pickup,
            drop = self.drop.is_some(),
            product_id = self.product_id.as_deref().unwrap_or("unset"),
            link_text = self.link_text.is_some(),
            partner_deeplink = self.partner_deeplink.as_deref().unwrap_or("unset"),
            client_id = %client_id,
            "link options loaded"
        );
    }
}

/// Masks a client id for logging, keeping the first four characters.
///
/// - `your-client-id` → `your***`
/// - `abc` → `***`
fn mask_client_id(client_id: &str) -> String {
    const VISIBLE: usize = 4;

    if client_id.chars().count() <= VISIBLE {
        return "***".to_string();
    }

    let visible: String = client_id.chars().take(VISIBLE).collect();
    format!("{visible}***")
}
