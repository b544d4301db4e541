//! Ride request builder and its two link renderings.

use crate::config::LinkOptions;
use crate::domain::entities::{Location, MY_LOCATION, PickupArgs, PickupSpec};
use crate::utils::number_format::format_number;
use crate::utils::query_encoder::QueryEncoder;

/// Base of the mobile web fallback link.
pub const WEB_URL_BASE: &str = "https://m.uber.com/looking";

/// Base of the native app deep link.
pub const DEEP_LINK_BASE: &str = "uber://riderequest";

/// Accumulates ride request fields and renders them as links.
///
/// Every field is optional. Setters mutate in place and return `&mut Self` so
/// calls can be chained:
///
/// ```ignore
/// let mut request = LinkRequest::new();
/// request
///     .set_pickup(PickupSpec::MyLocation)
///     .set_product_id("a1111c8c-c720-46c3-8534-2fcdd730040d")
///     .set_client_id("your-client-id");
///
/// assert_eq!(
///     request.web_url(),
///     "https://m.uber.com/looking?pickup=my_location&product_id=a1111c8c-c720-46c3-8534-2fcdd730040d&client_id=your-client-id"
/// );
/// ```
///
/// Parameters are rendered only for fields that are set; empty strings count
/// as unset. `client_id` is web-only, `link_text` and `partner_deeplink` are
/// deep-link-only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkRequest {
    client_id: Option<String>,
    pickup: Option<PickupSpec>,
    drop: Option<Location>,
    product_id: Option<String>,
    link_text: Option<String>,
    partner_deeplink: Option<String>,
}

impl LinkRequest {
    /// Creates a request with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a request pre-populated from options. No validation is applied.
    pub fn from_options(options: LinkOptions) -> Self {
        let LinkOptions {
            pickup,
            drop,
            product_id,
            link_text,
            partner_deeplink,
            client_id,
        } = options;

        Self {
            client_id,
            pickup,
            drop,
            product_id,
            link_text,
            partner_deeplink,
        }
    }

    /// Snapshots the current fields as options.
    pub fn options(&self) -> LinkOptions {
        LinkOptions {
            pickup: self.pickup.clone(),
            drop: self.drop.clone(),
            product_id: self.product_id.clone(),
            link_text: self.link_text.clone(),
            partner_deeplink: self.partner_deeplink.clone(),
            client_id: self.client_id.clone(),
        }
    }

    /// Sets the pickup.
    ///
    /// Accepts either a `(longitude, latitude, address_line1, address_line2)`
    /// tuple (note the longitude-first order) or a single [`Location`] /
    /// [`PickupSpec`].
    ///
    /// # Incomplete coordinates
    ///
    /// [`PickupArgs::Coordinates`] with a missing latitude or address line does
    /// not form a location. The leading number is then taken as the whole
    /// pickup value. Other builders of these links store that bare number and
    /// emit it as `pickup=<number>` in the web URL (their deep link fails
    /// outright). A number is not a valid pickup here, so the pickup ends up
    /// unset, nothing is rendered for it, and any previous pickup is lost.
    /// This is not reported as an error; a warning event is emitted.
    pub fn set_pickup(&mut self, pickup: impl Into<PickupArgs>) -> &mut Self {
        let args = pickup.into();
        if args.is_incomplete() {
            tracing::warn!(?args, "incomplete pickup coordinates, pickup cleared");
        }
        self.pickup = args.resolve();
        self
    }

    pub fn set_drop(&mut self, location: Location) -> &mut Self {
        self.drop = Some(location);
        self
    }

    pub fn set_product_id(&mut self, product_id: impl Into<String>) -> &mut Self {
        self.product_id = Some(product_id.into());
        self
    }

    /// Sets the text the app shows on the button leading back to the partner.
    pub fn set_link_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.link_text = Some(text.into());
        self
    }

    /// Sets the URI the app uses to navigate back to the caller.
    pub fn set_partner_deeplink(&mut self, deeplink: impl Into<String>) -> &mut Self {
        self.partner_deeplink = Some(deeplink.into());
        self
    }

    pub fn set_client_id(&mut self, client_id: impl Into<String>) -> &mut Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn pickup(&self) -> Option<&PickupSpec> {
        self.pickup.as_ref()
    }

    pub fn drop_off(&self) -> Option<&Location> {
        self.drop.as_ref()
    }

    pub fn product_id(&self) -> Option<&str> {
        self.product_id.as_deref()
    }

    pub fn link_text(&self) -> Option<&str> {
        self.link_text.as_deref()
    }

    pub fn partner_deeplink(&self) -> Option<&str> {
        self.partner_deeplink.as_deref()
    }

    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    /// Renders the mobile web fallback link.
    ///
    /// Parameter order: `pickup`, `drop[0]`, `product_id`, `client_id`. Locations
    /// are embedded as JSON objects; the current-location pickup is the literal
    /// `my_location`.
    pub fn web_url(&self) -> String {
        let mut query = QueryEncoder::new();

        match &self.pickup {
            Some(PickupSpec::MyLocation) => {
                query.append("pickup", MY_LOCATION);
            }
            Some(PickupSpec::Location(location)) => {
                query.append("pickup", &location.to_json());
            }
            None => {}
        }

        if let Some(drop) = &self.drop {
            query.append("drop[0]", &drop.to_json());
        }

        query
            .append_present("product_id", self.product_id())
            .append_present("client_id", self.client_id());

        tracing::debug!(params = query.len(), "rendered web url");
        query.finish_with_base(WEB_URL_BASE)
    }

    /// Renders the native app deep link.
    ///
    /// Parameter order: pickup group, dropoff group, `product_id`, `link_text`,
    /// `partner_deeplink`. Locations are flattened into bracketed keys
    /// (`pickup[latitude]`, `pickup[longitude]`, `pickup[nickname]`,
    /// `pickup[formatted_address]`); the current-location pickup is the single
    /// parameter `pickup=my_location`.
    pub fn deep_link(&self) -> String {
        let mut query = QueryEncoder::new();

        match &self.pickup {
            Some(PickupSpec::MyLocation) => {
                query.append("pickup", MY_LOCATION);
            }
            Some(PickupSpec::Location(location)) => {
                append_location(&mut query, "pickup", location);
            }
            None => {}
        }

        if let Some(drop) = &self.drop {
            append_location(&mut query, "dropoff", drop);
        }

        query
            .append_present("product_id", self.product_id())
            .append_present("link_text", self.link_text())
            .append_present("partner_deeplink", self.partner_deeplink());

        tracing::debug!(params = query.len(), "rendered deep link");
        query.finish_with_base(DEEP_LINK_BASE)
    }
}

impl From<LinkOptions> for LinkRequest {
    fn from(options: LinkOptions) -> Self {
        Self::from_options(options)
    }
}

fn append_location(query: &mut QueryEncoder, prefix: &str, location: &Location) {
    query
        .append(
            &format!("{prefix}[latitude]"),
            &format_number(location.latitude()),
        )
        .append(
            &format!("{prefix}[longitude]"),
            &format_number(location.longitude()),
        )
        .append(&format!("{prefix}[nickname]"), location.address_line1())
        .append(
            &format!("{prefix}[formatted_address]"),
            location.address_line2(),
        );
}
