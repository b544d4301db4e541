#![allow(dead_code)]

use ride_link::prelude::*;

pub const PRODUCT_ID: &str = "a1111c8c-c720-46c3-8534-2fcdd730040d";
pub const LINK_TEXT: &str = "View team roster";
pub const PARTNER_DEEPLINK: &str = "partner://team/9383";
pub const CLIENT_ID: &str = "your-client-id";

pub fn uber_hq() -> Location {
    Location::new(
        37.775818,
        -122.418028,
        "UberHQ",
        "1455 Market St, San Francisco, CA 94103",
    )
}

pub fn coit_tower() -> Location {
    Location::new(
        37.802374,
        -122.405818,
        "Coit Tower",
        "1 Telegraph Hill Blvd, San Francisco, CA 94133",
    )
}

/// Request with every field set, built through setters.
pub fn full_request() -> LinkRequest {
    let mut request = LinkRequest::new();
    request
        .set_pickup(uber_hq())
        .set_drop(coit_tower())
        .set_product_id(PRODUCT_ID)
        .set_link_text(LINK_TEXT)
        .set_partner_deeplink(PARTNER_DEEPLINK)
        .set_client_id(CLIENT_ID);
    request
}

/// Options equivalent to [`full_request`].
pub fn full_options() -> LinkOptions {
    LinkOptions {
        pickup: Some(PickupSpec::Location(uber_hq())),
        drop: Some(coit_tower()),
        product_id: Some(PRODUCT_ID.to_string()),
        link_text: Some(LINK_TEXT.to_string()),
        partner_deeplink: Some(PARTNER_DEEPLINK.to_string()),
        client_id: Some(CLIENT_ID.to_string()),
    }
}
