// Catalog relay routes
use axum::{
    extract::{RawQuery, State},
    http::Uri,
    routing::{get, MethodRouter},
    Router,
};

use crate::controllers::RelayController;
use crate::models::route::RouteDescriptor;

/// One GET handler per descriptor, all backed by the same forwarder.
pub fn relay_routes(routes: &'static [RouteDescriptor]) -> Router<RelayController> {
    routes
        .iter()
        .fold(Router::new(), |router, route| router.route(route.path, relay_handler(route)))
}

// Captures and query are read from the raw request so nothing is decoded twice
// and no extractor can reject the request before it reaches the upstream.
fn relay_handler(route: &'static RouteDescriptor) -> MethodRouter<RelayController> {
    get(
        move |State(relay): State<RelayController>, uri: Uri, RawQuery(raw_query): RawQuery| async move {
            let captures = route.raw_captures(uri.path());
            let query = parse_query(raw_query.as_deref());
            relay.forward(route, &captures, &query).await
        },
    )
}

/// Lossy form decoding; repeated keys are kept in request order.
pub fn parse_query(raw: Option<&str>) -> Vec<(String, String)> {
    raw.map(|q| {
        url::form_urlencoded::parse(q.as_bytes())
            .into_owned()
            .collect()
    })
    .unwrap_or_default()
}
