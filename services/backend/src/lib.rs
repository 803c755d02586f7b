use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod controllers;
pub mod error;
pub mod models;
pub mod routers;
pub mod settings;

use controllers::RelayController;
use models::route::ROUTES;
use routers::{health_check_route, relay_routes, root_route};
use settings::Settings;

/// Assemble the full application: relay routes under `/api`, service routes, open CORS.
pub fn build_app(settings: &Settings) -> Router {
    let relay = RelayController::new(settings.upstream.clone());

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Core routes
        .route("/", get(root_route))
        .route("/health", get(health_check_route))
        // Catalog relay
        .nest("/api", relay_routes(ROUTES))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(relay)
}
