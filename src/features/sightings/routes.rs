use std::sync::Arc;

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post},
    Router,
};

use crate::core::middleware::auth_middleware;
use crate::features::auth::TokenValidator;
use crate::features::sightings::handlers;
use crate::features::sightings::services::SightingService;

/// Public read routes
pub fn public_routes(service: Arc<SightingService>) -> Router {
    Router::new()
        .route("/api/sightings", get(handlers::list_sightings))
        .with_state(service)
}

/// Write routes, guarded by token authentication
pub fn protected_routes(service: Arc<SightingService>, validator: Arc<TokenValidator>) -> Router {
    Router::new()
        .route("/api/sightings", post(handlers::create_sighting))
        .route("/api/sightings/{id}", delete(handlers::delete_sighting))
        .route_layer(from_fn_with_state(validator, auth_middleware))
        .with_state(service)
}
