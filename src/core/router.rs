use axum::{http::StatusCode, routing::get, Router};
use std::sync::Arc;

use crate::core::config::MapConfig;
use crate::features::animals::{routes as animals_routes, AnimalService};
use crate::features::auth::TokenValidator;
use crate::features::map::{routes as map_routes, MapService};
use crate::features::sightings::{routes as sightings_routes, SightingService};
use crate::modules::store::SightingStore;

/// Feature services sharing one store
pub struct Services {
    pub animals: Arc<AnimalService>,
    pub sightings: Arc<SightingService>,
    pub map: Arc<MapService>,
    pub token_validator: Arc<TokenValidator>,
}

impl Services {
    pub fn new(store: Arc<dyn SightingStore>, map: MapConfig, api_tokens: Vec<String>) -> Self {
        Self {
            animals: Arc::new(AnimalService::new(Arc::clone(&store))),
            sightings: Arc::new(SightingService::new(Arc::clone(&store))),
            map: Arc::new(MapService::new(store, map)),
            token_validator: Arc::new(TokenValidator::new(api_tokens)),
        }
    }
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// API routes without the outer HTTP layers
pub fn api_routes(services: &Services) -> Router {
    let protected_routes = sightings_routes::protected_routes(
        Arc::clone(&services.sightings),
        Arc::clone(&services.token_validator),
    );

    let public_routes = Router::new()
        .merge(animals_routes::routes(Arc::clone(&services.animals)))
        .merge(sightings_routes::public_routes(Arc::clone(&services.sightings)))
        .merge(map_routes::routes(Arc::clone(&services.map)));

    Router::new()
        .merge(protected_routes)
        .merge(public_routes)
        .route("/health", get(health_check))
}
