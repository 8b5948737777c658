use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::animals::handlers;
use crate::features::animals::services::AnimalService;

/// Create routes for the animals feature
pub fn routes(service: Arc<AnimalService>) -> Router {
    Router::new()
        .route("/api/animals", get(handlers::list_animals))
        .with_state(service)
}
