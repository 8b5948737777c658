#[cfg(test)]
use crate::core::config::MapConfig;
#[cfg(test)]
use crate::core::router::{api_routes, Services};
#[cfg(test)]
use crate::features::animals::models::Animal;
#[cfg(test)]
use crate::features::animals::services::AnimalService;
#[cfg(test)]
use crate::features::sightings::models::{NewSighting, SightingWithAnimal};
#[cfg(test)]
use crate::modules::store::{InMemorySightingStore, SightingStore};
#[cfg(test)]
use axum::Router;
#[cfg(test)]
use chrono::{DateTime, Duration, Utc};
#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
pub const TEST_TOKEN: &str = "test-token-0042";

#[cfg(test)]
pub fn sample_animal(id: i32, name: &str) -> Animal {
    let slug = name.to_lowercase().replace(' ', "");
    Animal {
        id,
        name: name.to_string(),
        logo_path: format!("/static/wildatlas/images/{}_logo.svg", slug),
        pin_path: format!("/static/wildatlas/images/{}_pin.svg", slug),
    }
}

#[cfg(test)]
pub fn sighting_at(
    animal: &Animal,
    date_time: DateTime<Utc>,
    latitude: f64,
    longitude: f64,
) -> SightingWithAnimal {
    SightingWithAnimal {
        id: uuid::Uuid::new_v4(),
        date_time,
        latitude,
        longitude,
        animal: animal.clone(),
    }
}

/// In-memory store with the reference animals and one Bear sighting per
/// coordinate pair, the first being the newest
#[cfg(test)]
pub async fn seeded_store(coordinates: &[(f64, f64)]) -> Arc<InMemorySightingStore> {
    let store = Arc::new(InMemorySightingStore::new());
    AnimalService::new(store.clone())
        .register_defaults("/static/wildatlas/images")
        .await
        .expect("default animals should register");

    let now = Utc::now();
    for (i, (latitude, longitude)) in coordinates.iter().enumerate() {
        store
            .create_sighting(NewSighting {
                animal_id: 1,
                date_time: now - Duration::hours(i as i64 + 1),
                latitude: *latitude,
                longitude: *longitude,
            })
            .await
            .expect("sighting should be stored");
    }

    store
}

/// API router over the given store, accepting `TEST_TOKEN`
#[cfg(test)]
pub fn test_router(store: Arc<InMemorySightingStore>) -> Router {
    let map = MapConfig {
        resources_dir: std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources"),
        ..MapConfig::default()
    };
    let services = Services::new(store, map, vec![TEST_TOKEN.to_string()]);
    api_routes(&services)
}
