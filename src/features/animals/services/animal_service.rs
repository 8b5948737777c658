use chrono::Utc;
use std::sync::Arc;
use validator::Validate;

use crate::core::config::SeedConfig;
use crate::core::error::{AppError, Result};
use crate::features::animals::dtos::AnimalResponseDto;
use crate::features::animals::seed;
use crate::modules::store::SightingStore;

/// Service for animal reference data
pub struct AnimalService {
    store: Arc<dyn SightingStore>,
}

impl AnimalService {
    pub fn new(store: Arc<dyn SightingStore>) -> Self {
        Self { store }
    }

    /// List all registered animals
    pub async fn list(&self) -> Result<Vec<AnimalResponseDto>> {
        let animals = self.store.list_animals().await?;
        Ok(animals.into_iter().map(|a| a.into()).collect())
    }

    /// Register the reference species, skipping names that already exist.
    ///
    /// Returns how many animals were newly registered.
    pub async fn register_defaults(&self, images_path: &str) -> Result<usize> {
        let mut registered = 0;

        for animal in seed::default_animals(images_path) {
            animal
                .validate()
                .map_err(|e| AppError::Validation(format!("{}: {}", animal.name, e)))?;

            let name = animal.name.clone();
            if self.store.register_animal(animal).await? {
                tracing::info!("Registered animal: {}", name);
                registered += 1;
            }
        }

        Ok(registered)
    }

    /// Startup initialisation: register species and, on the very first run,
    /// add one demo sighting per animal.
    pub async fn initialize(&self, images_path: &str, seed_config: &SeedConfig) -> Result<()> {
        let first_time = self.store.list_animals().await?.is_empty();

        let registered = self.register_defaults(images_path).await?;
        tracing::info!("Animal registry ready ({} newly registered)", registered);

        if first_time && seed_config.random_sightings {
            let animals = self.store.list_animals().await?;
            let sightings = seed::random_sightings(&animals, Utc::now(), &mut rand::rng());
            let count = sightings.len();

            for sighting in sightings {
                self.store.create_sighting(sighting).await?;
            }
            tracing::info!("Generated {} random sightings", count);
        }

        Ok(())
    }
}
