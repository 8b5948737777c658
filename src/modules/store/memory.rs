use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::SightingStore;
use crate::core::error::{AppError, Result};
use crate::features::animals::models::{Animal, NewAnimal};
use crate::features::sightings::models::{NewSighting, Sighting, SightingWithAnimal};

#[derive(Default)]
struct Tables {
    animals: BTreeMap<i32, Animal>,
    sightings: Vec<Sighting>,
}

/// Process-local store used when no database is configured, and by tests
#[derive(Default)]
pub struct InMemorySightingStore {
    tables: RwLock<Tables>,
}

impl InMemorySightingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SightingStore for InMemorySightingStore {
    async fn create_sighting(&self, sighting: NewSighting) -> Result<Uuid> {
        let mut tables = self.tables.write().await;

        // Same guarantee the foreign key gives in Postgres
        if !tables.animals.contains_key(&sighting.animal_id) {
            return Err(AppError::Conflict(format!(
                "Animal {} does not exist",
                sighting.animal_id
            )));
        }

        let id = Uuid::new_v4();
        tables.sightings.push(Sighting {
            id,
            date_time: sighting.date_time,
            latitude: sighting.latitude,
            longitude: sighting.longitude,
            animal_id: sighting.animal_id,
        });

        Ok(id)
    }

    async fn delete_sighting(&self, id: Uuid) -> Result<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.sightings.len();
        tables.sightings.retain(|s| s.id != id);
        Ok(tables.sightings.len() < before)
    }

    async fn list_sightings(&self) -> Result<Vec<SightingWithAnimal>> {
        let tables = self.tables.read().await;
        Ok(tables
            .sightings
            .iter()
            .filter_map(|s| {
                tables
                    .animals
                    .get(&s.animal_id)
                    .map(|a| SightingWithAnimal::join(s.clone(), a.clone()))
            })
            .collect())
    }

    async fn list_animals(&self) -> Result<Vec<Animal>> {
        Ok(self.tables.read().await.animals.values().cloned().collect())
    }

    async fn find_animal(&self, id: i32) -> Result<Option<Animal>> {
        Ok(self.tables.read().await.animals.get(&id).cloned())
    }

    async fn register_animal(&self, animal: NewAnimal) -> Result<bool> {
        let mut tables = self.tables.write().await;
        if tables.animals.values().any(|a| a.name == animal.name) {
            return Ok(false);
        }

        let id = tables.animals.keys().next_back().map_or(1, |last| last + 1);
        tables.animals.insert(
            id,
            Animal {
                id,
                name: animal.name,
                logo_path: animal.logo_path,
                pin_path: animal.pin_path,
            },
        );

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn new_sighting(animal_id: i32) -> NewSighting {
        NewSighting {
            animal_id,
            date_time: Utc::now(),
            latitude: 44.6,
            longitude: -110.5,
        }
    }

    #[tokio::test]
    async fn test_register_animal_is_idempotent_by_name() {
        let store = InMemorySightingStore::new();

        assert!(store
            .register_animal(NewAnimal::with_images("Bear", "/static"))
            .await
            .unwrap());
        assert!(!store
            .register_animal(NewAnimal::with_images("Bear", "/static"))
            .await
            .unwrap());
        assert!(store
            .register_animal(NewAnimal::with_images("Wolf", "/static"))
            .await
            .unwrap());

        let animals = store.list_animals().await.unwrap();
        assert_eq!(
            animals.iter().map(|a| (a.id, a.name.as_str())).collect::<Vec<_>>(),
            vec![(1, "Bear"), (2, "Wolf")]
        );
    }

    #[tokio::test]
    async fn test_create_list_delete_sighting() {
        let store = InMemorySightingStore::new();
        store
            .register_animal(NewAnimal::with_images("Elk", "/static"))
            .await
            .unwrap();

        let id = store.create_sighting(new_sighting(1)).await.unwrap();

        let sightings = store.list_sightings().await.unwrap();
        assert_eq!(sightings.len(), 1);
        assert_eq!(sightings[0].id, id);
        assert_eq!(sightings[0].animal.name, "Elk");

        assert!(store.delete_sighting(id).await.unwrap());
        assert!(!store.delete_sighting(id).await.unwrap());
        assert!(store.list_sightings().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_sighting_requires_existing_animal() {
        let store = InMemorySightingStore::new();
        let result = store.create_sighting(new_sighting(42)).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }
}
