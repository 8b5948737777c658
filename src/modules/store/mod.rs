//! Sighting store
//!
//! Services receive an `Arc<dyn SightingStore>` at construction; nothing
//! looks the store up from global state. Reads return sightings already
//! joined to their animal so downstream formatting never fetches.

mod memory;
mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::animals::models::{Animal, NewAnimal};
use crate::features::sightings::models::{NewSighting, SightingWithAnimal};

pub use memory::InMemorySightingStore;
pub use postgres::PostgresSightingStore;

#[async_trait]
pub trait SightingStore: Send + Sync {
    /// Record a sighting and return its new id
    async fn create_sighting(&self, sighting: NewSighting) -> Result<Uuid>;

    /// Delete a sighting; `false` when no sighting had that id
    async fn delete_sighting(&self, id: Uuid) -> Result<bool>;

    /// Every sighting joined to its animal
    async fn list_sightings(&self) -> Result<Vec<SightingWithAnimal>>;

    /// Every registered animal, ordered by id
    async fn list_animals(&self) -> Result<Vec<Animal>>;

    async fn find_animal(&self, id: i32) -> Result<Option<Animal>>;

    /// Register an animal unless one with the same name exists; `true` when inserted
    async fn register_animal(&self, animal: NewAnimal) -> Result<bool>;
}
