use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::SightingStore;
use crate::core::error::{AppError, Result};
use crate::features::animals::models::{Animal, NewAnimal};
use crate::features::sightings::models::{NewSighting, SightingRow, SightingWithAnimal};

/// Postgres-backed store
pub struct PostgresSightingStore {
    pool: PgPool,
}

impl PostgresSightingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SightingStore for PostgresSightingStore {
    async fn create_sighting(&self, sighting: NewSighting) -> Result<Uuid> {
        let (id,): (Uuid,) = sqlx::query_as(
            r#"
            INSERT INTO sightings (id, date_time, latitude, longitude, animal_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(sighting.date_time)
        .bind(sighting.latitude)
        .bind(sighting.longitude)
        .bind(sighting.animal_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create sighting: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(id)
    }

    async fn delete_sighting(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM sightings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete sighting: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_sightings(&self) -> Result<Vec<SightingWithAnimal>> {
        let rows = sqlx::query_as::<_, SightingRow>(
            r#"
            SELECT
                s.id,
                s.date_time,
                s.latitude,
                s.longitude,
                a.id AS animal_id,
                a.name AS animal_name,
                a.logo_path AS animal_logo_path,
                a.pin_path AS animal_pin_path
            FROM sightings s
            JOIN animals a ON a.id = s.animal_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list sightings: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows.into_iter().map(SightingWithAnimal::from).collect())
    }

    async fn list_animals(&self) -> Result<Vec<Animal>> {
        sqlx::query_as::<_, Animal>(
            "SELECT id, name, logo_path, pin_path FROM animals ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list animals: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find_animal(&self, id: i32) -> Result<Option<Animal>> {
        sqlx::query_as::<_, Animal>(
            "SELECT id, name, logo_path, pin_path FROM animals WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get animal by id: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn register_animal(&self, animal: NewAnimal) -> Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO animals (name, logo_path, pin_path)
            VALUES ($1, $2, $3)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(&animal.name)
        .bind(&animal.logo_path)
        .bind(&animal.pin_path)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to register animal {}: {:?}", animal.name, e);
            AppError::Database(e)
        })?;

        Ok(result.rows_affected() > 0)
    }
}
