use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::sightings::dtos::{SightingCreatedDto, SightingListDto};
use crate::features::sightings::listing;
use crate::features::sightings::models::NewSighting;
use crate::features::sightings::validator::{
    validate_sighting, RawSightingForm, ValidationCategory, ValidationIssue, INVALID_ANIMAL_ID,
};
use crate::modules::store::SightingStore;
use crate::shared::time::iso_timestamp;

/// Service for recording, listing and deleting sightings
pub struct SightingService {
    store: Arc<dyn SightingStore>,
}

impl SightingService {
    pub fn new(store: Arc<dyn SightingStore>) -> Self {
        Self { store }
    }

    /// Validate a raw submission and record it.
    ///
    /// All rule violations come back together as `AppError::Rejected`.
    pub async fn submit(&self, form: RawSightingForm) -> Result<SightingCreatedDto> {
        let validated = validate_sighting(&form)
            .into_result()
            .map_err(AppError::Rejected)?;

        if self.store.find_animal(validated.animal_id).await?.is_none() {
            tracing::debug!("Rejected sighting for unknown animal {}", validated.animal_id);
            return Err(AppError::Rejected(vec![ValidationIssue::new(
                ValidationCategory::AnimalId,
                INVALID_ANIMAL_ID,
            )]));
        }

        let sighting = NewSighting::from(validated);
        let id = self.store.create_sighting(sighting.clone()).await?;

        tracing::info!(
            "Sighting created: id={}, animal_id={}, lat={}, lon={}",
            id,
            sighting.animal_id,
            sighting.latitude,
            sighting.longitude
        );

        Ok(SightingCreatedDto {
            id,
            animal_id: sighting.animal_id,
            date_time: iso_timestamp(sighting.date_time),
            latitude: sighting.latitude,
            longitude: sighting.longitude,
        })
    }

    /// Delete a sighting; `false` when it did not exist
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let deleted = self.store.delete_sighting(id).await?;
        if deleted {
            tracing::info!("Sighting deleted: id={}", id);
        } else {
            tracing::debug!("Delete requested for unknown sighting {}", id);
        }
        Ok(deleted)
    }

    /// All sightings, newest first
    pub async fn list(&self) -> Result<SightingListDto> {
        let sightings = self.store.list_sightings().await?;
        Ok(listing::format_listing(&sightings, Utc::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::seeded_store;

    fn form(date_time: &str, animal_id: &str, latitude: &str, longitude: &str) -> RawSightingForm {
        RawSightingForm {
            date_time: Some(date_time.to_string()),
            animal_id: Some(animal_id.to_string()),
            latitude: Some(latitude.to_string()),
            longitude: Some(longitude.to_string()),
        }
    }

    #[tokio::test]
    async fn test_submit_records_sighting() {
        let store = seeded_store(&[]).await;
        let service = SightingService::new(store.clone());

        let created = service
            .submit(form("2024-01-01T07:00:00-07:00", "1", "44.6", "-110.5"))
            .await
            .unwrap();

        assert_eq!(created.animal_id, 1);
        assert_eq!(created.date_time, "2024-01-01T14:00:00+00:00");

        let stored = store.list_sightings().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, created.id);
        assert_eq!(stored[0].latitude, 44.6);
    }

    #[tokio::test]
    async fn test_submit_collects_every_issue() {
        let store = seeded_store(&[]).await;
        let service = SightingService::new(store.clone());

        let result = service
            .submit(form("2999-01-01T00:00:00Z", "1", "91", "181"))
            .await;

        match result {
            Err(AppError::Rejected(issues)) => assert_eq!(issues.len(), 3),
            other => panic!("expected rejection, got {:?}", other),
        }
        assert!(store.list_sightings().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_rejects_unknown_animal() {
        let store = seeded_store(&[]).await;
        let service = SightingService::new(store);

        let result = service
            .submit(form("2024-01-01T00:00:00Z", "999", "44.6", "-110.5"))
            .await;

        match result {
            Err(AppError::Rejected(issues)) => {
                assert_eq!(issues[0].category, ValidationCategory::AnimalId);
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_unknown_sighting_is_noop() {
        let store = seeded_store(&[(44.5, -110.5)]).await;
        let service = SightingService::new(store.clone());

        assert!(!service.delete(Uuid::new_v4()).await.unwrap());
        assert_eq!(store.list_sightings().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let store = seeded_store(&[(44.5, -110.5), (44.6, -110.4), (44.7, -110.3)]).await;
        let service = SightingService::new(store);

        let listing = service.list().await.unwrap();

        assert_eq!(listing.stats.total, 3);
        for pair in listing.sightings.windows(2) {
            assert!(pair[0].date_time >= pair[1].date_time);
        }
    }
}
