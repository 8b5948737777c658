use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One row of the sightings table, newest first
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SightingListItemDto {
    pub id: Uuid,
    pub animal_id: i32,
    pub animal_name: String,
    pub logo_path: String,
    /// ISO-8601 timestamp with explicit UTC offset
    pub date_time: String,
    pub latitude: f64,
    pub longitude: f64,
    pub age_hours: f64,
    /// Age rounded to whole hours, e.g. "12 hours"
    pub age: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SightingStatsDto {
    pub total: i64,
    /// Timestamp of the newest sighting, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_recent: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SightingListDto {
    pub sightings: Vec<SightingListItemDto>,
    pub stats: SightingStatsDto,
}

/// Returned after a sighting was recorded
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SightingCreatedDto {
    pub id: Uuid,
    pub animal_id: i32,
    pub date_time: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SightingDeletedDto {
    pub id: Uuid,
    pub deleted: bool,
}
