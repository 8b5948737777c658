use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::animals::models::Animal;
use crate::features::sightings::validator::ValidatedSighting;

/// Database model for a sighting
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Sighting {
    pub id: Uuid,
    pub date_time: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub animal_id: i32,
}

/// Values needed to record a sighting; the store assigns the id
#[derive(Debug, Clone, PartialEq)]
pub struct NewSighting {
    pub animal_id: i32,
    pub date_time: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<ValidatedSighting> for NewSighting {
    fn from(v: ValidatedSighting) -> Self {
        Self {
            animal_id: v.animal_id,
            date_time: v.timestamp,
            latitude: v.latitude,
            longitude: v.longitude,
        }
    }
}

/// A sighting already joined to its animal
#[derive(Debug, Clone, PartialEq)]
pub struct SightingWithAnimal {
    pub id: Uuid,
    pub date_time: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub animal: Animal,
}

impl SightingWithAnimal {
    pub fn join(sighting: Sighting, animal: Animal) -> Self {
        Self {
            id: sighting.id,
            date_time: sighting.date_time,
            latitude: sighting.latitude,
            longitude: sighting.longitude,
            animal,
        }
    }
}

/// Flat row of the sightings/animals join
#[derive(Debug, Clone, FromRow)]
pub struct SightingRow {
    pub id: Uuid,
    pub date_time: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub animal_id: i32,
    pub animal_name: String,
    pub animal_logo_path: String,
    pub animal_pin_path: String,
}

impl From<SightingRow> for SightingWithAnimal {
    fn from(row: SightingRow) -> Self {
        Self {
            id: row.id,
            date_time: row.date_time,
            latitude: row.latitude,
            longitude: row.longitude,
            animal: Animal {
                id: row.animal_id,
                name: row.animal_name,
                logo_path: row.animal_logo_path,
                pin_path: row.animal_pin_path,
            },
        }
    }
}
