use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::animals::models::Animal;

/// Response DTO for animal
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnimalResponseDto {
    pub id: i32,
    pub name: String,
    pub logo_path: String,
    pub pin_path: String,
}

impl From<Animal> for AnimalResponseDto {
    fn from(a: Animal) -> Self {
        Self {
            id: a.id,
            name: a.name,
            logo_path: a.logo_path,
            pin_path: a.pin_path,
        }
    }
}
