use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::shared::validation::IMAGE_PATH_REGEX;

/// Database model for a registered species
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Animal {
    pub id: i32,
    pub name: String,
    pub logo_path: String,
    pub pin_path: String,
}

/// Reference data for registering a species
#[derive(Debug, Clone, Validate)]
pub struct NewAnimal {
    #[validate(length(min = 1, max = 100, message = "Animal name must be 1-100 characters"))]
    pub name: String,

    #[validate(regex(
        path = *IMAGE_PATH_REGEX,
        message = "Logo path must be an absolute path to an svg or png image"
    ))]
    pub logo_path: String,

    #[validate(regex(
        path = *IMAGE_PATH_REGEX,
        message = "Pin path must be an absolute path to an svg or png image"
    ))]
    pub pin_path: String,
}

impl NewAnimal {
    /// Species with logo and pin images following the `{slug}_logo.svg` / `{slug}_pin.svg` naming
    pub fn with_images(name: &str, images_path: &str) -> Self {
        let slug: String = name
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();

        Self {
            name: name.to_string(),
            logo_path: format!("{}/{}_logo.svg", images_path, slug),
            pin_path: format!("{}/{}_pin.svg", images_path, slug),
        }
    }
}
