use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::animals::dtos::AnimalResponseDto;
use crate::features::animals::services::AnimalService;
use crate::shared::types::{ApiResponse, Meta};

/// List registered animals
#[utoipa::path(
    get,
    path = "/api/animals",
    responses(
        (status = 200, description = "List of animals", body = ApiResponse<Vec<AnimalResponseDto>>),
    ),
    tag = "animals"
)]
pub async fn list_animals(
    State(service): State<Arc<AnimalService>>,
) -> Result<Json<ApiResponse<Vec<AnimalResponseDto>>>> {
    let animals = service.list().await?;
    let total = animals.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(animals),
        None,
        Some(Meta { total }),
    )))
}
