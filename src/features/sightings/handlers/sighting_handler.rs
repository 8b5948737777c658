use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppForm;
use crate::features::auth::model::AuthenticatedClient;
use crate::features::sightings::dtos::{SightingCreatedDto, SightingDeletedDto, SightingListDto};
use crate::features::sightings::services::SightingService;
use crate::features::sightings::validator::RawSightingForm;
use crate::shared::types::{ApiResponse, Meta};

/// List all sightings, newest first
#[utoipa::path(
    get,
    path = "/api/sightings",
    responses(
        (status = 200, description = "Sightings with summary stats", body = ApiResponse<SightingListDto>),
    ),
    tag = "sightings"
)]
pub async fn list_sightings(
    State(service): State<Arc<SightingService>>,
) -> Result<Json<ApiResponse<SightingListDto>>> {
    let listing = service.list().await?;
    let total = listing.stats.total;
    Ok(Json(ApiResponse::success(
        Some(listing),
        None,
        Some(Meta { total }),
    )))
}

/// Record a new sighting
///
/// Accepts the raw form fields. Every violated rule is reported in `errors`.
#[utoipa::path(
    post,
    path = "/api/sightings",
    request_body(content = RawSightingForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Sighting recorded", body = ApiResponse<SightingCreatedDto>),
        (status = 400, description = "Validation errors"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("token_auth" = [])),
    tag = "sightings"
)]
pub async fn create_sighting(
    State(service): State<Arc<SightingService>>,
    client: AuthenticatedClient,
    AppForm(form): AppForm<RawSightingForm>,
) -> Result<(StatusCode, Json<ApiResponse<SightingCreatedDto>>)> {
    tracing::debug!("Sighting submitted by client {}", client.token_hint);

    let created = service.submit(form).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(created),
            Some("Sighting added successfully".to_string()),
            None,
        )),
    ))
}

/// Delete a sighting
#[utoipa::path(
    delete,
    path = "/api/sightings/{id}",
    params(
        ("id" = Uuid, Path, description = "Sighting ID")
    ),
    responses(
        (status = 200, description = "Sighting deleted", body = ApiResponse<SightingDeletedDto>),
        (status = 404, description = "Sighting not found"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("token_auth" = [])),
    tag = "sightings"
)]
pub async fn delete_sighting(
    State(service): State<Arc<SightingService>>,
    client: AuthenticatedClient,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SightingDeletedDto>>> {
    tracing::debug!("Delete of sighting {} requested by client {}", id, client.token_hint);

    if !service.delete(id).await? {
        return Err(AppError::NotFound("Sighting not found".to_string()));
    }

    Ok(Json(ApiResponse::success(
        Some(SightingDeletedDto { id, deleted: true }),
        Some("Sighting deleted".to_string()),
        None,
    )))
}
