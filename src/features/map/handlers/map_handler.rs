use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::map::dtos::{MapViewDto, SightingsMapDto};
use crate::features::map::services::MapService;
use crate::shared::types::ApiResponse;

/// Get the home map view
///
/// Returns basemaps, the sightings layer, national park overlays and the
/// viewport extent framing all sightings.
#[utoipa::path(
    get,
    path = "/api/map",
    responses(
        (status = 200, description = "Map view", body = ApiResponse<MapViewDto>),
    ),
    tag = "map"
)]
pub async fn get_map(
    State(service): State<Arc<MapService>>,
) -> Result<Json<ApiResponse<MapViewDto>>> {
    let view = service.map_view().await?;
    Ok(Json(ApiResponse::success(Some(view), None, None)))
}

/// Get sightings as a GeoJSON FeatureCollection with viewport extent
#[utoipa::path(
    get,
    path = "/api/map/sightings",
    responses(
        (status = 200, description = "Sightings layer", body = ApiResponse<SightingsMapDto>),
    ),
    tag = "map"
)]
pub async fn get_sightings_map(
    State(service): State<Arc<MapService>>,
) -> Result<Json<ApiResponse<SightingsMapDto>>> {
    let map = service.sightings_map().await?;
    Ok(Json(ApiResponse::success(Some(map), None, None)))
}
