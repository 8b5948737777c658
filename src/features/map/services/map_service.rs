use chrono::Utc;
use std::sync::Arc;

use crate::core::config::MapConfig;
use crate::core::error::{AppError, Result};
use crate::features::map::composer;
use crate::features::map::dtos::{MapViewDto, MapViewportDto, SightingsMapDto};
use crate::features::map::layers::{self, ParkLayerConfig};
use crate::modules::store::SightingStore;
use crate::shared::constants::{
    LAYER_CONTROL_CHECKBOX, MAP_PROJECTION, PARKS_GROUP_DISPLAY_NAME, PARKS_GROUP_ID,
    SIGHTINGS_GROUP_DISPLAY_NAME, SIGHTINGS_GROUP_ID, SIGHTINGS_LAYER_NAME,
    SIGHTINGS_LAYER_VARIABLE,
};

/// Service composing the home map
pub struct MapService {
    store: Arc<dyn SightingStore>,
    config: MapConfig,
    parks: Vec<ParkLayerConfig>,
}

impl MapService {
    pub fn new(store: Arc<dyn SightingStore>, config: MapConfig) -> Self {
        let parks = layers::default_park_layers(&config.resources_dir);
        Self {
            store,
            config,
            parks,
        }
    }

    /// Sightings layer data and viewport only
    pub async fn sightings_map(&self) -> Result<SightingsMapDto> {
        let sightings = self.store.list_sightings().await?;
        let now = Utc::now();
        Ok(composer::compose_sightings_map(&sightings, now))
    }

    /// Full map view: basemaps, sightings layer, park overlays and viewport
    pub async fn map_view(&self) -> Result<MapViewDto> {
        let sightings_map = self.sightings_map().await?;
        let feature_count = sightings_map.feature_collection.features.len();

        let sightings_geojson = serde_json::to_value(&sightings_map.feature_collection)
            .map_err(|e| AppError::Internal(format!("Failed to encode sightings layer: {}", e)))?;

        let sightings_layer = layers::build_geojson_layer(
            sightings_geojson,
            SIGHTINGS_LAYER_NAME,
            SIGHTINGS_LAYER_NAME,
            SIGHTINGS_LAYER_VARIABLE,
            true,
            true,
        );
        let park_layers = layers::build_geojson_layers(&self.parks, false).await;

        let layer_groups = vec![
            layers::build_layer_group(
                SIGHTINGS_GROUP_ID,
                SIGHTINGS_GROUP_DISPLAY_NAME,
                LAYER_CONTROL_CHECKBOX,
                vec![sightings_layer],
            ),
            layers::build_layer_group(
                PARKS_GROUP_ID,
                PARKS_GROUP_DISPLAY_NAME,
                LAYER_CONTROL_CHECKBOX,
                park_layers,
            ),
        ];

        tracing::debug!(
            "Composed map view with {} sightings, extent {:?}",
            feature_count,
            sightings_map.extent
        );

        Ok(MapViewDto {
            title: self.config.title.clone(),
            subtitle: self.config.subtitle.clone(),
            basemaps: self.config.basemaps.clone(),
            show_properties_popup: true,
            view: MapViewportDto {
                projection: MAP_PROJECTION.to_string(),
                extent: sightings_map.extent,
            },
            layer_groups,
        })
    }
}
