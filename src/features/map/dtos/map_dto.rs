use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::FeatureCollection;

/// Sightings layer data plus the viewport framing it
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SightingsMapDto {
    pub feature_collection: FeatureCollection,
    /// `[min_lon, max_lat, max_lon, min_lat]`, or the whole world
    #[schema(value_type = Vec<f64>)]
    pub extent: [f64; 4],
    pub projection: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MapViewportDto {
    pub projection: String,
    #[schema(value_type = Vec<f64>)]
    pub extent: [f64; 4],
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GeoJsonLayerDto {
    pub layer_name: String,
    pub layer_title: String,
    pub layer_variable: String,
    pub visible: bool,
    pub selectable: bool,
    #[schema(value_type = Object)]
    pub geojson: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LayerGroupDto {
    pub id: String,
    pub display_name: String,
    pub layer_control: String,
    pub layers: Vec<GeoJsonLayerDto>,
}

/// Everything the map widget needs to render the home page
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MapViewDto {
    pub title: String,
    pub subtitle: String,
    pub basemaps: Vec<String>,
    pub show_properties_popup: bool,
    pub view: MapViewportDto,
    pub layer_groups: Vec<LayerGroupDto>,
}
