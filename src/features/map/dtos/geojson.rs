//! GeoJSON payload consumed by the map widget.
//!
//! Property keys match the labels shown in the widget's feature popup.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    pub features: Vec<Feature>,
    pub crs: Crs,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>, crs_name: &str) -> Self {
        Self {
            kind: "FeatureCollection".to_string(),
            features,
            crs: Crs::named(crs_name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: String,
    pub geometry: PointGeometry,
    pub properties: SightingProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    pub kind: String,
    /// `[longitude, latitude]`
    #[schema(value_type = Vec<f64>)]
    pub coordinates: [f64; 2],
}

impl PointGeometry {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            kind: "Point".to_string(),
            coordinates: [longitude, latitude],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SightingProperties {
    /// Animal name followed by an `<img>` tag of its logo
    #[serde(rename = "Animal")]
    pub animal: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Age")]
    pub age: String,
    #[serde(rename = "Sighting Id")]
    pub sighting_id: String,
    pub pin_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Crs {
    #[serde(rename = "type")]
    pub kind: String,
    pub properties: CrsProperties,
}

impl Crs {
    pub fn named(name: &str) -> Self {
        Self {
            kind: "name".to_string(),
            properties: CrsProperties {
                name: name.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CrsProperties {
    pub name: String,
}
