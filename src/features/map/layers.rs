//! Layer and layer-group composition for the map view.

use std::path::{Path, PathBuf};

use crate::core::error::{AppError, Result};
use crate::features::map::dtos::{GeoJsonLayerDto, LayerGroupDto};

/// A boundary overlay read from a GeoJSON file on disk
#[derive(Debug, Clone)]
pub struct ParkLayerConfig {
    pub path: PathBuf,
    pub name: String,
    pub title: String,
    pub variable: String,
}

impl ParkLayerConfig {
    pub fn new(resources_dir: &Path, file_name: &str, name: &str) -> Self {
        Self {
            path: resources_dir.join(file_name),
            name: name.to_string(),
            title: name.to_string(),
            variable: name.to_string(),
        }
    }
}

/// National park overlays shipped with the service
pub fn default_park_layers(resources_dir: &Path) -> Vec<ParkLayerConfig> {
    vec![ParkLayerConfig::new(
        resources_dir,
        "YellowstoneNationalPark.geojson",
        "Yellowstone National Park",
    )]
}

pub fn build_geojson_layer(
    geojson: serde_json::Value,
    layer_name: &str,
    layer_title: &str,
    layer_variable: &str,
    visible: bool,
    selectable: bool,
) -> GeoJsonLayerDto {
    GeoJsonLayerDto {
        layer_name: layer_name.to_string(),
        layer_title: layer_title.to_string(),
        layer_variable: layer_variable.to_string(),
        visible,
        selectable,
        geojson,
    }
}

pub fn build_layer_group(
    id: &str,
    display_name: &str,
    layer_control: &str,
    layers: Vec<GeoJsonLayerDto>,
) -> LayerGroupDto {
    LayerGroupDto {
        id: id.to_string(),
        display_name: display_name.to_string(),
        layer_control: layer_control.to_string(),
        layers,
    }
}

async fn read_geojson(path: &Path) -> Result<serde_json::Value> {
    let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
        AppError::Internal(format!("Failed to read {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&contents)
        .map_err(|e| AppError::Internal(format!("Invalid GeoJSON in {}: {}", path.display(), e)))
}

/// Load every configured overlay; unreadable files are logged and skipped
pub async fn build_geojson_layers(
    configs: &[ParkLayerConfig],
    selectable: bool,
) -> Vec<GeoJsonLayerDto> {
    let mut layers = Vec::with_capacity(configs.len());

    for config in configs {
        match read_geojson(&config.path).await {
            Ok(geojson) => layers.push(build_geojson_layer(
                geojson,
                &config.name,
                &config.title,
                &config.variable,
                true,
                selectable,
            )),
            Err(e) => {
                tracing::warn!("Skipping layer '{}': {}", config.name, e);
            }
        }
    }

    layers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(label: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "wildatlas-{}-{}",
            label,
            uuid::Uuid::new_v4()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_build_geojson_layers_reads_files() {
        let dir = temp_dir("layers");
        std::fs::write(
            dir.join("park.geojson"),
            r#"{"type":"FeatureCollection","features":[]}"#,
        )
        .unwrap();

        let configs = vec![ParkLayerConfig::new(&dir, "park.geojson", "Test Park")];
        let layers = build_geojson_layers(&configs, false).await;

        assert_eq!(layers.len(), 1);
        assert_eq!(layers[0].layer_name, "Test Park");
        assert!(layers[0].visible);
        assert!(!layers[0].selectable);
        assert_eq!(layers[0].geojson["type"], "FeatureCollection");

        std::fs::remove_dir_all(dir).ok();
    }

    #[tokio::test]
    async fn test_missing_or_malformed_files_are_skipped() {
        let dir = temp_dir("broken");
        std::fs::write(dir.join("broken.geojson"), "{not json").unwrap();

        let configs = vec![
            ParkLayerConfig::new(&dir, "missing.geojson", "Missing"),
            ParkLayerConfig::new(&dir, "broken.geojson", "Broken"),
        ];

        assert!(build_geojson_layers(&configs, false).await.is_empty());

        std::fs::remove_dir_all(dir).ok();
    }

    #[tokio::test]
    async fn test_read_geojson_reports_internal_errors() {
        let dir = temp_dir("errors");
        std::fs::write(dir.join("broken.geojson"), "[1,").unwrap();

        match read_geojson(&dir.join("missing.geojson")).await {
            Err(AppError::Internal(msg)) => assert!(msg.starts_with("Failed to read")),
            other => panic!("expected internal error, got {:?}", other),
        }

        match read_geojson(&dir.join("broken.geojson")).await {
            Err(AppError::Internal(msg)) => assert!(msg.starts_with("Invalid GeoJSON")),
            other => panic!("expected internal error, got {:?}", other),
        }

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_default_park_layers() {
        let layers = default_park_layers(Path::new("resources"));
        assert_eq!(layers.len(), 1);
        assert_eq!(
            layers[0].path,
            Path::new("resources").join("YellowstoneNationalPark.geojson")
        );
        assert_eq!(layers[0].variable, "Yellowstone National Park");
    }
}
