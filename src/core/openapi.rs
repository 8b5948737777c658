use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::animals::{dtos as animals_dtos, handlers as animals_handlers};
use crate::features::map::{dtos as map_dtos, handlers as map_handlers};
use crate::features::sightings::{
    dtos as sightings_dtos, handlers as sightings_handlers, validator as sightings_validator,
};
use crate::shared::types::{ApiResponse, ErrorDetail, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Animals (public)
        animals_handlers::list_animals,
        // Sightings
        sightings_handlers::list_sightings,
        sightings_handlers::create_sighting,
        sightings_handlers::delete_sighting,
        // Map (public)
        map_handlers::get_map,
        map_handlers::get_sightings_map,
    ),
    components(
        schemas(
            // Shared
            Meta,
            ErrorDetail,
            // Animals
            animals_dtos::AnimalResponseDto,
            // Sightings
            sightings_validator::RawSightingForm,
            sightings_validator::ValidationCategory,
            sightings_validator::ValidationIssue,
            sightings_dtos::SightingListItemDto,
            sightings_dtos::SightingStatsDto,
            sightings_dtos::SightingListDto,
            sightings_dtos::SightingCreatedDto,
            sightings_dtos::SightingDeletedDto,
            ApiResponse<sightings_dtos::SightingListDto>,
            ApiResponse<sightings_dtos::SightingCreatedDto>,
            ApiResponse<sightings_dtos::SightingDeletedDto>,
            // Map
            map_dtos::FeatureCollection,
            map_dtos::Feature,
            map_dtos::PointGeometry,
            map_dtos::SightingProperties,
            map_dtos::Crs,
            map_dtos::CrsProperties,
            map_dtos::SightingsMapDto,
            map_dtos::MapViewportDto,
            map_dtos::GeoJsonLayerDto,
            map_dtos::LayerGroupDto,
            map_dtos::MapViewDto,
            ApiResponse<map_dtos::SightingsMapDto>,
            ApiResponse<map_dtos::MapViewDto>,
        )
    ),
    tags(
        (name = "animals", description = "Registered animal species (public)"),
        (name = "sightings", description = "Wildlife sightings; writes require an API token"),
        (name = "map", description = "Sightings map layers and viewport (public)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Wild Atlas API",
        version = "0.1.0",
        description = "Interactive wildlife sighting tracker",
    )
)]
pub struct ApiDoc;

/// Adds the `Authorization: Token <key>` scheme to the OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "token_auth",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("Authorization"))),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_endpoint() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/api/animals",
            "/api/sightings",
            "/api/sightings/{id}",
            "/api/map",
            "/api/map/sightings",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing path {}",
                expected
            );
        }
    }

    #[test]
    fn test_swagger_info_modifier() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Custom".to_string(),
            version: "9.9.9".to_string(),
            description: "Described".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Custom");
        assert_eq!(doc.info.version, "9.9.9");
    }
}
