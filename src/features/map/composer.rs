//! Turns joined sightings into the map widget's payload.
//!
//! Pure transformation: callers fetch and join the data, capture `now` once,
//! and pass both in.

use chrono::{DateTime, Utc};

use crate::features::animals::models::Animal;
use crate::features::map::dtos::{
    Feature, FeatureCollection, PointGeometry, SightingProperties, SightingsMapDto,
};
use crate::features::sightings::models::SightingWithAnimal;
use crate::shared::constants::{MAP_PROJECTION, MIN_SIGHTINGS_FOR_EXTENT, WORLD_EXTENT};
use crate::shared::time::{age_in_hours, format_age, iso_timestamp};

const LOGO_SIZE_PX: u32 = 30;

/// Popup label: the animal's name followed by its logo
pub fn animal_label(animal: &Animal) -> String {
    format!(
        r#"{name} <img src="{logo}" alt="{name}" width="{size}" height="{size}" border="0">"#,
        name = animal.name,
        logo = animal.logo_path,
        size = LOGO_SIZE_PX,
    )
}

pub fn sighting_feature(sighting: &SightingWithAnimal, now: DateTime<Utc>) -> Feature {
    Feature {
        kind: "Feature".to_string(),
        geometry: PointGeometry::new(sighting.longitude, sighting.latitude),
        properties: SightingProperties {
            animal: animal_label(&sighting.animal),
            date: iso_timestamp(sighting.date_time),
            age: format_age(age_in_hours(sighting.date_time, now)),
            sighting_id: sighting.id.to_string(),
            pin_path: sighting.animal.pin_path.clone(),
        },
    }
}

pub fn feature_collection(
    sightings: &[SightingWithAnimal],
    now: DateTime<Utc>,
) -> FeatureCollection {
    let features = sightings
        .iter()
        .map(|s| sighting_feature(s, now))
        .collect();
    FeatureCollection::new(features, MAP_PROJECTION)
}

/// Viewport framing every sighting, as `[min_lon, max_lat, max_lon, min_lat]`.
///
/// Fewer than two sightings cannot define a box, so the whole world
/// `[-180, -90, 180, 90]` is returned instead.
pub fn viewport_extent(sightings: &[SightingWithAnimal]) -> [f64; 4] {
    if sightings.len() < MIN_SIGHTINGS_FOR_EXTENT {
        return WORLD_EXTENT;
    }

    let min_lat = sightings.iter().map(|s| s.latitude).fold(f64::INFINITY, f64::min);
    let max_lat = sightings
        .iter()
        .map(|s| s.latitude)
        .fold(f64::NEG_INFINITY, f64::max);
    let min_lon = sightings.iter().map(|s| s.longitude).fold(f64::INFINITY, f64::min);
    let max_lon = sightings
        .iter()
        .map(|s| s.longitude)
        .fold(f64::NEG_INFINITY, f64::max);

    [min_lon, max_lat, max_lon, min_lat]
}

pub fn compose_sightings_map(
    sightings: &[SightingWithAnimal],
    now: DateTime<Utc>,
) -> SightingsMapDto {
    SightingsMapDto {
        feature_collection: feature_collection(sightings, now),
        extent: viewport_extent(sightings),
        projection: MAP_PROJECTION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{sample_animal, sighting_at};
    use chrono::{Duration, TimeZone};
    use fake::Fake;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_extent_is_whole_world_for_zero_or_one_sighting() {
        assert_eq!(viewport_extent(&[]), [-180.0, -90.0, 180.0, 90.0]);

        let bear = sample_animal(1, "Bear");
        let one = vec![sighting_at(&bear, now(), 44.6, -110.5)];
        assert_eq!(viewport_extent(&one), [-180.0, -90.0, 180.0, 90.0]);
    }

    #[test]
    fn test_extent_frames_all_sightings() {
        let bear = sample_animal(1, "Bear");
        let sightings = vec![
            sighting_at(&bear, now(), 44.2, -110.7),
            sighting_at(&bear, now(), 45.0, -110.3),
            sighting_at(&bear, now(), 44.6, -110.5),
        ];

        assert_eq!(viewport_extent(&sightings), [-110.7, 45.0, -110.3, 44.2]);
    }

    #[test]
    fn test_extent_bounds_random_sightings() {
        let wolf = sample_animal(11, "Wolf");

        for _ in 0..20 {
            let count: usize = (2..40).fake();
            let sightings: Vec<SightingWithAnimal> = (0..count)
                .map(|_| {
                    let lat: f64 = (-90.0..90.0).fake();
                    let lon: f64 = (-180.0..180.0).fake();
                    sighting_at(&wolf, now(), lat, lon)
                })
                .collect();

            let [min_lon, max_lat, max_lon, min_lat] = viewport_extent(&sightings);

            for s in &sightings {
                assert!(min_lat <= s.latitude && s.latitude <= max_lat);
                assert!(min_lon <= s.longitude && s.longitude <= max_lon);
            }
            assert!(sightings.iter().any(|s| s.latitude == min_lat));
            assert!(sightings.iter().any(|s| s.latitude == max_lat));
            assert!(sightings.iter().any(|s| s.longitude == min_lon));
            assert!(sightings.iter().any(|s| s.longitude == max_lon));
        }
    }

    #[test]
    fn test_one_feature_per_sighting_with_lon_lat_order() {
        let bear = sample_animal(1, "Bear");
        let elk = sample_animal(6, "Elk");
        let sightings = vec![
            sighting_at(&bear, now() - Duration::hours(3), 44.6, -110.5),
            sighting_at(&elk, now() - Duration::hours(48), 44.9, -110.3),
        ];

        let map = compose_sightings_map(&sightings, now());
        let features = &map.feature_collection.features;

        assert_eq!(features.len(), sightings.len());
        for (feature, sighting) in features.iter().zip(&sightings) {
            assert_eq!(
                feature.geometry.coordinates,
                [sighting.longitude, sighting.latitude]
            );
            assert_eq!(feature.properties.sighting_id, sighting.id.to_string());
        }
        assert_eq!(map.projection, "EPSG:4326");
        assert_eq!(map.extent, [-110.5, 44.9, -110.3, 44.6]);
    }

    #[test]
    fn test_feature_properties() {
        let fox = sample_animal(10, "Red Fox");
        let sighting = sighting_at(&fox, now() - Duration::hours(27), 44.6, -110.5);

        let feature = sighting_feature(&sighting, now());

        assert_eq!(
            feature.properties.animal,
            format!(
                r#"Red Fox <img src="{}" alt="Red Fox" width="30" height="30" border="0">"#,
                fox.logo_path
            )
        );
        assert_eq!(feature.properties.date, "2024-05-31T09:00:00+00:00");
        assert_eq!(feature.properties.age, "27 hours");
        assert_eq!(feature.properties.pin_path, fox.pin_path);
    }

    #[test]
    fn test_feature_collection_serializes_as_geojson() {
        let bear = sample_animal(1, "Bear");
        let sighting = sighting_at(&bear, now() - Duration::hours(1), 44.6, -110.5);

        let value = serde_json::to_value(feature_collection(&[sighting.clone()], now())).unwrap();

        assert_eq!(value["type"], "FeatureCollection");
        assert_eq!(value["crs"]["type"], "name");
        assert_eq!(value["crs"]["properties"]["name"], "EPSG:4326");

        let feature = &value["features"][0];
        assert_eq!(feature["type"], "Feature");
        assert_eq!(feature["geometry"]["type"], "Point");
        assert_eq!(feature["geometry"]["coordinates"], serde_json::json!([-110.5, 44.6]));
        assert_eq!(feature["properties"]["Age"], "1 hours");
        assert_eq!(feature["properties"]["Sighting Id"], sighting.id.to_string());
        assert!(feature["properties"]["pin_path"].is_string());
    }
}
