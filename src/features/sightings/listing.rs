//! Tabular view of sightings, newest first.

use chrono::{DateTime, Utc};

use crate::features::sightings::dtos::{SightingListDto, SightingListItemDto, SightingStatsDto};
use crate::features::sightings::models::SightingWithAnimal;
use crate::shared::time::{age_in_hours, format_age, iso_timestamp};

/// Format sightings for display, ordered by ISO timestamp descending.
///
/// Every timestamp is rendered with a `+00:00` offset, so ordering the
/// strings is the same as ordering the instants.
pub fn format_listing(sightings: &[SightingWithAnimal], now: DateTime<Utc>) -> SightingListDto {
    let mut items: Vec<SightingListItemDto> = sightings
        .iter()
        .map(|s| {
            let age_hours = age_in_hours(s.date_time, now);
            SightingListItemDto {
                id: s.id,
                animal_id: s.animal.id,
                animal_name: s.animal.name.clone(),
                logo_path: s.animal.logo_path.clone(),
                date_time: iso_timestamp(s.date_time),
                latitude: s.latitude,
                longitude: s.longitude,
                age_hours,
                age: format_age(age_hours),
            }
        })
        .collect();

    items.sort_by(|a, b| b.date_time.cmp(&a.date_time));

    let stats = SightingStatsDto {
        total: items.len() as i64,
        most_recent: items.first().map(|item| item.date_time.clone()),
    };

    SightingListDto {
        sightings: items,
        stats,
    }
}
