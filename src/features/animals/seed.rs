//! Startup reference data and first-run demo sightings.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::features::animals::models::{Animal, NewAnimal};
use crate::features::sightings::models::NewSighting;

/// Species registered on every startup
pub const REGISTERED_ANIMALS: &[&str] = &[
    "Bear", "Beaver", "Bison", "Bobcat", "Cougar", "Elk", "Lynx", "Moose", "Otter", "Red Fox",
    "Wolf",
];

// Approximate bounding box of Yellowstone National Park
const DEMO_MIN_LAT: f64 = 44.15;
const DEMO_MAX_LAT: f64 = 45.05;
const DEMO_MIN_LON: f64 = -110.75;
const DEMO_MAX_LON: f64 = -110.25;

const DEMO_BASE_DAYS_AGO: i64 = 30;
const DEMO_MAX_EXTRA_DAYS: i64 = 15;

pub fn default_animals(images_path: &str) -> Vec<NewAnimal> {
    REGISTERED_ANIMALS
        .iter()
        .map(|name| NewAnimal::with_images(name, images_path))
        .collect()
}

fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

/// One sighting per animal inside the demo bounding box, 30 to 45 days old
pub fn random_sightings<R: Rng>(
    animals: &[Animal],
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<NewSighting> {
    animals
        .iter()
        .map(|animal| {
            let days_ago = DEMO_BASE_DAYS_AGO + rng.random_range(0..=DEMO_MAX_EXTRA_DAYS);
            NewSighting {
                animal_id: animal.id,
                date_time: now - Duration::days(days_ago),
                latitude: round6(rng.random_range(DEMO_MIN_LAT..=DEMO_MAX_LAT)),
                longitude: round6(rng.random_range(DEMO_MIN_LON..=DEMO_MAX_LON)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use validator::Validate;

    #[test]
    fn test_default_animals_are_valid() {
        let animals = default_animals("/static/wildatlas/images");

        assert_eq!(animals.len(), 11);
        assert!(animals.iter().all(|a| a.validate().is_ok()));
        assert_eq!(animals[0].logo_path, "/static/wildatlas/images/bear_logo.svg");
        assert_eq!(animals[9].pin_path, "/static/wildatlas/images/redfox_pin.svg");
    }

    #[test]
    fn test_random_sightings_stay_in_demo_box() {
        let now = Utc::now();
        let animals: Vec<Animal> = (1..=11)
            .map(|id| Animal {
                id,
                name: format!("Animal {}", id),
                logo_path: "/logo.svg".to_string(),
                pin_path: "/pin.svg".to_string(),
            })
            .collect();

        let mut rng = StdRng::seed_from_u64(7);
        let sightings = random_sightings(&animals, now, &mut rng);

        assert_eq!(sightings.len(), animals.len());
        for (sighting, animal) in sightings.iter().zip(&animals) {
            assert_eq!(sighting.animal_id, animal.id);
            assert!((DEMO_MIN_LAT..=DEMO_MAX_LAT).contains(&sighting.latitude));
            assert!((DEMO_MIN_LON..=DEMO_MAX_LON).contains(&sighting.longitude));
            assert_eq!(round6(sighting.latitude), sighting.latitude);

            let age = now - sighting.date_time;
            assert!(age >= Duration::days(30) && age <= Duration::days(45));
        }
    }
}
