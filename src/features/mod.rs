pub mod animals;
pub mod auth;
pub mod map;
pub mod sightings;
