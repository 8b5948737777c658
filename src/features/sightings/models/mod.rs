mod sighting;

pub use sighting::{NewSighting, Sighting, SightingRow, SightingWithAnimal};
