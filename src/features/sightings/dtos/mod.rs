mod sighting_dto;

pub use sighting_dto::*;
