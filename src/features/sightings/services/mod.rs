mod sighting_service;

pub use sighting_service::SightingService;
