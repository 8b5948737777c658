//! Interactive sightings map.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/map` | No | Full map view with layers and viewport |
//! | GET | `/api/map/sightings` | No | Sightings FeatureCollection and extent |

pub mod composer;
pub mod dtos;
pub mod handlers;
pub mod layers;
pub mod routes;
pub mod services;

pub use services::MapService;
