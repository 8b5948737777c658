//! Wildlife sightings.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/sightings` | No | List sightings, newest first |
//! | POST | `/api/sightings` | Token | Record a sighting from form fields |
//! | DELETE | `/api/sightings/{id}` | Token | Delete a sighting |

pub mod dtos;
pub mod handlers;
pub mod listing;
pub mod models;
pub mod routes;
pub mod services;
pub mod validator;

pub use services::SightingService;
