mod sighting_handler;

pub use sighting_handler::*;
