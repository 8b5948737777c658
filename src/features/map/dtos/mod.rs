mod geojson;
mod map_dto;

pub use geojson::*;
pub use map_dto::*;
