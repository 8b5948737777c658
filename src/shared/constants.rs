/// Coordinate reference system of every map payload
pub const MAP_PROJECTION: &str = "EPSG:4326";

/// Whole-world viewport used when fewer than two sightings exist
pub const WORLD_EXTENT: [f64; 4] = [-180.0, -90.0, 180.0, 90.0];

/// Fewest sightings that define a usable bounding box
pub const MIN_SIGHTINGS_FOR_EXTENT: usize = 2;

// =============================================================================
// COORDINATE BOUNDS
// =============================================================================

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

// =============================================================================
// LAYERS
// =============================================================================

pub const SIGHTINGS_LAYER_NAME: &str = "Animal Sightings";
pub const SIGHTINGS_LAYER_VARIABLE: &str = "sightings";
pub const SIGHTINGS_GROUP_ID: &str = "Sightings";
pub const SIGHTINGS_GROUP_DISPLAY_NAME: &str = "Layers";
pub const PARKS_GROUP_ID: &str = "all-layers";
pub const PARKS_GROUP_DISPLAY_NAME: &str = "National Parks";
pub const LAYER_CONTROL_CHECKBOX: &str = "checkbox";
