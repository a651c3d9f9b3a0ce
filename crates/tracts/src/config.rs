/// Degrees of longitude/latitude are scaled by this factor into world units.
pub const WORLD_UNITS_PER_DEGREE: f32 = 1000.0;

/// National view: geographic center of the contiguous US.
pub const US_CENTER_LAT: f64 = 39.8283;
pub const US_CENTER_LON: f64 = -98.5795;
pub const US_ZOOM: f32 = 4.0;

/// NYC view: lower Manhattan.
pub const NYC_CENTER_LAT: f64 = 40.7128;
pub const NYC_CENTER_LON: f64 = -74.006;
pub const NYC_ZOOM: f32 = 11.0;

/// Zoom used when the table focuses a single NYC tract.
pub const NYC_FOCUS_ZOOM: f32 = 14.0;

pub const MIN_ZOOM: f32 = 2.0;
pub const MAX_ZOOM: f32 = 16.0;

/// Zoom level at which one world unit maps to one logical pixel.
pub const REFERENCE_ZOOM: f32 = 10.0;

/// Padding (logical pixels) around the bounds when fitting the camera.
pub const FIT_PADDING_PX: f32 = 20.0;

/// NYC marker radius in logical pixels (constant on screen).
pub const MARKER_RADIUS_PX: f32 = 7.0;

/// NYC highlight thresholds used by the table and the tract panel.
pub const NYC_LOW_INCOME_HIGHLIGHT: f64 = 40.0;
pub const NYC_LOW_ACCESS_HIGHLIGHT: f64 = 33.0;
pub const NYC_DISTANCE_HIGHLIGHT: f64 = 1.0;

/// Base tile layer attribution carried with the mounted map.
pub const BASE_LAYER_ATTRIBUTION: &str = "© OpenStreetMap contributors";

/// Environment variable naming the start page route on native builds.
pub const START_PAGE_ENV: &str = "FOOD_ATLAS_PAGE";
