use std::time::Duration;

/// Length of one simulated time-unit.
pub const DEFAULT_TIME_UNIT: Duration = Duration::from_secs(1);
/// Time-units between two status advances.
pub const STATUS_INTERVAL_UNITS: u32 = 5;
/// Time-units between two agent movement steps.
pub const MOVEMENT_INTERVAL_UNITS: u32 = 1;
/// Longest timer period accepted from configuration.
pub const MAX_TIMER_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

pub const POSITION_STEP: f32 = 2.0;
/// Markers stop short of the map edge.
pub const POSITION_LIMIT: f32 = 90.0;
pub const MAP_EXTENT: f32 = 100.0;
pub const PICKUP_POSITION: (f32, f32) = (10.0, 10.0);
pub const INITIAL_ETA_MINUTES: u32 = 5;

pub const RIDE_MIN_FARE: f64 = 20.0;
pub const DELIVERY_BASE_FARE: f64 = 120.0;

pub const MAX_RECENT_LOCATIONS: usize = 5;

pub const TIME_UNIT_VAR: &str = "TRACKING_TIME_UNIT_MS";
pub const VOICE_VAR: &str = "TRACKING_VOICE";
pub const LOCALE_VAR: &str = "TRACKING_LOCALE";
pub const LOCATION_VAR: &str = "TRACKING_LOCATION";
pub const CONFIG_FILE_VAR: &str = "TRACKING_CONFIG";
