use crate::constants::{POSITION_LIMIT, POSITION_STEP};

/// Moves a coordinate one step forward without crossing the display margin.
pub fn step_coordinate(value: f32) -> f32 {
    (value + POSITION_STEP).min(POSITION_LIMIT)
}

/// One minute less, never below zero.
pub fn countdown(minutes: u32) -> u32 {
    minutes.saturating_sub(1)
}

pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
