use crate::constants::{MAP_EXTENT, PICKUP_POSITION};
use crate::utils::step_coordinate;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Marker position on the normalized `[0, 100]` map plane.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AgentPosition {
    pub x: f32,
    pub y: f32,
}

impl AgentPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: x.clamp(0.0, MAP_EXTENT),
            y: y.clamp(0.0, MAP_EXTENT),
        }
    }

    pub fn pickup() -> Self {
        Self::new(PICKUP_POSITION.0, PICKUP_POSITION.1)
    }

    /// Position after one movement step on both axes.
    pub fn stepped(self) -> Self {
        Self {
            x: step_coordinate(self.x),
            y: step_coordinate(self.y),
        }
    }
}

impl Default for AgentPosition {
    fn default() -> Self {
        Self::pickup()
    }
}

/// Public profile of the simulated rider shown once a request is accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentProfile {
    pub name: String,
    pub rating: f32,
    pub phone: String,
    pub vehicle_number: String,
}

impl AgentProfile {
    fn mock(name: &str, rating: f32, phone: &str, vehicle_number: &str) -> Self {
        Self {
            name: name.to_string(),
            rating,
            phone: phone.to_string(),
            vehicle_number: vehicle_number.to_string(),
        }
    }
}

/// Riders the simulator can hand a booking to.
pub fn mock_roster() -> Vec<AgentProfile> {
    vec![
        AgentProfile::mock("Ahmed Khan", 4.8, "+92 300 1234567", "ABC-123"),
        AgentProfile::mock("Ali Raza", 4.5, "+92 301 7654321", "LEB-482"),
        AgentProfile::mock("Hassan Malik", 4.9, "+92 333 5550199", "KHI-907"),
    ]
}

/// First rider of the roster, for reproducible sessions.
pub fn default_agent() -> AgentProfile {
    AgentProfile::mock("Ahmed Khan", 4.8, "+92 300 1234567", "ABC-123")
}

pub fn random_agent() -> AgentProfile {
    mock_roster()
        .choose(&mut rand::thread_rng())
        .cloned()
        .unwrap_or_else(default_agent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_the_pickup_pin() {
        assert_eq!(AgentPosition::default(), AgentPosition { x: 10.0, y: 10.0 });
    }

    #[test]
    fn new_keeps_coordinates_on_the_map() {
        assert_eq!(AgentPosition::new(-5.0, 140.0), AgentPosition { x: 0.0, y: 100.0 });
    }

    #[test]
    fn stepping_never_passes_the_margin() {
        let mut position = AgentPosition::pickup();
        for _ in 0..100 {
            position = position.stepped();
            assert!(position.x <= 90.0 && position.y <= 90.0);
        }
        assert_eq!(position, AgentPosition { x: 90.0, y: 90.0 });
    }

    #[test]
    fn random_agent_comes_from_the_roster() {
        let roster = mock_roster();
        for _ in 0..10 {
            assert!(roster.contains(&random_agent()));
        }
        assert_eq!(roster[0], default_agent());
    }
}
