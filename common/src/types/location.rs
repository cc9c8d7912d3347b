use crate::capabilities::LocationProvider;
use crate::constants::MAX_RECENT_LOCATIONS;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub address: String,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub fn new(address: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            address: address.into(),
            lat,
            lng,
        }
    }
}

/// Most recently used places, newest first, unique by address.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecentLocations {
    entries: VecDeque<Location>,
}

impl RecentLocations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places seeded on first launch.
    pub fn seeded() -> Self {
        Self {
            entries: VecDeque::from(vec![
                Location::new("123 Main Street, Downtown", 40.7128, -74.006),
                Location::new("Central Park West", 40.7829, -73.9654),
                Location::new("Times Square", 40.758, -73.9855),
            ]),
        }
    }

    /// Records a place. Known addresses are left where they are; otherwise
    /// the place goes first and the oldest entry is dropped past the limit.
    pub fn remember(&mut self, location: Location) -> bool {
        if self.entries.iter().any(|l| l.address == location.address) {
            return false;
        }
        self.entries.push_front(location);
        self.entries.truncate(MAX_RECENT_LOCATIONS);
        true
    }

    /// Pickup for a new session: the provider's current position, which is
    /// also remembered, or else the newest saved place.
    pub fn pickup_from(&mut self, provider: &dyn LocationProvider) -> Option<Location> {
        match provider.current_location() {
            Some(here) => {
                self.remember(here.clone());
                Some(here)
            }
            None => self.entries.front().cloned(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
