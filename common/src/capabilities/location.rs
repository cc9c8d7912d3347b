use crate::types::location::Location;

pub trait LocationProvider: Send + Sync {
    fn current_location(&self) -> Option<Location>;
}

/// Always reports the same place.
#[derive(Debug, Clone)]
pub struct FixedLocation(pub Location);

impl LocationProvider for FixedLocation {
    fn current_location(&self) -> Option<Location> {
        Some(self.0.clone())
    }
}

/// No positioning available.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoLocation;

impl LocationProvider for NoLocation {
    fn current_location(&self) -> Option<Location> {
        None
    }
}
