use serde::{Deserialize, Serialize};
use std::fmt;

/// Stage of a tracked booking. Variants are declared in the order a booking
/// goes through them; `Delivered` is terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Looking for an available rider
    Searching,
    /// A rider took the request
    Accepted,
    /// The rider is heading to the pickup point
    Arriving,
    /// Passenger or package is on board
    PickedUp,
    /// On the way to the drop-off point
    InTransit,
    /// Trip completed or package handed over
    Delivered,
}

impl BookingStatus {
    pub const SEQUENCE: [BookingStatus; 6] = [
        BookingStatus::Searching,
        BookingStatus::Accepted,
        BookingStatus::Arriving,
        BookingStatus::PickedUp,
        BookingStatus::InTransit,
        BookingStatus::Delivered,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Status that follows this one, `None` once delivered.
    pub fn next(self) -> Option<BookingStatus> {
        Self::SEQUENCE.get(self.index() + 1).copied()
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// Fraction of the sequence reached, counting the current status.
    pub fn progress(self) -> f64 {
        (self.index() + 1) as f64 / Self::SEQUENCE.len() as f64
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingStatus::Searching => write!(f, "searching"),
            BookingStatus::Accepted => write!(f, "accepted"),
            BookingStatus::Arriving => write!(f, "arriving"),
            BookingStatus::PickedUp => write!(f, "picked_up"),
            BookingStatus::InTransit => write!(f, "in_transit"),
            BookingStatus::Delivered => write!(f, "delivered"),
        }
    }
}
