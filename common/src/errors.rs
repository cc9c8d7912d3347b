use crate::types::booking::BookingKind;
use thiserror::Error;

/// Reasons a booking cannot be tracked.
#[derive(Error, Debug, PartialEq)]
pub enum BookingError {
    #[error("Fare must be a positive amount, got {0}")]
    InvalidFare(f64),

    #[error("Fare {fare} is below the {kind} minimum of {minimum}")]
    FareBelowMinimum {
        kind: BookingKind,
        fare: f64,
        minimum: f64,
    },

    #[error("Cash on delivery amount must not be negative, got {0}")]
    InvalidCodAmount(f64),

    #[error("{field} does not apply to a {kind} booking")]
    NotApplicable {
        kind: BookingKind,
        field: &'static str,
    },

    #[error("Unknown booking kind: {0}")]
    UnknownKind(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Unable to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed configuration: {0}")]
    Malformed(#[from] serde_json::Error),
}
