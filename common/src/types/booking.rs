use crate::constants::{DELIVERY_BASE_FARE, RIDE_MIN_FARE};
use crate::errors::BookingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BookingKind {
    Ride,
    Delivery,
}

impl BookingKind {
    /// Lowest fare accepted for this kind of booking.
    pub fn minimum_fare(self) -> f64 {
        match self {
            BookingKind::Ride => RIDE_MIN_FARE,
            BookingKind::Delivery => DELIVERY_BASE_FARE,
        }
    }
}

impl fmt::Display for BookingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingKind::Ride => write!(f, "ride"),
            BookingKind::Delivery => write!(f, "delivery"),
        }
    }
}

impl FromStr for BookingKind {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ride" => Ok(BookingKind::Ride),
            "delivery" | "parcel" => Ok(BookingKind::Delivery),
            other => Err(BookingError::UnknownKind(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Bike,
    Rickshaw,
    Car,
}

impl VehicleType {
    pub fn suggested_fare(self) -> f64 {
        match self {
            VehicleType::Bike => 50.0,
            VehicleType::Rickshaw => 80.0,
            VehicleType::Car => 150.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PackageType {
    Documents,
    Package,
    Fragile,
    Electronics,
}

/// What the booking screens hand over when tracking starts. Read-only once a
/// session owns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingDetails {
    pub kind: BookingKind,
    pub fare: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<VehicleType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_type: Option<PackageType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cod_amount: Option<f64>,
    /// Pickup time requested by the user, `HH:MM`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_time: Option<String>,
}

impl BookingDetails {
    pub fn ride(fare: f64) -> Self {
        Self {
            kind: BookingKind::Ride,
            fare,
            vehicle_type: None,
            package_type: None,
            cod_amount: None,
            scheduled_time: None,
        }
    }

    pub fn delivery(fare: f64) -> Self {
        Self {
            kind: BookingKind::Delivery,
            ..Self::ride(fare)
        }
    }

    pub fn with_vehicle(mut self, vehicle: VehicleType) -> Self {
        self.vehicle_type = Some(vehicle);
        self
    }

    pub fn with_package(mut self, package: PackageType) -> Self {
        self.package_type = Some(package);
        self
    }

    pub fn with_cod(mut self, amount: f64) -> Self {
        self.cod_amount = Some(amount);
        self
    }

    pub fn scheduled_at(mut self, time: impl Into<String>) -> Self {
        self.scheduled_time = Some(time.into());
        self
    }

    pub fn validate(&self) -> Result<(), BookingError> {
        if !self.fare.is_finite() || self.fare <= 0.0 {
            return Err(BookingError::InvalidFare(self.fare));
        }
        let minimum = self.kind.minimum_fare();
        if self.fare < minimum {
            return Err(BookingError::FareBelowMinimum {
                kind: self.kind,
                fare: self.fare,
                minimum,
            });
        }
        match self.kind {
            BookingKind::Ride => {
                if self.package_type.is_some() {
                    return Err(BookingError::NotApplicable {
                        kind: self.kind,
                        field: "package type",
                    });
                }
                if self.cod_amount.is_some() {
                    return Err(BookingError::NotApplicable {
                        kind: self.kind,
                        field: "cash on delivery",
                    });
                }
            }
            BookingKind::Delivery => {
                if self.vehicle_type.is_some() {
                    return Err(BookingError::NotApplicable {
                        kind: self.kind,
                        field: "vehicle type",
                    });
                }
            }
        }
        if let Some(amount) = self.cod_amount {
            if !amount.is_finite() || amount < 0.0 {
                return Err(BookingError::InvalidCodAmount(amount));
            }
        }
        Ok(())
    }
}
