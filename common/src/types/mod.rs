pub mod agent;
pub mod booking;
pub mod booking_status;
pub mod dtos;
pub mod locale;
pub mod location;
