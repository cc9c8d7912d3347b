pub mod announcements;
pub mod position_interpolator;
pub mod status_driver;
pub mod tracked_booking;

pub use tracked_booking::TrackedBooking;
