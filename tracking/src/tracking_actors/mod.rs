pub mod announcer;
pub mod tracker;
pub mod tracking_view;
pub mod voice_control;
