pub mod console;
pub mod messages;
pub mod simulation;
pub mod tracking_actors;
