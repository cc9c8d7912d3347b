//! Platform services the simulator talks to. They are injected so sessions
//! can run without a speech engine, microphone or GPS.

pub mod listener;
pub mod location;
pub mod speaker;

pub use listener::{Listener, ScriptedListener};
pub use location::{FixedLocation, LocationProvider, NoLocation};
pub use speaker::{ConsoleSpeaker, MemorySpeaker, NoopSpeaker, Speaker};
