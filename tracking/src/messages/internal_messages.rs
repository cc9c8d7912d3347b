use crate::tracking_actors::voice_control::VoiceCommand;
use actix::{Message, Recipient};
use common::types::booking_status::BookingStatus;
use common::types::dtos::TrackingSnapshot;
use serde::{Deserialize, Serialize};

/// Fired by the status timer: advance the booking one stage.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "()")]
pub struct StatusTick;

/// Fired by the movement timer: move the agent and count the ETA down.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "()")]
pub struct MovementTick;

/// The user left the tracking view. Cancels both timers and returns the
/// last state of the booking.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "TrackingSnapshot")]
pub struct StopTracking;

#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "TrackingSnapshot")]
pub struct GetSnapshot;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ContactAction {
    Call,
    Chat,
}

/// Call or message button pressed on the rider card.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "()")]
pub struct ContactAgent {
    pub action: ContactAction,
}

/// Sent to every subscriber each time the booking changes stage.
#[derive(Message, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[rtype(result = "()")]
pub struct StatusChanged {
    pub booking_id: String,
    pub from: BookingStatus,
    pub status: BookingStatus,
    pub message: String,
    pub progress: f64,
    pub terminal: bool,
}

/// Registers a recipient for [`StatusChanged`] notifications.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Subscribe {
    pub recipient: Recipient<StatusChanged>,
}

/// Text to show and, with voice guidance on, to speak.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
#[rtype(result = "()")]
pub struct Announce {
    pub text: String,
}

impl Announce {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Accessibility toggle for voice guidance.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "()")]
pub struct SetVoice {
    pub enabled: bool,
}

/// Microphone button. Prompts the user, listens once and returns the command
/// that was heard, if any.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "Option<VoiceCommand>")]
pub struct StartListening;
