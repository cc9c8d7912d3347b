use crate::types::agent::{AgentPosition, AgentProfile};
use crate::types::booking::{BookingDetails, BookingKind};
use crate::types::booking_status::BookingStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneState {
    Pending,
    Completed,
}

/// One line of the "Status Updates" checklist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Milestone {
    pub label: String,
    pub state: MilestoneState,
}

/// Read model of a tracking session, handed to whoever renders it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackingSnapshot {
    /// Identifier of the session.
    pub booking_id: String,
    pub kind: BookingKind,
    pub status: BookingStatus,
    /// Banner text for the current status.
    pub message: String,
    /// Progress bar fill, in `(0, 1]`.
    pub progress: f64,
    pub eta_minutes: u32,
    pub agent_position: AgentPosition,
    pub agent: AgentProfile,
    pub details: BookingDetails,
    /// ETA line and moving marker are only shown while a rider is en route.
    pub eta_visible: bool,
    pub agent_visible: bool,
    /// Route line and rider card appear once the request is accepted.
    pub route_visible: bool,
    pub agent_profile_visible: bool,
    pub milestones: Vec<Milestone>,
    /// True once the session stopped, either delivered or left by the user.
    pub finished: bool,
}
