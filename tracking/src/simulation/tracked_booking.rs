use crate::simulation::announcements::{milestones, status_message};
use common::constants::INITIAL_ETA_MINUTES;
use common::errors::BookingError;
use common::types::agent::{AgentPosition, AgentProfile};
use common::types::booking::{BookingDetails, BookingKind};
use common::types::booking_status::BookingStatus;
use common::types::dtos::TrackingSnapshot;
use uuid::Uuid;

/// A ride or delivery being followed from request to completion.
///
/// Status and movement are only changed through the status driver and the
/// position interpolator; once `Delivered` is reached neither touches the
/// booking again.
#[derive(Debug, Clone)]
pub struct TrackedBooking {
    pub(crate) booking_id: Uuid,
    pub(crate) details: BookingDetails,
    pub(crate) agent: AgentProfile,
    pub(crate) status: BookingStatus,
    pub(crate) eta_minutes: u32,
    pub(crate) agent_position: AgentPosition,
}

impl TrackedBooking {
    /// Validates the details and opens a booking in `Searching`.
    pub fn start(details: BookingDetails, agent: AgentProfile) -> Result<Self, BookingError> {
        details.validate()?;
        Ok(Self {
            booking_id: Uuid::new_v4(),
            details,
            agent,
            status: BookingStatus::Searching,
            eta_minutes: INITIAL_ETA_MINUTES,
            agent_position: AgentPosition::pickup(),
        })
    }

    pub fn booking_id(&self) -> Uuid {
        self.booking_id
    }

    pub fn kind(&self) -> BookingKind {
        self.details.kind
    }

    pub fn fare(&self) -> f64 {
        self.details.fare
    }

    pub fn details(&self) -> &BookingDetails {
        &self.details
    }

    pub fn agent(&self) -> &AgentProfile {
        &self.agent
    }

    pub fn status(&self) -> BookingStatus {
        self.status
    }

    pub fn eta_minutes(&self) -> u32 {
        self.eta_minutes
    }

    pub fn agent_position(&self) -> AgentPosition {
        self.agent_position
    }

    pub fn is_delivered(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn message(&self) -> &'static str {
        status_message(self.status, self.kind())
    }

    pub fn progress(&self) -> f64 {
        self.status.progress()
    }

    pub fn snapshot(&self, finished: bool) -> TrackingSnapshot {
        let en_route = !matches!(
            self.status,
            BookingStatus::Searching | BookingStatus::Delivered
        );
        let assigned = self.status != BookingStatus::Searching;
        TrackingSnapshot {
            booking_id: self.booking_id.to_string(),
            kind: self.kind(),
            status: self.status,
            message: self.message().to_string(),
            progress: self.progress(),
            eta_minutes: self.eta_minutes,
            agent_position: self.agent_position,
            agent: self.agent.clone(),
            details: self.details.clone(),
            eta_visible: en_route,
            agent_visible: en_route,
            route_visible: assigned,
            agent_profile_visible: assigned,
            milestones: milestones(self.status, self.kind()),
            finished: finished || self.is_delivered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::types::agent::default_agent;
    use common::types::dtos::MilestoneState;

    #[test]
    fn starts_searching_at_the_pickup_pin() {
        let booking = TrackedBooking::start(BookingDetails::ride(150.0), default_agent()).unwrap();
        assert_eq!(booking.status(), BookingStatus::Searching);
        assert_eq!(booking.eta_minutes(), 5);
        assert_eq!(booking.agent_position(), AgentPosition { x: 10.0, y: 10.0 });
        assert_eq!(booking.fare(), 150.0);
        assert_eq!(booking.message(), "Finding the best rider for you...");
    }

    #[test]
    fn refuses_invalid_details() {
        let err = TrackedBooking::start(BookingDetails::delivery(50.0), default_agent())
            .unwrap_err();
        assert!(matches!(err, BookingError::FareBelowMinimum { .. }));
    }

    #[test]
    fn snapshot_hides_rider_while_searching() {
        let booking = TrackedBooking::start(BookingDetails::ride(150.0), default_agent()).unwrap();
        let snapshot = booking.snapshot(false);
        assert!(!snapshot.eta_visible);
        assert!(!snapshot.agent_visible);
        assert!(!snapshot.route_visible);
        assert!(!snapshot.agent_profile_visible);
        assert!(!snapshot.finished);
        assert!(snapshot
            .milestones
            .iter()
            .all(|m| m.state == MilestoneState::Pending));
    }

    #[test]
    fn snapshot_shows_rider_en_route() {
        let mut booking =
            TrackedBooking::start(BookingDetails::delivery(120.0), default_agent()).unwrap();
        booking.status = BookingStatus::Arriving;
        let snapshot = booking.snapshot(false);
        assert!(snapshot.eta_visible && snapshot.agent_visible);
        assert!(snapshot.route_visible && snapshot.agent_profile_visible);
        assert_eq!(snapshot.progress, 3.0 / 6.0);
    }

    #[test]
    fn delivered_snapshot_is_finished_and_keeps_the_route() {
        let mut booking = TrackedBooking::start(BookingDetails::ride(150.0), default_agent()).unwrap();
        booking.status = BookingStatus::Delivered;
        let snapshot = booking.snapshot(false);
        assert!(snapshot.finished);
        assert!(!snapshot.eta_visible && !snapshot.agent_visible);
        assert!(snapshot.route_visible);
        assert_eq!(snapshot.message, "Trip completed");
    }

    #[test]
    fn snapshot_serializes_with_snake_case_status() {
        let booking = TrackedBooking::start(BookingDetails::ride(150.0), default_agent()).unwrap();
        let json = serde_json::to_value(booking.snapshot(false)).unwrap();
        assert_eq!(json["status"], "searching");
        assert_eq!(json["kind"], "ride");
        assert_eq!(json["agent_position"]["x"], 10.0);
    }
}
