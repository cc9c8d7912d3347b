use crate::simulation::tracked_booking::TrackedBooking;
use common::types::agent::AgentPosition;
use common::utils::countdown;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementStep {
    pub position: AgentPosition,
    pub eta_minutes: u32,
}

impl TrackedBooking {
    /// Moves the agent one step and takes a minute off the ETA. The clock
    /// runs regardless of status but stops for good once delivered.
    pub fn step_movement(&mut self) -> Option<MovementStep> {
        if self.is_delivered() {
            return None;
        }
        self.agent_position = self.agent_position.stepped();
        self.eta_minutes = countdown(self.eta_minutes);
        Some(MovementStep {
            position: self.agent_position,
            eta_minutes: self.eta_minutes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::types::agent::default_agent;
    use common::types::booking::BookingDetails;
    use common::types::booking_status::BookingStatus;

    fn delivery() -> TrackedBooking {
        TrackedBooking::start(BookingDetails::delivery(150.0), default_agent()).unwrap()
    }

    #[test]
    fn moves_two_units_per_step() {
        let mut booking = delivery();
        let step = booking.step_movement().unwrap();
        assert_eq!(step.position, AgentPosition { x: 12.0, y: 12.0 });
        assert_eq!(step.eta_minutes, 4);
    }

    #[test]
    fn eta_floors_at_zero_and_position_at_ninety() {
        let mut booking = delivery();
        for _ in 0..200 {
            let step = booking.step_movement().unwrap();
            assert!(step.position.x <= 90.0 && step.position.y <= 90.0);
        }
        assert_eq!(booking.eta_minutes(), 0);
        assert_eq!(booking.agent_position(), AgentPosition { x: 90.0, y: 90.0 });
    }

    #[test]
    fn runs_independently_of_status() {
        let mut booking = delivery();
        booking.step_movement();
        booking.advance_status();
        booking.step_movement();
        assert_eq!(booking.status(), BookingStatus::Accepted);
        assert_eq!(booking.agent_position(), AgentPosition { x: 14.0, y: 14.0 });
    }

    #[test]
    #[ntest::timeout(1000)]
    fn stops_once_delivered() {
        let mut booking = delivery();
        while booking.advance_status().is_some() {}
        let position = booking.agent_position();
        let eta = booking.eta_minutes();
        assert_eq!(booking.step_movement(), None);
        assert_eq!(booking.agent_position(), position);
        assert_eq!(booking.eta_minutes(), eta);
    }
}
