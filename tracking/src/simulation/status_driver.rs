use crate::simulation::announcements::status_message;
use crate::simulation::tracked_booking::TrackedBooking;
use common::types::booking_status::BookingStatus;

/// One step of the status sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusChange {
    pub from: BookingStatus,
    pub to: BookingStatus,
    pub message: &'static str,
    pub progress: f64,
    /// No further changes will follow.
    pub terminal: bool,
}

impl TrackedBooking {
    /// Moves the booking to the next status. `None` once delivered.
    pub fn advance_status(&mut self) -> Option<StatusChange> {
        let from = self.status;
        let to = from.next()?;
        self.status = to;
        Some(StatusChange {
            from,
            to,
            message: status_message(to, self.kind()),
            progress: to.progress(),
            terminal: to.is_terminal(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::types::agent::default_agent;
    use common::types::booking::BookingDetails;

    fn ride() -> TrackedBooking {
        TrackedBooking::start(BookingDetails::ride(150.0), default_agent()).unwrap()
    }

    #[test]
    #[ntest::timeout(1000)]
    fn follows_the_sequence_without_skipping() {
        let mut booking = ride();
        let mut seen = vec![booking.status()];
        while let Some(change) = booking.advance_status() {
            assert_eq!(change.from, *seen.last().unwrap());
            seen.push(change.to);
        }
        assert_eq!(seen, BookingStatus::SEQUENCE.to_vec());
    }

    #[test]
    fn five_ticks_reach_delivered_and_further_ticks_do_nothing() {
        let mut booking = ride();
        let changes: Vec<_> = (0..5).filter_map(|_| booking.advance_status()).collect();
        assert_eq!(changes.len(), 5);
        assert_eq!(booking.status(), BookingStatus::Delivered);
        assert!(changes.last().unwrap().terminal);
        assert!(changes[..4].iter().all(|c| !c.terminal));

        for _ in 0..3 {
            assert_eq!(booking.advance_status(), None);
        }
        assert_eq!(booking.status(), BookingStatus::Delivered);
    }

    #[test]
    fn first_tick_reports_accepted_progress() {
        let mut booking = ride();
        let change = booking.advance_status().unwrap();
        assert_eq!(change.to, BookingStatus::Accepted);
        assert_eq!(change.progress, 2.0 / 6.0);
        assert_eq!(change.message, "Rider accepted your request");
    }

    #[test]
    fn fourth_tick_of_a_ride_is_in_transit() {
        let mut booking = ride();
        let fourth = (0..4).filter_map(|_| booking.advance_status()).last().unwrap();
        assert_eq!(fourth.to, BookingStatus::InTransit);
        assert_eq!(fourth.message, "Enjoy your ride");
    }

    #[test]
    fn delivery_wording_on_completion() {
        let mut booking =
            TrackedBooking::start(BookingDetails::delivery(150.0), default_agent()).unwrap();
        let last = (0..5).filter_map(|_| booking.advance_status()).last().unwrap();
        assert_eq!(last.message, "Package delivered successfully!");
    }
}
