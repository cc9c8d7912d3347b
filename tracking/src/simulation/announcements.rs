use common::types::booking::BookingKind;
use common::types::booking_status::BookingStatus;
use common::types::dtos::{Milestone, MilestoneState};

pub const CALLING_AGENT: &str = "Calling rider";
pub const OPENING_CHAT: &str = "Opening chat";

/// Banner text for a status. Only the last three stages are worded
/// differently for parcels.
pub fn status_message(status: BookingStatus, kind: BookingKind) -> &'static str {
    match (status, kind) {
        (BookingStatus::Searching, _) => "Finding the best rider for you...",
        (BookingStatus::Accepted, _) => "Rider accepted your request",
        (BookingStatus::Arriving, _) => "Rider is on the way to pickup",
        (BookingStatus::PickedUp, BookingKind::Ride) => "Rider has arrived",
        (BookingStatus::PickedUp, BookingKind::Delivery) => "Package picked up",
        (BookingStatus::InTransit, BookingKind::Ride) => "Enjoy your ride",
        (BookingStatus::InTransit, BookingKind::Delivery) => "Package is on the way",
        (BookingStatus::Delivered, BookingKind::Ride) => "Trip completed",
        (BookingStatus::Delivered, BookingKind::Delivery) => "Package delivered successfully!",
    }
}

/// The four checklist items of the tracking view, each with the status from
/// which it counts as done.
pub fn milestones(status: BookingStatus, kind: BookingKind) -> Vec<Milestone> {
    let steps: [(&str, BookingStatus); 4] = match kind {
        BookingKind::Ride => [
            ("Rider Assigned", BookingStatus::Accepted),
            ("Rider Arrival", BookingStatus::Arriving),
            ("Trip Started", BookingStatus::InTransit),
            ("Trip Completed", BookingStatus::Delivered),
        ],
        BookingKind::Delivery => [
            ("Rider Assigned", BookingStatus::Accepted),
            ("Package Pickup", BookingStatus::Arriving),
            ("In Transit", BookingStatus::InTransit),
            ("Delivered", BookingStatus::Delivered),
        ],
    };
    steps
        .iter()
        .map(|(label, done_from)| Milestone {
            label: label.to_string(),
            state: if status >= *done_from {
                MilestoneState::Completed
            } else {
                MilestoneState::Pending
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picked_up_wording_depends_on_kind() {
        assert_eq!(
            status_message(BookingStatus::PickedUp, BookingKind::Delivery),
            "Package picked up"
        );
        assert_eq!(
            status_message(BookingStatus::PickedUp, BookingKind::Ride),
            "Rider has arrived"
        );
    }

    #[test]
    fn early_stages_share_wording() {
        for status in [
            BookingStatus::Searching,
            BookingStatus::Accepted,
            BookingStatus::Arriving,
        ] {
            assert_eq!(
                status_message(status, BookingKind::Ride),
                status_message(status, BookingKind::Delivery)
            );
        }
    }

    #[test]
    fn milestones_follow_the_status() {
        let states = |status| -> Vec<MilestoneState> {
            milestones(status, BookingKind::Ride)
                .into_iter()
                .map(|m| m.state)
                .collect()
        };
        use MilestoneState::{Completed, Pending};
        assert_eq!(states(BookingStatus::Searching), vec![Pending; 4]);
        assert_eq!(
            states(BookingStatus::Accepted),
            vec![Completed, Pending, Pending, Pending]
        );
        assert_eq!(
            states(BookingStatus::PickedUp),
            vec![Completed, Completed, Pending, Pending]
        );
        assert_eq!(states(BookingStatus::Delivered), vec![Completed; 4]);
    }

    #[test]
    fn delivery_milestones_use_parcel_labels() {
        let labels: Vec<String> = milestones(BookingStatus::Searching, BookingKind::Delivery)
            .into_iter()
            .map(|m| m.label)
            .collect();
        assert_eq!(
            labels,
            vec!["Rider Assigned", "Package Pickup", "In Transit", "Delivered"]
        );
    }
}
