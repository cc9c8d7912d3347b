use crate::messages::StatusChanged;
use crate::simulation::announcements::milestones;
use actix::prelude::*;
use colored::Color;
use common::logger::Logger;
use common::types::booking::BookingKind;
use common::types::booking_status::BookingStatus;
use common::types::dtos::MilestoneState;
use tokio::sync::oneshot;

const PROGRESS_WIDTH: usize = 24;

/// Progress bar such as `[######------------------]  33%`.
pub fn render_progress(progress: f64, width: usize) -> String {
    let progress = progress.clamp(0.0, 1.0);
    let filled = (progress * width as f64).round() as usize;
    format!(
        "[{}{}] {:>3.0}%",
        "#".repeat(filled),
        "-".repeat(width - filled),
        progress * 100.0
    )
}

/// Actor TrackingView: console rendition of the live tracking screen.
pub struct TrackingView {
    pub kind: BookingKind,
    /// Fired once with the terminal status.
    pub delivered: Option<oneshot::Sender<BookingStatus>>,
    pub logger: Logger,
}

impl TrackingView {
    pub fn new(kind: BookingKind, delivered: oneshot::Sender<BookingStatus>) -> Self {
        TrackingView {
            kind,
            delivered: Some(delivered),
            logger: Logger::new("Live Tracking", Color::BrightWhite),
        }
    }
}

impl Actor for TrackingView {
    type Context = Context<Self>;
}

impl Handler<StatusChanged> for TrackingView {
    type Result = ();

    fn handle(&mut self, msg: StatusChanged, _ctx: &mut Self::Context) -> Self::Result {
        self.logger.info(format!(
            "{} {}",
            render_progress(msg.progress, PROGRESS_WIDTH),
            msg.message
        ));
        for milestone in milestones(msg.status, self.kind) {
            let mark = match milestone.state {
                MilestoneState::Completed => "x",
                MilestoneState::Pending => " ",
            };
            self.logger.info(format!("  [{}] {}", mark, milestone.label));
        }
        if msg.terminal {
            if let Some(delivered) = self.delivered.take() {
                if delivered.send(msg.status).is_err() {
                    self.logger.warn("Nobody is waiting for the end of the trip");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_partial_progress() {
        assert_eq!(render_progress(2.0 / 6.0, 6), "[##----]  33%");
        assert_eq!(render_progress(1.0, 4), "[####] 100%");
    }

    #[actix_rt::test]
    async fn reports_the_terminal_status_once() {
        let (tx, rx) = oneshot::channel();
        let view = TrackingView::new(BookingKind::Delivery, tx).start();
        let update = |status: BookingStatus| StatusChanged {
            booking_id: "b-1".to_string(),
            from: BookingStatus::InTransit,
            status,
            message: "Package delivered successfully!".to_string(),
            progress: status.progress(),
            terminal: status.is_terminal(),
        };
        view.send(update(BookingStatus::Delivered)).await.unwrap();
        view.send(update(BookingStatus::Delivered)).await.unwrap();
        assert_eq!(rx.await.unwrap(), BookingStatus::Delivered);
    }
}
