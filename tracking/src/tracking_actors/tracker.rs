use crate::messages::{
    Announce, ContactAction, ContactAgent, GetSnapshot, MovementTick, StatusChanged, StatusTick,
    StopTracking, Subscribe,
};
use crate::simulation::announcements::{CALLING_AGENT, OPENING_CHAT};
use crate::simulation::status_driver::StatusChange;
use crate::simulation::TrackedBooking;
use crate::tracking_actors::announcer::Announcer;
use actix::prelude::*;
use colored::Color;
use common::config::TrackerConfig;
use common::errors::BookingError;
use common::logger::Logger;
use common::types::agent::AgentProfile;
use common::types::booking::BookingDetails;

/// Actor Tracker: owns a tracked booking and drives it with two timers.
///
/// The status timer advances the booking one stage every
/// `status_interval`; the movement timer moves the agent and counts the ETA
/// down every `movement_interval`. Both handles are kept so they can be
/// cancelled when the booking is delivered or the user leaves the view.
pub struct Tracker {
    pub booking: TrackedBooking,
    pub config: TrackerConfig,
    /// Where status messages are sent to be shown and spoken.
    pub announcer: Addr<Announcer>,
    /// Recipients of every stage change.
    pub subscribers: Vec<Recipient<StatusChanged>>,
    status_timer: Option<SpawnHandle>,
    movement_timer: Option<SpawnHandle>,
    finished: bool,
    pub logger: Logger,
}

impl Tracker {
    pub fn new(
        details: BookingDetails,
        agent: AgentProfile,
        config: TrackerConfig,
        announcer: Addr<Announcer>,
    ) -> Result<Self, BookingError> {
        let booking = TrackedBooking::start(details, agent)?;
        let logger = Logger::new(
            format!("Tracker {}", &booking.booking_id().to_string()[..8]),
            Color::Cyan,
        );
        Ok(Tracker {
            booking,
            config,
            announcer,
            subscribers: Vec::new(),
            status_timer: None,
            movement_timer: None,
            finished: false,
            logger,
        })
    }

    fn start_timers(&mut self, ctx: &mut Context<Self>) {
        let status_interval = self.config.status_interval();
        let movement_interval = self.config.movement_interval();
        self.status_timer = Some(ctx.run_interval(status_interval, |act, ctx| {
            act.on_status_tick(ctx);
        }));
        self.movement_timer = Some(ctx.run_interval(movement_interval, |act, _ctx| {
            act.on_movement_tick();
        }));
        self.logger.info(format!(
            "Timers scheduled: status every {:?}, movement every {:?}",
            status_interval, movement_interval
        ));
    }

    fn stop_timers(&mut self, ctx: &mut Context<Self>) {
        for handle in [self.status_timer.take(), self.movement_timer.take()]
            .into_iter()
            .flatten()
        {
            ctx.cancel_future(handle);
        }
    }

    /// Stops the session for good. Later ticks leave the booking untouched.
    fn finish(&mut self, ctx: &mut Context<Self>, reason: &str) {
        if self.finished {
            return;
        }
        self.stop_timers(ctx);
        self.finished = true;
        self.logger.info(format!(
            "Tracking finished ({}) with status {}",
            reason,
            self.booking.status()
        ));
    }

    fn on_status_tick(&mut self, ctx: &mut Context<Self>) {
        if self.finished {
            return;
        }
        match self.booking.advance_status() {
            Some(change) => {
                self.logger.info(format!(
                    "Status {} → {} ({:.0}%)",
                    change.from,
                    change.to,
                    change.progress * 100.0
                ));
                self.announcer.do_send(Announce::new(change.message));
                self.notify(&change);
                if change.terminal {
                    self.finish(ctx, "booking delivered");
                }
            }
            None => self.finish(ctx, "no stages left"),
        }
    }

    fn on_movement_tick(&mut self) {
        // A delivered booking always arrives here with `finished` set.
        if self.finished {
            return;
        }
        self.booking.step_movement();
    }

    fn notify(&self, change: &StatusChange) {
        let update = StatusChanged {
            booking_id: self.booking.booking_id().to_string(),
            from: change.from,
            status: change.to,
            message: change.message.to_string(),
            progress: change.progress,
            terminal: change.terminal,
        };
        for subscriber in &self.subscribers {
            subscriber.do_send(update.clone());
        }
    }
}

impl Actor for Tracker {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        self.logger.info(format!(
            "Tracking {} booking at fare {}: {}",
            self.booking.kind(),
            self.booking.fare(),
            self.booking.message()
        ));
        self.start_timers(ctx);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.logger.info("Tracker stopped");
    }
}

impl Handler<StatusTick> for Tracker {
    type Result = ();

    fn handle(&mut self, _msg: StatusTick, ctx: &mut Self::Context) -> Self::Result {
        self.on_status_tick(ctx);
    }
}

impl Handler<MovementTick> for Tracker {
    type Result = ();

    fn handle(&mut self, _msg: MovementTick, _ctx: &mut Self::Context) -> Self::Result {
        self.on_movement_tick();
    }
}

impl Handler<StopTracking> for Tracker {
    type Result = MessageResult<StopTracking>;

    fn handle(&mut self, _msg: StopTracking, ctx: &mut Self::Context) -> Self::Result {
        self.finish(ctx, "left the tracking view");
        MessageResult(self.booking.snapshot(true))
    }
}

impl Handler<GetSnapshot> for Tracker {
    type Result = MessageResult<GetSnapshot>;

    fn handle(&mut self, _msg: GetSnapshot, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(self.booking.snapshot(self.finished))
    }
}

impl Handler<ContactAgent> for Tracker {
    type Result = ();

    fn handle(&mut self, msg: ContactAgent, _ctx: &mut Self::Context) -> Self::Result {
        let agent = self.booking.agent();
        let text = match msg.action {
            ContactAction::Call => {
                self.logger
                    .info(format!("Calling {} at {}", agent.name, agent.phone));
                CALLING_AGENT
            }
            ContactAction::Chat => {
                self.logger.info(format!("Opening chat with {}", agent.name));
                OPENING_CHAT
            }
        };
        self.announcer.do_send(Announce::new(text));
    }
}

impl Handler<Subscribe> for Tracker {
    type Result = ();

    fn handle(&mut self, msg: Subscribe, _ctx: &mut Self::Context) -> Self::Result {
        self.subscribers.push(msg.recipient);
    }
}
