use crate::messages::{Announce, StartListening};
use crate::tracking_actors::announcer::Announcer;
use actix::fut::wrap_future;
use actix::prelude::*;
use colored::Color;
use common::capabilities::Listener;
use common::logger::Logger;
use serde::{Deserialize, Serialize};

pub const LISTENING_PROMPT: &str = "Listening. Say ride, delivery, or shops.";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    Ride,
    Delivery,
    Shops,
}

/// What a recognized phrase asks the app to do.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VoiceCommand {
    SelectService(Service),
    NavigateHome,
    Unrecognized,
}

impl VoiceCommand {
    /// Keyword match on the transcript; the first rule that matches wins.
    pub fn parse(transcript: &str) -> Self {
        let heard = transcript.to_lowercase();
        let mentions = |words: &[&str]| words.iter().any(|w| heard.contains(*w));

        if mentions(&["ride", "book"]) {
            VoiceCommand::SelectService(Service::Ride)
        } else if mentions(&["delivery", "parcel", "send"]) {
            VoiceCommand::SelectService(Service::Delivery)
        } else if mentions(&["shop", "store"]) {
            VoiceCommand::SelectService(Service::Shops)
        } else if mentions(&["home", "back"]) {
            VoiceCommand::NavigateHome
        } else {
            VoiceCommand::Unrecognized
        }
    }

    /// Spoken confirmation of the command.
    pub fn reply(&self) -> &'static str {
        match self {
            VoiceCommand::SelectService(Service::Ride) => "Opening ride booking",
            VoiceCommand::SelectService(Service::Delivery) => "Opening parcel delivery",
            VoiceCommand::SelectService(Service::Shops) => "Opening shops",
            VoiceCommand::NavigateHome => "Going to home screen",
            VoiceCommand::Unrecognized => {
                "Sorry, I did not understand that command. Try saying ride, delivery, or shops."
            }
        }
    }
}

/// Actor VoiceControl: microphone button of the app.
pub struct VoiceControl {
    pub listener: Box<dyn Listener>,
    pub announcer: Addr<Announcer>,
    pub logger: Logger,
}

impl VoiceControl {
    pub fn new(listener: Box<dyn Listener>, announcer: Addr<Announcer>) -> Self {
        VoiceControl {
            listener,
            announcer,
            logger: Logger::new("VoiceControl", Color::Blue),
        }
    }
}

impl Actor for VoiceControl {
    type Context = Context<Self>;
}

impl VoiceControl {
    /// One recognition round: listen, interpret and confirm out loud.
    fn listen_once(&mut self) -> Option<VoiceCommand> {
        let Some(transcript) = self.listener.listen() else {
            self.logger.warn("Nothing was recognized");
            return None;
        };

        let command = VoiceCommand::parse(&transcript);
        self.logger
            .info(format!("You said: \"{}\" → {:?}", transcript, command));
        self.announcer.do_send(Announce::new(command.reply()));
        Some(command)
    }
}

impl Handler<StartListening> for VoiceControl {
    type Result = ResponseActFuture<Self, Option<VoiceCommand>>;

    fn handle(&mut self, _msg: StartListening, _ctx: &mut Self::Context) -> Self::Result {
        // The prompt has been spoken by the time the microphone opens.
        let prompt = self.announcer.send(Announce::new(LISTENING_PROMPT));
        let fut = wrap_future::<_, Self>(prompt).map(|delivered, actor: &mut Self, _ctx| {
            if let Err(e) = delivered {
                actor
                    .logger
                    .warn(format!("Listening prompt was not delivered: {}", e));
            }
            actor.listen_once()
        });
        Box::pin(fut)
    }
}
