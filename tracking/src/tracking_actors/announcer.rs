use crate::messages::{Announce, SetVoice};
use actix::prelude::*;
use colored::Color;
use common::capabilities::Speaker;
use common::logger::Logger;
use common::types::locale::Locale;

/// Actor Announcer: voice and console output of status messages.
pub struct Announcer {
    /// Speech engine of the platform.
    pub speaker: Box<dyn Speaker>,
    /// Voice guidance accessibility setting.
    pub voice_enabled: bool,
    pub locale: Locale,
    pub logger: Logger,
}

impl Announcer {
    pub fn new(speaker: Box<dyn Speaker>, voice_enabled: bool, locale: Locale) -> Self {
        Announcer {
            speaker,
            voice_enabled,
            locale,
            logger: Logger::new("Announcer", Color::Magenta),
        }
    }
}

impl Actor for Announcer {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        self.logger.info(format!(
            "Announcer started, voice guidance {}",
            if self.voice_enabled { "enabled" } else { "disabled" }
        ));
    }
}

impl Handler<Announce> for Announcer {
    type Result = ();

    fn handle(&mut self, msg: Announce, _ctx: &mut Self::Context) -> Self::Result {
        self.logger.info(&msg.text);
        if self.voice_enabled {
            self.speaker.speak(&msg.text, self.locale);
        }
    }
}

impl Handler<SetVoice> for Announcer {
    type Result = ();

    fn handle(&mut self, msg: SetVoice, _ctx: &mut Self::Context) -> Self::Result {
        self.voice_enabled = msg.enabled;
        self.logger.info(format!(
            "Voice guidance {}",
            if msg.enabled { "enabled" } else { "disabled" }
        ));
    }
}
