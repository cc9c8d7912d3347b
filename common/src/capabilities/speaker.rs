use crate::logger::Logger;
use crate::types::locale::Locale;
use std::sync::{Arc, Mutex};

/// Text-to-speech output. Fire-and-forget: failures never reach the caller.
pub trait Speaker: Send + Sync {
    fn speak(&self, text: &str, locale: Locale);
}

/// Used when the platform has no speech engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSpeaker;

impl Speaker for NoopSpeaker {
    fn speak(&self, _text: &str, _locale: Locale) {}
}

/// Prints what would be spoken.
#[derive(Debug, Clone)]
pub struct ConsoleSpeaker {
    logger: Logger,
}

impl ConsoleSpeaker {
    pub fn new() -> Self {
        Self {
            logger: Logger::plain("Speech"),
        }
    }
}

impl Default for ConsoleSpeaker {
    fn default() -> Self {
        Self::new()
    }
}

impl Speaker for ConsoleSpeaker {
    fn speak(&self, text: &str, locale: Locale) {
        self.logger
            .voice(format!("({}) {}", locale.language_tag(), text));
    }
}

/// Keeps every utterance in memory. Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct MemorySpeaker {
    spoken: Arc<Mutex<Vec<(String, Locale)>>>,
}

impl MemorySpeaker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texts spoken so far, oldest first.
    pub fn texts(&self) -> Vec<String> {
        self.spoken
            .lock()
            .map(|spoken| spoken.iter().map(|(text, _)| text.clone()).collect())
            .unwrap_or_default()
    }

    pub fn utterances(&self) -> Vec<(String, Locale)> {
        self.spoken
            .lock()
            .map(|spoken| spoken.clone())
            .unwrap_or_default()
    }
}

impl Speaker for MemorySpeaker {
    fn speak(&self, text: &str, locale: Locale) {
        if let Ok(mut spoken) = self.spoken.lock() {
            spoken.push((text.to_string(), locale));
        }
    }
}
