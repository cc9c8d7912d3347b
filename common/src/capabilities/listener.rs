use std::collections::VecDeque;

/// Speech recognition. `None` means nothing was recognized, or that the
/// platform cannot listen at all.
pub trait Listener: Send {
    fn listen(&mut self) -> Option<String>;
}

/// Plays back a fixed list of transcripts, then goes silent.
#[derive(Debug, Default, Clone)]
pub struct ScriptedListener {
    transcripts: VecDeque<String>,
}

impl ScriptedListener {
    pub fn new<I, S>(transcripts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            transcripts: transcripts.into_iter().map(Into::into).collect(),
        }
    }

    /// A recognizer that never hears anything.
    pub fn silent() -> Self {
        Self::default()
    }
}

impl Listener for ScriptedListener {
    fn listen(&mut self) -> Option<String> {
        self.transcripts.pop_front()
    }
}
