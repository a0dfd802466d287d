/// Instruction token marking an explicit line break.
pub const LINEBREAK: &str = "LINEBREAK";

/// One timed unit of transcript playback: a word with a duration, or a line break.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptEvent {
    /// The word, verbatim. Empty for line breaks.
    pub word: String,
    /// How long the event is displayed.
    pub pause_ms: u64,
    /// `true` for line-break events.
    pub is_line_break: bool,
}

impl ScriptEvent {
    /// A word event.
    pub fn word(word: impl Into<String>, pause_ms: u64) -> Self {
        Self {
            word: word.into(),
            pause_ms,
            is_line_break: false,
        }
    }

    /// A line-break event.
    pub fn line_break(pause_ms: u64) -> Self {
        Self {
            word: String::new(),
            pause_ms,
            is_line_break: true,
        }
    }

    /// Instruction tokens persisted alongside the event.
    pub fn instructions(&self) -> &'static str {
        if self.is_line_break { LINEBREAK } else { "" }
    }
}
