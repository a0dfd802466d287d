use crate::timeline::event::ScriptEvent;

/// What a single event did to the line buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WrapStep {
    /// A word was placed on `WrapState::active_line`.
    Word,
    /// A lone line break. The buffer is unchanged.
    LineBreak,
    /// A second consecutive line break emptied the buffer.
    PageCleared,
}

/// Line buffer for one script's layout.
///
/// `lines` may end with an empty line pushed after a sentence-terminal word; the next word fills
/// it. `active_line` always points at the line holding the most recent word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrapState {
    lines: Vec<String>,
    active_line: usize,
    char_budget: usize,
    last_was_break: bool,
}

impl WrapState {
    /// Empty buffer wrapping at `char_budget` characters.
    pub fn new(char_budget: usize) -> Self {
        Self {
            lines: Vec::new(),
            active_line: 0,
            char_budget,
            last_was_break: false,
        }
    }

    /// Feed one event.
    pub fn apply(&mut self, event: &ScriptEvent) -> WrapStep {
        if event.is_line_break {
            let cleared = self.last_was_break;
            if cleared {
                self.lines.clear();
                self.active_line = 0;
            }
            self.last_was_break = true;
            return if cleared {
                WrapStep::PageCleared
            } else {
                WrapStep::LineBreak
            };
        }
        self.last_was_break = false;
        self.push_word(&event.word);
        WrapStep::Word
    }

    /// Place `word` on the buffer.
    pub fn push_word(&mut self, word: &str) {
        let word_chars = word.chars().count();
        match self.lines.last_mut() {
            None => self.lines.push(word.to_string()),
            Some(last) if last.is_empty() => last.push_str(word),
            Some(last) if last.chars().count() + 1 + word_chars < self.char_budget => {
                last.push(' ');
                last.push_str(word);
            }
            Some(_) => self.lines.push(word.to_string()),
        }
        self.active_line = self.lines.len() - 1;

        if is_sentence_terminal(word) {
            self.lines.push(String::new());
        }
    }

    /// All lines, including a trailing empty line if one is pending.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Index of the line holding the most recent word.
    pub fn active_line(&self) -> usize {
        self.active_line
    }

    /// Text of the active line, empty before the first word.
    pub fn active_text(&self) -> &str {
        self.lines
            .get(self.active_line)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Character budget per line.
    pub fn char_budget(&self) -> usize {
        self.char_budget
    }

    /// The last `count` lines up to and including the active line, oldest first.
    pub fn visible_window(&self, count: usize) -> &[String] {
        if self.lines.is_empty() {
            return &[];
        }
        let end = self.active_line + 1;
        let start = end.saturating_sub(count.max(1));
        &self.lines[start..end]
    }
}

/// Words ending in `.`, `"` or `;` close their line.
pub fn is_sentence_terminal(word: &str) -> bool {
    matches!(word.chars().last(), Some('.' | '"' | ';'))
}

/// `true` when `line` ends in `.`, `,`, `!`, `:`, `;` or `?`, ignoring trailing whitespace.
pub fn line_needs_break(line: &str) -> bool {
    matches!(
        line.trim_end().chars().last(),
        Some('.' | ',' | '!' | ':' | ';' | '?')
    )
}

#[cfg(test)]
#[path = "../../tests/unit/layout/wrap.rs"]
mod tests;
