use crate::{
    config::spec::FrameSpec,
    foundation::error::ReelResult,
    layout::{
        geometry::{HorizontalFrame, line_x, word_x},
        metrics::FrameMetrics,
        wrap::{WrapState, WrapStep, line_needs_break},
    },
    text::shaper::TextShaper,
    timeline::event::ScriptEvent,
};

/// A display line with its top-left draw position.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedLine {
    /// Line text.
    pub text: String,
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
}

/// Everything needed to draw the frames of one word event.
#[derive(Clone, Debug, PartialEq)]
pub struct WordLayout {
    /// Position of the event in the full event stream, line breaks included.
    pub event_index: usize,
    /// The word being highlighted.
    pub word: String,
    /// Display duration of the word.
    pub pause_ms: u64,
    /// Visible lines above the active line, oldest first.
    pub read_lines: Vec<PlacedLine>,
    /// The line holding the word.
    pub active: PlacedLine,
    /// Left edge of `" " + word`, drawn at `active.y`.
    pub word_x: f32,
}

impl WordLayout {
    /// Text drawn at `word_x` for a revealed prefix of `chars` characters.
    pub fn word_prefix(&self, chars: usize) -> String {
        let mut s = String::with_capacity(self.word.len() + 1);
        s.push(' ');
        s.extend(self.word.chars().take(chars));
        s
    }
}

/// A resolved script: one [`WordLayout`] per word event.
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptLayout {
    /// Metrics every word was laid out with.
    pub metrics: FrameMetrics,
    /// Word layouts in event order.
    pub words: Vec<WordLayout>,
}

/// Sequential layout of an event stream.
pub struct LayoutEngine<'a> {
    spec: &'a FrameSpec,
    metrics: FrameMetrics,
    state: WrapState,
}

impl<'a> LayoutEngine<'a> {
    /// Measure the font and start with an empty line buffer.
    pub fn new(spec: &'a FrameSpec, shaper: &mut dyn TextShaper) -> ReelResult<Self> {
        spec.validate()?;
        let metrics = FrameMetrics::measure(spec, shaper)?;
        Ok(Self {
            spec,
            metrics,
            state: WrapState::new(metrics.char_budget),
        })
    }

    /// Metrics in use.
    pub fn metrics(&self) -> FrameMetrics {
        self.metrics
    }

    /// Current line buffer.
    pub fn state(&self) -> &WrapState {
        &self.state
    }

    /// Feed the event at `event_index`; word events yield a layout.
    pub fn step(
        &mut self,
        event_index: usize,
        event: &ScriptEvent,
        shaper: &mut dyn TextShaper,
    ) -> ReelResult<Option<WordLayout>> {
        match self.state.apply(event) {
            WrapStep::LineBreak => return Ok(None),
            WrapStep::PageCleared => {
                tracing::debug!(event_index, "page cleared");
                return Ok(None);
            }
            WrapStep::Word => {}
        }

        let frame = HorizontalFrame {
            width: self.spec.width as f32,
            margin: self.spec.margin_left_right,
        };
        let style = self.spec.indentation;
        let window = self.state.visible_window(self.metrics.visible_lines);
        let Some((active_text, read)) = window.split_last() else {
            return Ok(None);
        };

        let mut y = self.spec.margin_top;
        let mut read_lines = Vec::with_capacity(read.len());
        for text in read {
            let w = shaper.measure(text)?.width;
            read_lines.push(PlacedLine {
                text: text.clone(),
                x: line_x(style, frame, w, 0.0),
                y,
            });
            y += self.metrics.line_advance;
        }

        let line_w = shaper.measure(active_text)?.width;
        let word_w = shaper.measure(&format!(" {}", event.word))?.width;
        let offset_w = if line_needs_break(active_text) {
            0.0
        } else {
            word_w
        };
        let active = PlacedLine {
            text: active_text.clone(),
            x: line_x(style, frame, line_w, offset_w),
            y,
        };
        let layout = WordLayout {
            event_index,
            word: event.word.clone(),
            pause_ms: event.pause_ms,
            read_lines,
            word_x: word_x(style, frame, line_w, word_w),
            active,
        };
        tracing::debug!(
            event_index,
            word = %layout.word,
            lines = layout.read_lines.len() + 1,
            "word laid out"
        );
        Ok(Some(layout))
    }
}

/// Lay out a whole event stream.
#[tracing::instrument(skip_all, fields(events = events.len()))]
pub fn layout_script(
    spec: &FrameSpec,
    events: &[ScriptEvent],
    shaper: &mut dyn TextShaper,
) -> ReelResult<ScriptLayout> {
    let mut engine = LayoutEngine::new(spec, shaper)?;
    let mut words = Vec::new();
    for (i, ev) in events.iter().enumerate() {
        if let Some(w) = engine.step(i, ev, shaper)? {
            words.push(w);
        }
    }
    tracing::info!(
        words = words.len(),
        char_budget = engine.metrics.char_budget,
        visible_lines = engine.metrics.visible_lines,
        "script laid out"
    );
    Ok(ScriptLayout {
        metrics: engine.metrics,
        words,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/engine.rs"]
mod tests;
