//! Horizontal placement of lines and of the highlighted word.
//!
//! `line_w` is the width of a full display line and `word_w` the width of `" " + word`. Both
//! helpers are pure and cheap, so they are recomputed per frame.

use crate::config::spec::IndentStyle;

/// Canvas values the placement rules depend on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HorizontalFrame {
    /// Canvas width.
    pub width: f32,
    /// Left/right margin.
    pub margin: f32,
}

/// X of a line's left edge.
pub fn line_x(style: IndentStyle, frame: HorizontalFrame, line_w: f32, word_w: f32) -> f32 {
    match style {
        IndentStyle::Left => frame.margin,
        IndentStyle::Middle => {
            let mut x = (frame.width - line_w) / 2.0;
            if line_w + word_w < frame.width {
                x -= word_w / 2.0;
            }
            x
        }
    }
}

/// X where `" " + word` is drawn on the active line.
pub fn word_x(style: IndentStyle, frame: HorizontalFrame, line_w: f32, word_w: f32) -> f32 {
    match style {
        IndentStyle::Left => {
            if frame.margin + line_w + frame.margin < frame.width {
                frame.margin + line_w - word_w
            } else {
                // Overflowing lines overlap at the margin.
                frame.margin
            }
        }
        IndentStyle::Middle => {
            let x_line = line_x(style, frame, line_w, word_w);
            if x_line + line_w + word_w + frame.margin < frame.width {
                x_line + line_w
            } else {
                (frame.width - word_w) / 2.0
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/geometry.rs"]
mod tests;
