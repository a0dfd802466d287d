use crate::{
    config::spec::FrameSpec,
    foundation::error::{ReelError, ReelResult},
    text::shaper::TextShaper,
};

/// Sample used to measure line height; covers ascenders, descenders and tall punctuation.
pub const HEIGHT_SAMPLE: &str = "Trying to keep ^~*,| better height";
/// Glyph used as the average character width.
pub const WIDTH_SAMPLE: &str = "y";

/// Font-dependent measurements derived once per layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameMetrics {
    /// Height of one line of text.
    pub glyph_height: f32,
    /// Width of [`WIDTH_SAMPLE`].
    pub avg_glyph_width: f32,
    /// Characters allowed per line.
    pub char_budget: usize,
    /// Vertical distance between consecutive line tops.
    pub line_advance: f32,
    /// Lines shown per frame, at least 1.
    pub visible_lines: usize,
}

impl FrameMetrics {
    /// Measure `spec`'s font through `shaper`.
    pub fn measure(spec: &FrameSpec, shaper: &mut dyn TextShaper) -> ReelResult<Self> {
        let glyph_height = shaper.measure(HEIGHT_SAMPLE)?.height;
        let avg_glyph_width = shaper.measure(WIDTH_SAMPLE)?.width;
        if !avg_glyph_width.is_finite() || avg_glyph_width <= 0.0 {
            return Err(ReelError::validation(format!(
                "font produced unusable glyph width {avg_glyph_width}"
            )));
        }
        if !glyph_height.is_finite() || glyph_height <= 0.0 {
            return Err(ReelError::validation(format!(
                "font produced unusable line height {glyph_height}"
            )));
        }

        let char_budget = (spec.usable_width() / avg_glyph_width).floor().max(0.0) as usize;
        let line_advance = glyph_height + spec.line_gap;
        let fit = (spec.height as f32 / (spec.margin_top + line_advance)).floor() as usize;
        let visible_lines = fit.min(spec.max_lines_per_frame).max(1);

        Ok(Self {
            glyph_height,
            avg_glyph_width,
            char_budget,
            line_advance,
            visible_lines,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/metrics.rs"]
mod tests;
