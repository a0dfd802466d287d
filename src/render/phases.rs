/// How much of the word is highlighted during a phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
    /// Nothing is drawn over the canvas.
    Hold,
    /// Whole word in the preview color.
    Preview,
    /// First `n` characters in the highlight color, over the preview.
    Chars(usize),
}

/// A run of identical sub-frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Phase {
    /// What the phase shows.
    pub reveal: Reveal,
    /// Number of sub-frames.
    pub frames: usize,
}

/// Sub-frames for a pause: `ceil(fps * pause_ms / 1000)`.
pub fn frames_for_pause(fps: u32, pause_ms: u64) -> usize {
    let num = u128::from(fps) * u128::from(pause_ms);
    num.div_ceil(1000) as usize
}

/// Split `total` sub-frames of `word` into highlight phases.
///
/// Each phase gets `total / k` frames and the last one also takes the remainder.
pub fn plan_phases(word: &str, total: usize) -> Vec<Phase> {
    let len = word.chars().count();
    let reveals = match len {
        0 => vec![Reveal::Hold],
        1 => vec![Reveal::Preview, Reveal::Chars(1)],
        2 => vec![Reveal::Preview, Reveal::Chars(1), Reveal::Chars(2)],
        _ => {
            let token = len.div_ceil(3);
            vec![
                Reveal::Preview,
                Reveal::Chars(token),
                Reveal::Chars((2 * token).min(len)),
                Reveal::Chars(len),
            ]
        }
    };

    let k = reveals.len();
    let each = total / k;
    let last = total - each * (k - 1);
    reveals
        .into_iter()
        .enumerate()
        .map(|(i, reveal)| Phase {
            reveal,
            frames: if i + 1 == k { last } else { each },
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/render/phases.rs"]
mod tests;
