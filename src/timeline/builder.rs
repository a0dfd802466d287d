use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    config::{env::EnvOverrides, spec::DEFAULT_WORD_PAUSE_MS},
    foundation::error::{ReelError, ReelResult},
    timeline::{
        codec::{decode_events, encode_events},
        event::ScriptEvent,
    },
};

/// Options for turning a transcript into timing events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimelineOpts {
    /// Pause assigned to every event.
    pub word_pause_ms: u64,
}

impl Default for TimelineOpts {
    fn default() -> Self {
        Self {
            word_pause_ms: DEFAULT_WORD_PAUSE_MS,
        }
    }
}

impl TimelineOpts {
    /// Options with the pause taken from `LVG_WORD_PAUSE_MS` when present.
    pub fn from_env(env: &EnvOverrides) -> Self {
        Self {
            word_pause_ms: env.word_pause_ms.unwrap_or(DEFAULT_WORD_PAUSE_MS),
        }
    }
}

/// Split a transcript into word events, closing every source line with a line-break event.
pub fn build_events(transcript: &str, opts: TimelineOpts) -> Vec<ScriptEvent> {
    let mut events = Vec::new();
    for line in transcript.lines() {
        events.extend(
            line.split_whitespace()
                .map(|w| ScriptEvent::word(w, opts.word_pause_ms)),
        );
        // Consecutive line breaks are read back as a page break.
        events.push(ScriptEvent::line_break(opts.word_pause_ms));
    }
    events
}

/// Write events to `path`, replacing any previous file atomically.
pub fn write_timeline(path: &Path, events: &[ScriptEvent]) -> ReelResult<()> {
    let doc = encode_events(events);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create timeline dir '{}'", parent.display()))?;
    }

    let tmp = sibling_tmp_path(path);
    let res = std::fs::write(&tmp, doc.as_bytes())
        .with_context(|| format!("write timeline '{}'", tmp.display()))
        .and_then(|()| {
            std::fs::rename(&tmp, path)
                .with_context(|| format!("move timeline into '{}'", path.display()))
        });
    if res.is_err() {
        let _ = std::fs::remove_file(&tmp);
    }
    res?;
    Ok(())
}

/// Read events back from an interchange file.
pub fn read_timeline(path: &Path) -> ReelResult<Vec<ScriptEvent>> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        ReelError::input(format!("failed to read timeline '{}': {e}", path.display()))
    })?;
    decode_events(&text)
}

/// Read a transcript and persist its events as `<out_dir>/<transcript file name>`.
///
/// Returns the path of the written timeline.
#[tracing::instrument(skip(opts), fields(pause_ms = opts.word_pause_ms))]
pub fn generate_timeline(
    transcript_path: &Path,
    out_dir: &Path,
    opts: TimelineOpts,
) -> ReelResult<PathBuf> {
    let transcript = std::fs::read_to_string(transcript_path).map_err(|e| {
        ReelError::input(format!(
            "failed to read transcript '{}': {e}",
            transcript_path.display()
        ))
    })?;
    let name = transcript_path.file_name().ok_or_else(|| {
        ReelError::input(format!(
            "transcript path '{}' has no file name",
            transcript_path.display()
        ))
    })?;

    let events = build_events(&transcript, opts);
    let out_path = out_dir.join(name);
    write_timeline(&out_path, &events)?;

    let words = events.iter().filter(|e| !e.is_line_break).count();
    tracing::info!(
        path = %out_path.display(),
        words,
        line_breaks = events.len() - words,
        "timeline written"
    );
    Ok(out_path)
}

fn sibling_tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(format!(".tmp{}", std::process::id()));
    path.with_file_name(name)
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/builder.rs"]
mod tests;
