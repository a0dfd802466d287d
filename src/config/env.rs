use std::path::PathBuf;

/// Environment variable overriding the default per-word pause.
pub const WORD_PAUSE_ENV: &str = "LVG_WORD_PAUSE_MS";
/// Environment variable naming a background image to use when none is configured explicitly.
pub const BG_IMAGE_ENV: &str = "LVG_BG_IMAGE_FULL_PATH";

/// Environment-derived overrides, captured once per run.
///
/// Library code takes this value explicitly instead of reading the process environment, so a run
/// sees one consistent snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    /// Value of [`WORD_PAUSE_ENV`], if set and numeric.
    pub word_pause_ms: Option<u64>,
    /// Value of [`BG_IMAGE_ENV`], if set and non-empty.
    pub background_image: Option<PathBuf>,
}

impl EnvOverrides {
    /// Snapshot the current process environment.
    pub fn from_process_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build overrides from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let word_pause_ms = lookup(WORD_PAUSE_ENV).and_then(|v| match v.trim().parse::<u64>() {
            Ok(ms) => Some(ms),
            Err(_) => {
                tracing::warn!(value = %v, "ignoring non-numeric {WORD_PAUSE_ENV}");
                None
            }
        });
        let background_image = lookup(BG_IMAGE_ENV)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        Self {
            word_pause_ms,
            background_image,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/env.rs"]
mod tests;
