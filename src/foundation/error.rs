/// Convenience result type used across lyric-reel.
pub type ReelResult<T> = Result<T, ReelError>;

/// Top-level error taxonomy used by pipeline stages.
#[derive(thiserror::Error, Debug)]
pub enum ReelError {
    /// Invalid configuration values.
    #[error("validation error: {0}")]
    Validation(String),

    /// Unusable run inputs: unreadable transcript, missing frames, missing mux inputs.
    #[error("input error: {0}")]
    Input(String),

    /// Failures reported by the video encoder or muxer.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when parsing configuration or timing interchange data.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReelError {
    /// Build a [`ReelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ReelError::Input`] value.
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    /// Build a [`ReelError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`ReelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
