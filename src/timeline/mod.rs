//! Transcript to timing events, and the on-disk interchange format.

/// Transcript splitting and timeline files.
pub mod builder;
/// Comma-separated interchange rows.
pub mod codec;
/// The timing event type.
pub mod event;
