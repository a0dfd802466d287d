//! Line wrapping and on-canvas placement of words.

/// Per-word layout over a whole script.
pub mod engine;
/// Pure horizontal placement rules.
pub mod geometry;
/// Font measurements feeding the wrap budget and line window.
pub mod metrics;
/// Line buffer state machine.
pub mod wrap;
