//! Rasterizing word layouts into still frames.

/// Base layer, worker surfaces and PNG output.
pub mod canvas;
/// Parallel per-word frame rendering.
pub mod frames;
/// Sub-frame counts and highlight phases.
pub mod phases;
