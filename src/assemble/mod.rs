//! Turning rendered frames into a video file.
//!
//! Frames are listed in natural order, sized, and streamed through a [`sink::FrameSink`]; the
//! default sink pipes raw RGBA into the system `ffmpeg`.

/// `ffmpeg`-based encoding and audio muxing.
pub mod ffmpeg;
/// Frame discovery, natural ordering and output sizing.
pub mod listing;
/// Frame sink trait and the in-memory sink.
pub mod sink;
/// Idempotent video assembly.
pub mod video;
