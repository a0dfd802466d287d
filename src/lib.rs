//! lyric-reel turns a plain-text transcript into a word-by-word highlighted lyric video.
//!
//! The pipeline runs in stages that only talk through the filesystem:
//!
//! - [`generate_timeline`] splits a transcript into timed word and line-break events
//! - [`layout_script`] wraps words into lines and places them on the canvas
//! - [`render_frames`] rasterizes each word's reveal phases into `lvg-<event>-<sub>.png` files
//! - [`assemble_video`] streams the frames into a [`FrameSink`], by default the system `ffmpeg`
//! - [`attach_audio`] muxes an audio track into the encoded video
//!
//! [`run_pipeline`] chains all of them over a [`WorkDirs`] layout.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Frame listing, sinks and video encoding.
pub mod assemble;
/// Frame spec, environment overrides and backgrounds.
pub mod config;
/// Word wrapping and placement.
pub mod layout;
/// End-to-end runs over a media directory.
pub mod pipeline;
/// Frame rasterization.
pub mod render;
/// Text measurement and drawing.
pub mod text;
/// Transcript timing events.
pub mod timeline;

pub use crate::foundation::core::{FrameId, FrameIndex, Rgb8};
pub use crate::foundation::error::{ReelError, ReelResult};

pub use crate::assemble::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use crate::assemble::listing::{FrameSizePolicy, list_frames, natural_cmp};
pub use crate::assemble::sink::{FrameSink, InMemorySink, RgbaFrame, SinkConfig};
pub use crate::assemble::video::{
    AssembleOpts, AssembleOutcome, assemble_video, attach_audio, encode_video,
};
pub use crate::config::background::{Background, resolve_background};
pub use crate::config::env::EnvOverrides;
pub use crate::config::spec::{BackgroundSpec, FontSpec, FrameSpec, IndentStyle};
pub use crate::layout::engine::{LayoutEngine, ScriptLayout, WordLayout, layout_script};
pub use crate::pipeline::{RunOpts, RunReport, WorkDirs, run_pipeline, run_pipeline_with};
pub use crate::render::frames::{RenderStats, RenderThreading, render_frames};
pub use crate::text::font::FontFace;
pub use crate::text::shaper::{BlockFace, TextShaper, TypeFace};
pub use crate::timeline::builder::{TimelineOpts, generate_timeline, read_timeline};
pub use crate::timeline::event::ScriptEvent;
