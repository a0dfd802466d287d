use std::path::{Path, PathBuf};

use crate::{
    assemble::{
        ffmpeg::{FfmpegSink, FfmpegSinkOpts, mux_audio},
        listing::{DEFAULT_TRAILING_REPEAT, FrameSizePolicy, VideoSpec, derive_frame_size, list_frames},
        sink::{FrameSink, RgbaFrame, SinkConfig},
    },
    config::spec::DEFAULT_FPS,
    foundation::{
        core::{FrameIndex, Rgb8},
        error::{ReelError, ReelResult},
    },
};

/// Options for [`assemble_video`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssembleOpts {
    /// Output frames per second.
    pub fps: u32,
    /// Extra copies of the last frame.
    pub trailing_repeat_count: usize,
    /// Output size policy.
    pub size_policy: FrameSizePolicy,
    /// Color translucent frames are flattened over.
    pub background: Rgb8,
}

impl Default for AssembleOpts {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            trailing_repeat_count: DEFAULT_TRAILING_REPEAT,
            size_policy: FrameSizePolicy::Uniform,
            background: Rgb8::new(0, 0, 0),
        }
    }
}

/// Result of an idempotent stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssembleOutcome {
    /// The output was produced by this call.
    Encoded {
        /// Output file.
        path: PathBuf,
        /// Frames pushed to the encoder, trailing hold included.
        frames: u64,
    },
    /// Video and audio were combined by this call.
    Muxed {
        /// Output file.
        path: PathBuf,
    },
    /// The output already existed and was left untouched.
    Skipped {
        /// Existing output file.
        path: PathBuf,
    },
}

impl AssembleOutcome {
    /// Output path, whether encoded or skipped.
    pub fn path(&self) -> &Path {
        match self {
            Self::Encoded { path, .. } | Self::Muxed { path } | Self::Skipped { path } => path,
        }
    }
}

/// Derive the [`VideoSpec`] for the frames in `frames_dir`.
pub fn plan_video(
    frames_dir: &Path,
    out_path: &Path,
    opts: &AssembleOpts,
) -> ReelResult<(VideoSpec, Vec<PathBuf>)> {
    if opts.fps == 0 {
        return Err(ReelError::validation("video fps must be non-zero"));
    }
    let frames = list_frames(frames_dir)?;
    let (mut w, mut h) = derive_frame_size(&frames, opts.size_policy)?;
    if opts.size_policy == FrameSizePolicy::Mean {
        // yuv420p needs even dimensions.
        w &= !1;
        h &= !1;
        if w < 2 || h < 2 {
            return Err(ReelError::input(format!(
                "mean frame size of '{}' rounds down to {w}x{h}; frames must be at least 2x2",
                frames_dir.display()
            )));
        }
    }
    let spec = VideoSpec {
        out_path: out_path.to_path_buf(),
        frame_size: (w, h),
        fps: opts.fps,
        trailing_repeat_count: opts.trailing_repeat_count,
    };
    Ok((spec, frames))
}

/// Encode the frames in `frames_dir` through `sink`, unless `out_path` already exists.
#[tracing::instrument(skip(opts, sink), fields(fps = opts.fps))]
pub fn assemble_video(
    frames_dir: &Path,
    out_path: &Path,
    opts: &AssembleOpts,
    sink: &mut dyn FrameSink,
) -> ReelResult<AssembleOutcome> {
    if out_path.exists() {
        tracing::info!(path = %out_path.display(), "video exists, skipping encode");
        return Ok(AssembleOutcome::Skipped {
            path: out_path.to_path_buf(),
        });
    }

    let (spec, frames) = plan_video(frames_dir, out_path, opts)?;
    let (width, height) = spec.frame_size;
    sink.begin(SinkConfig {
        width,
        height,
        fps: spec.fps,
    })?;

    match stream_frames(&spec, &frames, sink) {
        Ok(pushed) => {
            sink.end()?;
            tracing::info!(
                path = %out_path.display(),
                frames = pushed,
                width,
                height,
                "video written"
            );
            Ok(AssembleOutcome::Encoded {
                path: out_path.to_path_buf(),
                frames: pushed,
            })
        }
        Err(e) => {
            sink.abort();
            Err(e)
        }
    }
}

fn stream_frames(spec: &VideoSpec, frames: &[PathBuf], sink: &mut dyn FrameSink) -> ReelResult<u64> {
    let mut idx = 0u64;
    let mut last = None;
    for path in frames {
        let frame = load_frame(path, spec.frame_size)?;
        sink.push_frame(FrameIndex(idx), &frame)?;
        idx += 1;
        last = Some(frame);
    }
    if let Some(frame) = last {
        for _ in 0..spec.trailing_repeat_count {
            sink.push_frame(FrameIndex(idx), &frame)?;
            idx += 1;
        }
    }
    Ok(idx)
}

fn load_frame(path: &Path, (width, height): (u32, u32)) -> ReelResult<RgbaFrame> {
    let img = image::open(path)
        .map_err(|e| ReelError::input(format!("failed to decode frame '{}': {e}", path.display())))?
        .to_rgba8();
    let img = if img.dimensions() == (width, height) {
        img
    } else {
        image::imageops::resize(&img, width, height, image::imageops::FilterType::Triangle)
    };
    Ok(RgbaFrame {
        width,
        height,
        data: img.into_raw(),
    })
}

/// Encode `frames_dir` to `out_path` with the system `ffmpeg`.
pub fn encode_video(
    frames_dir: &Path,
    out_path: &Path,
    opts: &AssembleOpts,
) -> ReelResult<AssembleOutcome> {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts {
        out_path: out_path.to_path_buf(),
        bg_rgba: opts.background.to_rgba8(),
    });
    assemble_video(frames_dir, out_path, opts, &mut sink)
}

/// Combine `video` and `audio` into `out_path`, unless `out_path` already exists.
#[tracing::instrument]
pub fn attach_audio(video: &Path, audio: &Path, out_path: &Path) -> ReelResult<AssembleOutcome> {
    if out_path.exists() {
        tracing::info!(path = %out_path.display(), "combined video exists, skipping mux");
        return Ok(AssembleOutcome::Skipped {
            path: out_path.to_path_buf(),
        });
    }
    for (what, p) in [("video", video), ("audio", audio)] {
        if !p.is_file() {
            return Err(ReelError::input(format!(
                "cannot attach audio: {what} file '{}' does not exist",
                p.display()
            )));
        }
    }

    mux_audio(video, audio, out_path)?;
    tracing::info!(path = %out_path.display(), "audio attached");
    Ok(AssembleOutcome::Muxed {
        path: out_path.to_path_buf(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assemble/video.rs"]
mod tests;
