use std::path::{Path, PathBuf};

use crate::{
    assemble::{
        ffmpeg::{FfmpegSink, FfmpegSinkOpts},
        listing::{DEFAULT_TRAILING_REPEAT, FrameSizePolicy},
        sink::FrameSink,
        video::{AssembleOpts, AssembleOutcome, assemble_video, attach_audio},
    },
    config::{background::resolve_background, env::EnvOverrides, spec::FrameSpec},
    foundation::error::{ReelError, ReelResult},
    layout::engine::layout_script,
    render::frames::{RenderStats, RenderThreading, render_frames},
    text::{font::FontFace, shaper::TypeFace},
    timeline::builder::{TimelineOpts, generate_timeline, read_timeline},
};

/// Directory layout under a media root.
///
/// ```text
/// <root>/framedata/<transcript file>
/// <root>/frames/<stem>/lvg-*.png
/// <root>/video/<stem>.mp4
/// <root>/video/<stem>-audio.mp4
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkDirs {
    /// Media root.
    pub root: PathBuf,
}

impl WorkDirs {
    /// Layout rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Where timelines are written.
    pub fn framedata_dir(&self) -> PathBuf {
        self.root.join("framedata")
    }

    /// Frames of one transcript.
    pub fn frames_dir(&self, stem: &str) -> PathBuf {
        self.root.join("frames").join(stem)
    }

    /// Silent video of one transcript.
    pub fn video_path(&self, stem: &str) -> PathBuf {
        self.root.join("video").join(format!("{stem}.mp4"))
    }

    /// Video with the audio track attached.
    pub fn combined_path(&self, stem: &str) -> PathBuf {
        self.root.join("video").join(format!("{stem}-audio.mp4"))
    }
}

/// Inputs of a full run.
#[derive(Clone, Debug)]
pub struct RunOpts {
    /// Transcript text file.
    pub transcript: PathBuf,
    /// Output layout.
    pub work: WorkDirs,
    /// Resolved frame spec.
    pub spec: FrameSpec,
    /// Environment snapshot.
    pub env: EnvOverrides,
    /// Per-word pause; beats `LVG_WORD_PAUSE_MS` when set.
    pub word_pause_ms: Option<u64>,
    /// Frame rendering threading.
    pub threading: RenderThreading,
    /// Output size policy.
    pub size_policy: FrameSizePolicy,
    /// Extra copies of the last frame.
    pub trailing_repeat_count: usize,
    /// Audio to attach after encoding.
    pub audio: Option<PathBuf>,
}

impl RunOpts {
    /// Defaults for `transcript` under `root`.
    pub fn new(transcript: impl Into<PathBuf>, root: impl Into<PathBuf>) -> Self {
        Self {
            transcript: transcript.into(),
            work: WorkDirs::new(root),
            spec: FrameSpec::default(),
            env: EnvOverrides::default(),
            word_pause_ms: None,
            threading: RenderThreading::default(),
            size_policy: FrameSizePolicy::Uniform,
            trailing_repeat_count: DEFAULT_TRAILING_REPEAT,
            audio: None,
        }
    }

    /// Timeline options after applying the explicit pause over the environment.
    pub fn timeline_opts(&self) -> TimelineOpts {
        let mut opts = TimelineOpts::from_env(&self.env);
        if let Some(ms) = self.word_pause_ms {
            opts.word_pause_ms = ms;
        }
        opts
    }

    /// Assembly options derived from the frame spec.
    pub fn assemble_opts(&self) -> AssembleOpts {
        AssembleOpts {
            fps: self.spec.fps,
            trailing_repeat_count: self.trailing_repeat_count,
            size_policy: self.size_policy,
            background: self.spec.background_color,
        }
    }
}

/// What a full run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    /// Written timeline.
    pub timeline: PathBuf,
    /// Directory holding the frames.
    pub frames_dir: PathBuf,
    /// Frame rendering counters.
    pub render: RenderStats,
    /// Video stage outcome.
    pub video: AssembleOutcome,
    /// Audio stage outcome, when audio was given.
    pub combined: Option<AssembleOutcome>,
}

/// File stem naming a transcript's outputs.
pub fn transcript_stem(path: &Path) -> ReelResult<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            ReelError::input(format!(
                "transcript path '{}' has no usable file name",
                path.display()
            ))
        })
}

/// Lay out a timeline file and render its frames with `face`.
#[tracing::instrument(skip(spec, env, face, threading))]
pub fn render_timeline(
    timeline: &Path,
    frames_dir: &Path,
    spec: &FrameSpec,
    env: &EnvOverrides,
    face: &dyn TypeFace,
    threading: &RenderThreading,
) -> ReelResult<RenderStats> {
    let events = read_timeline(timeline)?;
    let mut shaper = face.shaper()?;
    let layout = layout_script(spec, &events, shaper.as_mut())?;
    let background = resolve_background(&spec.background, env);
    render_frames(spec, &layout, face, &background, frames_dir, threading)
}

/// Full run with the configured font and the system `ffmpeg`.
pub fn run_pipeline(opts: &RunOpts) -> ReelResult<RunReport> {
    opts.spec.validate()?;
    let face = FontFace::load(&opts.spec.font)?;
    let stem = transcript_stem(&opts.transcript)?;
    let mut sink = FfmpegSink::new(FfmpegSinkOpts {
        out_path: opts.work.video_path(&stem),
        bg_rgba: opts.spec.background_color.to_rgba8(),
    });
    run_pipeline_with(opts, &face, &mut sink)
}

/// Full run with an explicit face and sink.
///
/// Every stage reads the previous stage's files, so a failed run can be resumed; the video and
/// audio stages are skipped when their outputs exist. Frames from a previous run are removed
/// before rendering.
#[tracing::instrument(skip_all, fields(transcript = %opts.transcript.display()))]
pub fn run_pipeline_with(
    opts: &RunOpts,
    face: &dyn TypeFace,
    sink: &mut dyn FrameSink,
) -> ReelResult<RunReport> {
    opts.spec.validate()?;
    let stem = transcript_stem(&opts.transcript)?;

    let timeline = generate_timeline(
        &opts.transcript,
        &opts.work.framedata_dir(),
        opts.timeline_opts(),
    )?;

    let frames_dir = opts.work.frames_dir(&stem);
    let video_path = opts.work.video_path(&stem);
    let render = if video_path.exists() {
        tracing::info!(path = %video_path.display(), "video exists, skipping frame rendering");
        RenderStats::default()
    } else {
        // Frames left by an earlier run would be listed alongside the new ones.
        let threading = RenderThreading {
            clean: true,
            ..opts.threading.clone()
        };
        render_timeline(
            &timeline,
            &frames_dir,
            &opts.spec,
            &opts.env,
            face,
            &threading,
        )?
    };

    let video = assemble_video(&frames_dir, &video_path, &opts.assemble_opts(), sink)?;

    let combined = match &opts.audio {
        Some(audio) => Some(attach_audio(
            video.path(),
            audio,
            &opts.work.combined_path(&stem),
        )?),
        None => None,
    };

    Ok(RunReport {
        timeline,
        frames_dir,
        render,
        video,
        combined,
    })
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
