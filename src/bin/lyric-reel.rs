use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use lyric_reel::{
    AssembleOpts, AssembleOutcome, EnvOverrides, FontFace, FrameSizePolicy, FrameSpec,
    RenderThreading, RunOpts, TimelineOpts,
};

#[derive(Parser, Debug)]
#[command(name = "lyric-reel", version, about = "Render word-highlighted lyric videos")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Split a transcript into a timeline file.
    Timeline(TimelineArgs),
    /// Render the frames of a timeline file.
    Frames(FramesArgs),
    /// Encode a frames directory into a video (requires `ffmpeg` on PATH).
    Video(VideoArgs),
    /// Attach an audio track to an encoded video (requires `ffmpeg` on PATH).
    Mux(MuxArgs),
    /// Run every stage for one transcript under a media root.
    Run(RunArgs),
}

#[derive(Args, Debug)]
struct SpecArgs {
    /// Frame spec JSON. Missing keys take their defaults.
    #[arg(long)]
    spec: Option<PathBuf>,

    /// Override the frame spec's frames per second.
    #[arg(long)]
    fps: Option<u32>,
}

impl SpecArgs {
    fn load(&self) -> anyhow::Result<FrameSpec> {
        let mut spec = FrameSpec::load_or_default(self.spec.as_deref())?;
        if let Some(fps) = self.fps {
            spec.fps = fps;
        }
        spec.validate()?;
        Ok(spec)
    }
}

#[derive(Args, Debug)]
struct ThreadingArgs {
    /// Render words in parallel.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for parallel rendering.
    #[arg(long)]
    threads: Option<usize>,

    /// Remove previously rendered frames first.
    #[arg(long)]
    clean: bool,
}

impl ThreadingArgs {
    fn to_threading(&self) -> RenderThreading {
        RenderThreading {
            parallel: self.parallel || self.threads.is_some(),
            threads: self.threads,
            clean: self.clean,
        }
    }
}

#[derive(Args, Debug)]
struct EncodeArgs {
    /// How the output size is chosen when frames differ.
    #[arg(long, value_enum, default_value_t = SizePolicyChoice::Uniform)]
    size_policy: SizePolicyChoice,

    /// Extra copies of the last frame.
    #[arg(long, default_value_t = lyric_reel::assemble::listing::DEFAULT_TRAILING_REPEAT)]
    hold: usize,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SizePolicyChoice {
    Uniform,
    Mean,
}

impl From<SizePolicyChoice> for FrameSizePolicy {
    fn from(c: SizePolicyChoice) -> Self {
        match c {
            SizePolicyChoice::Uniform => FrameSizePolicy::Uniform,
            SizePolicyChoice::Mean => FrameSizePolicy::Mean,
        }
    }
}

#[derive(Args, Debug)]
struct TimelineArgs {
    /// Transcript text file.
    #[arg(long)]
    transcript: PathBuf,

    /// Directory the timeline is written to.
    #[arg(long)]
    out_dir: PathBuf,

    /// Pause per word; overrides LVG_WORD_PAUSE_MS.
    #[arg(long)]
    pause_ms: Option<u64>,
}

#[derive(Args, Debug)]
struct FramesArgs {
    /// Timeline file.
    #[arg(long)]
    timeline: PathBuf,

    /// Directory frames are written to.
    #[arg(long)]
    out_dir: PathBuf,

    #[command(flatten)]
    spec: SpecArgs,

    #[command(flatten)]
    threading: ThreadingArgs,
}

#[derive(Args, Debug)]
struct VideoArgs {
    /// Directory holding rendered frames.
    #[arg(long)]
    frames_dir: PathBuf,

    /// Output video path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    spec: SpecArgs,

    #[command(flatten)]
    encode: EncodeArgs,
}

#[derive(Args, Debug)]
struct MuxArgs {
    /// Encoded video.
    #[arg(long)]
    video: PathBuf,

    /// Audio track.
    #[arg(long)]
    audio: PathBuf,

    /// Output path; defaults to `<video stem>-audio.<ext>` next to the video.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Transcript text file.
    #[arg(long)]
    transcript: PathBuf,

    /// Root holding `framedata/`, `frames/` and `video/`.
    #[arg(long, default_value = ".")]
    media_root: PathBuf,

    /// Pause per word; overrides LVG_WORD_PAUSE_MS.
    #[arg(long)]
    pause_ms: Option<u64>,

    /// Audio track to attach after encoding.
    #[arg(long)]
    audio: Option<PathBuf>,

    #[command(flatten)]
    spec: SpecArgs,

    #[command(flatten)]
    threading: ThreadingArgs,

    #[command(flatten)]
    encode: EncodeArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let env = EnvOverrides::from_process_env();

    match cli.cmd {
        Command::Timeline(args) => cmd_timeline(args, &env),
        Command::Frames(args) => cmd_frames(args, &env),
        Command::Video(args) => cmd_video(args),
        Command::Mux(args) => cmd_mux(args),
        Command::Run(args) => cmd_run(args, env),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_timeline(args: TimelineArgs, env: &EnvOverrides) -> anyhow::Result<()> {
    let mut opts = TimelineOpts::from_env(env);
    if let Some(ms) = args.pause_ms {
        opts.word_pause_ms = ms;
    }
    let path = lyric_reel::generate_timeline(&args.transcript, &args.out_dir, opts)?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs, env: &EnvOverrides) -> anyhow::Result<()> {
    let spec = args.spec.load()?;
    let face = FontFace::load(&spec.font)?;
    let stats = lyric_reel::pipeline::render_timeline(
        &args.timeline,
        &args.out_dir,
        &spec,
        env,
        &face,
        &args.threading.to_threading(),
    )?;
    eprintln!(
        "wrote {} frames for {} words to {}",
        stats.frames_total,
        stats.words,
        args.out_dir.display()
    );
    Ok(())
}

fn cmd_video(args: VideoArgs) -> anyhow::Result<()> {
    let spec = args.spec.load()?;
    let opts = AssembleOpts {
        fps: spec.fps,
        trailing_repeat_count: args.encode.hold,
        size_policy: args.encode.size_policy.into(),
        background: spec.background_color,
    };
    let outcome = lyric_reel::encode_video(&args.frames_dir, &args.out, &opts)?;
    report(&outcome);
    Ok(())
}

fn cmd_mux(args: MuxArgs) -> anyhow::Result<()> {
    let out = match args.out {
        Some(p) => p,
        None => default_mux_path(&args.video)?,
    };
    let outcome = lyric_reel::attach_audio(&args.video, &args.audio, &out)?;
    report(&outcome);
    Ok(())
}

fn cmd_run(args: RunArgs, env: EnvOverrides) -> anyhow::Result<()> {
    let mut opts = RunOpts::new(&args.transcript, &args.media_root);
    opts.spec = args.spec.load()?;
    opts.env = env;
    opts.word_pause_ms = args.pause_ms;
    opts.threading = args.threading.to_threading();
    opts.size_policy = args.encode.size_policy.into();
    opts.trailing_repeat_count = args.encode.hold;
    opts.audio = args.audio;

    let run = lyric_reel::run_pipeline(&opts)?;
    report(&run.video);
    if let Some(combined) = &run.combined {
        report(combined);
    }
    Ok(())
}

fn default_mux_path(video: &Path) -> anyhow::Result<PathBuf> {
    let stem = lyric_reel::pipeline::transcript_stem(video)?;
    let ext = video
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("mp4");
    let dir = video.parent().unwrap_or_else(|| Path::new("."));
    Ok(dir.join(format!("{stem}-audio.{ext}")))
}

fn report(outcome: &AssembleOutcome) {
    match outcome {
        AssembleOutcome::Encoded { path, frames } => {
            eprintln!("wrote {} ({frames} frames)", path.display())
        }
        AssembleOutcome::Muxed { path } => eprintln!("wrote {}", path.display()),
        AssembleOutcome::Skipped { path } => eprintln!("kept existing {}", path.display()),
    }
}
