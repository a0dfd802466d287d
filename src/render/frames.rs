use std::path::Path;

use anyhow::Context as _;
use rayon::prelude::*;

use crate::{
    config::{background::Background, spec::FrameSpec},
    foundation::{
        core::FrameId,
        error::{ReelError, ReelResult},
    },
    layout::engine::{ScriptLayout, WordLayout},
    render::{
        canvas::{BaseLayer, Surface, save_png},
        phases::{Reveal, frames_for_pause, plan_phases},
    },
    text::shaper::{TextShaper, TypeFace},
};

/// Threading and output controls for [`render_frames`].
#[derive(Clone, Debug, Default)]
pub struct RenderThreading {
    /// Render words on a rayon pool when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
    /// Delete previously rendered `lvg-*.png` files in the output directory first.
    pub clean: bool,
}

/// Aggregated rendering counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Word events rendered.
    pub words: u64,
    /// Frame files written.
    pub frames_total: u64,
    /// Frames actually rasterized; the rest are copies within a phase.
    pub frames_rasterized: u64,
}

impl RenderStats {
    fn add(&mut self, other: RenderStats) {
        self.words += other.words;
        self.frames_total += other.frames_total;
        self.frames_rasterized += other.frames_rasterized;
    }
}

/// Draws the frames of single words.
pub struct FrameRenderer<'a> {
    spec: &'a FrameSpec,
    base: BaseLayer,
}

impl<'a> FrameRenderer<'a> {
    /// Renderer painting over `background`.
    pub fn new(spec: &'a FrameSpec, background: &Background) -> ReelResult<Self> {
        spec.validate()?;
        Ok(Self {
            spec,
            base: BaseLayer::new(spec, background)?,
        })
    }

    /// Base layer every frame starts from.
    pub fn base(&self) -> &BaseLayer {
        &self.base
    }

    /// New worker surface.
    pub fn surface(&self) -> Surface {
        Surface::new(&self.base)
    }

    /// Write all sub-frames of `word` into `out_dir`.
    pub fn render_word(
        &self,
        surface: &mut Surface,
        shaper: &mut dyn TextShaper,
        word: &WordLayout,
        out_dir: &Path,
    ) -> ReelResult<RenderStats> {
        let total = frames_for_pause(self.spec.fps, word.pause_ms);
        let mut stats = RenderStats {
            words: 1,
            ..RenderStats::default()
        };
        let mut sub_index = 0usize;

        for phase in plan_phases(&word.word, total) {
            if phase.frames == 0 {
                continue;
            }
            self.draw_phase(surface, shaper, word, phase.reveal)?;
            let first = out_dir.join(FrameId::new(word.event_index, sub_index).file_name());
            save_png(surface.finish(), &first)?;
            stats.frames_rasterized += 1;

            for _ in 1..phase.frames {
                sub_index += 1;
                let copy = out_dir.join(FrameId::new(word.event_index, sub_index).file_name());
                std::fs::copy(&first, &copy)
                    .with_context(|| format!("copy frame into '{}'", copy.display()))?;
            }
            sub_index += 1;
            stats.frames_total += phase.frames as u64;
        }

        tracing::debug!(
            event_index = word.event_index,
            word = %word.word,
            frames = stats.frames_total,
            "word rendered"
        );
        Ok(stats)
    }

    fn draw_phase(
        &self,
        surface: &mut Surface,
        shaper: &mut dyn TextShaper,
        word: &WordLayout,
        reveal: Reveal,
    ) -> ReelResult<()> {
        let ctx = surface.begin(&self.base);
        for line in word.read_lines.iter().chain(std::iter::once(&word.active)) {
            shaper.draw(ctx, &line.text, line.x, line.y, self.spec.text_color)?;
        }

        let y = word.active.y;
        match reveal {
            Reveal::Hold => {}
            Reveal::Preview => {
                shaper.draw(
                    ctx,
                    &word.word_prefix(usize::MAX),
                    word.word_x,
                    y,
                    self.spec.text_color_next,
                )?;
            }
            Reveal::Chars(n) => {
                shaper.draw(
                    ctx,
                    &word.word_prefix(usize::MAX),
                    word.word_x,
                    y,
                    self.spec.text_color_next,
                )?;
                shaper.draw(
                    ctx,
                    &word.word_prefix(n),
                    word.word_x,
                    y,
                    self.spec.text_color_current,
                )?;
            }
        }
        Ok(())
    }
}

/// Render every word of `layout` into `out_dir` as `lvg-{event}-{sub}.png`.
#[tracing::instrument(skip_all, fields(out_dir = %out_dir.display(), words = layout.words.len()))]
pub fn render_frames(
    spec: &FrameSpec,
    layout: &ScriptLayout,
    face: &dyn TypeFace,
    background: &Background,
    out_dir: &Path,
    threading: &RenderThreading,
) -> ReelResult<RenderStats> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("create frames dir '{}'", out_dir.display()))?;
    if threading.clean {
        let removed = remove_rendered_frames(out_dir)?;
        if removed > 0 {
            tracing::info!(removed, "stale frames removed");
        }
    }

    let renderer = FrameRenderer::new(spec, background)?;
    let mut stats = RenderStats::default();

    if !threading.parallel {
        let mut shaper = face.shaper()?;
        let mut surface = renderer.surface();
        for word in &layout.words {
            stats.add(renderer.render_word(&mut surface, shaper.as_mut(), word, out_dir)?);
        }
    } else {
        let pool = build_thread_pool(threading.threads)?;
        let results = pool.install(|| {
            layout
                .words
                .par_iter()
                .map_init(
                    || (face.shaper(), renderer.surface()),
                    |(shaper, surface), word| -> ReelResult<RenderStats> {
                        let shaper = shaper.as_mut().map_err(|e| {
                            ReelError::validation(format!("text shaper unavailable: {e}"))
                        })?;
                        renderer.render_word(surface, shaper.as_mut(), word, out_dir)
                    },
                )
                .collect::<Vec<_>>()
        });
        for r in results {
            stats.add(r?);
        }
    }

    tracing::info!(
        words = stats.words,
        frames = stats.frames_total,
        rasterized = stats.frames_rasterized,
        background_image = renderer.base().has_image(),
        "frames rendered"
    );
    Ok(stats)
}

/// Delete files named like rendered frames. Other files are left alone.
pub fn remove_rendered_frames(dir: &Path) -> ReelResult<usize> {
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("list frames dir '{}'", dir.display()))?;
    let mut removed = 0;
    for entry in entries {
        let entry = entry.with_context(|| format!("list frames dir '{}'", dir.display()))?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if FrameId::parse_file_name(name).is_ok() {
            std::fs::remove_file(entry.path())
                .with_context(|| format!("remove stale frame '{name}'"))?;
            removed += 1;
        }
    }
    Ok(removed)
}

fn build_thread_pool(threads: Option<usize>) -> ReelResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ReelError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ReelError::from(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/frames.rs"]
mod tests;
