use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    config::spec::FontSpec,
    foundation::{
        core::Rgb8,
        error::{ReelError, ReelResult},
    },
    text::shaper::{TextExtent, TextShaper, TypeFace},
};

/// A loaded font file at a fixed pixel size.
#[derive(Clone)]
pub struct FontFace {
    path: PathBuf,
    bytes: Arc<Vec<u8>>,
    family: String,
    size_px: f32,
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("path", &self.path)
            .field("family", &self.family)
            .field("size_px", &self.size_px)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

impl FontFace {
    /// Load the first usable font from `spec`'s candidates.
    ///
    /// An explicit font that cannot be loaded falls back to the named/default font with a warning.
    pub fn load(spec: &FontSpec) -> ReelResult<Self> {
        let candidates = spec.candidates();
        for path in &candidates {
            match Self::from_file(path, spec.size_px) {
                Ok(face) => {
                    tracing::debug!(path = %path.display(), family = %face.family, "font loaded");
                    return Ok(face);
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "font unavailable, trying next");
                }
            }
        }
        Err(ReelError::input(format!(
            "no usable font among {} candidate(s): {}",
            candidates.len(),
            candidates
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )))
    }

    /// Load a specific font file.
    pub fn from_file(path: &Path, size_px: f32) -> ReelResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| {
            ReelError::input(format!("failed to read font '{}': {e}", path.display()))
        })?;
        Self::from_bytes(path.to_path_buf(), bytes, size_px)
    }

    /// Build a face from in-memory font data. `path` is only used for diagnostics.
    pub fn from_bytes(path: PathBuf, bytes: Vec<u8>, size_px: f32) -> ReelResult<Self> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(ReelError::validation(
                "font size_px must be finite and > 0",
            ));
        }
        let mut font_ctx = parley::FontContext::default();
        let family = register_family(&mut font_ctx, &bytes)?;
        Ok(Self {
            path,
            bytes: Arc::new(bytes),
            family,
            size_px,
        })
    }

    /// Primary family name found in the font data.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Path the font was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TypeFace for FontFace {
    fn shaper(&self) -> ReelResult<Box<dyn TextShaper>> {
        let mut font_ctx = parley::FontContext::default();
        let family = register_family(&mut font_ctx, &self.bytes)?;
        let font = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(self.bytes.as_ref().clone()),
            0,
        );
        Ok(Box::new(ParleyShaper {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family,
            size_px: self.size_px,
            font,
        }))
    }
}

fn register_family(font_ctx: &mut parley::FontContext, bytes: &[u8]) -> ReelResult<String> {
    let families = font_ctx
        .collection
        .register_fonts(parley::fontique::Blob::from(bytes.to_vec()), None);
    let family_id = families
        .first()
        .map(|(id, _)| *id)
        .ok_or_else(|| ReelError::input("no font families registered from font bytes"))?;
    Ok(font_ctx
        .collection
        .family_name(family_id)
        .ok_or_else(|| ReelError::input("registered font family has no name"))?
        .to_string())
}

/// Parley-backed shaper painting glyph runs through `vello_cpu`.
struct ParleyShaper {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<Rgb8>,
    family: String,
    size_px: f32,
    font: vello_cpu::peniko::FontData,
}

impl ParleyShaper {
    fn layout(&mut self, text: &str, color: Rgb8) -> parley::Layout<Rgb8> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(self.size_px));
        builder.push_default(parley::style::StyleProperty::Brush(color));

        let mut layout: parley::Layout<Rgb8> = builder.build(text);
        layout.break_all_lines(None);
        layout
    }
}

impl TextShaper for ParleyShaper {
    fn measure(&mut self, text: &str) -> ReelResult<TextExtent> {
        let layout = self.layout(text, Rgb8::default());
        Ok(TextExtent {
            width: layout.full_width(),
            height: layout.height(),
        })
    }

    fn draw(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        text: &str,
        x: f32,
        y: f32,
        color: Rgb8,
    ) -> ReelResult<()> {
        let layout = self.layout(text, color);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((
            f64::from(x),
            f64::from(y),
        )));

        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };

                let brush = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, 255,
                ));

                let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&self.font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
