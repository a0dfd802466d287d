use std::{path::Path, sync::Arc};

use anyhow::Context as _;

use crate::{
    config::{background::Background, spec::FrameSpec},
    foundation::{
        core::Rgb8,
        error::{ReelError, ReelResult},
    },
};

/// What every frame is painted on: a solid fill, optionally covered by a resized image.
#[derive(Clone)]
pub struct BaseLayer {
    width: u16,
    height: u16,
    color: Rgb8,
    image: Option<vello_cpu::Image>,
}

impl std::fmt::Debug for BaseLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BaseLayer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("color", &self.color)
            .field("image", &self.image.is_some())
            .finish()
    }
}

impl BaseLayer {
    /// Build the base for `spec`. A background image that fails to load degrades to the solid fill.
    pub fn new(spec: &FrameSpec, background: &Background) -> ReelResult<Self> {
        let (width, height) = canvas_size(spec)?;
        let image = match background {
            Background::Solid => None,
            Background::Image(path) => match load_resized(path, width, height) {
                Ok(img) => {
                    tracing::debug!(path = %path.display(), "background image loaded");
                    Some(img)
                }
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "background image unusable, using solid fill"
                    );
                    None
                }
            },
        };
        Ok(Self {
            width,
            height,
            color: spec.background_color,
            image,
        })
    }

    /// Solid-only base.
    pub fn solid(spec: &FrameSpec) -> ReelResult<Self> {
        Self::new(spec, &Background::Solid)
    }

    /// `true` when an image is painted over the fill.
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Canvas width.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Canvas height.
    pub fn height(&self) -> u16 {
        self.height
    }

    fn paint(&self, ctx: &mut vello_cpu::RenderContext) {
        let full = vello_cpu::kurbo::Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height));
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            self.color.r,
            self.color.g,
            self.color.b,
            255,
        ));
        ctx.fill_rect(&full);
        if let Some(img) = &self.image {
            ctx.set_paint(img.clone());
            ctx.fill_rect(&full);
        }
    }
}

/// Reusable render target for one worker.
pub struct Surface {
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
}

impl Surface {
    /// Surface matching `base`'s size.
    pub fn new(base: &BaseLayer) -> Self {
        Self {
            ctx: vello_cpu::RenderContext::new(base.width, base.height),
            pixmap: vello_cpu::Pixmap::new(base.width, base.height),
        }
    }

    /// Start a frame: clear pending commands and paint the base.
    pub fn begin(&mut self, base: &BaseLayer) -> &mut vello_cpu::RenderContext {
        self.ctx.reset();
        base.paint(&mut self.ctx);
        &mut self.ctx
    }

    /// Rasterize everything drawn since [`Surface::begin`].
    pub fn finish(&mut self) -> &vello_cpu::Pixmap {
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.pixmap);
        &self.pixmap
    }
}

/// Write an opaque pixmap as PNG.
pub fn save_png(pixmap: &vello_cpu::Pixmap, path: &Path) -> ReelResult<()> {
    image::save_buffer_with_format(
        path,
        pixmap.data_as_u8_slice(),
        u32::from(pixmap.width()),
        u32::from(pixmap.height()),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write frame '{}'", path.display()))?;
    Ok(())
}

fn canvas_size(spec: &FrameSpec) -> ReelResult<(u16, u16)> {
    let w = u16::try_from(spec.width)
        .map_err(|_| ReelError::validation("frame spec width must fit in u16"))?;
    let h = u16::try_from(spec.height)
        .map_err(|_| ReelError::validation("frame spec height must fit in u16"))?;
    Ok((w, h))
}

fn load_resized(path: &Path, width: u16, height: u16) -> anyhow::Result<vello_cpu::Image> {
    let img = image::open(path)
        .with_context(|| format!("decode background '{}'", path.display()))?
        .resize_exact(
            u32::from(width),
            u32::from(height),
            image::imageops::FilterType::Triangle,
        )
        .to_rgba8();

    let pixels = img
        .pixels()
        .map(|p| {
            let [r, g, b, a] = p.0;
            vello_cpu::peniko::color::PremulRgba8::from_u8_array([
                premul(r, a),
                premul(g, a),
                premul(b, a),
                a,
            ])
        })
        .collect::<Vec<_>>();
    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, width, height, true);
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

fn premul(c: u8, a: u8) -> u8 {
    ((u16::from(c) * u16::from(a) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
