use crate::foundation::{core::Rgb8, error::ReelResult};

/// Size of a piece of shaped text.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextExtent {
    /// Advance width, including leading and trailing spaces.
    pub width: f32,
    /// Line box height.
    pub height: f32,
}

/// Measures and paints single-line text for one font at one size.
///
/// Shapers hold mutable shaping caches and are not shared across threads; each render worker gets
/// its own from a [`TypeFace`].
pub trait TextShaper {
    /// Measure `text` laid out on a single line.
    fn measure(&mut self, text: &str) -> ReelResult<TextExtent>;

    /// Paint `text` with its top-left corner at `(x, y)`.
    fn draw(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        text: &str,
        x: f32,
        y: f32,
        color: Rgb8,
    ) -> ReelResult<()>;
}

/// A font that can hand out independent shapers.
pub trait TypeFace: Sync {
    /// Create a fresh shaper.
    fn shaper(&self) -> ReelResult<Box<dyn TextShaper>>;
}

/// Monospace face that draws each non-space character as a solid block.
///
/// Needs no font file, which makes layouts and renders reproducible on any machine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockFace {
    /// Horizontal advance per character.
    pub advance_px: f32,
    /// Line box height.
    pub height_px: f32,
}

impl Default for BlockFace {
    fn default() -> Self {
        Self {
            advance_px: 10.0,
            height_px: 20.0,
        }
    }
}

impl TypeFace for BlockFace {
    fn shaper(&self) -> ReelResult<Box<dyn TextShaper>> {
        Ok(Box::new(*self))
    }
}

impl TextShaper for BlockFace {
    fn measure(&mut self, text: &str) -> ReelResult<TextExtent> {
        Ok(TextExtent {
            width: text.chars().count() as f32 * self.advance_px,
            height: self.height_px,
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
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, 255,
        ));
        let adv = f64::from(self.advance_px);
        for (i, c) in text.chars().enumerate() {
            if c.is_whitespace() {
                continue;
            }
            let x0 = f64::from(x) + i as f64 * adv;
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                x0,
                f64::from(y),
                x0 + adv * 0.8,
                f64::from(y + self.height_px),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/shaper.rs"]
mod tests;
