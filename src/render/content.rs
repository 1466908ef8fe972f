use kurbo::Shape;

use crate::foundation::core::{Rect, Size};
use crate::foundation::error::{LightWaveError, LightWaveResult};
use crate::render::surface::Surface;
use crate::wave::color::Argb;

/// Whatever a host view draws underneath the light wave.
pub trait ContentPainter {
    /// Paint into `layer`, which arrives cleared to transparent.
    fn paint(&self, layer: &mut Surface) -> LightWaveResult<()>;
}

/// One placeholder block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkeletonBlock {
    /// Block bounds in layer pixels.
    pub rect: Rect,
    /// Corner radius.
    pub radius: f64,
    /// Fill color.
    pub color: Argb,
}

/// Loading-placeholder content: rounded blocks rasterized with `vello_cpu`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SkeletonContent {
    /// Blocks, painted in order.
    pub blocks: Vec<SkeletonBlock>,
}

impl SkeletonContent {
    /// Empty content.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one rounded block.
    pub fn block(mut self, rect: Rect, radius: f64, color: Argb) -> Self {
        self.blocks.push(SkeletonBlock {
            rect,
            radius,
            color,
        });
        self
    }

    /// Avatar disc followed by three text lines, laid out inside `size`.
    pub fn list_item(size: Size, color: Argb) -> Self {
        let pad = (size.height * 0.15).max(1.0);
        let avatar = (size.height - 2.0 * pad).max(1.0);
        let text_x = pad * 2.0 + avatar;
        let line_h = (avatar / 5.0).max(1.0);
        let text_w = (size.width - text_x - pad).max(1.0);

        let mut content = Self::new().block(
            Rect::new(pad, pad, pad + avatar, pad + avatar),
            avatar / 2.0,
            color,
        );
        for (i, frac) in [1.0, 0.8, 0.55].into_iter().enumerate() {
            let y = pad + (i as f64) * line_h * 2.0;
            content = content.block(
                Rect::new(text_x, y, text_x + text_w * frac, y + line_h),
                line_h / 2.0,
                color,
            );
        }
        content
    }
}

impl ContentPainter for SkeletonContent {
    fn paint(&self, layer: &mut Surface) -> LightWaveResult<()> {
        let w: u16 = layer
            .width()
            .try_into()
            .map_err(|_| LightWaveError::render("content width exceeds u16"))?;
        let h: u16 = layer
            .height()
            .try_into()
            .map_err(|_| LightWaveError::render("content height exceeds u16"))?;

        let mut ctx = vello_cpu::RenderContext::new(w, h);
        for b in &self.blocks {
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                b.color.red(),
                b.color.green(),
                b.color.blue(),
                b.color.alpha(),
            ));
            let rr = kurbo::RoundedRect::new(b.rect.x0, b.rect.y0, b.rect.x1, b.rect.y1, b.radius);
            let mut p = vello_cpu::kurbo::BezPath::new();
            for el in rr.path_elements(0.1) {
                p.push(el);
            }
            ctx.fill_path(&p);
        }
        ctx.flush();
        ctx.render_to_pixmap(layer.pixmap_mut());
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/content.rs"]
mod tests;
