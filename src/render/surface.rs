use std::path::Path;

use crate::foundation::core::{Point, Rect};
use crate::foundation::error::{LightWaveError, LightWaveResult};
use crate::render::composite::{CompositeMode, composite_in_place};
use crate::wave::engine::WaveCanvas;
use crate::wave::shader::WaveShader;

/// CPU raster target: premultiplied RGBA8, row-major, backed by a `vello_cpu` pixmap.
pub struct Surface {
    width: u32,
    height: u32,
    pixmap: vello_cpu::Pixmap,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl Surface {
    /// Allocate a transparent surface.
    pub fn new(width: u32, height: u32) -> LightWaveResult<Self> {
        if width == 0 || height == 0 {
            return Err(LightWaveError::render(format!(
                "surface must be non-empty, got {width}x{height}"
            )));
        }
        let w: u16 = width
            .try_into()
            .map_err(|_| LightWaveError::render("surface width exceeds u16"))?;
        let h: u16 = height
            .try_into()
            .map_err(|_| LightWaveError::render("surface height exceeds u16"))?;
        Ok(Self {
            width,
            height,
            pixmap: vello_cpu::Pixmap::new(w, h),
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Full surface rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }

    /// Fill every pixel with premultiplied `rgba`.
    pub fn clear(&mut self, rgba: [u8; 4]) {
        for px in self.data_mut().chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Premultiplied RGBA8 bytes, row-major.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data_as_u8_slice()
    }

    /// Mutable premultiplied RGBA8 bytes.
    pub fn data_mut(&mut self) -> &mut [u8] {
        self.pixmap.data_as_u8_slice_mut()
    }

    pub(crate) fn pixmap_mut(&mut self) -> &mut vello_cpu::Pixmap {
        &mut self.pixmap
    }

    /// Premultiplied pixel at `(x, y)`, `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let d = self.data();
        Some([d[idx], d[idx + 1], d[idx + 2], d[idx + 3]])
    }

    /// Fill the pixels whose centers fall inside `rect` with `shader`, combined through `mode`.
    #[tracing::instrument(level = "trace", skip(self, shader))]
    pub fn paint_shader(&mut self, rect: Rect, shader: &WaveShader, mode: CompositeMode) {
        let (x0, x1) = pixel_span(rect.x0, rect.x1, self.width);
        let (y0, y1) = pixel_span(rect.y0, rect.y1, self.height);
        let stride = self.width as usize;
        let data = self.pixmap.data_as_u8_slice_mut();
        for y in y0..y1 {
            for x in x0..x1 {
                let src = shader
                    .sample(Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5))
                    .to_array();
                let idx = ((y as usize) * stride + (x as usize)) * 4;
                let dst = [data[idx], data[idx + 1], data[idx + 2], data[idx + 3]];
                data[idx..idx + 4].copy_from_slice(&mode.apply(dst, src));
            }
        }
    }

    /// Flatten `layer` onto this surface with [`CompositeMode::SrcOver`].
    pub fn composite_over(&mut self, layer: &Surface) -> LightWaveResult<()> {
        if layer.width != self.width || layer.height != self.height {
            return Err(LightWaveError::render(format!(
                "layer size {}x{} does not match surface {}x{}",
                layer.width, layer.height, self.width, self.height
            )));
        }
        composite_in_place(self.data_mut(), layer.data(), CompositeMode::SrcOver)
    }

    /// Straight-alpha copy of the pixels.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data().to_vec();
        for px in out.chunks_exact_mut(4) {
            let a = u32::from(px[3]);
            if a == 0 {
                px[..3].fill(0);
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }

    /// Write the surface as a PNG.
    pub fn save_png(&self, path: &Path) -> LightWaveResult<()> {
        image::save_buffer_with_format(
            path,
            &self.to_straight_rgba8(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| LightWaveError::render(format!("write png '{}': {e}", path.display())))
    }
}

impl WaveCanvas for Surface {
    fn draw_wave_rect(&mut self, rect: Rect, shader: &WaveShader, mode: CompositeMode) {
        self.paint_shader(rect, shader, mode);
    }
}

/// Pixel index range `[start, end)` whose centers lie in `[lo, hi)`.
fn pixel_span(lo: f64, hi: f64, len: u32) -> (u32, u32) {
    let len = f64::from(len);
    let start = (lo - 0.5).ceil().clamp(0.0, len);
    let end = (hi - 0.5).ceil().clamp(0.0, len);
    (start as u32, end.max(start) as u32)
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
