use std::time::Duration;

use crate::foundation::core::Rect;
use crate::foundation::error::LightWaveResult;
use crate::render::content::ContentPainter;
use crate::render::surface::Surface;
use crate::wave::attributes::WaveAttributes;
use crate::wave::config::{WaveBuilder, WaveConfig};
use crate::wave::engine::{Callback, Opacity, WaveEngine};

/// How the host composites the view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerType {
    /// Draw straight into the parent target.
    None,
    /// Draw into an offscreen layer first, so the wave only blends with this view's content.
    Hardware,
}

/// Host view owning a [`WaveEngine`] and the content it sweeps over.
///
/// Relays layout, attach/detach and draw to the engine. Works for any content, be it a
/// container of children or a single text run.
pub struct WaveView<C> {
    engine: WaveEngine,
    content: C,
    layer_type: LayerType,
    width: u32,
    height: u32,
}

impl<C: ContentPainter> WaveView<C> {
    /// View with the alpha-highlight preset.
    pub fn new(content: C) -> LightWaveResult<Self> {
        Self::with_config(content, WaveBuilder::alpha_highlight().build()?)
    }

    /// View configured from a style dictionary.
    pub fn with_attributes(content: C, attrs: &WaveAttributes) -> LightWaveResult<Self> {
        Self::with_config(content, WaveConfig::from_attributes(attrs)?)
    }

    /// View with an explicit config.
    pub fn with_config(content: C, config: WaveConfig) -> LightWaveResult<Self> {
        let mut view = Self {
            engine: WaveEngine::new(),
            content,
            layer_type: LayerType::None,
            width: 0,
            height: 0,
        };
        view.set_light_wave(Some(config));
        Ok(view)
    }

    /// Replace the light wave; `None` removes the effect.
    pub fn set_light_wave(&mut self, config: Option<WaveConfig>) -> &mut Self {
        self.layer_type = match &config {
            Some(cfg) if cfg.clip_to_children => LayerType::Hardware,
            _ => LayerType::None,
        };
        self.engine.set_config(config);
        self
    }

    /// Start the sweep. Ignored while detached.
    pub fn start_light_wave(&mut self) {
        self.engine.start();
    }

    /// Stop the sweep, keeping the band where it is.
    pub fn stop_light_wave(&mut self) {
        self.engine.stop();
    }

    /// `true` while the sweep animates.
    pub fn is_wave_started(&self) -> bool {
        self.engine.is_running()
    }

    /// Layer the view composites through.
    pub fn layer_type(&self) -> LayerType {
        self.layer_type
    }

    /// Compositing hint of the wave region.
    pub fn opacity(&self) -> Opacity {
        self.engine.opacity()
    }

    /// The engine drawing the wave.
    pub fn engine(&self) -> &WaveEngine {
        &self.engine
    }

    /// Content drawn underneath the wave.
    pub fn content(&self) -> &C {
        &self.content
    }

    /// Mutable access to the content.
    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    /// Layout assigned a new size.
    pub fn on_layout(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.engine
            .set_bounds(Rect::new(0.0, 0.0, f64::from(width), f64::from(height)));
    }

    /// The view reached a window; `callback` receives redraw requests from now on.
    pub fn on_attached(&mut self, callback: Box<dyn Callback>) {
        self.engine.set_callback(Some(callback));
        self.engine.maybe_start();
    }

    /// The view left its window: stop and drop the redraw callback.
    pub fn on_detached(&mut self) {
        self.engine.stop();
        self.engine.set_callback(None);
    }

    /// Host frame clock tick.
    pub fn on_frame(&mut self, dt: Duration) -> bool {
        self.engine.advance(dt)
    }

    /// Draw content, then the wave, onto `target` (sized like the view).
    #[tracing::instrument(level = "trace", skip_all, fields(w = self.width, h = self.height))]
    pub fn dispatch_draw(&mut self, target: &mut Surface) -> LightWaveResult<()> {
        let mut layer = Surface::new(target.width(), target.height())?;
        self.content.paint(&mut layer)?;
        match self.layer_type {
            LayerType::Hardware => {
                self.engine.draw(&mut layer);
                target.composite_over(&layer)
            }
            LayerType::None => {
                target.composite_over(&layer)?;
                self.engine.draw(target);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/view.rs"]
mod tests;
