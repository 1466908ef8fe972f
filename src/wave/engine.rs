use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::animation::animator::WaveAnimator;
use crate::foundation::core::{Affine, Point, Rect, Size, Vec2};
use crate::foundation::math::lerp;
use crate::render::composite::CompositeMode;
use crate::wave::config::{Direction, WaveConfig};
use crate::wave::shader::WaveShader;

/// Redraw capability supplied by the host surface.
///
/// An engine without a callback counts as detached: start requests are ignored.
pub trait Callback {
    /// Ask the host to redraw the region the engine paints.
    fn invalidate_drawable(&self);
}

/// Shared counter of redraw requests.
#[derive(Clone, Debug, Default)]
pub struct RedrawRequests(Rc<Cell<u64>>);

impl RedrawRequests {
    /// Counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests received so far.
    pub fn count(&self) -> u64 {
        self.0.get()
    }

    /// Return the pending count and reset it.
    pub fn take(&self) -> u64 {
        self.0.replace(0)
    }
}

impl Callback for RedrawRequests {
    fn invalidate_drawable(&self) {
        self.0.set(self.0.get().saturating_add(1));
    }
}

/// Surface the engine paints its band onto.
pub trait WaveCanvas {
    /// Fill `rect` with `shader` using `mode`.
    fn draw_wave_rect(&mut self, rect: Rect, shader: &WaveShader, mode: CompositeMode);
}

/// Whether the painted region may let content underneath show through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Opacity {
    /// Covers what is underneath.
    Opaque,
    /// Content underneath may show through.
    Translucent,
}

/// Horizontal and vertical travel needed for the band to fully cross `size` at `tilt_deg`.
pub fn sweep_extents(size: Size, tilt_deg: f64) -> (f64, f64) {
    let tilt_tan = tilt_deg.to_radians().tan();
    let extent_w = size.width + tilt_tan * size.height;
    let extent_h = size.height + tilt_tan * size.width;
    (extent_w, extent_h)
}

/// Band translation at sweep `fraction` in `[0, 1]`.
pub fn sweep_offset(direction: Direction, size: Size, tilt_deg: f64, fraction: f64) -> Vec2 {
    let (extent_w, extent_h) = sweep_extents(size, tilt_deg);
    match direction {
        Direction::LeftToRight => Vec2::new(lerp(-extent_w, extent_w, fraction), 0.0),
        Direction::RightToLeft => Vec2::new(lerp(extent_w, -extent_w, fraction), 0.0),
        Direction::TopToBottom => Vec2::new(0.0, lerp(-extent_h, extent_h, fraction)),
        Direction::BottomToTop => Vec2::new(0.0, lerp(extent_h, -extent_h, fraction)),
    }
}

/// Shader matrix for one frame: rotate by `tilt_deg` about the center, then translate.
pub fn sweep_transform(size: Size, tilt_deg: f64, offset: Vec2) -> Affine {
    let center = Point::new(size.width / 2.0, size.height / 2.0).to_vec2();
    let rotate = Affine::translate(center)
        * Affine::rotate(tilt_deg.to_radians())
        * Affine::translate(-center);
    Affine::translate(offset) * rotate
}

/// The light wave drawable: configuration, shader, animation driver and draw logic.
///
/// Confined to the host's UI thread. The host owns the engine, feeds it bounds and time, and calls
/// [`WaveEngine::draw`] from its render pass.
#[derive(Default)]
pub struct WaveEngine {
    config: Option<WaveConfig>,
    bounds: Rect,
    draw_rect: Rect,
    shader: Option<WaveShader>,
    mode: CompositeMode,
    animator: Option<WaveAnimator>,
    callback: Option<Box<dyn Callback>>,
}

impl std::fmt::Debug for WaveEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WaveEngine")
            .field("config", &self.config)
            .field("bounds", &self.bounds)
            .field("mode", &self.mode)
            .field("has_shader", &self.shader.is_some())
            .field("running", &self.is_running())
            .field("attached", &self.callback.is_some())
            .finish()
    }
}

impl WaveEngine {
    /// Engine without config, bounds or callback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current config, if any.
    pub fn config(&self) -> Option<&WaveConfig> {
        self.config.as_ref()
    }

    /// Replace the configuration, rebuilding shader and animator.
    ///
    /// A running animation keeps running with the new timing; a stopped one stays stopped.
    pub fn set_config(&mut self, config: Option<WaveConfig>) {
        self.config = config;
        if let Some(cfg) = &self.config {
            self.mode = if cfg.alpha_shimmer {
                CompositeMode::DstIn
            } else {
                CompositeMode::SrcIn
            };
            tracing::debug!(mode = ?self.mode, direction = ?cfg.direction, shape = ?cfg.shape, "light wave config replaced");
        }
        self.update_shader();
        self.update_animator();
        self.invalidate_self();
    }

    /// Install or remove the host's redraw callback. `None` detaches the engine.
    pub fn set_callback(&mut self, callback: Option<Box<dyn Callback>>) {
        self.callback = callback;
    }

    /// `true` while a redraw callback is installed.
    pub fn is_attached(&self) -> bool {
        self.callback.is_some()
    }

    /// Bounds last delivered by layout.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Layout delivered new bounds.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.draw_rect = Rect::new(0.0, 0.0, bounds.width(), bounds.height());
        self.update_shader();
        self.maybe_start();
    }

    /// Shader built for the current config and bounds.
    pub fn shader(&self) -> Option<&WaveShader> {
        self.shader.as_ref()
    }

    /// Operator the band is painted with.
    pub fn composite_mode(&self) -> CompositeMode {
        self.mode
    }

    /// Start the animation. Ignored while detached, unconfigured or already running.
    pub fn start(&mut self) {
        if self.callback.is_none() {
            tracing::trace!("light wave start ignored: not attached");
            return;
        }
        if let Some(animator) = &mut self.animator
            && !animator.is_started()
        {
            animator.start();
        }
    }

    /// Stop the animation if it is running.
    pub fn stop(&mut self) {
        if let Some(animator) = &mut self.animator
            && animator.is_started()
        {
            animator.cancel();
        }
    }

    /// `true` while the animation runs.
    pub fn is_running(&self) -> bool {
        self.animator.as_ref().is_some_and(WaveAnimator::is_started)
    }

    /// Start if attached, configured with `auto_start`, and not already running.
    pub fn maybe_start(&mut self) {
        let auto_start = self.config.as_ref().is_some_and(|c| c.auto_start);
        if auto_start && !self.is_running() {
            self.start();
        }
    }

    /// Feed `dt` of host time to the animation. Every delivered tick requests a redraw.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let ticked = self
            .animator
            .as_mut()
            .is_some_and(|animator| animator.advance(dt));
        if ticked {
            self.invalidate_self();
        }
        ticked
    }

    /// Raw driver value, past `1` during the repeat pause.
    pub fn animated_value(&self) -> f64 {
        self.animator
            .as_ref()
            .map_or(0.0, WaveAnimator::animated_value)
    }

    /// Sweep position used for drawing: the driver value clamped to `[0, 1]`, then eased.
    pub fn sweep_fraction(&self) -> f64 {
        let value = self.animated_value().clamp(0.0, 1.0);
        match &self.config {
            Some(cfg) => cfg.interpolator.apply(value),
            None => value,
        }
    }

    /// Band translation for the current frame, `None` without a config.
    pub fn sweep_offset(&self) -> Option<Vec2> {
        let cfg = self.config.as_ref()?;
        Some(sweep_offset(
            cfg.direction,
            self.draw_rect.size(),
            cfg.tilt,
            self.sweep_fraction(),
        ))
    }

    /// Paint the band over `canvas`. Silently does nothing until config and shader exist.
    pub fn draw<C>(&mut self, canvas: &mut C)
    where
        C: WaveCanvas + ?Sized,
    {
        let fraction = self.sweep_fraction();
        let (Some(cfg), Some(shader)) = (&self.config, &mut self.shader) else {
            return;
        };
        let size = self.draw_rect.size();
        let offset = sweep_offset(cfg.direction, size, cfg.tilt, fraction);
        shader.set_local_matrix(sweep_transform(size, cfg.tilt, offset));
        canvas.draw_wave_rect(self.draw_rect, shader, self.mode);
    }

    /// Compositing hint for the host.
    pub fn opacity(&self) -> Opacity {
        match &self.config {
            Some(cfg) if cfg.clip_to_children || cfg.alpha_shimmer => Opacity::Translucent,
            _ => Opacity::Opaque,
        }
    }

    fn invalidate_self(&self) {
        if let Some(cb) = &self.callback {
            cb.invalidate_drawable();
        }
    }

    fn update_shader(&mut self) {
        let Some(cfg) = &self.config else {
            return;
        };
        match WaveShader::build(cfg, self.bounds.size()) {
            Some(shader) => self.shader = Some(shader),
            None => tracing::trace!(bounds = ?self.bounds, "shader rebuild skipped: empty bounds"),
        }
    }

    fn update_animator(&mut self) {
        let Some(cfg) = &self.config else {
            return;
        };
        let started = match &mut self.animator {
            Some(animator) => {
                let started = animator.is_started();
                animator.cancel();
                started
            }
            None => false,
        };
        let mut animator = WaveAnimator::new(cfg.animator_timing());
        if started {
            animator.start();
        }
        self.animator = Some(animator);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wave/engine.rs"]
mod tests;
