use std::borrow::Cow;
use std::time::Duration;

use crate::animation::animator::{AnimatorTiming, RepeatCount, RepeatMode};
use crate::animation::ease::Ease;
use crate::foundation::error::{LightWaveError, LightWaveResult};
use crate::wave::color::Argb;
use serde::{Deserialize, Serialize};

/// Direction the sweep travels across the bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Band enters on the left.
    #[default]
    LeftToRight,
    /// Band enters on the right.
    RightToLeft,
    /// Band enters at the top.
    TopToBottom,
    /// Band enters at the bottom.
    BottomToTop,
}

impl Direction {
    /// Every direction, in ordinal order.
    pub const ALL: [Direction; 4] = [
        Direction::LeftToRight,
        Direction::RightToLeft,
        Direction::TopToBottom,
        Direction::BottomToTop,
    ];

    /// `true` for the top/bottom sweeps.
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::TopToBottom | Self::BottomToTop)
    }
}

/// Gradient geometry of the sweep band.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// Straight band along the sweep axis.
    #[default]
    Linear,
    /// Disc centered on the bounds.
    Radial,
}

/// Immutable light wave parameters.
///
/// Built through [`WaveBuilder`]; a new config fully replaces the old one on the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaveConfig {
    /// Color stops, at least two.
    pub colors: Vec<Argb>,
    /// Stop offsets in `[0, 1]`; `None` spaces the stops evenly.
    pub positions: Option<Vec<f64>>,
    /// Sweep direction.
    pub direction: Direction,
    /// Gradient geometry.
    pub shape: Shape,
    /// Rotation of the band, in degrees.
    pub tilt: f64,
    /// Gradient width relative to the drawn width (> 0).
    pub width_ratio: f64,
    /// Gradient height relative to the drawn height (> 0).
    pub height_ratio: f64,
    /// One sweep, in milliseconds (> 0).
    pub animation_duration_ms: u64,
    /// Pause after each sweep, in milliseconds.
    pub repeat_delay_ms: u64,
    /// Restart or reverse between cycles.
    pub repeat_mode: RepeatMode,
    /// Extra cycles after the first.
    pub repeat_count: RepeatCount,
    /// Start once attached and laid out.
    pub auto_start: bool,
    /// Mask content alpha (`DstIn`) instead of painting colors over it (`SrcIn`).
    pub alpha_shimmer: bool,
    /// Ask the host to isolate the effect in its own layer.
    pub clip_to_children: bool,
    /// Curve applied to the sweep fraction.
    #[serde(default)]
    pub interpolator: Ease,
}

impl WaveConfig {
    /// Stop offsets actually used by the shader.
    pub fn effective_positions(&self) -> Cow<'_, [f64]> {
        match &self.positions {
            Some(p) => Cow::Borrowed(p.as_slice()),
            None => Cow::Owned(evenly_spaced(self.colors.len())),
        }
    }

    /// Gradient width for drawn width `bounds_width`.
    pub fn width(&self, bounds_width: f64) -> f64 {
        scaled_extent(self.width_ratio, bounds_width)
    }

    /// Gradient height for drawn height `bounds_height`.
    pub fn height(&self, bounds_height: f64) -> f64 {
        scaled_extent(self.height_ratio, bounds_height)
    }

    /// One sweep.
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    /// Pause after each sweep.
    pub fn repeat_delay(&self) -> Duration {
        Duration::from_millis(self.repeat_delay_ms)
    }

    /// Animator timing derived from this config.
    pub fn animator_timing(&self) -> AnimatorTiming {
        AnimatorTiming {
            sweep: self.animation_duration(),
            repeat_delay: self.repeat_delay(),
            repeat_mode: self.repeat_mode,
            repeat_count: self.repeat_count,
        }
    }

    /// Check every invariant a hand-assembled or deserialized config must hold.
    pub fn validate(&self) -> LightWaveResult<()> {
        if self.colors.len() < 2 {
            return Err(LightWaveError::configuration(format!(
                "light wave needs at least 2 colors, got {}",
                self.colors.len()
            )));
        }
        if let Some(p) = &self.positions {
            if p.len() != self.colors.len() {
                return Err(LightWaveError::configuration(format!(
                    "colors and positions must have the same length ({} != {})",
                    self.colors.len(),
                    p.len()
                )));
            }
            if !p.iter().all(|v| (0.0..=1.0).contains(v)) {
                return Err(LightWaveError::configuration(
                    "positions must lie in [0, 1]",
                ));
            }
            if !p.windows(2).all(|w| w[0] <= w[1]) {
                return Err(LightWaveError::configuration(
                    "positions must be non-decreasing",
                ));
            }
        }
        if self.animation_duration_ms == 0 {
            return Err(LightWaveError::configuration(
                "animation duration must be > 0",
            ));
        }
        for (name, ratio) in [
            ("width_ratio", self.width_ratio),
            ("height_ratio", self.height_ratio),
        ] {
            if !ratio.is_finite() || ratio <= 0.0 {
                return Err(LightWaveError::configuration(format!(
                    "{name} must be a finite value > 0, got {ratio}"
                )));
            }
        }
        if !self.tilt.is_finite() {
            return Err(LightWaveError::configuration("tilt must be finite"));
        }
        Ok(())
    }
}

fn scaled_extent(ratio: f64, bound: f64) -> f64 {
    (ratio * bound).round().max(1.0)
}

/// `n` offsets from 0 to 1, evenly spaced.
pub(crate) fn evenly_spaced(n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let last = (n - 1) as f64;
            (0..n).map(|i| i as f64 / last).collect()
        }
    }
}

/// Which three-stop ramp a builder maintains.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Highlight {
    /// White at `base_alpha` around a band of white at `highlight_alpha`.
    Alpha {
        /// Alpha outside the band, in `[0, 1]`.
        base_alpha: f64,
        /// Alpha at the band's peak, in `[0, 1]`.
        highlight_alpha: f64,
    },
    /// `base` color around a band of `highlight`.
    Color {
        /// Color outside the band.
        base: Argb,
        /// Color at the band's peak.
        highlight: Argb,
    },
}

impl Highlight {
    fn ramp(self) -> Vec<Argb> {
        let (base, highlight) = match self {
            Self::Alpha {
                base_alpha,
                highlight_alpha,
            } => (
                Argb::WHITE.with_alpha(base_alpha),
                Argb::WHITE.with_alpha(highlight_alpha),
            ),
            Self::Color { base, highlight } => (base, highlight),
        };
        vec![base, highlight, base]
    }
}

/// Fluent builder for [`WaveConfig`]. Validation happens in [`WaveBuilder::build`].
#[derive(Clone, Debug)]
pub struct WaveBuilder {
    pub(crate) highlight: Highlight,
    pub(crate) config: WaveConfig,
}

impl WaveBuilder {
    /// Alpha-mask preset: the sweep modulates the content's alpha.
    pub fn alpha_highlight() -> Self {
        Self::with_highlight(
            Highlight::Alpha {
                base_alpha: 0.0,
                highlight_alpha: 0.5,
            },
            true,
        )
    }

    /// Colored preset: the sweep paints its colors over the content.
    pub fn color_highlight() -> Self {
        Self::with_highlight(
            Highlight::Color {
                base: Argb(0x4CFF_FFFF),
                highlight: Argb::WHITE,
            },
            false,
        )
    }

    fn with_highlight(highlight: Highlight, alpha_shimmer: bool) -> Self {
        Self {
            highlight,
            config: WaveConfig {
                colors: highlight.ramp(),
                positions: None,
                direction: Direction::LeftToRight,
                shape: Shape::Linear,
                tilt: 20.0,
                width_ratio: 1.0,
                height_ratio: 1.0,
                animation_duration_ms: 1000,
                repeat_delay_ms: 0,
                repeat_mode: RepeatMode::Restart,
                repeat_count: RepeatCount::Infinite,
                auto_start: true,
                alpha_shimmer,
                clip_to_children: true,
                interpolator: Ease::Linear,
            },
        }
    }

    /// `true` for builders started from [`WaveBuilder::color_highlight`].
    pub fn is_colored(&self) -> bool {
        matches!(self.highlight, Highlight::Color { .. })
    }

    /// Alpha of the surrounding ramp. Ignored by the colored preset.
    pub fn base_alpha(mut self, alpha: f64) -> Self {
        if let Highlight::Alpha { base_alpha, .. } = &mut self.highlight {
            *base_alpha = alpha.clamp(0.0, 1.0);
            self.config.colors = self.highlight.ramp();
        }
        self
    }

    /// Alpha of the band's peak. Ignored by the colored preset.
    pub fn highlight_alpha(mut self, alpha: f64) -> Self {
        if let Highlight::Alpha {
            highlight_alpha, ..
        } = &mut self.highlight
        {
            *highlight_alpha = alpha.clamp(0.0, 1.0);
            self.config.colors = self.highlight.ramp();
        }
        self
    }

    /// Color of the surrounding ramp. Ignored by the alpha preset.
    pub fn base_color(mut self, color: Argb) -> Self {
        if let Highlight::Color { base, .. } = &mut self.highlight {
            *base = color;
            self.config.colors = self.highlight.ramp();
        }
        self
    }

    /// Color of the band's peak. Ignored by the alpha preset.
    pub fn highlight_color(mut self, color: Argb) -> Self {
        if let Highlight::Color { highlight, .. } = &mut self.highlight {
            *highlight = color;
            self.config.colors = self.highlight.ramp();
        }
        self
    }

    /// Replace the whole color ramp.
    pub fn colors(mut self, colors: impl Into<Vec<Argb>>) -> Self {
        self.config.colors = colors.into();
        self
    }

    /// Explicit stop offsets, or `None` for evenly spaced stops.
    pub fn positions(mut self, positions: Option<Vec<f64>>) -> Self {
        self.config.positions = positions;
        self
    }

    /// Sweep direction.
    pub fn direction(mut self, direction: Direction) -> Self {
        self.config.direction = direction;
        self
    }

    /// Linear band or radial disc.
    pub fn shape(mut self, shape: Shape) -> Self {
        self.config.shape = shape;
        self
    }

    /// Band rotation in degrees.
    pub fn tilt(mut self, degrees: f64) -> Self {
        self.config.tilt = degrees;
        self
    }

    /// Gradient width relative to the bounds.
    pub fn width_ratio(mut self, ratio: f64) -> Self {
        self.config.width_ratio = ratio;
        self
    }

    /// Gradient height relative to the bounds.
    pub fn height_ratio(mut self, ratio: f64) -> Self {
        self.config.height_ratio = ratio;
        self
    }

    /// Length of one sweep.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.config.animation_duration_ms = duration_ms(duration);
        self
    }

    /// Pause appended after every sweep.
    pub fn repeat_delay(mut self, delay: Duration) -> Self {
        self.config.repeat_delay_ms = duration_ms(delay);
        self
    }

    /// Restart or reverse between cycles.
    pub fn repeat_mode(mut self, mode: RepeatMode) -> Self {
        self.config.repeat_mode = mode;
        self
    }

    /// Extra cycles after the first.
    pub fn repeat_count(mut self, count: RepeatCount) -> Self {
        self.config.repeat_count = count;
        self
    }

    /// Start automatically once attached.
    pub fn auto_start(mut self, auto_start: bool) -> Self {
        self.config.auto_start = auto_start;
        self
    }

    /// Mask content alpha instead of painting colors.
    pub fn alpha_shimmer(mut self, alpha_shimmer: bool) -> Self {
        self.config.alpha_shimmer = alpha_shimmer;
        self
    }

    /// Ask the host for an isolated layer.
    pub fn clip_to_children(mut self, clip: bool) -> Self {
        self.config.clip_to_children = clip;
        self
    }

    /// Curve applied to the sweep fraction.
    pub fn interpolator(mut self, ease: Ease) -> Self {
        self.config.interpolator = ease;
        self
    }

    /// Validate and produce the immutable config.
    pub fn build(self) -> LightWaveResult<WaveConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

fn duration_ms(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
#[path = "../../tests/unit/wave/config.rs"]
mod tests;
