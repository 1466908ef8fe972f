//! Light wave: an animated gradient sweep (shimmer) composited over drawn content.
//!
//! - Describe the effect with a [`WaveConfig`], built through [`WaveBuilder`] or from a style
//!   dictionary ([`WaveConfig::from_attributes`]).
//! - Hand it to a [`WaveEngine`], feed it bounds and frame time, and call [`WaveEngine::draw`].
//! - Or let a [`WaveView`] host do the lifecycle plumbing around your [`ContentPainter`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod host;
pub(crate) mod render;
pub(crate) mod wave;

pub use crate::foundation::core::{
    Affine, Fps, FrameIndex, Point, Rect, Rgba8Premul, Size, Vec2,
};
pub use crate::foundation::error::{LightWaveError, LightWaveResult};

pub use crate::animation::animator::{AnimatorTiming, RepeatCount, RepeatMode, WaveAnimator};
pub use crate::animation::ease::Ease;
pub use crate::host::view::{LayerType, WaveView};
pub use crate::render::composite::CompositeMode;
pub use crate::render::content::{ContentPainter, SkeletonBlock, SkeletonContent};
pub use crate::render::surface::Surface;
pub use crate::wave::attributes::WaveAttributes;
pub use crate::wave::color::Argb;
pub use crate::wave::config::{Direction, Highlight, Shape, WaveBuilder, WaveConfig};
pub use crate::wave::engine::{
    Callback, Opacity, RedrawRequests, WaveCanvas, WaveEngine, sweep_extents, sweep_offset,
    sweep_transform,
};
pub use crate::wave::shader::{GradientGeometry, GradientStop, WaveShader};
