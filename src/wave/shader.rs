use crate::foundation::core::{Affine, Point, Rgba8Premul, Size, Vec2};
use crate::wave::color::Argb;
use crate::wave::config::{Shape, WaveConfig};

/// Where the gradient parameter `t` comes from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GradientGeometry {
    /// `t` is the projection onto `start -> end`.
    Linear {
        /// Where `t == 0`.
        start: Point,
        /// Where `t == 1`.
        end: Point,
    },
    /// `t` is the distance from `center` over `radius`.
    Radial {
        /// Where `t == 0`.
        center: Point,
        /// Distance at which `t == 1`.
        radius: f64,
    },
}

/// One color stop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient, in `[0, 1]`.
    pub offset: f64,
    /// Stop color.
    pub color: Argb,
}

/// Gradient shader with clamp tiling and a local matrix.
///
/// Gradient space is mapped to surface space by `local_matrix`; sampling inverts it.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveShader {
    geometry: GradientGeometry,
    stops: Vec<GradientStop>,
    local_matrix: Affine,
    inverse: Affine,
}

impl WaveShader {
    /// Shader with an identity local matrix.
    pub fn new(geometry: GradientGeometry, stops: Vec<GradientStop>) -> Self {
        Self {
            geometry,
            stops,
            local_matrix: Affine::IDENTITY,
            inverse: Affine::IDENTITY,
        }
    }

    /// Build the shader for `config` over drawn bounds of `size`.
    ///
    /// Returns `None` for degenerate bounds.
    #[tracing::instrument(level = "trace", skip(config))]
    pub fn build(config: &WaveConfig, size: Size) -> Option<Self> {
        if size.width <= 0.0 || size.height <= 0.0 {
            return None;
        }
        let width = config.width(size.width);
        let height = config.height(size.height);

        let geometry = match config.shape {
            Shape::Linear => {
                let vertical = config.direction.is_vertical();
                let end = if vertical {
                    Point::new(0.0, height)
                } else {
                    Point::new(width, 0.0)
                };
                GradientGeometry::Linear {
                    start: Point::ORIGIN,
                    end,
                }
            }
            Shape::Radial => GradientGeometry::Radial {
                center: Point::new(width / 2.0, height / 2.0),
                radius: width.max(height) / std::f64::consts::SQRT_2,
            },
        };

        let stops = config
            .colors
            .iter()
            .zip(config.effective_positions().iter())
            .map(|(&color, &offset)| GradientStop { offset, color })
            .collect();
        Some(Self::new(geometry, stops))
    }

    /// Gradient geometry in gradient space.
    pub fn geometry(&self) -> GradientGeometry {
        self.geometry
    }

    /// Color stops, ordered by offset.
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Gradient-to-surface transform.
    pub fn local_matrix(&self) -> Affine {
        self.local_matrix
    }

    /// Replace the gradient-to-surface transform.
    pub fn set_local_matrix(&mut self, m: Affine) {
        self.local_matrix = m;
        self.inverse = m.inverse();
    }

    /// Gradient parameter at surface point `p`, before clamping.
    pub fn parameter_at(&self, p: Point) -> f64 {
        let q = self.inverse * p;
        match self.geometry {
            GradientGeometry::Linear { start, end } => {
                let d: Vec2 = end - start;
                let len2 = d.hypot2();
                if len2 <= 0.0 {
                    return 0.0;
                }
                (q - start).dot(d) / len2
            }
            GradientGeometry::Radial { center, radius } => {
                if radius <= 0.0 {
                    return 1.0;
                }
                (q - center).hypot() / radius
            }
        }
    }

    /// Straight color at parameter `t`, clamped to the end stops.
    pub fn color_at(&self, t: f64) -> Argb {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return Argb::TRANSPARENT;
        };
        if t.is_nan() || t <= first.offset {
            return first.color;
        }
        if t >= last.offset {
            return last.color;
        }
        let idx = self.stops.partition_point(|s| s.offset <= t);
        let a = &self.stops[idx - 1];
        let b = &self.stops[idx];
        let span = b.offset - a.offset;
        if span <= 0.0 {
            return b.color;
        }
        a.color.lerp(b.color, (t - a.offset) / span)
    }

    /// Premultiplied color at surface point `p`.
    pub fn sample(&self, p: Point) -> Rgba8Premul {
        self.color_at(self.parameter_at(p)).to_premul()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wave/shader.rs"]
mod tests;
