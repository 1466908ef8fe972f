//! Style-attribute consumption: a JSON object of named options applied onto a [`WaveBuilder`].

use std::time::Duration;

use serde_json::{Map, Value};

use crate::animation::animator::{RepeatCount, RepeatMode};
use crate::animation::ease::Ease;
use crate::foundation::error::{LightWaveError, LightWaveResult};
use crate::wave::color::{Argb, packed_to_argb};
use crate::wave::config::{Direction, Shape, WaveBuilder, WaveConfig};

/// Style dictionary: option name to value.
pub type WaveAttributes = Map<String, Value>;

const PREFIX: &str = "wave_";

/// Look up `key` with or without the `wave_` prefix.
fn attr<'a>(attrs: &'a WaveAttributes, key: &str) -> Option<&'a Value> {
    attrs
        .get(key)
        .or_else(|| attrs.get(&format!("{PREFIX}{key}")))
        .filter(|v| !v.is_null())
}

impl WaveBuilder {
    /// Pick the preset from the `colored` attribute.
    pub fn for_attributes(attrs: &WaveAttributes) -> LightWaveResult<Self> {
        let colored = match attr(attrs, "colored") {
            Some(v) => as_bool("colored", v)?,
            None => false,
        };
        Ok(if colored {
            Self::color_highlight()
        } else {
            Self::alpha_highlight()
        })
    }

    /// Apply every recognized attribute. Absent keys keep the current values; unknown keys are
    /// ignored.
    pub fn consume_attributes(mut self, attrs: &WaveAttributes) -> LightWaveResult<Self> {
        if let Some(v) = attr(attrs, "clip_to_children") {
            self = self.clip_to_children(as_bool("clip_to_children", v)?);
        }
        if let Some(v) = attr(attrs, "auto_start") {
            self = self.auto_start(as_bool("auto_start", v)?);
        }
        if let Some(v) = attr(attrs, "alpha_shimmer") {
            self = self.alpha_shimmer(as_bool("alpha_shimmer", v)?);
        }
        if let Some(v) = attr(attrs, "base_alpha") {
            self = self.base_alpha(as_f64("base_alpha", v)?);
        }
        if let Some(v) = attr(attrs, "highlight_alpha") {
            self = self.highlight_alpha(as_f64("highlight_alpha", v)?);
        }
        if let Some(v) = attr(attrs, "base_color") {
            self = self.base_color(as_color("base_color", v)?);
        }
        if let Some(v) = attr(attrs, "highlight_color") {
            self = self.highlight_color(as_color("highlight_color", v)?);
        }
        if let Some(v) = attr(attrs, "colors") {
            let colors = as_array("colors", v)?
                .iter()
                .map(|c| as_color("colors", c))
                .collect::<LightWaveResult<Vec<_>>>()?;
            self = self.colors(colors);
        }
        if let Some(v) = attr(attrs, "positions") {
            let positions = as_array("positions", v)?
                .iter()
                .map(|p| as_f64("positions", p))
                .collect::<LightWaveResult<Vec<_>>>()?;
            self = self.positions(Some(positions));
        }
        if let Some(v) = attr(attrs, "direction") {
            self = self.direction(as_enum("direction", v, &Direction::ALL)?);
        }
        if let Some(v) = attr(attrs, "shape") {
            self = self.shape(as_enum("shape", v, &[Shape::Linear, Shape::Radial])?);
        }
        if let Some(v) = attr(attrs, "tilt") {
            self = self.tilt(as_f64("tilt", v)?);
        }
        if let Some(v) = attr(attrs, "width_ratio") {
            self = self.width_ratio(as_f64("width_ratio", v)?);
        }
        if let Some(v) = attr(attrs, "height_ratio") {
            self = self.height_ratio(as_f64("height_ratio", v)?);
        }
        if let Some(v) = attr(attrs, "duration") {
            self = self.duration(as_millis("duration", v)?);
        }
        if let Some(v) = attr(attrs, "repeat_delay") {
            self = self.repeat_delay(as_millis("repeat_delay", v)?);
        }
        if let Some(v) = attr(attrs, "repeat_mode") {
            self = self.repeat_mode(as_enum(
                "repeat_mode",
                v,
                &[RepeatMode::Restart, RepeatMode::Reverse],
            )?);
        }
        if let Some(v) = attr(attrs, "repeat_count") {
            self = self.repeat_count(as_repeat_count(v)?);
        }
        if let Some(v) = attr(attrs, "interpolator") {
            self = self.interpolator(as_enum("interpolator", v, &Ease::ALL)?);
        }
        Ok(self)
    }
}

impl WaveConfig {
    /// Resolve a style dictionary into a config: preset by `colored`, then every attribute.
    pub fn from_attributes(attrs: &WaveAttributes) -> LightWaveResult<Self> {
        WaveBuilder::for_attributes(attrs)?
            .consume_attributes(attrs)?
            .build()
    }

    /// Parse a JSON object of attributes.
    pub fn from_attributes_json(json: &str) -> LightWaveResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        let attrs = value
            .as_object()
            .ok_or_else(|| LightWaveError::serde("light wave attributes must be a JSON object"))?;
        Self::from_attributes(attrs)
    }
}

fn malformed(key: &str, expected: &str, v: &Value) -> LightWaveError {
    LightWaveError::configuration(format!("attribute '{key}' must be {expected}, got {v}"))
}

fn as_bool(key: &str, v: &Value) -> LightWaveResult<bool> {
    v.as_bool().ok_or_else(|| malformed(key, "a boolean", v))
}

fn as_f64(key: &str, v: &Value) -> LightWaveResult<f64> {
    v.as_f64().ok_or_else(|| malformed(key, "a number", v))
}

fn as_array<'a>(key: &str, v: &'a Value) -> LightWaveResult<&'a Vec<Value>> {
    v.as_array().ok_or_else(|| malformed(key, "an array", v))
}

fn as_millis(key: &str, v: &Value) -> LightWaveResult<Duration> {
    v.as_u64()
        .map(Duration::from_millis)
        .ok_or_else(|| malformed(key, "a non-negative integer of milliseconds", v))
}

fn as_color(key: &str, v: &Value) -> LightWaveResult<Argb> {
    match v {
        Value::String(s) => Argb::parse_hex(s)
            .map_err(|e| LightWaveError::configuration(format!("attribute '{key}': {e}"))),
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| malformed(key, "a color int", v))
            .and_then(|i| {
                packed_to_argb(i)
                    .map_err(|e| LightWaveError::configuration(format!("attribute '{key}': {e}")))
            }),
        _ => Err(malformed(key, "a color (\"#AARRGGBB\" or int)", v)),
    }
}

/// Enum values by snake_case name or by ordinal.
fn as_enum<T>(key: &str, v: &Value, variants: &[T]) -> LightWaveResult<T>
where
    T: Copy + serde::de::DeserializeOwned,
{
    match v {
        Value::String(s) => {
            let name = s.trim().to_ascii_lowercase().replace('-', "_");
            serde_json::from_value(Value::String(name))
                .map_err(|_| malformed(key, "a known variant name", v))
        }
        Value::Number(n) => n
            .as_u64()
            .and_then(|i| usize::try_from(i).ok())
            .and_then(|i| variants.get(i).copied())
            .ok_or_else(|| malformed(key, "a valid ordinal", v)),
        _ => Err(malformed(key, "a variant name or ordinal", v)),
    }
}

fn as_repeat_count(v: &Value) -> LightWaveResult<RepeatCount> {
    match v {
        Value::String(s) if s.trim().eq_ignore_ascii_case("infinite") => Ok(RepeatCount::Infinite),
        Value::Number(n) => match n.as_i64() {
            Some(-1) => Ok(RepeatCount::Infinite),
            Some(i) => u32::try_from(i)
                .map(RepeatCount::Finite)
                .map_err(|_| malformed("repeat_count", "-1 or a count >= 0", v)),
            None => Err(malformed("repeat_count", "an integer", v)),
        },
        _ => Err(malformed("repeat_count", "an integer or \"infinite\"", v)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wave/attributes.rs"]
mod tests;
