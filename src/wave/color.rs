use crate::foundation::core::Rgba8Premul;
use crate::foundation::math::unit_to_u8;
use serde::{Deserialize, Serialize};

/// Straight-alpha color packed as `0xAARRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Argb(pub u32);

impl Argb {
    /// `0x00000000`.
    pub const TRANSPARENT: Argb = Argb(0x0000_0000);
    /// Opaque black.
    pub const BLACK: Argb = Argb(0xFF00_0000);
    /// Opaque white.
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);
    /// Opaque red.
    pub const RED: Argb = Argb(0xFFFF_0000);
    /// Opaque green.
    pub const GREEN: Argb = Argb(0xFF00_FF00);
    /// Opaque blue.
    pub const BLUE: Argb = Argb(0xFF00_00FF);

    /// Pack separate channels.
    pub fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(u32::from(a) << 24 | u32::from(r) << 16 | u32::from(g) << 8 | u32::from(b))
    }

    /// Alpha channel.
    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel.
    pub fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    pub fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    pub fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Same RGB with the alpha replaced by `alpha` in `[0, 1]`.
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self((self.0 & 0x00FF_FFFF) | u32::from(unit_to_u8(alpha)) << 24)
    }

    /// Premultiplied copy.
    pub fn to_premul(self) -> Rgba8Premul {
        Rgba8Premul::from_straight_rgba(self.red(), self.green(), self.blue(), self.alpha())
    }

    /// Channel-wise interpolation in straight alpha.
    pub fn lerp(self, other: Argb, t: f64) -> Argb {
        fn ch(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Argb::from_argb(
            ch(self.alpha(), other.alpha(), t),
            ch(self.red(), other.red(), t),
            ch(self.green(), other.green(), t),
            ch(self.blue(), other.blue(), t),
        )
    }

    /// Parse `#RRGGBB` or `#AARRGGBB` (the `#` is optional).
    pub fn parse_hex(s: &str) -> Result<Self, String> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("invalid hex color \"{s}\""));
        }
        let parsed = u32::from_str_radix(s, 16).map_err(|_| format!("invalid hex color \"{s}\""));
        match s.len() {
            6 => Ok(Self(0xFF00_0000 | parsed?)),
            8 => Ok(Self(parsed?)),
            _ => Err("hex color must be #RRGGBB or #AARRGGBB (case-insensitive)".to_owned()),
        }
    }

    /// Format as `#AARRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{:08X}", self.0)
    }
}

impl Serialize for Argb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Argb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Packed(i64),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => Argb::parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::Packed(v) => packed_to_argb(v).map_err(serde::de::Error::custom),
        }
    }
}

/// Accept both unsigned `0xAARRGGBB` and the signed 32-bit form color ints often arrive in.
pub(crate) fn packed_to_argb(v: i64) -> Result<Argb, String> {
    if let Ok(u) = u32::try_from(v) {
        return Ok(Argb(u));
    }
    if let Ok(i) = i32::try_from(v) {
        return Ok(Argb(i as u32));
    }
    Err(format!("color int {v} does not fit in 32 bits"))
}

#[cfg(test)]
#[path = "../../tests/unit/wave/color.rs"]
mod tests;
