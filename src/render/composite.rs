use crate::foundation::error::{LightWaveError, LightWaveResult};
use crate::foundation::math::mul_div255_u8;

/// One premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Porter-Duff operator combining a source pixel with an existing one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CompositeMode {
    /// Keep the destination, scaled by source alpha. Masks content with the band's alpha.
    #[default]
    DstIn,
    /// Source color where the destination has coverage. Paints the band over content.
    SrcIn,
    /// Source over destination. Flattens host layers onto their target.
    SrcOver,
}

impl CompositeMode {
    /// Combine `src` onto `dst` with this operator.
    pub fn apply(self, dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
        match self {
            Self::DstIn => dst_in(dst, src),
            Self::SrcIn => src_in(dst, src),
            Self::SrcOver => over(dst, src),
        }
    }
}

/// `src + dst * (1 - src.a)`
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    let sa = src[3];
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = add_sat_u8(sa, mul_div255(u16::from(dst[3]), inv));

    for i in 0..3 {
        let dc = mul_div255(u16::from(dst[i]), inv);
        out[i] = add_sat_u8(src[i], dc);
    }
    out
}

/// `dst * src.a`
pub fn dst_in(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    let sa = u16::from(src[3]);
    dst.map(|c| mul_div255(u16::from(c), sa))
}

/// `src * dst.a`
pub fn src_in(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    let da = u16::from(dst[3]);
    src.map(|c| mul_div255(u16::from(c), da))
}

/// Combine two equal-length premultiplied RGBA8 buffers pixel by pixel through `mode`.
pub fn composite_in_place(
    dst: &mut [u8],
    src: &[u8],
    mode: CompositeMode,
) -> LightWaveResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(LightWaveError::render(
            "composite_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = mode.apply([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

fn mul_div255(x: u16, y: u16) -> u8 {
    mul_div255_u8(x, y)
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
