// Gamma-correct mixing for the window view, with table lookups instead of powf.
// Visual: the downscaled canvas and translucent swatches have no dark fringes.

use pixel_picker::RgbaColor;

pub struct GammaLut {
    // sRGB(0..255) -> linear (0..1) as f32
    srgb_to_linear: [f32; 256],
    // linear(0..1) -> sRGB(0..255) via 4096-step quantization
    // (index = (linear * 4095).round())
    linear_to_srgb: [u8; 4096],
}

impl GammaLut {
    /// Build both tables once at startup.
    pub fn new() -> Self {
        let mut s2l = [0.0f32; 256];
        for (v, slot) in s2l.iter_mut().enumerate() {
            let c = v as f32 / 255.0;
            *slot = if c <= 0.04045 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) };
        }

        let mut l2s = [0u8; 4096];
        for (i, slot) in l2s.iter_mut().enumerate() {
            let l = (i as f32) / 4095.0;
            let s = if l <= 0.003_130_8 { 12.92 * l } else { 1.055 * l.powf(1.0 / 2.4) - 0.055 };
            *slot = (s * 255.0).round().clamp(0.0, 255.0) as u8;
        }

        Self { srgb_to_linear: s2l, linear_to_srgb: l2s }
    }

    #[inline]
    pub fn srgb_u8_to_linear(&self, v: u8) -> f32 {
        self.srgb_to_linear[v as usize]
    }

    #[inline]
    pub fn linear_to_srgb_u8(&self, l: f32) -> u8 {
        let idx = (l.clamp(0.0, 1.0) * 4095.0).round() as usize;
        self.linear_to_srgb[idx]
    }

    /// Composite `src` (straight alpha) over an opaque 0x00RRGGBB pixel.
    pub fn over_0rgb(&self, dst: u32, src: RgbaColor) -> u32 {
        match src.a {
            0 => return dst,
            255 => return src.to_0rgb(),
            _ => {}
        }
        let a = src.a as f32 / 255.0;
        let inv = 1.0 - a;
        let mix = |d: u8, s: u8| {
            let l = a * self.srgb_u8_to_linear(s) + inv * self.srgb_u8_to_linear(d);
            self.linear_to_srgb_u8(l) as u32
        };
        let r = mix(((dst >> 16) & 0xFF) as u8, src.r);
        let g = mix(((dst >> 8) & 0xFF) as u8, src.g);
        let b = mix((dst & 0xFF) as u8, src.b);
        (r << 16) | (g << 8) | b
    }
}

impl Default for GammaLut {
    fn default() -> Self {
        Self::new()
    }
}
