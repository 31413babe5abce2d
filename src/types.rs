// Core value types shared by the sampler, the preview controller and the window.

use crate::error::Error;

/// One sampled color, channels in R,G,B,A order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl RgbaColor {
    /// Transparent black: what an off-buffer read resolves to.
    pub const TRANSPARENT: RgbaColor = RgbaColor { r: 0, g: 0, b: 0, a: 0 };

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Interpret four bytes from a pixel read as (r, g, b, a).
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self { r: bytes[0], g: bytes[1], b: bytes[2], a: bytes[3] }
    }

    /// `#RRGGBBAA`, uppercase.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }

    /// Packed 0x00RRGGBB for minifb (alpha dropped).
    pub fn to_0rgb(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

/// Pointer position in stage-logical coordinates (independent of pixel density).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    pub x: f32,
    pub y: f32,
}

impl PointerPosition {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Logical -> physical (backing buffer) scale. Always finite and > 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRatio(f32);

impl PixelRatio {
    pub const ONE: PixelRatio = PixelRatio(1.0);

    pub fn new(ratio: f32) -> Result<Self, Error> {
        if ratio.is_finite() && ratio > 0.0 {
            Ok(Self(ratio))
        } else {
            Err(Error::InvalidPixelRatio(ratio))
        }
    }

    pub fn get(&self) -> f32 {
        self.0
    }
}

impl Default for PixelRatio {
    fn default() -> Self {
        Self::ONE
    }
}

/// A coordinate in the backing buffer, after the pixel ratio has been applied.
/// Signed: the pointer can sit left of / above the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalPoint {
    pub x: i64,
    pub y: i64,
}
