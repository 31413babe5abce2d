// Pointer -> pixel color.
// On every pointer move the host calls `sample` with whatever stage and layer are live right now.
// We scale the logical pointer by the pixel ratio, read one pixel, and hand the color back.

use crate::error::Error;
use crate::surface::{RasterLayer, Stage};
use crate::types::{PhysicalPoint, PixelRatio, PointerPosition, RgbaColor};
use tracing::{debug, trace, warn};

/// What to do when the scaled pointer lands outside the backing buffer
/// (happens at stage edges under fractional pixel ratios).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgePolicy {
    /// Return transparent black without touching the layer.
    #[default]
    Transparent,
    /// Read the nearest edge pixel instead.
    Clamp,
}

pub struct PointerSampler {
    ratio: PixelRatio,
    policy: EdgePolicy,
}

impl PointerSampler {
    pub fn new(ratio: PixelRatio, policy: EdgePolicy) -> Self {
        Self { ratio, policy }
    }

    pub fn ratio(&self) -> PixelRatio {
        self.ratio
    }

    pub fn policy(&self) -> EdgePolicy {
        self.policy
    }

    /// Logical pointer -> physical stage coordinate, `floor(v * ratio)` per axis.
    /// The product stays in f32 so a ratio like 0.9 lands on 9.0, not 8.99..
    /// `None` for non-finite input or a product that overflows.
    pub fn physical_point(&self, pos: PointerPosition) -> Option<PhysicalPoint> {
        let ratio = self.ratio.get();
        let px = (pos.x * ratio).floor();
        let py = (pos.y * ratio).floor();
        if !px.is_finite() || !py.is_finite() {
            return None;
        }
        Some(PhysicalPoint { x: px as i64, y: py as i64 })
    }

    /// Sample the pixel under the pointer.
    ///
    /// `Ok(None)` is the idle case: no stage, no layer, or no pointer position.
    /// Nothing is read and the caller should leave its state alone.
    ///
    /// `Err` only when the layer itself fails to produce the pixel.
    pub fn sample(
        &self,
        stage: Option<&dyn Stage>,
        layer: Option<&dyn RasterLayer>,
    ) -> Result<Option<RgbaColor>, Error> {
        let (Some(stage), Some(layer)) = (stage, layer) else {
            debug!("sample skipped: surface unavailable");
            return Ok(None);
        };
        let Some(pos) = stage.pointer_position() else {
            debug!("sample skipped: no pointer position");
            return Ok(None);
        };

        let (w, h) = layer.size();
        let (ox, oy) = layer.origin();
        // huge pointers saturate at i64 bounds; an origin shift past them is just out of bounds
        let local = self.physical_point(pos).and_then(|p| {
            Some(PhysicalPoint { x: p.x.checked_sub(ox)?, y: p.y.checked_sub(oy)? })
        });

        let inside = |p: &PhysicalPoint| p.x >= 0 && p.y >= 0 && p.x < w as i64 && p.y < h as i64;

        let target = match local {
            Some(p) if inside(&p) => p,
            Some(p) if self.policy == EdgePolicy::Clamp && w > 0 && h > 0 => {
                let clamped = PhysicalPoint {
                    x: p.x.clamp(0, w as i64 - 1),
                    y: p.y.clamp(0, h as i64 - 1),
                };
                warn!(x = p.x, y = p.y, cx = clamped.x, cy = clamped.y, "sample clamped to buffer edge");
                clamped
            }
            other => {
                warn!(?other, width = w, height = h, "sample outside buffer, using transparent");
                return Ok(Some(RgbaColor::TRANSPARENT));
            }
        };

        let bytes = layer.read_pixels(target.x, target.y, 1, 1)?;
        let px: [u8; 4] = bytes.as_slice().try_into().map_err(|_| {
            Error::PixelRead(format!("expected 4 bytes for a 1x1 read, got {}", bytes.len()))
        })?;

        let color = RgbaColor::from_bytes(px);
        trace!(x = target.x, y = target.y, color = %color.to_hex(), "sampled");
        Ok(Some(color))
    }
}

impl Default for PointerSampler {
    fn default() -> Self {
        Self::new(PixelRatio::ONE, EdgePolicy::Transparent)
    }
}
