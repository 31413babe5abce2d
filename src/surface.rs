// The two things we need from whoever renders the canvas:
// a stage that knows where the pointer is, and a raster layer we can read pixels from.
// Neither is owned here; callers hand in fresh references on every event.

use crate::error::Error;
use crate::types::PointerPosition;
use image::RgbaImage;

/// Root coordinate space of the canvas.
pub trait Stage {
    /// Current pointer position in stage-logical coordinates,
    /// `None` when the pointer is outside the stage or has not moved yet.
    fn pointer_position(&self) -> Option<PointerPosition>;
}

/// A drawable surface with a pixel-addressable backing buffer.
pub trait RasterLayer {
    /// Backing buffer size in physical pixels.
    fn size(&self) -> (u32, u32);

    /// Where the buffer's (0,0) sits in physical stage space.
    fn origin(&self) -> (i64, i64) {
        (0, 0)
    }

    /// Read a `width x height` region in buffer coordinates.
    /// Returns `4 * width * height` bytes, R,G,B,A per pixel, row-major.
    fn read_pixels(&self, x: i64, y: i64, width: u32, height: u32) -> Result<Vec<u8>, Error>;
}

/// Stage whose pointer position is set by the host (window loop, tests).
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedStage {
    pub pointer: Option<PointerPosition>,
}

impl FixedStage {
    pub fn at(x: f32, y: f32) -> Self {
        Self { pointer: Some(PointerPosition::new(x, y)) }
    }

    pub fn empty() -> Self {
        Self { pointer: None }
    }
}

impl Stage for FixedStage {
    fn pointer_position(&self) -> Option<PointerPosition> {
        self.pointer
    }
}

/// Raster layer backed by an in-memory RGBA image.
pub struct ImageLayer {
    image: RgbaImage,
    origin: (i64, i64),
}

impl ImageLayer {
    pub fn new(image: RgbaImage) -> Self {
        Self { image, origin: (0, 0) }
    }

    /// Place the layer at a physical offset inside the stage.
    pub fn with_origin(mut self, x: i64, y: i64) -> Self {
        self.origin = (x, y);
        self
    }

    /// Load any format the `image` crate decodes, converted to RGBA8.
    pub fn open(path: &std::path::Path) -> Result<Self, Error> {
        let image = image::open(path)
            .map_err(|e| Error::ImageLoad(format!("{}: {e}", path.display())))?
            .to_rgba8();
        Ok(Self::new(image))
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}

impl RasterLayer for ImageLayer {
    fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn origin(&self) -> (i64, i64) {
        self.origin
    }

    fn read_pixels(&self, x: i64, y: i64, width: u32, height: u32) -> Result<Vec<u8>, Error> {
        let (w, h) = self.image.dimensions();
        let fits = x >= 0
            && y >= 0
            && x + width as i64 <= w as i64
            && y + height as i64 <= h as i64;
        if !fits {
            return Err(Error::PixelRead(format!(
                "region {width}x{height} at ({x},{y}) outside {w}x{h} buffer"
            )));
        }

        let mut out = Vec::with_capacity(4 * width as usize * height as usize);
        for row in y as u32..y as u32 + height {
            for col in x as u32..x as u32 + width {
                out.extend_from_slice(&self.image.get_pixel(col, row).0);
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn image_layer_reads_rgba_in_row_major_order() {
        let img = RgbaImage::from_fn(3, 2, |x, y| Rgba([x as u8, y as u8, 7, 255]));
        let layer = ImageLayer::new(img);
        assert_eq!(layer.size(), (3, 2));

        let bytes = layer.read_pixels(1, 0, 2, 2).unwrap();
        assert_eq!(bytes, vec![1, 0, 7, 255, 2, 0, 7, 255, 1, 1, 7, 255, 2, 1, 7, 255]);
    }

    #[test]
    fn image_layer_rejects_reads_past_the_buffer() {
        let layer = ImageLayer::new(RgbaImage::new(4, 4));
        assert!(matches!(layer.read_pixels(-1, 0, 1, 1), Err(Error::PixelRead(_))));
        assert!(matches!(layer.read_pixels(4, 0, 1, 1), Err(Error::PixelRead(_))));
        assert!(matches!(layer.read_pixels(3, 3, 2, 1), Err(Error::PixelRead(_))));
        assert!(layer.read_pixels(3, 3, 1, 1).is_ok());
    }

    #[test]
    fn fixed_stage_reports_what_it_holds() {
        assert_eq!(FixedStage::empty().pointer_position(), None);
        assert_eq!(FixedStage::at(1.5, 2.0).pointer_position(), Some(PointerPosition::new(1.5, 2.0)));
    }
}
