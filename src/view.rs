// Turning the physical-resolution raster into what the logical window shows.
// Visual expectation: the window looks like the canvas at 1:1 logical size,
// transparent regions show a grey checkerboard, and swatches show picked colors.

use crate::gamma::GammaLut;
use pixel_picker::{PixelRatio, RgbaColor};
use image::{Rgba, RgbaImage};

/// Window pixels, 0x00RRGGBB, row-major.
#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }
}

const CHECKER_LIGHT: u32 = 0x00_9A_9A_9A;
const CHECKER_DARK: u32 = 0x00_66_66_66;
const CHECKER_CELL: usize = 8; // logical pixels per checker square

#[inline]
pub fn checker(x: usize, y: usize) -> u32 {
    if ((x / CHECKER_CELL) + (y / CHECKER_CELL)) % 2 == 0 { CHECKER_LIGHT } else { CHECKER_DARK }
}

/// Generated canvas used when no image is configured.
/// Visual: red grows to the right, green grows downward, the bottom quarter fades out
/// so you can see what sampling a translucent pixel gives.
pub fn test_pattern(width: u32, height: u32) -> RgbaImage {
    let fade_from = height - height / 4;
    RgbaImage::from_fn(width, height, |x, y| {
        let r = (x * 255 / width.max(1)) as u8;
        let g = (y * 255 / height.max(1)) as u8;
        let b = if (x / 32 + y / 32) % 2 == 0 { 200 } else { 60 };
        let a = if y < fade_from {
            255
        } else {
            let span = (height - fade_from).max(1);
            (255 - (y - fade_from) * 255 / span) as u8
        };
        Rgba([r, g, b, a])
    })
}

/// Downscale `src` (physical pixels) into `dst` (logical pixels).
/// Each logical pixel averages its `ratio x ratio` physical block in linear light,
/// premultiplied, then lands on the checkerboard.
pub fn downsample_into(src: &RgbaImage, ratio: PixelRatio, dst: &mut FrameBuffer, lut: &GammaLut) {
    let (sw, sh) = src.dimensions();
    let r = ratio.get() as f64;

    for ly in 0..dst.height {
        let y0 = ((ly as f64 * r).floor() as u32).min(sh);
        let y1 = (((ly + 1) as f64 * r).floor() as u32).clamp(y0 + 1, sh.max(y0 + 1));
        for lx in 0..dst.width {
            let x0 = ((lx as f64 * r).floor() as u32).min(sw);
            let x1 = (((lx + 1) as f64 * r).floor() as u32).clamp(x0 + 1, sw.max(x0 + 1));

            let (mut sr, mut sg, mut sb, mut sa, mut n) = (0.0f32, 0.0f32, 0.0f32, 0.0f32, 0u32);
            for py in y0..y1.min(sh) {
                for px in x0..x1.min(sw) {
                    let p = src.get_pixel(px, py).0;
                    let a = p[3] as f32 / 255.0;
                    sr += lut.srgb_u8_to_linear(p[0]) * a;
                    sg += lut.srgb_u8_to_linear(p[1]) * a;
                    sb += lut.srgb_u8_to_linear(p[2]) * a;
                    sa += a;
                    n += 1;
                }
            }

            let bg = checker(lx, ly);
            let idx = ly * dst.width + lx;
            if n == 0 || sa <= 0.0 {
                dst.pixels[idx] = bg; // outside the canvas or fully transparent
                continue;
            }

            // un-premultiply for the straight-alpha composite
            let avg = RgbaColor::new(
                lut.linear_to_srgb_u8(sr / sa),
                lut.linear_to_srgb_u8(sg / sa),
                lut.linear_to_srgb_u8(sb / sa),
                ((sa / n as f32) * 255.0).round().clamp(0.0, 255.0) as u8,
            );
            dst.pixels[idx] = lut.over_0rgb(bg, avg);
        }
    }
}

/// Square swatch with a 1px border. `None` draws an empty (checkerboard) swatch.
/// Visual: the color you are hovering / have committed, over a checkerboard for alpha.
pub fn draw_swatch(fb: &mut FrameBuffer, x: usize, y: usize, size: usize, color: Option<RgbaColor>, lut: &GammaLut) {
    for sy in y..(y + size).min(fb.height) {
        for sx in x..(x + size).min(fb.width) {
            let edge = sy == y || sx == x || sy + 1 == y + size || sx + 1 == x + size;
            let idx = sy * fb.width + sx;
            fb.pixels[idx] = if edge {
                0x00_FF_FF_FF
            } else {
                let bg = checker(sx - x, sy - y);
                color.map_or(bg, |c| lut.over_0rgb(bg, c))
            };
        }
    }
}
