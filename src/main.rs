// What you SEE:
// • The canvas (your image, or a generated test pattern) at logical size.
// • Move the mouse: the PREVIEW swatch follows the pixel under the crosshair.
// • Left click: the PICKED swatch takes the preview color. ESC quits.
//
// Env: PICKER_PIXEL_RATIO, PICKER_EDGE_POLICY, PICKER_IMAGE (see config.rs).

mod draw;
mod gamma;
mod view;

use draw::{draw_crosshair, draw_text_5x7, Drawer};
use gamma::GammaLut;
use pixel_picker::config::PickerConfig;
use view::{downsample_into, draw_swatch, test_pattern, FrameBuffer};
use pixel_picker::{Error, ImageLayer, PickerSession, PointerSampler, RasterLayer, RgbaColor};

const SWATCH: usize = 24;
const HUD_COLOR: u32 = 0x00_FF_FF_FF;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let cfg = PickerConfig::from_env()?;
    let ratio = cfg.pixel_ratio.get();

    /* --- Raster layer (physical pixels) ---
       Visual: nothing yet; this is the buffer we sample from. */
    let layer = match &cfg.image {
        Some(path) => ImageLayer::open(path)?,
        None => {
            let w = (cfg.window_width as f32 * ratio).ceil() as u32;
            let h = (cfg.window_height as f32 * ratio).ceil() as u32;
            ImageLayer::new(test_pattern(w, h))
        }
    };
    let (pw, ph) = layer.size();
    let lw = ((pw as f32 / ratio).ceil() as usize).max(1);
    let lh = ((ph as f32 / ratio).ceil() as usize).max(1);

    /* --- Window = stage ---
       Visual: window opens at the logical canvas size. */
    let mut drawer = Drawer::new("Pixel Picker", lw, lh)?;

    /* --- What the canvas looks like at logical size (built once) ---
       Visual: the image, downscaled gamma-correctly, over a checkerboard. */
    let lut = GammaLut::new();
    let mut base = FrameBuffer::new(lw, lh);
    downsample_into(layer.image(), cfg.pixel_ratio, &mut base, &lut);
    let mut screen = base.clone();

    let mut session = PickerSession::new(PointerSampler::new(cfg.pixel_ratio, cfg.edge_policy));
    tracing::info!(
        physical = ?(pw, ph),
        logical = ?(lw, lh),
        ratio = session.sampler.ratio().get(),
        policy = ?session.sampler.policy(),
        "canvas ready"
    );

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        /* 1) Pointer move -> sample -> preview.
           Visual: PREVIEW swatch follows the cursor; off-window keeps the last one. */
        session.on_pointer_move(Some(&drawer), Some(&layer))?;

        /* 2) Click -> commit.
           Visual: PICKED swatch changes to the preview color. */
        if drawer.left_clicked() {
            session.on_commit();
        }

        /* 3) Canvas, crosshair, HUD */
        screen.pixels.copy_from_slice(&base.pixels);

        if let Some((mx, my)) = drawer.mouse_pos() {
            draw_crosshair(&mut screen, mx as i32, my as i32, 10, 0x00_FF_CC_33);
        }

        let state = session.controller.state();
        draw_hud_row(&mut screen, 8, "PREVIEW", state.preview.color(), &lut);
        draw_hud_row(&mut screen, 8 + SWATCH + 6, "PICKED", state.committed.color(), &lut);
        draw_text_5x7(&mut screen, 8, (8 + 2 * (SWATCH + 6)) as i32, &format!("RATIO {:.2}", session.sampler.ratio().get()), HUD_COLOR);

        /* 4) Present to the window. */
        drawer.present(&screen)?;
    }

    Ok(())
}

/// Swatch + label + hex, e.g. `[■] PREVIEW #FF0080FF`.
fn draw_hud_row(fb: &mut FrameBuffer, y: usize, label: &str, color: Option<RgbaColor>, lut: &GammaLut) {
    draw_swatch(fb, 8, y, SWATCH, color, lut);
    let hex = color.map_or_else(|| "NONE".to_string(), |c| c.to_hex());
    let text_y = (y + (SWATCH - 7) / 2) as i32;
    draw_text_5x7(fb, (8 + SWATCH + 6) as i32, text_y, &format!("{label} {hex}"), HUD_COLOR);
}
