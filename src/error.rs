// One error type for the whole crate.
// Every variant states *where* things went wrong.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Creating the window failed
    #[error("Window init error: {0}")]
    WindowInit(String),
    /// Updating the window buffer failed
    #[error("Window update error: {0}")]
    WindowUpdate(String),
    /// Opening/decoding the raster image failed
    #[error("Image load error: {0}")]
    ImageLoad(String),
    /// The raster layer could not hand back pixels. Fatal for the sampling session:
    /// it means the surface is broken, not that the pointer is idle.
    #[error("Pixel read error: {0}")]
    PixelRead(String),
    #[error("Invalid pixel ratio: {0} (must be finite and > 0)")]
    InvalidPixelRatio(f32),
    #[error("Config error: {0}")]
    Config(String),
}
