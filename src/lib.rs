//! Pointer-driven color picking over a raster layer.
//!
//! The host feeds pointer moves and clicks into a [`session::PickerSession`];
//! the sampler reads the pixel under the pointer and the preview controller
//! keeps the live color apart from the committed one.

pub mod config;
pub mod error;
pub mod preview;
pub mod sampler;
pub mod session;
pub mod surface;
pub mod types;

pub use error::Error;
pub use preview::{ColorListener, ColorPickerState, ColorPreviewController, Slot};
pub use sampler::{EdgePolicy, PointerSampler};
pub use session::PickerSession;
pub use surface::{FixedStage, ImageLayer, RasterLayer, Stage};
pub use types::{PixelRatio, PointerPosition, RgbaColor};
