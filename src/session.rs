// What the host calls: one method per UI event, handled in the order they arrive.

use crate::error::Error;
use crate::preview::{ColorListener, ColorPreviewController};
use crate::sampler::PointerSampler;
use crate::surface::{RasterLayer, Stage};
use crate::types::RgbaColor;

pub struct PickerSession {
    pub sampler: PointerSampler,
    pub controller: ColorPreviewController,
}

impl PickerSession {
    pub fn new(sampler: PointerSampler) -> Self {
        Self { sampler, controller: ColorPreviewController::new() }
    }

    pub fn with_listener(sampler: PointerSampler, listener: Box<dyn ColorListener>) -> Self {
        Self { sampler, controller: ColorPreviewController::with_listener(listener) }
    }

    /// Pointer moved: sample and, if that produced a color, publish it as the preview.
    /// An idle sample leaves the previous preview in place.
    pub fn on_pointer_move(
        &mut self,
        stage: Option<&dyn Stage>,
        layer: Option<&dyn RasterLayer>,
    ) -> Result<Option<RgbaColor>, Error> {
        let sampled = self.sampler.sample(stage, layer)?;
        if let Some(color) = sampled {
            self.controller.update_preview(color);
        }
        Ok(sampled)
    }

    /// User confirmed (click): adopt the current preview.
    pub fn on_commit(&mut self) -> Option<RgbaColor> {
        self.controller.commit()
    }
}
