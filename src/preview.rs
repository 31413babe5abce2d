// Preview vs committed color.
// `preview` follows the pointer; `committed` only changes when the user clicks.

use crate::types::RgbaColor;
use tracing::info;

/// One color slot. Starts `Unset`, never goes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Slot {
    #[default]
    Unset,
    Set(RgbaColor),
}

impl Slot {
    pub fn color(&self) -> Option<RgbaColor> {
        match self {
            Slot::Unset => None,
            Slot::Set(c) => Some(*c),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorPickerState {
    pub preview: Slot,
    pub committed: Slot,
}

/// Receives picker updates, e.g. to set the active paint color.
pub trait ColorListener {
    fn on_preview_update(&mut self, _color: RgbaColor) {}
    fn on_commit(&mut self, _color: RgbaColor) {}
}

/// Sole owner of [`ColorPickerState`].
#[derive(Default)]
pub struct ColorPreviewController {
    state: ColorPickerState,
    listener: Option<Box<dyn ColorListener>>,
}

impl ColorPreviewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listener(listener: Box<dyn ColorListener>) -> Self {
        Self { state: ColorPickerState::default(), listener: Some(listener) }
    }

    pub fn state(&self) -> ColorPickerState {
        self.state
    }

    pub fn preview(&self) -> Option<RgbaColor> {
        self.state.preview.color()
    }

    pub fn committed(&self) -> Option<RgbaColor> {
        self.state.committed.color()
    }

    /// Overwrite the preview. Only call this with a real sample.
    pub fn update_preview(&mut self, color: RgbaColor) {
        self.state.preview = Slot::Set(color);
        if let Some(l) = self.listener.as_mut() {
            l.on_preview_update(color);
        }
    }

    /// Copy preview into committed. No-op while preview is unset.
    /// Returns the committed color when something was copied.
    pub fn commit(&mut self) -> Option<RgbaColor> {
        let color = self.state.preview.color()?;
        self.state.committed = Slot::Set(color);
        info!(color = %color.to_hex(), "color committed");
        if let Some(l) = self.listener.as_mut() {
            l.on_commit(color);
        }
        Some(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Log {
        previews: Vec<RgbaColor>,
        commits: Vec<RgbaColor>,
    }

    struct Recorder(Rc<RefCell<Log>>);

    impl ColorListener for Recorder {
        fn on_preview_update(&mut self, color: RgbaColor) {
            self.0.borrow_mut().previews.push(color);
        }
        fn on_commit(&mut self, color: RgbaColor) {
            self.0.borrow_mut().commits.push(color);
        }
    }

    const RED: RgbaColor = RgbaColor::new(255, 0, 0, 255);
    const BLUE: RgbaColor = RgbaColor::new(0, 0, 255, 255);

    #[test]
    fn starts_unset() {
        let c = ColorPreviewController::new();
        assert_eq!(c.state(), ColorPickerState { preview: Slot::Unset, committed: Slot::Unset });
    }

    #[test]
    fn last_preview_wins() {
        let mut c = ColorPreviewController::new();
        c.update_preview(RED);
        c.update_preview(BLUE);
        assert_eq!(c.preview(), Some(BLUE));
        assert_eq!(c.committed(), None);
    }

    #[test]
    fn commit_without_preview_is_a_no_op() {
        let mut c = ColorPreviewController::new();
        assert_eq!(c.commit(), None);
        assert_eq!(c.state().committed, Slot::Unset);
    }

    #[test]
    fn commit_copies_and_is_idempotent() {
        let mut c = ColorPreviewController::new();
        c.update_preview(RED);
        assert_eq!(c.commit(), Some(RED));
        assert_eq!(c.commit(), Some(RED));
        assert_eq!(c.committed(), Some(RED));

        // preview moves on, committed stays until the next commit
        c.update_preview(BLUE);
        assert_eq!(c.committed(), Some(RED));
        c.commit();
        assert_eq!(c.committed(), Some(BLUE));
    }

    #[test]
    fn listener_sees_every_update_and_real_commits_only() {
        let log = Rc::new(RefCell::new(Log::default()));
        let mut c = ColorPreviewController::with_listener(Box::new(Recorder(log.clone())));

        c.commit(); // nothing to commit yet
        c.update_preview(RED);
        c.update_preview(BLUE);
        c.commit();

        let log = log.borrow();
        assert_eq!(log.previews, vec![RED, BLUE]);
        assert_eq!(log.commits, vec![BLUE]);
    }
}
