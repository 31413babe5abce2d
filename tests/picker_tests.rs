use pixel_picker::{
    EdgePolicy, Error, FixedStage, PickerSession, PixelRatio, PointerSampler, RasterLayer, RgbaColor, Slot, Stage,
};
use std::cell::RefCell;

/// Raster layer that paints one known pixel and records every read.
struct RecordingLayer {
    width: u32,
    height: u32,
    hot: (i64, i64),
    hot_color: [u8; 4],
    reads: RefCell<Vec<(i64, i64, u32, u32)>>,
}

impl RecordingLayer {
    fn new(width: u32, height: u32, hot: (i64, i64), hot_color: [u8; 4]) -> Self {
        Self { width, height, hot, hot_color, reads: RefCell::new(Vec::new()) }
    }

    fn reads(&self) -> Vec<(i64, i64, u32, u32)> {
        self.reads.borrow().clone()
    }
}

impl RasterLayer for RecordingLayer {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn read_pixels(&self, x: i64, y: i64, width: u32, height: u32) -> Result<Vec<u8>, Error> {
        self.reads.borrow_mut().push((x, y, width, height));
        if (x, y) == self.hot { Ok(self.hot_color.to_vec()) } else { Ok(vec![9, 9, 9, 255]) }
    }
}

struct FailingLayer;

impl RasterLayer for FailingLayer {
    fn size(&self) -> (u32, u32) {
        (100, 100)
    }

    fn read_pixels(&self, _: i64, _: i64, _: u32, _: u32) -> Result<Vec<u8>, Error> {
        Err(Error::PixelRead("context lost".into()))
    }
}

fn sampler(ratio: f32) -> PointerSampler {
    PointerSampler::new(PixelRatio::new(ratio).unwrap(), EdgePolicy::Transparent)
}

#[test]
fn reads_exactly_the_scaled_coordinate() {
    // (ratio, logical x, logical y, physical x, physical y)
    let cases = [
        (1.0, 0.0, 0.0, 0, 0),
        (1.0, 7.0, 3.0, 7, 3),
        (2.0, 10.0, 20.0, 20, 40),
        (3.0, 4.0, 5.0, 12, 15),
        (1.5, 6.0, 2.0, 9, 3),
        // not exact in binary
        (0.9, 10.0, 20.0, 9, 18),
        (1.1, 10.0, 20.0, 11, 22),
        (1.15, 20.0, 40.0, 23, 46),
    ];
    for (ratio, x, y, px, py) in cases {
        let layer = RecordingLayer::new(200, 200, (-1, -1), [0; 4]);
        sampler(ratio).sample(Some(&FixedStage::at(x, y)), Some(&layer)).unwrap();

        assert_eq!(layer.reads(), vec![(px, py, 1, 1)], "ratio {ratio} at ({x},{y})");
    }
}

#[test]
fn idle_conditions_are_no_ops_and_keep_the_preview() {
    let layer = RecordingLayer::new(50, 50, (5, 5), [1, 2, 3, 4]);
    let stage = FixedStage::at(5.0, 5.0);
    let mut session = PickerSession::new(sampler(1.0));

    session.on_pointer_move(Some(&stage), Some(&layer)).unwrap();
    let before = session.controller.state();
    assert_eq!(before.preview, Slot::Set(RgbaColor::new(1, 2, 3, 4)));

    let no_pointer = FixedStage::empty();
    let (l, s, np): (&dyn RasterLayer, &dyn Stage, &dyn Stage) = (&layer, &stage, &no_pointer);
    let idle = [(None, Some(l)), (Some(s), None), (Some(np), Some(l))];
    for (s, l) in idle {
        assert_eq!(session.on_pointer_move(s, l).unwrap(), None);
        assert_eq!(session.controller.state(), before);
    }
    assert_eq!(layer.reads().len(), 1);
}

#[test]
fn commit_before_any_sample_leaves_committed_unset() {
    let mut session = PickerSession::new(sampler(1.0));
    session.on_pointer_move(Some(&FixedStage::empty()), Some(&FailingLayer)).unwrap();
    assert_eq!(session.on_commit(), None);
    assert_eq!(session.controller.state().committed, Slot::Unset);
}

#[test]
fn retina_scenario_samples_then_commits() {
    let layer = RecordingLayer::new(100, 100, (20, 40), [255, 0, 128, 255]);
    let mut session = PickerSession::new(sampler(2.0));

    let picked = session.on_pointer_move(Some(&FixedStage::at(10.0, 20.0)), Some(&layer)).unwrap();
    assert_eq!(picked, Some(RgbaColor { r: 255, g: 0, b: 128, a: 255 }));

    assert_eq!(session.on_commit(), Some(RgbaColor::new(255, 0, 128, 255)));
    assert_eq!(session.on_commit(), Some(RgbaColor::new(255, 0, 128, 255)));
    assert_eq!(session.controller.committed(), Some(RgbaColor::new(255, 0, 128, 255)));
}

#[test]
fn negative_physical_coordinate_is_transparent_black() {
    let layer = RecordingLayer::new(100, 100, (0, 0), [255, 255, 255, 255]);
    // -0.5 * 2 = -1
    let picked = sampler(2.0).sample(Some(&FixedStage::at(-0.5, 2.5)), Some(&layer)).unwrap();
    assert_eq!(picked, Some(RgbaColor::new(0, 0, 0, 0)));
    assert!(layer.reads().is_empty());
}

#[test]
fn broken_surface_is_reported_not_swallowed() {
    let mut session = PickerSession::new(sampler(1.0));
    let err = session.on_pointer_move(Some(&FixedStage::at(1.0, 1.0)), Some(&FailingLayer)).unwrap_err();
    assert!(matches!(err, Error::PixelRead(_)));
    assert_eq!(session.controller.state().preview, Slot::Unset);
}
