//! Viewport sizing and device-pixel rasterization tests

mod common;

use common::TestHost;
use squaregrid::view::{Canvas, Frame, Rect};
use squaregrid::viewport::{self, ViewportState};

#[test]
fn test_backing_store_scales_with_device_ratio() {
    let state = viewport::resize(&TestHost::new(800.0, 600.0, 2.0));
    assert_eq!(state.logical_width, 800.0);
    assert_eq!(state.logical_height, 600.0);
    assert_eq!((state.width_px, state.height_px), (1600, 1200));
    assert_eq!(state.scale_factor, 2.0);
}

#[test]
fn test_fractional_ratio_floors_backing_size() {
    let state = viewport::resize(&TestHost::new(333.0, 101.0, 1.5));
    assert_eq!((state.width_px, state.height_px), (499, 151));
}

#[test]
fn test_largest_extent_wins_per_axis() {
    let mut host = TestHost::new(800.0, 600.0, 1.0);
    host.screen = Some((1920.0, 400.0));
    host.document = Some((500.0, 3000.0));
    let state = viewport::resize(&host);
    assert_eq!(state.logical_width, 1920.0);
    assert_eq!(state.logical_height, 3000.0);
}

#[test]
fn test_host_without_sizes_gets_minimal_surface() {
    let host = TestHost {
        visible: None,
        screen: None,
        document: None,
        scale: f64::NAN,
    };
    assert_eq!(viewport::resize(&host), ViewportState::MINIMAL);
}

#[test]
fn test_zero_ratio_falls_back_to_one() {
    let state = viewport::resize(&TestHost::new(10.0, 10.0, 0.0));
    assert_eq!(state.scale_factor, 1.0);
    assert_eq!((state.width_px, state.height_px), (10, 10));
}

#[test]
fn test_apply_sizes_canvas_and_installs_transform() {
    let state = viewport::resize(&TestHost::new(100.0, 50.0, 2.0));
    let mut frame = Frame::new(1, 1);
    viewport::apply(&state, &mut frame);
    assert_eq!(frame.size_px(), (200, 100));
    assert_eq!(frame.scale(), 2.0);
}

#[test]
fn test_unit_square_covers_one_logical_pixel_at_double_ratio() {
    let state = viewport::resize(&TestHost::new(4.0, 4.0, 2.0));
    let mut frame = Frame::new(1, 1);
    viewport::apply(&state, &mut frame);

    frame.fill_rect(Rect::new(1.0, 1.0, 1.0, 1.0), 0xFFFFFFFF);

    let lit: Vec<(usize, usize)> = (0..frame.height())
        .flat_map(|y| (0..frame.width()).map(move |x| (x, y)))
        .filter(|&(x, y)| frame.get_pixel(x, y) == 0xFFFFFFFF)
        .collect();
    assert_eq!(lit, vec![(2, 2), (3, 2), (2, 3), (3, 3)]);
}
