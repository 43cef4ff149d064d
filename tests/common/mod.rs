//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use squaregrid::config::{Direction, GridConfig};
use squaregrid::view::{Canvas, Rect};
use squaregrid::viewport::ViewportSource;

/// Canvas that records draw calls instead of rasterizing them
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub size: (u32, u32),
    pub scale: f64,
    pub resizes: usize,
    pub fills: Vec<(Rect, u32)>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self {
            size: (1, 1),
            scale: 1.0,
            ..Self::default()
        }
    }

    pub fn fills_with(&self, color: u32) -> Vec<Rect> {
        self.fills
            .iter()
            .filter(|(_, c)| *c == color)
            .map(|(r, _)| *r)
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn resize(&mut self, width_px: u32, height_px: u32) {
        self.size = (width_px, height_px);
        self.resizes += 1;
        self.fills.clear();
    }

    fn set_transform(&mut self, scale: f64) {
        self.scale = scale;
    }

    fn size_px(&self) -> (u32, u32) {
        self.size
    }

    fn fill_rect(&mut self, rect: Rect, color: u32) {
        self.fills.push((rect, color));
    }
}

/// Canvas that panics on the first fill, like a host whose surface fails mid-frame
#[derive(Debug, Default)]
pub struct PanickingCanvas {
    pub size: (u32, u32),
}

impl Canvas for PanickingCanvas {
    fn resize(&mut self, width_px: u32, height_px: u32) {
        self.size = (width_px, height_px);
    }

    fn set_transform(&mut self, _scale: f64) {}

    fn size_px(&self) -> (u32, u32) {
        self.size
    }

    fn fill_rect(&mut self, _rect: Rect, _color: u32) {
        panic!("surface lost while painting");
    }
}

/// Host whose reported sizes can be changed between signals
#[derive(Debug, Clone, Copy)]
pub struct TestHost {
    pub visible: Option<(f64, f64)>,
    pub screen: Option<(f64, f64)>,
    pub document: Option<(f64, f64)>,
    pub scale: f64,
}

impl TestHost {
    pub fn new(width: f64, height: f64, scale: f64) -> Self {
        Self {
            visible: Some((width, height)),
            screen: None,
            document: None,
            scale,
        }
    }
}

impl ViewportSource for TestHost {
    fn visible_size(&self) -> Option<(f64, f64)> {
        self.visible
    }

    fn screen_size(&self) -> Option<(f64, f64)> {
        self.screen
    }

    fn document_size(&self) -> Option<(f64, f64)> {
        self.document
    }

    fn scale_factor(&self) -> f64 {
        self.scale
    }
}

pub fn config(direction: Direction, speed: f64, square_size: f64) -> GridConfig {
    GridConfig {
        direction,
        speed,
        square_size,
        ..GridConfig::default()
    }
}
