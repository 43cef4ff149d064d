//! Viewport sizing
//!
//! Works out how large the drawing surface must be and at which scale,
//! then configures a [`Canvas`] so that draw calls are issued in logical
//! units while the backing store is at full device resolution.

use crate::view::Canvas;

/// Smallest logical edge used when the host cannot report a size
const FALLBACK_EXTENT: f64 = 1.0;

/// Anything that can report the dimensions the grid must cover
///
/// Every size is in logical (unscaled) pixels. Returning `None` means the
/// host cannot report that particular measurement.
pub trait ViewportSource {
    /// Visible area of the window
    fn visible_size(&self) -> Option<(f64, f64)>;

    /// Full size of the screen the window lives on
    fn screen_size(&self) -> Option<(f64, f64)> {
        None
    }

    /// Full scrollable size of the content drawn over the grid
    fn document_size(&self) -> Option<(f64, f64)> {
        None
    }

    /// Ratio between device pixels and logical pixels
    fn scale_factor(&self) -> f64;
}

/// Derived surface dimensions. Only [`resize`] produces these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    /// Width in logical pixels (draw-call units)
    pub logical_width: f64,
    /// Height in logical pixels (draw-call units)
    pub logical_height: f64,
    /// Backing-store width in device pixels
    pub width_px: u32,
    /// Backing-store height in device pixels
    pub height_px: u32,
    pub scale_factor: f64,
}

impl ViewportState {
    /// A 1x1 surface at scale 1, used before the host has reported anything
    pub const MINIMAL: ViewportState = ViewportState {
        logical_width: FALLBACK_EXTENT,
        logical_height: FALLBACK_EXTENT,
        width_px: 1,
        height_px: 1,
        scale_factor: 1.0,
    };
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::MINIMAL
    }
}

fn usable_extent(value: f64) -> Option<f64> {
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Largest extent reported by any source, per axis
fn covering_extent(sizes: &[Option<(f64, f64)>]) -> (f64, f64) {
    let mut width: Option<f64> = None;
    let mut height: Option<f64> = None;
    for (w, h) in sizes.iter().flatten() {
        if let Some(w) = usable_extent(*w) {
            width = Some(width.map_or(w, |cur| cur.max(w)));
        }
        if let Some(h) = usable_extent(*h) {
            height = Some(height.map_or(h, |cur| cur.max(h)));
        }
    }
    (
        width.unwrap_or(FALLBACK_EXTENT),
        height.unwrap_or(FALLBACK_EXTENT),
    )
}

/// Device pixels for a logical extent, never below one
fn backing_extent(logical: f64, scale: f64) -> u32 {
    let px = (logical * scale).floor();
    if px >= u32::MAX as f64 {
        u32::MAX
    } else {
        (px as u32).max(1)
    }
}

/// Compute the surface the grid needs right now
///
/// The logical size is the maximum of the visible, screen and document
/// sizes so the grid still covers content that scrolls past the window.
pub fn resize(source: &dyn ViewportSource) -> ViewportState {
    let (logical_width, logical_height) = covering_extent(&[
        source.visible_size(),
        source.screen_size(),
        source.document_size(),
    ]);

    let scale_factor = usable_extent(source.scale_factor()).unwrap_or_else(|| {
        tracing::warn!(
            "Host reported unusable scale factor {}, using 1.0",
            source.scale_factor()
        );
        1.0
    });

    let state = ViewportState {
        logical_width,
        logical_height,
        width_px: backing_extent(logical_width, scale_factor),
        height_px: backing_extent(logical_height, scale_factor),
        scale_factor,
    };
    tracing::debug!(
        "Viewport {}x{} logical -> {}x{} px @ {}",
        state.logical_width,
        state.logical_height,
        state.width_px,
        state.height_px,
        state.scale_factor
    );
    state
}

/// Resize the backing surface and install the logical-units transform
///
/// Resizing clears the surface; the caller must repaint afterwards.
pub fn apply(state: &ViewportState, canvas: &mut dyn Canvas) {
    canvas.resize(state.width_px, state.height_px);
    canvas.set_transform(state.scale_factor);
}

/// A fixed-size host, used by the headless tools and tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedViewport {
    pub width: f64,
    pub height: f64,
    pub scale_factor: f64,
}

impl FixedViewport {
    pub fn new(width: f64, height: f64, scale_factor: f64) -> Self {
        Self {
            width,
            height,
            scale_factor,
        }
    }
}

impl ViewportSource for FixedViewport {
    fn visible_size(&self) -> Option<(f64, f64)> {
        Some((self.width, self.height))
    }

    fn scale_factor(&self) -> f64 {
        self.scale_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Blind;

    impl ViewportSource for Blind {
        fn visible_size(&self) -> Option<(f64, f64)> {
            None
        }

        fn scale_factor(&self) -> f64 {
            f64::NAN
        }
    }

    #[test]
    fn test_unreported_host_falls_back_to_one_pixel() {
        assert_eq!(resize(&Blind), ViewportState::MINIMAL);
    }

    #[test]
    fn test_backing_extent_floors() {
        assert_eq!(backing_extent(100.7, 1.0), 100);
        assert_eq!(backing_extent(333.0, 1.5), 499);
        assert_eq!(backing_extent(0.2, 1.0), 1);
    }
}
