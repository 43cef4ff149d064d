//! Software frame buffer with a scale transform
//!
//! Draw calls take logical coordinates. The frame multiplies them by its
//! scale and fills every device pixel whose center falls inside the
//! scaled shape, which is how a 2D canvas rasterizes unantialiased
//! rectangles.

use super::{Canvas, Rect};

/// Blend a foreground color onto a background color using alpha compositing.
///
/// Both colors are in ARGB format (0xAARRGGBB). The alpha value from the
/// foreground color determines the blend ratio.
///
/// Returns the blended color with full opacity (alpha = 0xFF).
#[inline]
pub fn blend_colors(bg: u32, fg: u32, alpha: f32) -> u32 {
    let bg_r = ((bg >> 16) & 0xFF) as f32;
    let bg_g = ((bg >> 8) & 0xFF) as f32;
    let bg_b = (bg & 0xFF) as f32;

    let fg_r = ((fg >> 16) & 0xFF) as f32;
    let fg_g = ((fg >> 8) & 0xFF) as f32;
    let fg_b = (fg & 0xFF) as f32;

    let final_r = (bg_r * (1.0 - alpha) + fg_r * alpha) as u32;
    let final_g = (bg_g * (1.0 - alpha) + fg_g * alpha) as u32;
    let final_b = (bg_b * (1.0 - alpha) + fg_b * alpha) as u32;

    0xFF000000 | (final_r << 16) | (final_g << 8) | final_b
}

/// First device pixel (inclusive) or end pixel (exclusive) covered by an edge
#[inline]
fn pixel_edge(device: f64, limit: usize) -> usize {
    let edge = (device - 0.5).ceil();
    if edge <= 0.0 || edge.is_nan() {
        0
    } else {
        (edge as usize).min(limit)
    }
}

/// An owned ARGB pixel buffer implementing [`Canvas`]
///
/// All coordinates passed to drawing methods are logical; out-of-bounds
/// parts are clipped.
#[derive(Debug, Clone)]
pub struct Frame {
    buffer: Vec<u32>,
    width: usize,
    height: usize,
    scale: f64,
}

impl Frame {
    pub fn new(width: u32, height: u32) -> Self {
        let width = width.max(1) as usize;
        let height = height.max(1) as usize;
        Self {
            buffer: vec![0; width * height],
            width,
            height,
            scale: 1.0,
        }
    }

    /// Get the frame width in device pixels
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the frame height in device pixels
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Raw pixels, row-major
    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.buffer
    }

    /// Clear the entire buffer with a solid color
    #[inline]
    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    /// Get a single device pixel (bounds-checked, returns 0 if out of bounds)
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> u32 {
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x]
        } else {
            0
        }
    }

    /// Fill a rectangle in device pixel coordinates (half-open ranges)
    fn fill_device(&mut self, x0: usize, y0: usize, x1: usize, y1: usize, color: u32) {
        let alpha = ((color >> 24) & 0xFF) as f32 / 255.0;
        if alpha <= 0.0 || x0 >= x1 || y0 >= y1 {
            return;
        }

        for y in y0..y1 {
            let row = &mut self.buffer[y * self.width + x0..y * self.width + x1];
            if alpha >= 1.0 {
                row.fill(color);
            } else {
                for px in row.iter_mut() {
                    *px = blend_colors(*px, color, alpha);
                }
            }
        }
    }
}

impl Canvas for Frame {
    fn resize(&mut self, width_px: u32, height_px: u32) {
        let width = width_px.max(1) as usize;
        let height = height_px.max(1) as usize;
        self.width = width;
        self.height = height;
        // Resizing a canvas discards its contents
        self.buffer.clear();
        self.buffer.resize(width * height, 0);
    }

    fn set_transform(&mut self, scale: f64) {
        self.scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            1.0
        };
    }

    fn size_px(&self) -> (u32, u32) {
        (self.width as u32, self.height as u32)
    }

    fn fill_rect(&mut self, rect: Rect, color: u32) {
        if !(rect.width > 0.0 && rect.height > 0.0) {
            return;
        }
        let s = self.scale;
        let x0 = pixel_edge(rect.x * s, self.width);
        let x1 = pixel_edge((rect.x + rect.width) * s, self.width);
        let y0 = pixel_edge(rect.y * s, self.height);
        let y1 = pixel_edge((rect.y + rect.height) * s, self.height);
        self.fill_device(x0, y0, x1, y1, color);
    }
}
