//! View module - drawing surfaces and grid painting
//!
//! Contains the [`Canvas`] abstraction, the software [`Frame`], the grid
//! painter and the softbuffer-backed [`Renderer`] for windows.

pub mod frame;
pub mod grid;

pub use frame::Frame;
pub use grid::{paint_grid, visible_cells, GridCell};

use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::Result;
use softbuffer::Surface;
use winit::window::Window;

/// Axis-aligned rectangle in logical units
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A pixel-addressable 2D drawing surface
///
/// Coordinates are logical units; the surface maps them to device pixels
/// through a pure scale set with [`Canvas::set_transform`]. Colors are ARGB.
pub trait Canvas {
    /// Resize the backing store to `width_px` x `height_px` device pixels.
    /// Resizing clears the contents.
    fn resize(&mut self, width_px: u32, height_px: u32);

    /// Replace the current transform with a uniform scale
    fn set_transform(&mut self, scale: f64);

    /// Backing store size in device pixels
    fn size_px(&self) -> (u32, u32);

    fn fill_rect(&mut self, rect: Rect, color: u32);

    /// Stroke the outline of `rect` with a line centered on its edges
    ///
    /// Offsetting the rect by half the line width puts the line exactly on
    /// a pixel row, giving a crisp line at any scale.
    fn stroke_rect(&mut self, rect: Rect, color: u32, line_width: f64) {
        if !(line_width > 0.0) {
            return;
        }
        let half = line_width / 2.0;
        let Rect {
            x,
            y,
            width,
            height,
        } = rect;
        // Top and bottom span the full outer width, sides fill the gap between
        self.fill_rect(Rect::new(x - half, y - half, width + line_width, line_width), color);
        self.fill_rect(
            Rect::new(x - half, y + height - half, width + line_width, line_width),
            color,
        );
        let inner = height - line_width;
        if inner > 0.0 {
            self.fill_rect(Rect::new(x - half, y + half, line_width, inner), color);
            self.fill_rect(Rect::new(x + width - half, y + half, line_width, inner), color);
        }
    }
}

/// Presents a [`Frame`] to a window through softbuffer
///
/// Softbuffer doesn't guarantee buffer contents are preserved between
/// frames, so the grid is painted into a persistent back buffer and copied
/// to the surface on present.
pub struct Renderer {
    window: Rc<Window>,
    surface: Surface<Rc<Window>, Rc<Window>>,
    back_buffer: Frame,
    surface_size: (u32, u32),
}

impl Renderer {
    pub fn new(window: Rc<Window>, context: &softbuffer::Context<Rc<Window>>) -> Result<Self> {
        let surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;
        let size = window.inner_size();

        Ok(Self {
            window,
            surface,
            back_buffer: Frame::new(size.width, size.height),
            surface_size: (0, 0),
        })
    }

    /// Back buffer the grid is painted into
    pub fn canvas(&mut self) -> &mut Frame {
        &mut self.back_buffer
    }

    /// Copy the back buffer to the window and present it
    ///
    /// Where the back buffer and the window differ in size, the overlapping
    /// top-left region is copied and the rest is left black.
    pub fn present(&mut self) -> Result<()> {
        let size = self.window.inner_size();
        let (width, height) = (size.width.max(1), size.height.max(1));

        if self.surface_size != (width, height) {
            let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
                return Ok(());
            };
            self.surface
                .resize(w, h)
                .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;
            self.surface_size = (width, height);
        }

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get surface buffer: {}", e))?;

        let dst_width = width as usize;
        let src_width = self.back_buffer.width();
        let copy_width = dst_width.min(src_width);
        let copy_rows = (height as usize).min(self.back_buffer.height());
        let src = self.back_buffer.pixels();

        if copy_width < dst_width || copy_rows < height as usize {
            buffer.fill(0);
        }
        for row in 0..copy_rows {
            buffer[row * dst_width..row * dst_width + copy_width]
                .copy_from_slice(&src[row * src_width..row * src_width + copy_width]);
        }

        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;
        Ok(())
    }
}
