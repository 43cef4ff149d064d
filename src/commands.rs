//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use crate::viewport::ViewportState;

#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// Repaint the surface
    Redraw,
    /// Resize the backing surface, then repaint it
    ResizeSurface(ViewportState),
}

impl Cmd {
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::Redraw => true,
            // Resizing clears the surface, so it always needs a repaint
            Cmd::ResizeSurface(_) => true,
        }
    }
}
