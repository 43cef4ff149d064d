//! Session state
//!
//! A [`Session`] is everything one run of the render loop knows: the
//! configuration it was started with, the derived viewport, the scroll
//! offset and the pointer state. It is owned exclusively by the render
//! loop and only changed through [`crate::update::update`].

use crate::config::GridConfig;
use crate::offset::GridOffset;
use crate::pointer::{HoveredCell, PointerPosition};
use crate::theme::Palette;
use crate::viewport::ViewportState;

#[derive(Debug, Clone)]
pub struct Session {
    config: GridConfig,
    palette: Palette,
    pub viewport: ViewportState,
    pub offset: GridOffset,
    pub hovered: HoveredCell,
    pub pointer: PointerPosition,
    /// Frames advanced since the session started
    pub frames: u64,
}

impl Session {
    /// Fresh session: offset at the origin, no pointer
    pub fn new(config: GridConfig) -> Self {
        let palette = Palette::from_config(&config);
        Self {
            config,
            palette,
            viewport: ViewportState::MINIMAL,
            offset: GridOffset::ORIGIN,
            hovered: HoveredCell::None,
            pointer: PointerPosition::OUTSIDE,
            frames: 0,
        }
    }

    /// Configuration this session was started with. Never changes.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Cell edge used for layout and hit-testing
    pub fn square_size(&self) -> f64 {
        self.config.effective_square_size()
    }
}
