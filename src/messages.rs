//! Message types for the Elm-style architecture
//!
//! Host signals and frame ticks are turned into these messages and queued
//! for the running session. All session state changes flow through them.

use crate::pointer::PointerPosition;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Msg {
    /// The host size may have changed; re-query it
    Resized,
    /// Pointer moved to a surface-relative position
    PointerMoved(PointerPosition),
    /// Pointer left the surface
    PointerLeft,
    /// One frame elapsed
    Tick,
}
