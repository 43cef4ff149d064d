//! squaregrid - an animated background grid
//!
//! This crate renders a tiled grid that scrolls along a configurable
//! direction and highlights the cell under the pointer. The core is a
//! small Elm-style loop: host signals become messages, [`update`] applies
//! them to a [`Session`], and the view paints the session onto a canvas.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod model;
pub mod offset;
pub mod perf;
pub mod pointer;
pub mod render_loop;
pub mod runtime;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod view;
pub mod viewport;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::{Direction, GridConfig};
pub use messages::Msg;
pub use model::Session;
pub use render_loop::{LoopState, RenderLoop};
pub use theme::Color;
pub use update::update;
