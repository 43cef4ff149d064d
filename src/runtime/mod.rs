//! Runtime module - scheduling, host signals and winit integration
//!
//! - `scheduler` - cancellable repeating frame tasks
//! - `signals` - host signal subscriptions
//! - `config_watcher` - live reload of `config.yaml`
//! - `app` - ApplicationHandler and window management

pub mod app;
pub mod config_watcher;
pub mod scheduler;
pub mod signals;

pub use app::App;
pub use scheduler::{CancelHandle, FrameScheduler};
pub use signals::{Signal, SignalHub, SignalKind, Subscription};
