//! Render loop lifecycle
//!
//! The loop owns one [`Session`] at a time. `start` subscribes to the three
//! host signals and schedules a repeating frame task; both only enqueue
//! [`Msg`]s. The host then calls [`RenderLoop::pump`] once per frame, which
//! drains the queue through [`update`] and repaints.
//!
//! ```text
//! Idle --start--> Running --tick--> Running --stop--> Cancelled
//!                                                        |
//!                    Running <---------start-------------+
//! ```

use std::sync::mpsc::{self, Receiver, Sender};

use crate::commands::Cmd;
use crate::config::GridConfig;
use crate::messages::Msg;
use crate::model::Session;
use crate::pointer::PointerPosition;
use crate::runtime::scheduler::{CancelHandle, FrameScheduler};
use crate::runtime::signals::{Signal, SignalHub, SignalKind, Subscription};
use crate::update::update;
use crate::view::{paint_grid, Canvas};
use crate::viewport::{self, ViewportSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    Cancelled,
}

/// Resources held only while running
struct Active {
    subscriptions: Vec<Subscription>,
    frame: CancelHandle,
    rx: Receiver<Msg>,
}

/// What one call to [`RenderLoop::pump`] did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PumpOutcome {
    /// Messages applied to the session
    pub messages: usize,
    /// Whether the surface was repainted
    pub repainted: bool,
}

pub struct RenderLoop {
    state: LoopState,
    session: Option<Session>,
    active: Option<Active>,
    sessions_started: u64,
}

impl Default for RenderLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderLoop {
    pub fn new() -> Self {
        Self {
            state: LoopState::Idle,
            session: None,
            active: None,
            sessions_started: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Current session, or the last one after `stop`
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn sessions_started(&self) -> u64 {
        self.sessions_started
    }

    /// Start a fresh session
    ///
    /// Stops the current session first if one is running. The new session
    /// measures the host on its first pump.
    pub fn start(&mut self, config: GridConfig, signals: &SignalHub, frames: &mut FrameScheduler) {
        if self.is_running() {
            tracing::debug!("start() while running, stopping current session first");
            self.stop();
        }

        let (tx, rx) = mpsc::channel();
        let subscriptions = vec![
            subscribe(signals, SignalKind::Resize, &tx, |_| Some(Msg::Resized)),
            subscribe(signals, SignalKind::PointerMove, &tx, |signal| match *signal {
                Signal::PointerMove { x, y } => Some(Msg::PointerMoved(PointerPosition::new(x, y))),
                _ => None,
            }),
            subscribe(signals, SignalKind::PointerLeave, &tx, |_| {
                Some(Msg::PointerLeft)
            }),
        ];

        let tick_tx = tx.clone();
        let frame = frames.schedule(move || {
            let _ = tick_tx.send(Msg::Tick);
        });

        // Size the surface before the first frame is painted
        let _ = tx.send(Msg::Resized);

        tracing::info!(
            "Starting grid session: direction={} speed={} square_size={}",
            config.direction,
            config.effective_speed(),
            config.effective_square_size()
        );
        self.session = Some(Session::new(config));
        self.active = Some(Active {
            subscriptions,
            frame,
            rx,
        });
        self.state = LoopState::Running;
        self.sessions_started += 1;
    }

    /// End the session
    ///
    /// Releases all signal subscriptions, cancels the frame task and drops
    /// any queued messages. Nothing the host does afterwards reaches the
    /// session. Calling it when not running does nothing.
    pub fn stop(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        active.frame.cancel();
        let mut released = 0;
        for subscription in active.subscriptions {
            if subscription.release() {
                released += 1;
            }
        }
        let dropped = active.rx.try_iter().count();

        self.state = LoopState::Cancelled;
        tracing::info!(
            "Stopped grid session after {} frames ({} subscriptions released, {} queued messages dropped)",
            self.session.as_ref().map_or(0, |s| s.frames),
            released,
            dropped
        );
    }

    /// Stop the current session and start a new one with `config`
    pub fn restart(&mut self, config: GridConfig, signals: &SignalHub, frames: &mut FrameScheduler) {
        self.stop();
        self.start(config, signals, frames);
    }

    /// Apply queued messages and repaint if anything asked for it
    ///
    /// With no canvas the session still advances; painting is skipped.
    pub fn pump(
        &mut self,
        host: &dyn ViewportSource,
        mut canvas: Option<&mut dyn Canvas>,
    ) -> PumpOutcome {
        let mut outcome = PumpOutcome::default();
        let (Some(active), Some(session)) = (self.active.as_ref(), self.session.as_mut()) else {
            return outcome;
        };

        let mut needs_redraw = false;
        for msg in active.rx.try_iter() {
            outcome.messages += 1;
            let Some(cmd) = update(session, msg, host) else {
                continue;
            };
            needs_redraw |= cmd.needs_redraw();
            if let Cmd::ResizeSurface(state) = cmd {
                if let Some(canvas) = canvas.as_deref_mut() {
                    viewport::apply(&state, canvas);
                }
            }
        }

        if needs_redraw {
            if let Some(canvas) = canvas {
                // A freshly created surface may not have seen a resize yet
                if canvas.size_px() != (session.viewport.width_px, session.viewport.height_px) {
                    viewport::apply(&session.viewport, canvas);
                }
                paint_grid(canvas, session);
                outcome.repainted = true;
            }
        }
        outcome
    }
}

impl Drop for RenderLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn subscribe(
    signals: &SignalHub,
    kind: SignalKind,
    tx: &Sender<Msg>,
    to_msg: impl Fn(&Signal) -> Option<Msg> + 'static,
) -> Subscription {
    let tx = tx.clone();
    signals.subscribe(kind, move |signal| {
        if let Some(msg) = to_msg(signal) {
            let _ = tx.send(msg);
        }
    })
}
