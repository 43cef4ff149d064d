use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{Context as _, Result};
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{Window, WindowId};

use crate::cli::StartupConfig;
use crate::config::GridConfig;
use crate::perf::PerfStats;
use crate::render_loop::RenderLoop;
use crate::view::{Canvas, Renderer};
use crate::viewport::{FixedViewport, ViewportSource};

use super::config_watcher::ConfigWatcher;
use super::scheduler::FrameScheduler;
use super::signals::{Signal, SignalHub};

/// Frame pacing for the render loop, roughly one display refresh
const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

/// Sizes reported by a live window, in logical pixels
struct WindowHost<'a> {
    window: &'a Window,
}

impl ViewportSource for WindowHost<'_> {
    fn visible_size(&self) -> Option<(f64, f64)> {
        let size = self.window.inner_size();
        if size.width == 0 || size.height == 0 {
            // Minimized
            return None;
        }
        let logical: LogicalSize<f64> = size.to_logical(self.window.scale_factor());
        Some((logical.width, logical.height))
    }

    fn scale_factor(&self) -> f64 {
        self.window.scale_factor()
    }
}

pub struct App {
    startup: StartupConfig,
    config: GridConfig,
    signals: SignalHub,
    frames: FrameScheduler,
    render_loop: RenderLoop,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    watcher: Option<ConfigWatcher>,
    next_frame: Instant,
    perf: PerfStats,
}

impl App {
    pub fn new(startup: StartupConfig) -> Self {
        let config = startup.load_grid_config();

        let watcher = match (&startup.config_path, startup.watch_config) {
            (Some(path), true) => match ConfigWatcher::new(path.clone()) {
                Ok(watcher) => Some(watcher),
                Err(e) => {
                    tracing::warn!("Config reload disabled: {}", e);
                    None
                }
            },
            _ => None,
        };

        Self {
            startup,
            config,
            signals: SignalHub::new(),
            frames: FrameScheduler::new(),
            render_loop: RenderLoop::new(),
            renderer: None,
            window: None,
            context: None,
            watcher,
            next_frame: Instant::now(),
            perf: PerfStats::default(),
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attributes = Window::default_attributes()
            .with_title("squaregrid")
            .with_inner_size(LogicalSize::new(800, 600));

        let window = Rc::new(
            event_loop
                .create_window(window_attributes)
                .context("Failed to create window")?,
        );
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create softbuffer context: {}", e))?;
        let renderer = Renderer::new(Rc::clone(&window), &context)?;

        self.renderer = Some(renderer);
        self.window = Some(window);
        self.context = Some(context);
        Ok(())
    }

    /// Restart the session if the config file now says something different
    fn reload_config(&mut self) {
        let next = self.startup.load_grid_config();
        if next == self.config {
            tracing::debug!("Config file changed but grid settings are the same");
            return;
        }

        tracing::info!("Grid config changed, restarting session");
        self.config = next;
        self.render_loop
            .restart(self.config.clone(), &self.signals, &mut self.frames);
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    /// Advance and paint one frame
    fn frame(&mut self) {
        self.perf.start_frame();
        self.frames.run_frame();

        let fallback = FixedViewport::new(1.0, 1.0, 1.0);
        let window_host = self.window.as_deref().map(|window| WindowHost { window });
        let outcome = {
            let _timer = self.perf.time_paint();
            let host: &dyn ViewportSource = match &window_host {
                Some(host) => host,
                None => &fallback,
            };
            let canvas = self
                .renderer
                .as_mut()
                .map(|renderer| renderer.canvas() as &mut dyn Canvas);
            self.render_loop.pump(host, canvas)
        };

        if outcome.repainted {
            if let Some(renderer) = &mut self.renderer {
                let _timer = self.perf.time_present();
                // A failed present costs one frame; the loop keeps going
                if let Err(e) = renderer.present() {
                    tracing::error!("Present failed: {:#}", e);
                }
            }
        }

        self.perf.record_frame_time();
        self.perf.log_periodically();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init_window(event_loop) {
                tracing::error!("{:#}", e);
                event_loop.exit();
                return;
            }
        }

        if !self.render_loop.is_running() {
            self.render_loop
                .start(self.config.clone(), &self.signals, &mut self.frames);
        }
        // The renderer may be new; have the session re-measure it
        self.signals.dispatch(Signal::Resize);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let Some(window) = self.window.clone() else {
            return;
        };
        if window.id() != window_id {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                self.render_loop.stop();
                event_loop.exit();
            }
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                self.signals.dispatch(Signal::Resize);
                window.request_redraw();
            }
            WindowEvent::CursorMoved { position, .. } => {
                // winit reports window-relative physical pixels
                let logical = position.to_logical::<f64>(window.scale_factor());
                self.signals.dispatch(Signal::PointerMove {
                    x: logical.x,
                    y: logical.y,
                });
            }
            WindowEvent::CursorLeft { .. } => {
                self.signals.dispatch(Signal::PointerLeave);
            }
            WindowEvent::RedrawRequested => self.frame(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.watcher.as_ref().is_some_and(|w| w.poll_changed()) {
            self.reload_config();
        }

        if !self.frames.has_pending() {
            event_loop.set_control_flow(ControlFlow::Wait);
            return;
        }

        let now = Instant::now();
        if now >= self.next_frame {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
            self.next_frame = now + FRAME_INTERVAL;
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.render_loop.stop();
    }
}
