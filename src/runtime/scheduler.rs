//! Cancellable repeating frame tasks
//!
//! A task scheduled here runs once per frame until its [`CancelHandle`] is
//! cancelled. The host drives it by calling [`FrameScheduler::run_frame`]
//! whenever it gets a frame callback (for winit, on `RedrawRequested`).

use std::cell::Cell;
use std::rc::Rc;

/// Handle to a scheduled task
///
/// Cancelling is idempotent and takes effect immediately: once `cancel`
/// returns, the task is never invoked again.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    cancelled: Rc<Cell<bool>>,
}

impl CancelHandle {
    fn new() -> Self {
        Self {
            cancelled: Rc::new(Cell::new(false)),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

struct ScheduledTask {
    handle: CancelHandle,
    callback: Box<dyn FnMut()>,
}

/// Runs every live task once per frame
#[derive(Default)]
pub struct FrameScheduler {
    tasks: Vec<ScheduledTask>,
    frames: u64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `callback` to run on every frame until cancelled
    #[must_use = "dropping the handle makes the task impossible to cancel"]
    pub fn schedule(&mut self, callback: impl FnMut() + 'static) -> CancelHandle {
        let handle = CancelHandle::new();
        self.tasks.push(ScheduledTask {
            handle: handle.clone(),
            callback: Box::new(callback),
        });
        tracing::trace!("Scheduled frame task ({} live)", self.live_tasks());
        handle
    }

    /// Invoke every live task once, dropping cancelled ones
    ///
    /// Returns how many tasks ran.
    pub fn run_frame(&mut self) -> usize {
        self.tasks.retain(|task| !task.handle.is_cancelled());
        if self.tasks.is_empty() {
            return 0;
        }

        self.frames += 1;
        let mut ran = 0;
        for task in &mut self.tasks {
            // An earlier callback in this frame may have cancelled this one
            if task.handle.is_cancelled() {
                continue;
            }
            (task.callback)();
            ran += 1;
        }
        ran
    }

    /// Whether the host should keep delivering frames
    pub fn has_pending(&self) -> bool {
        self.tasks.iter().any(|task| !task.handle.is_cancelled())
    }

    pub fn live_tasks(&self) -> usize {
        self.tasks
            .iter()
            .filter(|task| !task.handle.is_cancelled())
            .count()
    }

    /// Frames in which at least one task ran
    pub fn frames_run(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_repeats_until_cancelled() {
        let mut scheduler = FrameScheduler::new();
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let handle = scheduler.schedule(move || counter.set(counter.get() + 1));

        scheduler.run_frame();
        scheduler.run_frame();
        assert_eq!(count.get(), 2);

        handle.cancel();
        handle.cancel();
        assert_eq!(scheduler.run_frame(), 0);
        assert_eq!(count.get(), 2);
        assert!(!scheduler.has_pending());
    }

    #[test]
    fn test_cancel_one_of_many() {
        let mut scheduler = FrameScheduler::new();
        let a = scheduler.schedule(|| {});
        let _b = scheduler.schedule(|| {});
        assert_eq!(scheduler.live_tasks(), 2);

        a.cancel();
        assert_eq!(scheduler.live_tasks(), 1);
        assert_eq!(scheduler.run_frame(), 1);
        assert_eq!(scheduler.frames_run(), 1);
    }
}
