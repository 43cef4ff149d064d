//! Performance monitoring module
//!
//! Contains PerfStats for tracking frame timing.
//! In release builds, all timing methods compile to no-ops for zero overhead.

#[cfg(debug_assertions)]
use std::collections::VecDeque;
#[cfg(debug_assertions)]
use std::time::{Duration, Instant};

#[cfg(debug_assertions)]
pub const PERF_HISTORY_SIZE: usize = 60;

#[cfg(debug_assertions)]
#[derive(Default)]
pub struct PerfStats {
    pub frame_start: Option<Instant>,
    pub last_frame_time: Duration,
    pub frame_times: VecDeque<Duration>,
    pub paint_time: Duration,
    pub present_time: Duration,
    pub frames: u64,
}

#[cfg(not(debug_assertions))]
#[derive(Default)]
pub struct PerfStats;

/// Timer guard that records elapsed time when dropped (debug only)
#[cfg(debug_assertions)]
pub struct TimerGuard<'a> {
    start: Instant,
    target: &'a mut Duration,
}

#[cfg(not(debug_assertions))]
pub struct TimerGuard;

#[cfg(debug_assertions)]
impl<'a> TimerGuard<'a> {
    fn new(target: &'a mut Duration) -> Self {
        Self {
            start: Instant::now(),
            target,
        }
    }
}

#[cfg(debug_assertions)]
impl Drop for TimerGuard<'_> {
    fn drop(&mut self) {
        *self.target = self.start.elapsed();
    }
}

#[cfg(debug_assertions)]
impl PerfStats {
    #[inline(always)]
    pub fn start_frame(&mut self) {
        self.frame_start = Some(Instant::now());
    }

    #[inline(always)]
    pub fn record_frame_time(&mut self) {
        if let Some(start) = self.frame_start.take() {
            self.last_frame_time = start.elapsed();
            self.frame_times.push_back(self.last_frame_time);
            if self.frame_times.len() > PERF_HISTORY_SIZE {
                self.frame_times.pop_front();
            }
            self.frames += 1;
        }
    }

    #[inline(always)]
    pub fn time_paint(&mut self) -> TimerGuard<'_> {
        TimerGuard::new(&mut self.paint_time)
    }

    #[inline(always)]
    pub fn time_present(&mut self) -> TimerGuard<'_> {
        TimerGuard::new(&mut self.present_time)
    }

    pub fn avg_frame_time(&self) -> Duration {
        if self.frame_times.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = self.frame_times.iter().sum();
        total / self.frame_times.len() as u32
    }

    /// Frames per second the render work alone could sustain
    pub fn fps(&self) -> f64 {
        let avg = self.avg_frame_time();
        if avg.as_secs_f64() > 0.0 {
            1.0 / avg.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Log a summary every `PERF_HISTORY_SIZE` frames
    pub fn log_periodically(&self) {
        if self.frames > 0 && self.frames % PERF_HISTORY_SIZE as u64 == 0 {
            tracing::debug!(
                "frame avg {:?} (~{:.0} fps), paint {:?}, present {:?}",
                self.avg_frame_time(),
                self.fps(),
                self.paint_time,
                self.present_time
            );
        }
    }
}

#[cfg(not(debug_assertions))]
impl PerfStats {
    #[inline(always)]
    pub fn start_frame(&mut self) {}

    #[inline(always)]
    pub fn record_frame_time(&mut self) {}

    #[inline(always)]
    pub fn time_paint(&mut self) -> TimerGuard {
        TimerGuard
    }

    #[inline(always)]
    pub fn time_present(&mut self) -> TimerGuard {
        TimerGuard
    }

    #[inline(always)]
    pub fn log_periodically(&self) {}
}
