//! Frame timing: the process-wide animation clock and an FPS tracker.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Monotonic animation clock, started once and never paused
pub struct FrameClock {
    start: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Seconds since the clock started
    pub fn elapsed_secs(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Rolling frame-rate statistics, reported once a second
pub struct FpsTracker {
    frame_times: VecDeque<Duration>,
    window: usize,
    last_frame: Instant,
    last_report: Instant,
    min_fps: f32,
    max_fps: f32,
}

impl FpsTracker {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame_times: VecDeque::new(),
            window: 60,
            last_frame: now,
            last_report: now,
            min_fps: f32::MAX,
            max_fps: 0.0,
        }
    }

    /// Record a finished frame at the current instant
    pub fn record_frame(&mut self) {
        let now = Instant::now();
        let frame_time = now - self.last_frame;
        self.last_frame = now;
        self.push(frame_time);

        if now - self.last_report > Duration::from_secs(1) {
            let (min, avg, max) = self.stats();
            log::debug!("FPS - Min: {:.1}, Avg: {:.1}, Max: {:.1}", min, avg, max);
            self.last_report = now;
        }
    }

    fn push(&mut self, frame_time: Duration) {
        self.frame_times.push_back(frame_time);
        if self.frame_times.len() > self.window {
            self.frame_times.pop_front();
        }

        let current = self.current_fps();
        if current > 0.0 {
            self.min_fps = self.min_fps.min(current);
            self.max_fps = self.max_fps.max(current);
        }
    }

    /// Average FPS over the rolling window
    pub fn current_fps(&self) -> f32 {
        if self.frame_times.is_empty() {
            return 0.0;
        }

        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total.as_secs_f32() / self.frame_times.len() as f32;

        if avg_frame_time > 0.0 {
            1.0 / avg_frame_time
        } else {
            0.0
        }
    }

    /// (min, avg, max) FPS seen so far
    pub fn stats(&self) -> (f32, f32, f32) {
        (self.min_fps, self.current_fps(), self.max_fps)
    }
}

impl Default for FpsTracker {
    fn default() -> Self {
        Self::new()
    }
}
