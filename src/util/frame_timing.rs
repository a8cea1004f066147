//! Frame timing with FPS calculation and optional frame limiting.

use web_time::{Duration, Instant};

/// Render pacing: frame cap gate plus a smoothed FPS readout.
///
/// [`should_render`](Self::should_render) gates the render pass when a
/// target FPS is set; [`end_frame`](Self::end_frame) is called after
/// presenting. Input delta time is the caller's business: skipped
/// frames still consume input.
pub struct FrameTiming {
    /// Target FPS (0 = unlimited).
    target_fps: u32,
    /// Minimum frame duration based on target FPS.
    min_frame_duration: Duration,
    /// Timestamp of the last rendered frame.
    last_frame: Instant,
    /// Smoothed FPS using an exponential moving average.
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother).
    smoothing: f32,
}

impl FrameTiming {
    /// Create a frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };
        Self {
            target_fps,
            min_frame_duration,
            last_frame: Instant::now(),
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Whether enough time has passed since the last rendered frame.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Record a rendered frame and fold its duration into the FPS
    /// average.
    pub fn end_frame(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Current smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncapped_timer_always_renders() {
        let timing = FrameTiming::new(0);
        assert!(timing.should_render());
    }

    #[test]
    fn capped_timer_waits_out_the_frame_budget() {
        let timing = FrameTiming::new(1);
        // A 1 FPS budget cannot elapse immediately after construction.
        assert!(!timing.should_render());
    }

    #[test]
    fn end_frame_keeps_fps_positive() {
        let mut timing = FrameTiming::default();
        timing.end_frame();
        assert!(timing.fps() > 0.0);
    }
}
