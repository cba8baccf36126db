use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Caps the driver frame rate and measures the achieved ticks per second.
pub struct FpsLimiter {
    frame_timer: Instant,
    frametime_smoothed: f64,
}

impl Default for FpsLimiter {
    fn default() -> Self {
        Self {
            frame_timer: Instant::now(),
            frametime_smoothed: 0.,
        }
    }
}

impl FpsLimiter {
    const SMOOTHING: f64 = 0.1;

    /// Smoothed driver ticks per second; zero before the first frame.
    pub fn tps(&self) -> f64 {
        if self.frametime_smoothed > 0. {
            1. / self.frametime_smoothed
        } else {
            0.
        }
    }

    fn record(&mut self, frametime: f64) {
        if self.frametime_smoothed == 0. {
            self.frametime_smoothed = frametime;
        } else {
            self.frametime_smoothed += (frametime - self.frametime_smoothed) * Self::SMOOTHING;
        }
    }

    /// Sleeps out the rest of the frame budget for `max_fps`.
    pub fn sleep(&mut self, max_fps: f64) {
        let before_wait = self.frame_timer.elapsed();

        if max_fps > 0. {
            let target_frametime = Duration::from_secs_f64(1. / max_fps);
            if target_frametime > before_wait {
                sleep(target_frametime - before_wait);
            }
        }

        self.record(self.frame_timer.elapsed().as_secs_f64());
        self.frame_timer = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::FpsLimiter;

    #[test]
    fn test_smoothing() {
        let mut limiter = FpsLimiter::default();
        assert_eq!(limiter.tps(), 0.);
        limiter.record(0.02);
        assert!((limiter.tps() - 50.).abs() < 1e-9);
        for _ in 0..200 {
            limiter.record(0.01);
        }
        assert!((limiter.tps() - 100.).abs() < 1e-3);
    }
}
