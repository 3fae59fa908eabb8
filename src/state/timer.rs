/// Slideshow timer
///
/// Converts elapsed wall-clock time into slide advances. The page owns at
/// most one `SlideTimer`; dropping it is what cancels the slideshow.

use std::time::Duration;

/// Default time each slide stays on screen
pub const DEFAULT_SLIDE_INTERVAL: Duration = Duration::from_millis(5000);

/// Repeating fixed-interval timer driven by an external clock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideTimer {
    interval: Duration,
    /// Time accumulated since the last firing
    pending: Duration,
}

impl SlideTimer {
    /// Arm a new timer. `interval` must be non-zero.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            pending: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Feed elapsed time into the timer and return how many times it fired
    pub fn elapse(&mut self, elapsed: Duration) -> u32 {
        self.pending += elapsed;

        let mut fired = 0;
        while self.pending >= self.interval {
            self.pending -= self.interval;
            fired += 1;
        }
        fired
    }
}
