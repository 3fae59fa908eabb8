/// Enter transitions
///
/// A transition is a pure function of time: the view samples it with the
/// current frame instant and gets an opacity and a vertical offset back.
/// Nothing here touches page state.
use std::time::{Duration, Instant};

/// Hero heading slides down from above
pub const HERO: (Duration, f32) = (Duration::from_millis(500), -20.0);
/// Tab panels rise slightly while fading in
pub const PANEL: (Duration, f32) = (Duration::from_millis(300), 10.0);
/// Breed cards rise from further down
pub const CARD: (Duration, f32) = (Duration::from_millis(500), 20.0);

/// Largest offset any transition uses; views reserve this much slack
pub const MAX_OFFSET: f32 = 20.0;

/// Sampled visual state of a transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub opacity: f32,
    pub offset_y: f32,
}

/// Fade-in from `from_offset` to rest over `duration`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    started: Instant,
    duration: Duration,
    from_offset: f32,
}

impl Transition {
    pub fn enter(started: Instant, (duration, from_offset): (Duration, f32)) -> Self {
        Self {
            started,
            duration,
            from_offset,
        }
    }

    /// Eased progress in 0.0..=1.0
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }

        let elapsed = now.saturating_duration_since(self.started);
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);

        // ease-out cubic
        1.0 - (1.0 - t).powi(3)
    }

    pub fn motion(&self, now: Instant) -> Motion {
        let p = self.progress(now);
        Motion {
            opacity: p,
            offset_y: self.from_offset * (1.0 - p),
        }
    }

    pub fn is_running(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) < self.duration
    }
}
