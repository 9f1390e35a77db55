//! # Fades
//!
//! A [Fade] interpolates a single opacity value between two endpoints over a fixed duration.
//! Time is passed in by the caller, so progress is driven by whatever event loop hosts the
//! sheet.
use std::time::{Duration, Instant};

/// How long the backdrop takes to fade in or out.
pub const FADE_DURATION: Duration = Duration::from_millis(250);

/// An in-flight opacity animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fade {
    from: f64,
    to: f64,
    start: Instant,
    duration: Duration,
}

impl Fade {
    /// Start animating from `from` to `to` at `start`.
    pub fn new(from: f64, to: f64, start: Instant, duration: Duration) -> Self {
        Fade { from, to, start, duration }
    }

    /// How far along the fade is at `now`, between 0 and 1.
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }

        let elapsed = now.saturating_duration_since(self.start);

        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// The animated value at `now`.
    pub fn value_at(&self, now: Instant) -> f64 {
        let t = ease_in_out(self.progress(now));

        self.from + (self.to - self.from) * t
    }

    /// Whether the fade has reached its target at `now`.
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Slow at both ends, fastest in the middle.
fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);

    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        let start = Instant::now();
        let fade = Fade::new(0.0, 0.5, start, FADE_DURATION);

        assert_eq!(fade.value_at(start), 0.0);
        assert_eq!(fade.is_finished(start), false);

        assert_eq!(fade.value_at(start + FADE_DURATION), 0.5);
        assert_eq!(fade.is_finished(start + FADE_DURATION), true);

        // Values stay at the target once finished.
        assert_eq!(fade.value_at(start + FADE_DURATION * 4), 0.5);
    }

    #[test]
    fn test_midpoint() {
        let start = Instant::now();
        let fade = Fade::new(0.5, 0.0, start, FADE_DURATION);
        let mid = fade.value_at(start + FADE_DURATION / 2);

        assert!((mid - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_monotonic() {
        let start = Instant::now();
        let fade = Fade::new(0.0, 1.0, start, FADE_DURATION);
        let mut last = 0.0;

        for ms in 0..=250 {
            let v = fade.value_at(start + Duration::from_millis(ms));

            assert!(v >= last);
            last = v;
        }
    }

    #[test]
    fn test_zero_duration() {
        let start = Instant::now();
        let fade = Fade::new(0.0, 0.5, start, Duration::ZERO);

        assert_eq!(fade.is_finished(start), true);
        assert_eq!(fade.value_at(start), 0.5);
    }
}
