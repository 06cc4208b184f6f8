//! Spin physics and winner resolution.
//!
//! The wheel turns by a random whole-plus-fraction number of revolutions,
//! decelerating along a cubic ease-out, and the winner is read off the final
//! angle. Nothing here touches the window or the clock directly: callers pass
//! in `Instant`s and an RNG.

use rand::Rng;
use std::ops::Range;
use std::time::{Duration, Instant};

pub const SPIN_DURATION: Duration = Duration::from_millis(4000);
pub const ROTATIONS: Range<f64> = 5.0..10.0;
pub const OFFSET_DEGREES: Range<f64> = 0.0..360.0;

/// `1 - (1 - p)^3`, with `p` clamped to [0, 1]. Exactly 1.0 at `p = 1`.
#[inline]
pub fn ease_out_cubic(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Angular width of one slice in degrees.
#[inline]
pub fn slice_width(count: usize) -> f64 {
    360.0 / count as f64
}

/// Index of the winning slice for a wheel of `count` slices stopped at
/// `rotation` degrees. `None` for an empty wheel.
pub fn winning_index(rotation: f64, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let normalized = rotation.rem_euclid(360.0);
    let adjusted = (450.0 - normalized).rem_euclid(360.0);
    let index = (adjusted / slice_width(count)).floor() as usize;
    Some(index % count)
}

/// Draw a fresh rotation delta: `rotations * 360 + offset`.
pub fn random_delta<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let rotations = rng.random_range(ROTATIONS);
    let offset = rng.random_range(OFFSET_DEGREES);
    rotations * 360.0 + offset
}

/// One in-flight spin, from trigger to completion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinSession {
    pub start_rotation: f64,
    pub delta: f64,
    pub started_at: Instant,
    pub duration: Duration,
}

/// Rotation sampled at one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinFrame {
    pub rotation: f64,
    pub finished: bool,
}

impl SpinSession {
    pub fn new(start_rotation: f64, delta: f64, started_at: Instant) -> Self {
        Self {
            start_rotation,
            delta,
            started_at,
            duration: SPIN_DURATION,
        }
    }

    pub fn target_rotation(&self) -> f64 {
        self.start_rotation + self.delta
    }

    /// Linear progress in [0, 1] at `now`.
    pub fn progress(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn rotation_at_progress(&self, p: f64) -> f64 {
        self.start_rotation + self.delta * ease_out_cubic(p)
    }

    pub fn sample(&self, now: Instant) -> SpinFrame {
        let p = self.progress(now);
        SpinFrame {
            rotation: self.rotation_at_progress(p),
            finished: p >= 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn ease_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5, "ease-out should run ahead of linear");
    }

    #[test]
    fn ease_is_monotonic() {
        let mut prev = 0.0;
        for i in 0..=1000 {
            let v = ease_out_cubic(i as f64 / 1000.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn slice_widths_cover_the_circle() {
        for n in 2..=12 {
            let w = slice_width(n);
            assert_eq!(w, 360.0 / n as f64);
            let total: f64 = (0..n).map(|_| w).sum();
            assert!((total - 360.0).abs() < 1e-9, "n={n} total={total}");
        }
    }

    #[test]
    fn four_items_at_zero_picks_index_one() {
        assert_eq!(winning_index(0.0, 4), Some(1));
    }

    #[test]
    fn eight_items_after_seven_turns_and_45_degrees() {
        assert_eq!(winning_index(360.0 * 7.0 + 45.0, 8), Some(1));
    }

    #[test]
    fn winning_index_stays_in_bounds() {
        for n in 2..=12 {
            for step in 0..3600 {
                let idx = winning_index(step as f64 * 0.1, n).unwrap();
                assert!(idx < n);
            }
        }
        assert_eq!(winning_index(10.0, 0), None);
    }

    #[test]
    fn random_delta_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let d = random_delta(&mut rng);
            assert!((1800.0..3960.0).contains(&d), "delta {d}");
        }
    }

    #[test]
    fn sample_lands_exactly_on_target() {
        let start = Instant::now();
        let session = SpinSession::new(123.5, 2000.25, start);
        let frame = session.sample(start + SPIN_DURATION);
        assert!(frame.finished);
        assert_eq!(frame.rotation, session.target_rotation());

        let late = session.sample(start + SPIN_DURATION * 3);
        assert_eq!(late.rotation, session.target_rotation());
    }

    #[test]
    fn sample_midway_is_between_endpoints() {
        let start = Instant::now();
        let session = SpinSession::new(0.0, 1800.0, start);
        let frame = session.sample(start + SPIN_DURATION / 2);
        assert!(!frame.finished);
        assert!(frame.rotation > 900.0 && frame.rotation < 1800.0);
        assert_eq!(session.sample(start).rotation, 0.0);
    }
}
