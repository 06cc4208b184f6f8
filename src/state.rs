use crate::error::ItemError;
use crate::items::ItemList;
use crate::spin::{self, SpinSession};
use rand::Rng;
use std::time::Instant;

/// Everything the wheel shows: the labels, how far it has turned, the spin in
/// flight (if any) and the last winner.
#[derive(Debug, Clone)]
pub struct WheelState {
    items: ItemList,
    rotation: f64,
    spin: Option<SpinSession>,
    winner: Option<String>,
}

impl WheelState {
    pub fn new(items: ItemList) -> Self {
        Self {
            items,
            rotation: 0.0,
            spin: None,
            winner: None,
        }
    }

    pub fn items(&self) -> &ItemList {
        &self.items
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    pub fn is_spinning(&self) -> bool {
        self.spin.is_some()
    }

    pub fn session(&self) -> Option<&SpinSession> {
        self.spin.as_ref()
    }

    /// Start a spin with the thread RNG. Returns `false` if refused.
    pub fn spin(&mut self, now: Instant) -> bool {
        self.spin_with(&mut rand::rng(), now)
    }

    pub fn spin_with<R: Rng + ?Sized>(&mut self, rng: &mut R, now: Instant) -> bool {
        let delta = spin::random_delta(rng);
        self.start_spin(delta, now)
    }

    /// Start a spin of exactly `delta` degrees. Refused while a spin is
    /// running, on an empty wheel, or for a negative or non-finite delta.
    pub fn start_spin(&mut self, delta: f64, now: Instant) -> bool {
        if self.is_spinning() || self.items.is_empty() {
            return false;
        }
        if !delta.is_finite() || delta < 0.0 {
            return false;
        }
        self.winner = None;
        self.spin = Some(SpinSession::new(self.rotation, delta, now));
        log::debug!("spin started: {:.1}° from {:.1}°", delta, self.rotation);
        true
    }

    /// Advance the running spin to `now`. Returns the winner on the frame the
    /// spin completes.
    pub fn tick(&mut self, now: Instant) -> Option<&str> {
        let session = self.spin?;
        let frame = session.sample(now);
        self.rotation = frame.rotation.max(self.rotation);
        if !frame.finished {
            return None;
        }

        self.spin = None;
        self.rotation = session.target_rotation();
        let index = spin::winning_index(self.rotation, self.items.len())?;
        self.winner = self.items.get(index).map(str::to_string);
        log::info!(
            "wheel stopped at {:.1}°: {}",
            self.rotation.rem_euclid(360.0),
            self.winner.as_deref().unwrap_or_default()
        );
        self.winner.as_deref()
    }

    pub fn add_item(&mut self, label: &str) -> Result<(), ItemError> {
        self.items.add(label)?;
        self.winner = None;
        Ok(())
    }

    pub fn remove_item(&mut self, index: usize) -> Result<String, ItemError> {
        let removed = self.items.remove(index)?;
        self.winner = None;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spin::SPIN_DURATION;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    fn state(labels: &[&str]) -> WheelState {
        WheelState::new(ItemList::new(labels.iter().copied()).unwrap())
    }

    #[test]
    fn fixed_spin_resolves_expected_winner() {
        let mut wheel = state(&["a", "b", "c", "d", "e", "f", "g", "h"]);
        let t0 = Instant::now();
        assert!(wheel.start_spin(360.0 * 7.0 + 45.0, t0));
        assert_eq!(wheel.tick(t0 + SPIN_DURATION / 2), None);
        assert_eq!(wheel.tick(t0 + SPIN_DURATION), Some("b"));
        assert_eq!(wheel.winner(), Some("b"));
        assert!(!wheel.is_spinning());
        assert_eq!(wheel.rotation(), 2565.0);
    }

    #[test]
    fn second_spin_is_ignored_while_running() {
        let mut wheel = state(&["a", "b", "c"]);
        let t0 = Instant::now();
        assert!(wheel.start_spin(1800.0, t0));
        let before = *wheel.session().unwrap();
        assert!(!wheel.start_spin(2000.0, t0 + Duration::from_millis(10)));
        assert_eq!(*wheel.session().unwrap(), before);
    }

    #[test]
    fn rotation_never_decreases_across_spins() {
        let mut wheel = state(&["a", "b", "c", "d"]);
        let mut rng = StdRng::seed_from_u64(42);
        let mut now = Instant::now();
        let mut last = wheel.rotation();
        for _ in 0..5 {
            assert!(wheel.spin_with(&mut rng, now));
            for _ in 0..300 {
                now += Duration::from_millis(16);
                wheel.tick(now);
                assert!(wheel.rotation() >= last);
                last = wheel.rotation();
            }
            assert!(!wheel.is_spinning());
        }
        assert!(wheel.rotation() >= 5.0 * 1800.0);
    }

    #[test]
    fn new_spin_clears_winner() {
        let mut wheel = state(&["a", "b"]);
        let t0 = Instant::now();
        wheel.start_spin(720.0, t0);
        wheel.tick(t0 + SPIN_DURATION);
        assert!(wheel.winner().is_some());
        wheel.start_spin(720.0, t0 + SPIN_DURATION);
        assert_eq!(wheel.winner(), None);
    }

    #[test]
    fn list_mutation_clears_winner_but_not_rotation() {
        let mut wheel = state(&["a", "b", "c"]);
        let t0 = Instant::now();
        wheel.start_spin(1000.0, t0);
        wheel.tick(t0 + SPIN_DURATION);
        assert!(wheel.winner().is_some());
        wheel.add_item("d").unwrap();
        assert_eq!(wheel.winner(), None);
        assert_eq!(wheel.rotation(), 1000.0);

        wheel.start_spin(1000.0, t0 + SPIN_DURATION);
        wheel.tick(t0 + SPIN_DURATION * 2);
        assert!(wheel.winner().is_some());
        wheel.remove_item(0).unwrap();
        assert_eq!(wheel.winner(), None);
        assert_eq!(wheel.rotation(), 2000.0);
    }

    #[test]
    fn refused_mutation_keeps_winner() {
        let mut wheel = state(&["a", "b"]);
        let t0 = Instant::now();
        wheel.start_spin(0.0, t0);
        wheel.tick(t0 + SPIN_DURATION);
        assert_eq!(wheel.winner(), Some("a"));
        assert!(wheel.remove_item(0).is_err());
        assert!(wheel.add_item("  ").is_err());
        assert_eq!(wheel.winner(), Some("a"));
    }

    #[test]
    fn winner_reads_list_at_completion() {
        let mut wheel = state(&["a", "b", "c", "d"]);
        let t0 = Instant::now();
        wheel.start_spin(0.0, t0);
        wheel.remove_item(0).unwrap();
        // three slices of 120°, adjusted angle 90° → index 0 of the new list
        assert_eq!(wheel.tick(t0 + SPIN_DURATION), Some("b"));
    }

    #[test]
    fn tick_without_spin_is_noop() {
        let mut wheel = state(&["a", "b"]);
        assert_eq!(wheel.tick(Instant::now()), None);
        assert_eq!(wheel.rotation(), 0.0);
    }
}
