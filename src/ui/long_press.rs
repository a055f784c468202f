//! Long-press detection for the confirm button.
//!
//! The monitor polls the raw button every `LONG_PRESS_POLL_MS` and feeds
//! the level plus a millisecond timestamp into [`LongPress::poll`].  The
//! detector remembers when the current press started, so a release and
//! re-press inside the hold window restarts the clock instead of being
//! mistaken for one long hold.

/// Press-start tracker.
pub struct LongPress {
    hold_ms: u64,
    pressed_since: Option<u64>,
    fired: bool,
}

impl LongPress {
    pub const fn new(hold_ms: u64) -> Self {
        Self {
            hold_ms,
            pressed_since: None,
            fired: false,
        }
    }

    /// Returns `true` exactly once per press, on the first poll at least
    /// `hold_ms` after the press began.
    pub fn poll(&mut self, pressed: bool, now_ms: u64) -> bool {
        if !pressed {
            self.pressed_since = None;
            self.fired = false;
            return false;
        }

        let since = *self.pressed_since.get_or_insert(now_ms);
        if !self.fired && now_ms.saturating_sub(since) >= self.hold_ms {
            self.fired = true;
            return true;
        }
        false
    }

    /// Whether a press is currently being timed.
    #[cfg(test)]
    pub(crate) fn is_tracking(&self) -> bool {
        self.pressed_since.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOLD: u64 = 1000;
    const POLL: u64 = 100;

    #[test]
    fn two_samples_a_hold_apart_fire() {
        let mut lp = LongPress::new(HOLD);
        assert!(!lp.poll(true, 5_000));
        assert!(lp.poll(true, 6_000));
    }

    #[test]
    fn short_press_does_not_fire() {
        let mut lp = LongPress::new(HOLD);
        for t in (0..900).step_by(POLL as usize) {
            assert!(!lp.poll(true, t));
        }
        assert!(!lp.poll(false, 900));
        assert!(!lp.is_tracking());
    }

    #[test]
    fn fires_once_per_press() {
        let mut lp = LongPress::new(HOLD);
        let fired = (0..=3000)
            .step_by(POLL as usize)
            .filter(|&t| lp.poll(true, t))
            .count();
        assert_eq!(fired, 1);
    }

    #[test]
    fn fires_on_first_poll_past_the_hold() {
        let mut lp = LongPress::new(HOLD);
        let first = (0..=2000)
            .step_by(POLL as usize)
            .find(|&t| lp.poll(true, t));
        assert_eq!(first, Some(1000));
    }

    #[test]
    fn release_and_repress_restarts_the_clock() {
        let mut lp = LongPress::new(HOLD);
        assert!(!lp.poll(true, 0));
        assert!(!lp.poll(true, 500));
        assert!(!lp.poll(false, 600));
        assert!(!lp.poll(true, 700));
        assert!(!lp.poll(true, 1000));
        assert!(!lp.poll(true, 1600));
        assert!(lp.poll(true, 1700));
    }

    #[test]
    fn rearms_after_release() {
        let mut lp = LongPress::new(HOLD);
        assert!(!lp.poll(true, 0));
        assert!(lp.poll(true, 1000));
        assert!(!lp.poll(false, 1100));
        assert!(!lp.poll(true, 1200));
        assert!(lp.poll(true, 2200));
    }
}
