//! Mismatch flip-back delay resource
//!
//! A mismatched pair stays on display for a fixed delay before turning back
//! down. The delay is a one-shot [`Timer`] held here together with the pair
//! it covers, advanced from the frame delta, so tests can drive it with a
//! plain [`Duration`]. Restart cancels a pending flip-back through
//! [`FlipbackDelay::cancel`] instead of letting it fire over a fresh board.

use bevy::prelude::*;
use std::time::Duration;

/// How long a mismatched pair stays visible before flipping back.
pub const FLIPBACK_DELAY: Duration = Duration::from_millis(1000);

/// One-shot delay before a mismatched pair turns back down.
#[derive(Resource, Debug, Reflect)]
#[reflect(Resource)]
pub struct FlipbackDelay {
    timer: Timer,
    pending: Option<[usize; 2]>,
}

impl Default for FlipbackDelay {
    fn default() -> Self {
        Self {
            timer: Timer::new(FLIPBACK_DELAY, TimerMode::Once),
            pending: None,
        }
    }
}

impl FlipbackDelay {
    /// Schedule `pair` to flip back after [`FLIPBACK_DELAY`].
    ///
    /// The board lock guarantees at most one mismatch is ever on display,
    /// so arming while a pair is already pending replaces it.
    pub fn arm(&mut self, pair: [usize; 2]) {
        self.timer.reset();
        self.pending = Some(pair);
    }

    /// Drop the pending flip-back without firing it. Used on restart.
    pub fn cancel(&mut self) {
        self.timer.reset();
        self.pending = None;
    }

    /// Advance the delay; returns the pair once the delay elapses.
    pub fn tick(&mut self, delta: Duration) -> Option<[usize; 2]> {
        self.pending?;
        self.timer.tick(delta);
        if self.timer.is_finished() {
            self.timer.reset();
            self.pending.take()
        } else {
            None
        }
    }

    /// True while a mismatched pair is waiting to flip back.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flipback_starts_idle() {
        //! No pair is pending before the first mismatch.
        let delay = FlipbackDelay::default();
        assert!(!delay.is_pending());
    }

    #[test]
    fn test_ticking_idle_delay_yields_nothing() {
        //! Frame deltas without an armed pair never fire.
        let mut delay = FlipbackDelay::default();
        assert_eq!(delay.tick(Duration::from_secs(5)), None);
    }

    #[test]
    fn test_armed_pair_fires_after_full_delay() {
        //! The pair comes back exactly when the delay elapses.
        let mut delay = FlipbackDelay::default();
        delay.arm([3, 7]);

        assert_eq!(delay.tick(Duration::from_millis(999)), None);
        assert!(delay.is_pending(), "pair should still be on display");

        assert_eq!(delay.tick(Duration::from_millis(1)), Some([3, 7]));
        assert!(!delay.is_pending(), "firing should clear the pending pair");
    }

    #[test]
    fn test_fired_delay_does_not_repeat() {
        //! The delay is one-shot; later deltas yield nothing.
        let mut delay = FlipbackDelay::default();
        delay.arm([0, 1]);
        delay.tick(FLIPBACK_DELAY);

        assert_eq!(delay.tick(FLIPBACK_DELAY), None);
    }

    #[test]
    fn test_cancel_supersedes_pending_pair() {
        //! Restart cancels the flip-back; it must never fire afterwards.
        let mut delay = FlipbackDelay::default();
        delay.arm([4, 9]);
        delay.tick(Duration::from_millis(500));

        delay.cancel();

        assert!(!delay.is_pending());
        assert_eq!(delay.tick(FLIPBACK_DELAY), None);
    }

    #[test]
    fn test_rearming_restarts_the_delay() {
        //! Arming a new pair measures the full delay from that moment.
        let mut delay = FlipbackDelay::default();
        delay.arm([0, 1]);
        delay.tick(Duration::from_millis(900));

        delay.arm([2, 3]);

        assert_eq!(delay.tick(Duration::from_millis(900)), None);
        assert_eq!(delay.tick(Duration::from_millis(100)), Some([2, 3]));
    }
}
