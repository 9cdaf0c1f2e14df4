//! Session clock resource
//!
//! Tracks wall-clock play time as whole seconds, the way the HUD displays
//! it. The clock is idle until the session's first card reveal, keeps
//! running across matches and mismatches, and stops at the win or a
//! restart. The 1-second cadence lives in a repeating [`Timer`] so tests
//! can drive it with plain [`Duration`] values instead of real delays.

use bevy::prelude::*;
use std::time::Duration;

/// Elapsed-time clock for the current session.
#[derive(Resource, Debug, Reflect)]
#[reflect(Resource)]
pub struct SessionClock {
    ticker: Timer,
    seconds: u64,
    running: bool,
}

impl Default for SessionClock {
    fn default() -> Self {
        Self {
            ticker: Timer::from_seconds(1.0, TimerMode::Repeating),
            seconds: 0,
            running: false,
        }
    }
}

impl SessionClock {
    /// Begin ticking from zero.
    pub fn start(&mut self) {
        self.ticker.reset();
        self.seconds = 0;
        self.running = true;
    }

    /// Stop at the current reading. Used at the win so the summary shows
    /// the frozen time.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Stop and clear the reading. Used on restart.
    pub fn reset(&mut self) {
        self.ticker.reset();
        self.seconds = 0;
        self.running = false;
    }

    /// Advance by a frame delta; each full second bumps the reading.
    pub fn tick(&mut self, delta: Duration) {
        if !self.running {
            return;
        }
        self.ticker.tick(delta);
        self.seconds += u64::from(self.ticker.times_finished_this_tick());
    }

    /// Whole seconds elapsed since the session's first reveal.
    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    /// True between the first reveal and the win or restart.
    pub fn is_running(&self) -> bool {
        self.running
    }
}
