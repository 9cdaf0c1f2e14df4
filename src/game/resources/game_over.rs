//! Game over state tracking and summary snapshot
//!
//! Tracks whether the session is still running and, once every pair is
//! found, freezes the final statistics for the summary overlay.
//!
//! # End Condition
//!
//! The game ends exactly when matched pairs × 2 equals the card count. The
//! win check in [`crate::game::systems::game_logic`] stores the move count,
//! the frozen clock reading, and the star rating here in one snapshot, so
//! the overlay never re-derives them from live resources.
//!
//! # Integration
//!
//! This resource is checked by:
//! - [`crate::game::systems::input`] - Ignores card clicks once set
//! - [`crate::game::systems::game_logic`] - Sets the Won snapshot
//! - [`crate::ui::summary`] - Displays the final statistics
//! - [`crate::game::systems::restart`] - Resets it to InProgress

use bevy::prelude::*;

/// Final statistics captured at the moment of the win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub struct WinSummary {
    /// Completed pair-attempts over the whole session.
    pub moves: u32,
    /// Whole seconds from the first reveal to the last match.
    pub seconds: u64,
    /// Star rating derived from the final move count.
    pub stars: u8,
}

/// Resource tracking the session's end state
///
/// Starts as `InProgress` and transitions to `Won` when the last pair is
/// matched. Once set, card input is ignored and the summary overlay is
/// shown; only a restart returns it to `InProgress`.
#[derive(Resource, Default, Debug, Reflect, PartialEq, Eq, Clone, Copy)]
#[reflect(Resource)]
pub enum GameOverState {
    /// Cards are still being matched; input and the clock are live.
    #[default]
    InProgress,

    /// Every pair is found; holds the frozen summary statistics.
    Won(WinSummary),
}

impl GameOverState {
    /// Check if the session has ended
    ///
    /// Returns `true` once the last pair is matched, indicating card input
    /// should be ignored and the summary should be displayed.
    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameOverState::InProgress)
    }

    /// Final statistics, available once the session is won.
    pub fn summary(&self) -> Option<WinSummary> {
        match self {
            GameOverState::InProgress => None,
            GameOverState::Won(summary) => Some(*summary),
        }
    }

    /// Human-readable result line for logs and the HUD.
    pub fn message(&self) -> String {
        match self {
            GameOverState::InProgress => "Game in progress".to_string(),
            GameOverState::Won(summary) => format!(
                "All pairs found in {} moves and {} seconds!",
                summary.moves, summary.seconds
            ),
        }
    }
}
