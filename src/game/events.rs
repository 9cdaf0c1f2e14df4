//! Buffered messages for cross-system requests

use bevy::prelude::*;

/// Request to tear the session down and deal a fresh board.
///
/// Written by the HUD restart button and the summary's play-again button,
/// drained by [`crate::game::systems::restart::handle_restart`] on the next
/// frame. Several writes in one frame collapse into a single restart.
#[derive(Message, Debug, Clone, Default)]
pub struct RestartRequested;
