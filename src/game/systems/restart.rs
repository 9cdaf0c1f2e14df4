//! Restart handling
//!
//! Restart requests are buffered messages so the teardown happens at a
//! defined point in the frame rather than in the middle of an egui pass.
//! A restart clears every session resource, cancels a pending flip-back,
//! despawns the old card entities, and deals a freshly shuffled board.

use crate::game::components::Card;
use crate::game::events::RestartRequested;
use crate::game::resources::{FlipbackDelay, GameOverState, GameSession, SessionClock};
use crate::game::rules::Board;
use crate::rendering::board::spawn_cards;
use bevy::prelude::*;

/// System to drain restart requests and rebuild the session
pub fn handle_restart(
    mut messages: MessageReader<RestartRequested>,
    mut commands: Commands,
    mut session: ResMut<GameSession>,
    mut clock: ResMut<SessionClock>,
    mut flipback: ResMut<FlipbackDelay>,
    mut game_over: ResMut<GameOverState>,
    cards: Query<Entity, With<Card>>,
) {
    if messages.is_empty() {
        return;
    }
    // Multiple requests in one frame still mean one restart.
    messages.clear();

    for entity in cards.iter() {
        commands.entity(entity).despawn();
    }

    session.board = Board::shuffled(&mut rand::rng());
    clock.reset();
    flipback.cancel();
    *game_over = GameOverState::InProgress;

    spawn_cards(&mut commands, &session.board);

    info!(
        "[GAME] Restart: dealt a fresh board of {} cards",
        session.board.len()
    );
}
