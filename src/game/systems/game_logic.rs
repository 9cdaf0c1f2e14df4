//! Game logic systems for timing and the win check

use crate::game::components::{Card, CardFace};
use crate::game::resources::{FlipbackDelay, GameOverState, GameSession, SessionClock, WinSummary};
use bevy::prelude::*;

/// System to advance the session clock
///
/// The clock itself decides whether it is running; this system only feeds
/// it the frame delta so tests can tick the resource directly.
pub fn tick_session_clock(time: Res<Time>, mut clock: ResMut<SessionClock>) {
    clock.tick(time.delta());
}

/// System to resolve an elapsed flip-back delay
///
/// When the 1000 ms delay fires, the mismatched pair turns back down on the
/// board and the card entities follow. The board stays locked until this
/// moment, so no click can interleave with the pair still on display.
pub fn resolve_flipback(
    time: Res<Time>,
    mut flipback: ResMut<FlipbackDelay>,
    mut session: ResMut<GameSession>,
    mut cards: Query<(&Card, &mut CardFace)>,
) {
    let Some(pair) = flipback.tick(time.delta()) else {
        return;
    };

    match session.board.settle_mismatch() {
        Some(settled) => {
            for (card, mut face) in cards.iter_mut() {
                if settled.contains(&card.index) {
                    *face = CardFace::Hidden;
                }
            }
            debug!("[GAME] Flipped pair {:?} back down", settled);
        }
        // Only reachable if a restart raced the delay without cancelling it.
        None => warn!("[GAME] Flip-back fired for {:?} but board was not locked", pair),
    }
}

/// System to detect the finished board and freeze the summary
///
/// Runs after input each frame; the session is won exactly when matched
/// pairs × 2 equals the card count. The clock is stopped first so the
/// snapshot records the same reading the player last saw.
pub fn check_win(
    session: Res<GameSession>,
    mut clock: ResMut<SessionClock>,
    mut game_over: ResMut<GameOverState>,
) {
    if game_over.is_game_over() || !session.board.is_won() {
        return;
    }

    clock.stop();
    let summary = WinSummary {
        moves: session.board.moves(),
        seconds: clock.seconds(),
        stars: session.board.stars(),
    };
    *game_over = GameOverState::Won(summary);

    info!("[GAME] ========== GAME WON! ==========");
    info!(
        "[GAME] Final: {} moves | {} s | {} star(s)",
        summary.moves, summary.seconds, summary.stars
    );
}
