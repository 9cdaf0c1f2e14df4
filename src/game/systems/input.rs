//! Card input observers
//!
//! Clicks and hovers arrive through per-entity picking observers attached in
//! [`crate::rendering::board`]. The click observer is the only entry into
//! the round state machine: it forwards the card's slot to
//! [`Board::reveal`](crate::game::rules::Board::reveal) and mirrors whatever
//! the board decided back onto the card entities. All transition guards
//! (lock, matched cards, the pending first card) live in the board itself;
//! the observer only adds the primary-button and game-over checks.

use crate::game::components::{Card, CardFace};
use crate::game::resources::{FlipbackDelay, GameOverState, GameSession, SessionClock};
use crate::game::rules::Reveal;
use crate::rendering::theme;
use bevy::picking::events::{Click, Out, Over, Pointer};
use bevy::picking::pointer::PointerButton;
use bevy::prelude::*;

/// Helper to check if primary button (left click) was used
fn is_primary(button: PointerButton) -> bool {
    matches!(button, PointerButton::Primary)
}

/// Helper to mirror a board face onto the card entity for `index`
fn set_face(cards: &mut Query<(&Card, &mut CardFace)>, index: usize, face: CardFace) {
    for (card, mut card_face) in cards.iter_mut() {
        if card.index == index {
            *card_face = face;
            return;
        }
    }
    warn!("[INPUT] No card entity for board slot {}", index);
}

// === Observers ===

/// Handle click on a card
pub fn on_card_click(
    click: On<Pointer<Click>>,
    mut session: ResMut<GameSession>,
    mut clock: ResMut<SessionClock>,
    mut flipback: ResMut<FlipbackDelay>,
    game_over: Res<GameOverState>,
    mut cards: Query<(&Card, &mut CardFace)>,
    card_lookup: Query<&Card>,
) {
    if !is_primary(click.event.button) {
        return;
    }

    if game_over.is_game_over() {
        return;
    }

    let Ok(card) = card_lookup.get(click.entity) else {
        warn!("[INPUT] Clicked entity {:?} has no Card component", click.entity);
        return;
    };
    let (index, symbol) = (card.index, card.symbol);

    let Some(outcome) = session.board.reveal(index) else {
        // Locked board, matched card, or the pending first card. The board
        // already decided the click means nothing.
        debug!("[INPUT] Ignored click on card {} ({:?})", index, symbol);
        return;
    };

    // The clock starts on the session's first reveal, not at board setup.
    if !clock.is_running() {
        clock.start();
        info!("[GAME] First reveal, clock started");
    }

    match outcome {
        Reveal::First { index } => {
            set_face(&mut cards, index, CardFace::Revealed);
            debug!("[INPUT] Revealed card {} ({:?})", index, symbol);
        }
        Reveal::Matched { pair, won } => {
            for i in pair {
                set_face(&mut cards, i, CardFace::Matched);
            }
            info!(
                "[GAME] Match! {:?} at {:?} | moves: {} | pairs: {}",
                symbol,
                pair,
                session.board.moves(),
                session.board.matches()
            );
            if won {
                // The win snapshot is taken by check_win in the Execution
                // set, after this observer has run.
                info!("[GAME] Final pair found");
            }
        }
        Reveal::Mismatched { pair } => {
            for i in pair {
                set_face(&mut cards, i, CardFace::Revealed);
            }
            flipback.arm(pair);
            info!(
                "[GAME] Mismatch at {:?} | moves: {} | stars: {}",
                pair,
                session.board.moves(),
                session.board.stars()
            );
        }
    }
}

/// Handle pointer entering a card
///
/// Purely presentational: face-down cards get a lighter back tint while the
/// cursor is over them. Locked boards and finished games keep the flat back
/// so nothing looks clickable when it is not.
pub fn on_card_hover(
    hover: On<Pointer<Over>>,
    session: Res<GameSession>,
    game_over: Res<GameOverState>,
    mut cards: Query<(&CardFace, &mut Sprite), With<Card>>,
) {
    if game_over.is_game_over() || session.board.is_locked() {
        return;
    }
    if let Ok((face, mut sprite)) = cards.get_mut(hover.entity) {
        if *face == CardFace::Hidden {
            sprite.color = theme::CARD_BACK_HOVER;
        }
    }
}

/// Handle pointer leaving a card
pub fn on_card_unhover(
    unhover: On<Pointer<Out>>,
    mut cards: Query<(&CardFace, &mut Sprite), With<Card>>,
) {
    if let Ok((face, mut sprite)) = cards.get_mut(unhover.entity) {
        if *face == CardFace::Hidden {
            sprite.color = theme::CARD_BACK;
        }
    }
}
