//! Game Flow Integration Tests
//!
//! Tests for full game flows including:
//! - Complete sessions from first reveal to the win
//! - Reveal guards (lock, matched cards, self-clicks)
//! - Star rating thresholds and monotonicity
//! - Restart semantics
//! - Shuffle fairness
//!
//! The whole game is driven through the pure rules core plus the timer
//! resources, ticked with explicit Durations, so no window or frame loop
//! is needed.

use std::time::Duration;

use concentration::game::resources::{FlipbackDelay, SessionClock, FLIPBACK_DELAY};
use concentration::game::rules::{
    standard_deck, stars_for_moves, Board, CardSymbol, Face, Reveal, BOARD_CARDS,
    COPIES_PER_SYMBOL, SYMBOLS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Helper to group a board's slots by symbol, in grid order
fn pairs_by_symbol(board: &Board) -> Vec<[usize; 2]> {
    let mut pairs = Vec::new();
    for &symbol in &SYMBOLS {
        let indices: Vec<usize> = board
            .tiles()
            .enumerate()
            .filter(|(_, tile)| tile.symbol == symbol)
            .map(|(i, _)| i)
            .collect();
        for chunk in indices.chunks(2) {
            pairs.push([chunk[0], chunk[1]]);
        }
    }
    pairs
}

/// Helper to play a board to completion by matching every pair
fn play_to_win(board: &mut Board) {
    for [a, b] in pairs_by_symbol(board) {
        assert!(matches!(board.reveal(a), Some(Reveal::First { .. })));
        assert!(matches!(board.reveal(b), Some(Reveal::Matched { .. })));
    }
}

/// Helper to burn one move on a guaranteed mismatch and flip it back
///
/// Uses the first two face-down cards with different symbols.
fn force_mismatch(board: &mut Board) {
    let down: Vec<(usize, CardSymbol)> = board
        .tiles()
        .enumerate()
        .filter(|(_, tile)| tile.face == Face::Down)
        .map(|(i, tile)| (i, tile.symbol))
        .collect();
    let (first, first_symbol) = down[0];
    let (second, _) = down[1..]
        .iter()
        .find(|(_, s)| *s != first_symbol)
        .copied()
        .expect("board should still hold two distinct symbols");

    assert!(matches!(board.reveal(first), Some(Reveal::First { .. })));
    assert!(matches!(
        board.reveal(second),
        Some(Reveal::Mismatched { .. })
    ));
    assert!(board.settle_mismatch().is_some());
}

// ============================================================================
// Complete Game Tests
// ============================================================================

#[test]
fn test_completed_game_matches_every_card() {
    //! Property 1: at the win, matched pairs x 2 equals the card count.
    let mut board = Board::shuffled(&mut StdRng::seed_from_u64(7));

    play_to_win(&mut board);

    assert!(board.is_won());
    assert_eq!(board.matches() as usize * 2, board.len());
    assert_eq!(board.moves(), (BOARD_CARDS / 2) as u32, "one move per pair");
}

#[test]
fn test_final_match_reports_the_win() {
    //! The winning reveal itself carries the terminal flag, so the win
    //! check fires on the same frame as the last match.
    let mut board = Board::shuffled(&mut StdRng::seed_from_u64(11));
    let pairs = pairs_by_symbol(&board);

    for (n, [a, b]) in pairs.iter().enumerate() {
        board.reveal(*a);
        let outcome = board.reveal(*b);
        let expect_won = n == pairs.len() - 1;
        assert_eq!(
            outcome,
            Some(Reveal::Matched {
                pair: [*a, *b],
                won: expect_won,
            })
        );
    }
}

#[test]
fn test_every_board_holds_each_symbol_four_times() {
    //! Property 2: composition survives shuffling.
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..50 {
        let board = Board::shuffled(&mut rng);
        assert_eq!(board.len(), BOARD_CARDS);
        for &symbol in &SYMBOLS {
            let count = board.tiles().filter(|t| t.symbol == symbol).count();
            assert_eq!(count, COPIES_PER_SYMBOL);
        }
    }
}

// ============================================================================
// Move Counting Tests
// ============================================================================

#[test]
fn test_single_reveal_never_counts_as_a_move() {
    //! Property 3: only a completed two-card reveal increments moves.
    let mut board = Board::new(standard_deck()).expect("standard deck is pairable");

    board.reveal(0);
    assert_eq!(board.moves(), 0, "first card of a pair is not a move");

    board.reveal(1);
    assert_eq!(board.moves(), 1, "second card completes the pair-attempt");
}

#[test]
fn test_mismatch_counts_exactly_one_move() {
    //! Property 7 (counting half): a mismatch still costs one move.
    let mut board = Board::new(standard_deck()).expect("standard deck is pairable");

    // Unshuffled layout: slots 0 and 1 hold different symbols.
    board.reveal(0);
    board.reveal(1);
    assert_eq!(board.moves(), 1);

    board.settle_mismatch();
    assert_eq!(board.moves(), 1, "flipping back does not refund or recount");
}

// ============================================================================
// Match / Mismatch Scenario Tests
// ============================================================================

#[test]
fn test_matched_pair_stays_revealed_and_ignores_clicks() {
    //! Property 6: matched cards are permanently up and dead to input.
    let mut board = Board::new(standard_deck()).expect("standard deck is pairable");

    // Unshuffled layout repeats the symbol list, so 0 and 8 share a symbol.
    board.reveal(0);
    let outcome = board.reveal(8);
    assert_eq!(
        outcome,
        Some(Reveal::Matched {
            pair: [0, 8],
            won: false,
        })
    );
    assert_eq!(board.matches(), 1);
    assert_eq!(board.tile(0).unwrap().face, Face::Matched);
    assert_eq!(board.tile(8).unwrap().face, Face::Matched);

    assert_eq!(board.reveal(0), None, "matched card ignores further clicks");
    assert_eq!(board.reveal(8), None);
}

#[test]
fn test_mismatched_pair_flips_back_and_stays_playable() {
    //! Property 7: after the delay both cards are hidden and clickable.
    let mut board = Board::new(standard_deck()).expect("standard deck is pairable");
    let mut flipback = FlipbackDelay::default();

    board.reveal(0);
    let outcome = board.reveal(1);
    assert_eq!(outcome, Some(Reveal::Mismatched { pair: [0, 1] }));
    flipback.arm([0, 1]);

    // While the pair is on display the board is locked.
    assert!(board.is_locked());
    assert_eq!(board.reveal(2), None, "locked board ignores clicks");
    assert_eq!(flipback.tick(Duration::from_millis(400)), None);

    // The delay elapses; the pair settles and play resumes.
    assert_eq!(flipback.tick(Duration::from_millis(600)), Some([0, 1]));
    assert_eq!(board.settle_mismatch(), Some([0, 1]));

    assert!(!board.is_locked());
    assert_eq!(board.tile(0).unwrap().face, Face::Down);
    assert_eq!(board.tile(1).unwrap().face, Face::Down);
    assert!(
        matches!(board.reveal(0), Some(Reveal::First { index: 0 })),
        "settled card is clickable again"
    );
}

#[test]
fn test_flipback_delay_is_one_second() {
    //! The mismatch display window is fixed at 1000 ms.
    assert_eq!(FLIPBACK_DELAY, Duration::from_millis(1000));
}

// ============================================================================
// Star Rating Tests
// ============================================================================

#[test]
fn test_star_rating_never_increases_within_a_session() {
    //! Property 4: 3 stars below 20 moves, 2 from 20, 1 from 30.
    let mut board = Board::new(standard_deck()).expect("standard deck is pairable");
    let mut last_stars = board.stars();
    assert_eq!(last_stars, 3);

    for _ in 0..35 {
        force_mismatch(&mut board);
        let stars = board.stars();
        assert!(stars <= last_stars, "rating may never rise mid-session");
        assert_eq!(stars, stars_for_moves(board.moves()));
        last_stars = stars;
    }

    assert!(board.moves() >= 30);
    assert_eq!(board.stars(), 1);
}

#[test]
fn test_star_thresholds_at_exact_boundaries() {
    //! The drops land exactly on moves 20 and 30.
    assert_eq!(stars_for_moves(19), 3);
    assert_eq!(stars_for_moves(20), 2);
    assert_eq!(stars_for_moves(29), 2);
    assert_eq!(stars_for_moves(30), 1);
    assert_eq!(stars_for_moves(200), 1);
}

// ============================================================================
// Restart Tests
// ============================================================================

#[test]
fn test_restart_resets_every_session_counter() {
    //! Property 5: a fresh board owes nothing to the previous session.
    let mut rng = StdRng::seed_from_u64(21);
    let mut board = Board::shuffled(&mut rng);
    let mut clock = SessionClock::default();
    let mut flipback = FlipbackDelay::default();

    // Play a while: one mismatch pending, clock running.
    clock.start();
    clock.tick(Duration::from_secs(17));
    force_mismatch(&mut board);
    board.reveal(0);

    // Restart replaces the board and resets both timers.
    board = Board::shuffled(&mut rng);
    clock.reset();
    flipback.cancel();

    assert_eq!(board.moves(), 0);
    assert_eq!(board.matches(), 0);
    assert_eq!(board.stars(), 3);
    assert!(!board.is_locked());
    assert!(board.tiles().all(|tile| tile.face == Face::Down));
    assert_eq!(clock.seconds(), 0);
    assert!(!clock.is_running());
    assert!(!flipback.is_pending());
}

#[test]
fn test_restart_cancels_a_pending_flipback() {
    //! A flip-back scheduled before restart must not fire over the new deal.
    let mut flipback = FlipbackDelay::default();
    flipback.arm([5, 6]);
    flipback.tick(Duration::from_millis(700));

    flipback.cancel();

    assert_eq!(flipback.tick(FLIPBACK_DELAY), None);
}

// ============================================================================
// Clock Tests
// ============================================================================

#[test]
fn test_clock_runs_from_first_reveal_to_win() {
    //! The summary freezes the reading the player last saw.
    let mut board = Board::shuffled(&mut StdRng::seed_from_u64(3));
    let mut clock = SessionClock::default();

    // First reveal starts the clock.
    let pairs = pairs_by_symbol(&board);
    board.reveal(pairs[0][0]);
    clock.start();

    for _ in 0..42 {
        clock.tick(Duration::from_secs(1));
    }
    board.reveal(pairs[0][1]);
    for pair in &pairs[1..] {
        board.reveal(pair[0]);
        board.reveal(pair[1]);
    }

    assert!(board.is_won());
    clock.stop();
    clock.tick(Duration::from_secs(30));
    assert_eq!(clock.seconds(), 42, "stopped clock keeps the final reading");
}

// ============================================================================
// Shuffle Fairness Tests
// ============================================================================

#[test]
fn test_shuffle_actually_permutes_the_deck() {
    //! Repeated deals must not reproduce the unshuffled layout.
    let unshuffled = standard_deck();
    let mut rng = StdRng::seed_from_u64(99);

    let mut any_differs = false;
    for _ in 0..100 {
        let board = Board::shuffled(&mut rng);
        let layout: Vec<_> = board.tiles().map(|t| t.symbol).collect();
        if layout != unshuffled {
            any_differs = true;
            break;
        }
    }
    assert!(any_differs, "shuffle must not fix the identity ordering");
}

#[test]
fn test_shuffle_is_statistically_uniform() {
    //! Property 8: over many deals, every symbol lands in slot 0 about
    //! equally often (4 copies of 8 symbols: expected trials / 8 each).
    const TRIALS: usize = 4000;
    let mut rng = StdRng::seed_from_u64(2024);
    let mut first_slot_counts = [0usize; 8];

    for _ in 0..TRIALS {
        let board = Board::shuffled(&mut rng);
        let symbol = board.tile(0).unwrap().symbol;
        let slot = SYMBOLS.iter().position(|&s| s == symbol).unwrap();
        first_slot_counts[slot] += 1;
    }

    let expected = TRIALS / SYMBOLS.len();
    for (slot, &count) in first_slot_counts.iter().enumerate() {
        let deviation = count.abs_diff(expected);
        assert!(
            deviation < 150,
            "symbol {:?} landed in slot 0 {} times, expected about {}",
            SYMBOLS[slot],
            count,
            expected
        );
    }
}
