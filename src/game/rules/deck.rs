//! Deck composition and shuffling
//!
//! The standard deck holds every [`CardSymbol`] four times, 32 cards in
//! total, dealt into an 8×4 grid. [`Board::new`](super::Board::new) accepts
//! arbitrary decks as long as they can be fully cleared by pair matching,
//! which [`validate_deck`] checks.
//!
//! Shuffling is a uniform Fisher–Yates via `rand`, generic over the RNG so
//! tests can pass a seeded [`rand::rngs::StdRng`].

use crate::game::error::{GameError, GameResult};
use rand::seq::SliceRandom;
use rand::Rng;

/// The eight card faces.
///
/// The engine's default font covers Latin glyphs only, so faces are drawn as
/// one letter per symbol in a fixed ink color (see `rendering::theme`)
/// rather than pictographs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardSymbol {
    Anchor,
    Bolt,
    Crown,
    Diamond,
    Heart,
    Leaf,
    Moon,
    Sun,
}

impl CardSymbol {
    /// Letter drawn on the card face.
    pub const fn glyph(self) -> char {
        match self {
            CardSymbol::Anchor => 'A',
            CardSymbol::Bolt => 'B',
            CardSymbol::Crown => 'C',
            CardSymbol::Diamond => 'D',
            CardSymbol::Heart => 'H',
            CardSymbol::Leaf => 'L',
            CardSymbol::Moon => 'M',
            CardSymbol::Sun => 'S',
        }
    }
}

/// Every symbol once, in deck order.
pub const SYMBOLS: [CardSymbol; 8] = [
    CardSymbol::Anchor,
    CardSymbol::Bolt,
    CardSymbol::Crown,
    CardSymbol::Diamond,
    CardSymbol::Heart,
    CardSymbol::Leaf,
    CardSymbol::Moon,
    CardSymbol::Sun,
];

/// Copies of each symbol in the standard deck.
pub const COPIES_PER_SYMBOL: usize = 4;

/// Cards in the standard deck.
pub const BOARD_CARDS: usize = SYMBOLS.len() * COPIES_PER_SYMBOL;

/// Build the standard unshuffled deck: every symbol repeated
/// [`COPIES_PER_SYMBOL`] times.
pub fn standard_deck() -> Vec<CardSymbol> {
    let mut deck = Vec::with_capacity(BOARD_CARDS);
    for _ in 0..COPIES_PER_SYMBOL {
        deck.extend_from_slice(&SYMBOLS);
    }
    deck
}

/// Shuffle a deck in place with a uniform Fisher–Yates permutation.
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [CardSymbol], rng: &mut R) {
    deck.shuffle(rng);
}

/// Check that a deck can be fully cleared by pair matching.
///
/// A deck passes when it is non-empty, has an even number of cards, and
/// every symbol it contains appears an even number of times.
pub fn validate_deck(deck: &[CardSymbol]) -> GameResult<()> {
    if deck.is_empty() {
        return Err(GameError::EmptyDeck);
    }
    if deck.len() % 2 != 0 {
        return Err(GameError::OddDeck(deck.len()));
    }
    for &symbol in &SYMBOLS {
        let count = deck.iter().filter(|&&s| s == symbol).count();
        if count % 2 != 0 {
            return Err(GameError::UnpairableSymbol { symbol, count });
        }
    }
    Ok(())
}
