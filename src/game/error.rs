//! Error types for the game module
//!
//! Assembling a board from an arbitrary deck is the only fallible operation.
//! Play-time transitions are total over valid card indices and need no error
//! paths; out-of-domain clicks are simply ignored.

use crate::game::rules::CardSymbol;

/// Errors that can occur while assembling a board
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Deck contains no cards
    #[error("deck is empty")]
    EmptyDeck,

    /// Deck cannot be split into two-card pairs
    #[error("deck of {0} cards cannot be split into pairs")]
    OddDeck(usize),

    /// A symbol appears an odd number of times and can never be cleared
    #[error("symbol {symbol:?} appears {count} times and cannot be fully paired")]
    UnpairableSymbol { symbol: CardSymbol, count: usize },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
