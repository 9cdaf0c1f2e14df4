//! Memory rules module - Pure game logic without ECS coupling
//!
//! Implements deck composition, the round state machine, and the scoring
//! policy using plain data and functions, so a whole session can be driven
//! and tested without spawning a single entity.
//!
//! # Architecture
//!
//! This module maintains a clean separation between game logic and ECS systems:
//! - **Pure functions** for deck building, shuffling, and scoring
//! - **[`Board`]** as the single state machine over a session's rounds
//! - **No Component/Resource dependencies** for portability
//!
//! # Module Structure
//!
//! - `deck` - Card symbols, standard deck composition, validation, shuffling
//! - `board` - Round state machine (reveal, match, lock, flip back, win)
//! - `scoring` - Move-count-derived star rating and display glyphs

pub mod board;
pub mod deck;
pub mod scoring;


// Re-export commonly used items
pub use board::{Board, Face, Reveal, Tile};
pub use deck::{standard_deck, CardSymbol, BOARD_CARDS, COPIES_PER_SYMBOL, SYMBOLS};
pub use scoring::{star_glyphs, stars_for_moves, MAX_STARS, STAR_ONE_AT, STAR_TWO_AT};
