//! Round state machine
//!
//! [`Board`] owns the card slots and the session counters, and its methods
//! are the only mutators of round state. A click becomes a [`Board::reveal`]
//! call; the returned [`Reveal`] tells the caller which side effects to
//! mirror (flip a sprite up, schedule the flip-back delay, announce the
//! win). Ignored clicks return `None` so callers never need their own guard
//! logic.
//!
//! The mismatch lock is part of the machine: while a mismatched pair is on
//! display every reveal is ignored, until [`Board::settle_mismatch`] turns
//! the pair back down and releases the lock.

use super::deck::{self, CardSymbol};
use super::scoring;
use crate::game::error::GameResult;
use rand::Rng;
use tracing::{debug, trace};

/// Face-up state of a single card slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Face {
    /// Face down, clickable.
    #[default]
    Down,
    /// Face up as part of the current pair-attempt.
    Up,
    /// Permanently face up; no longer clickable.
    Matched,
}

/// One card slot: its symbol and current face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub symbol: CardSymbol,
    pub face: Face,
}

/// Outcome of a reveal that was not ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    /// First card of a pair-attempt turned face up.
    First { index: usize },
    /// Second card matched the first; both stay up for good.
    Matched { pair: [usize; 2], won: bool },
    /// Second card differs; the board locks until the pair flips back.
    Mismatched { pair: [usize; 2] },
}

/// Memory board: card slots plus session counters.
#[derive(Debug, Clone)]
pub struct Board {
    tiles: Vec<Tile>,
    /// First face-up card of the current pair-attempt.
    pending: Option<usize>,
    /// Mismatched pair still on display; reveals are ignored while set.
    locked: Option<[usize; 2]>,
    moves: u32,
    matches: u32,
}

impl Board {
    /// Board over an arbitrary deck, in the given order.
    ///
    /// Fails when the deck cannot be fully cleared by pair matching.
    pub fn new(deck: Vec<CardSymbol>) -> GameResult<Self> {
        deck::validate_deck(&deck)?;
        Ok(Self::from_deck(deck))
    }

    /// Standard shuffled board: 8 symbols, 4 copies each.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = deck::standard_deck();
        deck::shuffle_deck(&mut deck, rng);
        Self::from_deck(deck)
    }

    fn from_deck(deck: Vec<CardSymbol>) -> Self {
        Self {
            tiles: deck
                .into_iter()
                .map(|symbol| Tile {
                    symbol,
                    face: Face::Down,
                })
                .collect(),
            pending: None,
            locked: None,
            moves: 0,
            matches: 0,
        }
    }

    /// Attempt to reveal the card at `index`.
    ///
    /// Returns `None` when the click is ignored: the board is locked, the
    /// index is out of range, or the card is already face up (which covers
    /// matched cards, the pending first card, and a finished board).
    pub fn reveal(&mut self, index: usize) -> Option<Reveal> {
        if self.locked.is_some() {
            return None;
        }
        let tile = *self.tiles.get(index)?;
        if tile.face != Face::Down {
            return None;
        }
        match self.pending.take() {
            None => {
                self.tiles[index].face = Face::Up;
                self.pending = Some(index);
                trace!(index, symbol = ?tile.symbol, "pair-attempt opened");
                Some(Reveal::First { index })
            }
            Some(first) => {
                self.tiles[index].face = Face::Up;
                self.moves += 1;
                let pair = [first, index];
                if self.tiles[first].symbol == tile.symbol {
                    self.tiles[first].face = Face::Matched;
                    self.tiles[index].face = Face::Matched;
                    self.matches += 1;
                    debug!(?pair, symbol = ?tile.symbol, matches = self.matches, "pair matched");
                    Some(Reveal::Matched {
                        pair,
                        won: self.is_won(),
                    })
                } else {
                    self.locked = Some(pair);
                    debug!(?pair, moves = self.moves, "pair mismatched, board locked");
                    Some(Reveal::Mismatched { pair })
                }
            }
        }
    }

    /// Turn the mismatched pair back down and release the lock.
    ///
    /// Returns the pair that went down, or `None` when no mismatch was on
    /// display.
    pub fn settle_mismatch(&mut self) -> Option<[usize; 2]> {
        let pair = self.locked.take()?;
        for index in pair {
            self.tiles[index].face = Face::Down;
        }
        trace!(?pair, "mismatch settled, board unlocked");
        Some(pair)
    }

    /// Mismatched pair currently on display, if any.
    pub fn locked_pair(&self) -> Option<[usize; 2]> {
        self.locked
    }

    /// True while a mismatched pair is on display and input is ignored.
    pub fn is_locked(&self) -> bool {
        self.locked.is_some()
    }

    /// True exactly when matched pairs × 2 equals the card count.
    pub fn is_won(&self) -> bool {
        self.matches as usize * 2 == self.tiles.len()
    }

    /// Completed pair-attempts this session.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Matched pairs this session.
    pub fn matches(&self) -> u32 {
        self.matches
    }

    /// Star rating for the current move count.
    pub fn stars(&self) -> u8 {
        scoring::stars_for_moves(self.moves)
    }

    /// Card slot at `index`.
    pub fn tile(&self, index: usize) -> Option<Tile> {
        self.tiles.get(index).copied()
    }

    /// Number of cards on the board.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// True for a board with no cards (never the case for dealt boards).
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Card slots in grid order.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.tiles.iter().copied()
    }
}
