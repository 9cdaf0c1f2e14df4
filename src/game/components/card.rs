//! Card-related components

use crate::game::rules::CardSymbol;
use bevy::prelude::*;

/// A card sprite on the board.
///
/// `index` ties the entity back to its slot in the session board; `symbol`
/// is carried along so input logs can name the card without a board lookup.
#[derive(Component, Clone, Copy, Debug)]
pub struct Card {
    pub index: usize,
    pub symbol: CardSymbol,
}

/// Presentation state of a card entity.
///
/// Mirrors the board slot's face after every transition that touches it;
/// the visual sync system turns changes into sprite color and glyph
/// visibility.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CardFace {
    /// Face down, showing the card back.
    #[default]
    Hidden,
    /// Face up as part of the current pair-attempt.
    Revealed,
    /// Permanently face up in the matched tint.
    Matched,
}

/// Marker for the glyph text child of a card sprite.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct SymbolLabel;
