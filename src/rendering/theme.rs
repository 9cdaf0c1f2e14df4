//! Board geometry and card palette
//!
//! One place for every visual constant: grid shape, card size, the sprite
//! colors for each face state, and the per-symbol ink colors. The grid is
//! laid out around the origin so the 2D camera needs no offset, with the
//! board pushed down slightly to clear the HUD panel.

use crate::game::rules::CardSymbol;
use bevy::prelude::*;

/// Cards per row.
pub const GRID_COLS: usize = 8;
/// Rows on the board.
pub const GRID_ROWS: usize = 4;

/// Card sprite size in world units.
pub const CARD_SIZE: Vec2 = Vec2::new(130.0, 150.0);
/// Spacing between neighboring cards.
pub const CARD_GAP: f32 = 14.0;
/// Vertical shift so the grid sits below the HUD panel.
pub const BOARD_Y_OFFSET: f32 = -30.0;

/// Font size of the face glyph.
pub const GLYPH_SIZE: f32 = 72.0;

/// Window clear color behind the board.
pub const TABLE: Color = Color::srgb(0.13, 0.16, 0.23);

/// Face-down card back.
pub const CARD_BACK: Color = Color::srgb(0.22, 0.30, 0.45);
/// Card back while hovered (face-down cards only).
pub const CARD_BACK_HOVER: Color = Color::srgb(0.30, 0.40, 0.58);
/// Face-up card during a pair-attempt.
pub const CARD_FACE: Color = Color::srgb(0.92, 0.90, 0.84);
/// Permanently matched card.
pub const CARD_MATCHED: Color = Color::srgb(0.56, 0.78, 0.56);

/// World translation of the card at `index`, row-major from the top left.
pub fn card_translation(index: usize) -> Vec3 {
    let col = (index % GRID_COLS) as f32;
    let row = (index / GRID_COLS) as f32;
    let step_x = CARD_SIZE.x + CARD_GAP;
    let step_y = CARD_SIZE.y + CARD_GAP;
    let origin_x = -step_x * (GRID_COLS as f32 - 1.0) / 2.0;
    let origin_y = step_y * (GRID_ROWS as f32 - 1.0) / 2.0 + BOARD_Y_OFFSET;
    Vec3::new(origin_x + col * step_x, origin_y - row * step_y, 0.0)
}

/// Ink color of a symbol's face glyph.
///
/// Symbols are letter glyphs, so each also gets its own ink color to keep
/// the eight faces easy to tell apart at a glance.
pub fn symbol_ink(symbol: CardSymbol) -> Color {
    match symbol {
        CardSymbol::Anchor => Color::srgb(0.16, 0.33, 0.65),
        CardSymbol::Bolt => Color::srgb(0.85, 0.65, 0.13),
        CardSymbol::Crown => Color::srgb(0.58, 0.29, 0.64),
        CardSymbol::Diamond => Color::srgb(0.13, 0.59, 0.66),
        CardSymbol::Heart => Color::srgb(0.80, 0.22, 0.26),
        CardSymbol::Leaf => Color::srgb(0.23, 0.57, 0.25),
        CardSymbol::Moon => Color::srgb(0.35, 0.38, 0.60),
        CardSymbol::Sun => Color::srgb(0.90, 0.49, 0.13),
    }
}
