//! Card grid creation and rendering
//!
//! Uses the batch spawning pattern from Bevy's stress-test examples:
//! collect all card bundles into a Vec first, then spawn them in one loop,
//! attaching the picking observers and the glyph child to each.

use crate::game::components::{Card, CardFace, SymbolLabel};
use crate::game::resources::GameSession;
use crate::game::rules::Board;
use crate::game::systems::input::{on_card_click, on_card_hover, on_card_unhover};
use crate::rendering::theme;
use bevy::picking::Pickable;
use bevy::prelude::*;

/// System to deal the initial board at startup
pub(crate) fn create_board(mut commands: Commands, session: Res<GameSession>) {
    spawn_cards(&mut commands, &session.board);
    info!("[BOARD] Dealt {} cards", session.board.len());
}

/// Spawn one sprite entity per board slot, face down
///
/// Also used by the restart system after it despawns the previous deal.
/// Each card gets click and hover observers and a hidden glyph text child;
/// the face state component starts at its default (hidden) to match the
/// board's fresh slots.
pub(crate) fn spawn_cards(commands: &mut Commands, board: &Board) {
    // Collect all cards into a Vec, then batch spawn.
    let cards: Vec<_> = board
        .tiles()
        .enumerate()
        .map(|(index, tile)| {
            (
                Sprite::from_color(theme::CARD_BACK, theme::CARD_SIZE),
                Transform::from_translation(theme::card_translation(index)),
                Card {
                    index,
                    symbol: tile.symbol,
                },
                CardFace::default(),
                Pickable::default(),
                Name::new(format!("Card {} ({:?})", index, tile.symbol)),
            )
        })
        .collect();

    for bundle in cards {
        let symbol = bundle.2.symbol;
        commands
            .spawn(bundle)
            .observe(on_card_click)
            .observe(on_card_hover)
            .observe(on_card_unhover)
            .with_children(|parent| {
                parent.spawn((
                    Text2d::new(symbol.glyph().to_string()),
                    TextFont {
                        font_size: theme::GLYPH_SIZE,
                        ..default()
                    },
                    TextColor(theme::symbol_ink(symbol)),
                    Transform::from_xyz(0.0, 0.0, 1.0),
                    Visibility::Hidden,
                    SymbolLabel,
                    // The glyph must never swallow the click meant for its card.
                    Pickable::IGNORE,
                ));
            });
    }
}

pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, create_board);
    }
}
