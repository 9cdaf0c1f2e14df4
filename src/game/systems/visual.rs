//! Card face synchronization
//!
//! Every transition that touches a card writes its [`CardFace`] component;
//! this system turns those changes into sprite color and glyph visibility.
//! Change detection keeps it idle on frames where nothing flipped.

use crate::game::components::{Card, CardFace, SymbolLabel};
use crate::rendering::theme;
use bevy::prelude::*;

/// System to mirror card face changes into sprites and glyphs
pub fn sync_card_faces(
    mut cards: Query<(&Card, &CardFace, &mut Sprite, &Children), Changed<CardFace>>,
    mut labels: Query<&mut Visibility, With<SymbolLabel>>,
) {
    for (card, face, mut sprite, children) in cards.iter_mut() {
        let (color, glyph_visible) = match face {
            CardFace::Hidden => (theme::CARD_BACK, false),
            CardFace::Revealed => (theme::CARD_FACE, true),
            CardFace::Matched => (theme::CARD_MATCHED, true),
        };
        sprite.color = color;

        for child in children.iter() {
            if let Ok(mut visibility) = labels.get_mut(child) {
                *visibility = if glyph_visible {
                    Visibility::Inherited
                } else {
                    Visibility::Hidden
                };
            }
        }

        trace!("[VISUAL] Card {} now {:?}", card.index, face);
    }
}
