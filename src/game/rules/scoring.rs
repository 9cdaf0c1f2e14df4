//! Star rating policy
//!
//! The rating depends only on the completed-move count, so it is
//! monotonically non-increasing while a session runs: 3 stars below 20
//! moves, 2 stars from 20, 1 star from 30. A restart starts a fresh count
//! and therefore a fresh 3-star rating.

/// Best rating, held until the first threshold.
pub const MAX_STARS: u8 = 3;

/// Move count at which the rating drops to 2 stars.
pub const STAR_TWO_AT: u32 = 20;

/// Move count at which the rating drops to 1 star.
pub const STAR_ONE_AT: u32 = 30;

/// Star rating for a completed-move count.
pub fn stars_for_moves(moves: u32) -> u8 {
    if moves >= STAR_ONE_AT {
        1
    } else if moves >= STAR_TWO_AT {
        2
    } else {
        MAX_STARS
    }
}

/// Filled/hollow glyph strip for a rating, e.g. `★★☆` for 2 stars.
///
/// Lost stars stay visible as hollow glyphs so the strip keeps a constant
/// width in the HUD and the summary.
pub fn star_glyphs(stars: u8) -> String {
    let filled = usize::from(stars.min(MAX_STARS));
    let mut glyphs = String::new();
    for _ in 0..filled {
        glyphs.push('★');
    }
    for _ in filled..usize::from(MAX_STARS) {
        glyphs.push('☆');
    }
    glyphs
}
