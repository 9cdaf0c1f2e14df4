//! Card entity components module
//!
//! Components are pure data structures with no logic. Each card sprite
//! carries its board slot and a mirrored face state; the glyph text child
//! carries a marker so visibility sync can find it.

pub mod card;


// Re-export all components for convenience
pub use card::*;
