//! System organization using SystemSets
//!
//! Defines execution order for game systems using Bevy's SystemSet feature.
//! This prevents subtle timing bugs by making system dependencies explicit.
//!
//! # Execution Order
//!
//! Systems run in this order each frame:
//! 1. **Input** - Drain restart requests (card clicks arrive via observers)
//! 2. **Execution** - Advance the clock, resolve flip-backs, detect the win
//! 3. **Visual** - Mirror card face changes into sprites and glyphs

use bevy::prelude::*;

/// System execution order for game logic
///
/// Each set runs in the order defined here, ensuring proper data flow
/// from input → execution → visual updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SystemSet)]
pub enum GameSystems {
    /// Request handling (restart messages; card clicks use observers)
    Input,

    /// Game state execution
    ///
    /// Systems: clock tick, flip-back resolution, win detection
    Execution,

    /// Visual updates
    ///
    /// Systems: card face → sprite color and glyph visibility sync
    Visual,
}
