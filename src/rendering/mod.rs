//! Rendering module - card sprites and board presentation
//!
//! - `board` - Card grid spawning with per-entity picking observers
//! - `theme` - Grid geometry, card palette, and symbol ink colors

pub mod board;
pub mod theme;

pub use board::BoardPlugin;
