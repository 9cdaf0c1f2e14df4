//! UI module - egui overlays for the memory game
//!
//! - `hud` - Top panel with moves, time, stars, and the restart button
//! - `summary` - Centered win overlay with the frozen final statistics
//! - `styles` - Shared color palette
//!
//! Both systems run in `EguiPrimaryContextPass`, registered by
//! [`crate::game::GamePlugin`].

pub mod hud;
pub mod styles;
pub mod summary;

pub use hud::hud_ui;
pub use summary::summary_ui;
