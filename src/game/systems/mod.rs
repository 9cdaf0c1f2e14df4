//! Game systems module - ECS logic implementation
//!
//! Systems are functions that run each frame (or on events) to implement
//! game behavior. Card clicks do not go through a polled system at all:
//! each card entity carries picking observers attached at spawn time, so
//! the click routes straight to [`input::on_card_click`].
//!
//! # System Organization
//!
//! - [`input`] - Observer-based card click and hover handling
//! - [`game_logic`] - Clock tick, flip-back resolution, win detection
//! - [`restart`] - Restart message handling and board rebuild
//! - [`visual`] - Card face → sprite color and glyph visibility sync
//!
//! # System Execution Order
//!
//! Per-frame systems are organized into [`crate::game::system_sets::GameSystems`]
//! sets chained Input → Execution → Visual, so a restart is fully applied
//! before the win check runs, and face changes from either are mirrored in
//! the same frame.

pub mod game_logic;
pub mod input;
pub mod restart;
pub mod visual;

// Re-export all public systems for convenience
pub use game_logic::*;
pub use input::*;
pub use restart::*;
pub use visual::*;
