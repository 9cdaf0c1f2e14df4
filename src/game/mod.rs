//! Memory game logic module - Complete Concentration implementation with ECS
//!
//! Implements the memory-matching card game using Bevy's ECS architecture,
//! with clean separation between pure game logic and ECS systems.
//!
//! # Module Organization
//!
//! - `rules` - Pure game logic (deck, round state machine, scoring)
//! - `components` - ECS components (Card, CardFace, SymbolLabel)
//! - `resources` - Global session state (GameSession, SessionClock, FlipbackDelay, GameOverState)
//! - `systems` - ECS systems for gameplay (input, game_logic, restart, visual)
//! - `events` - Buffered messages (RestartRequested)
//! - `error` - Board construction errors
//! - `plugin` - GamePlugin that registers everything with reflection support
//!
//! # ECS Architecture
//!
//! **Data-Oriented Design**:
//! - Components hold data (card slot, mirrored face state)
//! - Resources track global state (the board, the clock, the flip-back delay)
//! - Systems implement behavior (handle clicks, resolve delays, update visuals)
//!
//! The pure [`rules::Board`] owns every round transition; systems translate
//! between picking events and board calls, and between board state and
//! sprites. That split keeps the whole game playable in tests without
//! opening a window.

pub mod components;
pub mod error;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod rules;
pub mod system_sets;
pub mod systems;

// Re-export the plugin (main entry point)
pub use plugin::GamePlugin;
