//! Game resources - Global session state management
//!
//! Resources are ECS singletons that provide shared mutable state across
//! systems. Unlike components (which are attached to entities), resources
//! exist globally and can be accessed by any system that needs them.
//!
//! # Resource Categories
//!
//! ## Session State
//! - [`GameSession`] - Owns the pure [`crate::game::rules::Board`]; the
//!   board's methods are the only mutators of round state
//! - [`GameOverState`] - InProgress / Won with the frozen summary snapshot
//!
//! ## Timing
//! - [`SessionClock`] - Whole-second clock running from the first reveal
//! - [`FlipbackDelay`] - One-shot 1000 ms delay before a mismatched pair
//!   turns back down, with an explicit cancellation handle
//!
//! # Integration
//!
//! All resources are initialized in [`crate::game::plugin::GamePlugin`] and
//! accessed via system parameters:
//!
//! ```rust,ignore
//! fn my_system(
//!     mut session: ResMut<GameSession>,
//!     clock: Res<SessionClock>,
//!     game_over: Res<GameOverState>,
//! ) {
//!     if game_over.is_game_over() {
//!         return;
//!     }
//!     if let Some(outcome) = session.board.reveal(3) {
//!         // mirror the outcome into sprites
//!     }
//! }
//! ```

pub mod clock;
pub mod flipback;
pub mod game_over;
pub mod session;

// Re-export all resources for convenience
pub use clock::*;
pub use flipback::*;
pub use game_over::*;
pub use session::*;
