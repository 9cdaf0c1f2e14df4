//! Game plugin - Session state and per-frame logic
//!
//! Registers every session resource, the restart message, and the frame
//! systems for the memory game.
//!
//! # Plugin Dependencies
//!
//! This plugin depends on:
//! - [`bevy::DefaultPlugins`] - Required for ECS, rendering, and input
//! - [`bevy_egui::EguiPlugin`] - Required for the HUD and summary overlay
//!
//! # System Organization
//!
//! Per-frame systems run in [`GameSystems`] sets chained in order:
//! - `Input` - Drain restart requests (card clicks arrive via observers)
//! - `Execution` - Clock tick, flip-back resolution, win detection
//! - `Visual` - Mirror card face changes into sprites
//!
//! The egui systems (HUD panel and summary overlay) run in
//! `EguiPrimaryContextPass`, which is where bevy_egui expects UI painting.
//!
//! # Resources
//!
//! All game resources are initialized here. See [`super::resources`] for details.

use super::events::RestartRequested;
use super::resources::{FlipbackDelay, GameOverState, GameSession, SessionClock};
use super::system_sets::GameSystems;
use super::systems::{
    check_win, handle_restart, resolve_flipback, sync_card_faces, tick_session_clock,
};
use crate::ui::{hud_ui, summary_ui};
use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

/// Game plugin for Concentration
///
/// Registers all session resources and game systems. The board entities
/// themselves are spawned by [`crate::rendering::BoardPlugin`].
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        // Register resources
        app.init_resource::<GameSession>()
            .init_resource::<SessionClock>()
            .init_resource::<FlipbackDelay>()
            .init_resource::<GameOverState>();

        // Register types for reflection (needed for inspector)
        app.register_type::<SessionClock>()
            .register_type::<FlipbackDelay>()
            .register_type::<GameOverState>();

        app.add_message::<RestartRequested>();

        // Configure system sets to run in order: Input → Execution → Visual
        app.configure_sets(
            Update,
            (
                GameSystems::Input,
                GameSystems::Execution,
                GameSystems::Visual,
            )
                .chain(),
        );

        // Register per-frame systems
        // NOTE: Card input is done via observers on entities (.observe())
        // so there is no click-polling system here.
        app.add_systems(
            Update,
            (
                handle_restart.in_set(GameSystems::Input),
                tick_session_clock.in_set(GameSystems::Execution),
                resolve_flipback.in_set(GameSystems::Execution),
                check_win
                    .in_set(GameSystems::Execution)
                    .after(resolve_flipback),
                sync_card_faces.in_set(GameSystems::Visual),
            ),
        );

        // Add UI systems separately (egui requires EguiPrimaryContextPass)
        app.add_systems(EguiPrimaryContextPass, (hud_ui, summary_ui));
    }
}
