//! In-game HUD for the memory game
//!
//! Top panel with the live session readout:
//! - Move counter (completed pair-attempts)
//! - Elapsed time since the first reveal
//! - Star rating as filled/hollow glyphs
//! - Restart button
//!
//! # Bevy Egui Patterns
//!
//! Runs in `EguiPrimaryContextPass` and bails out quietly when the egui
//! context is not available (e.g. during window teardown).

use crate::game::events::RestartRequested;
use crate::game::resources::{GameOverState, GameSession, SessionClock};
use crate::game::rules::star_glyphs;
use crate::ui::styles::UiColors;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

/// System to display the session HUD
pub fn hud_ui(
    mut contexts: EguiContexts,
    session: Res<GameSession>,
    clock: Res<SessionClock>,
    game_over: Res<GameOverState>,
    mut restart: MessageWriter<RestartRequested>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::TopBottomPanel::top("game_hud").resizable(false).show(ctx, |ui| {
        ui.add_space(5.0);
        ui.set_min_height(36.0);

        ui.horizontal(|ui| {
            ui.set_width(ui.available_width());

            // Left: moves and pairs
            ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
                ui.add_space(10.0);
                ui.label(
                    egui::RichText::new(format!("Moves: {}", session.board.moves()))
                        .size(16.0)
                        .color(UiColors::TEXT_PRIMARY)
                        .strong(),
                );
                ui.add_space(14.0);
                ui.label(
                    egui::RichText::new(format!(
                        "Pairs: {}/{}",
                        session.board.matches(),
                        session.board.len() / 2
                    ))
                    .size(16.0)
                    .color(UiColors::TEXT_SECONDARY),
                );
            });

            // Center: timer and stars
            ui.allocate_ui_with_layout(
                egui::vec2(ui.available_width(), 0.0),
                egui::Layout::top_down(egui::Align::Center),
                |ui| {
                    ui.label(
                        egui::RichText::new(format_time(clock.seconds()))
                            .size(18.0)
                            .color(UiColors::TEXT_PRIMARY)
                            .strong(),
                    );
                    ui.label(
                        egui::RichText::new(star_glyphs(session.board.stars()))
                            .size(16.0)
                            .color(UiColors::ACCENT_GOLD),
                    );
                    if game_over.is_game_over() {
                        ui.colored_label(
                            UiColors::SUCCESS,
                            egui::RichText::new(game_over.message()).size(14.0),
                        );
                    }
                },
            );

            // Right: restart button
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_space(10.0);
                if ui.button("Restart").clicked() {
                    restart.write(RestartRequested);
                }
            });
        });
        ui.add_space(5.0);
    });
}

/// Format whole seconds as MM:SS
pub(crate) fn format_time(seconds: u64) -> String {
    let minutes = seconds / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}", minutes, secs)
}
