//! End-of-game summary overlay
//!
//! A centered floating window shown once every pair is found, with the
//! frozen final statistics and a play-again button. The board stays visible
//! behind it; restart tears both down together.

use crate::game::events::RestartRequested;
use crate::game::resources::GameOverState;
use crate::game::rules::star_glyphs;
use crate::ui::hud::format_time;
use crate::ui::styles::UiColors;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

/// System to display the win summary overlay
pub fn summary_ui(
    mut contexts: EguiContexts,
    game_over: Res<GameOverState>,
    mut restart: MessageWriter<RestartRequested>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let Some(summary) = game_over.summary() else {
        return;
    };

    egui::Window::new("game_summary")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(
            egui::Frame::default()
                .fill(UiColors::BG_OVERLAY)
                .corner_radius(10.0)
                .inner_margin(25.0)
                .stroke(egui::Stroke::new(1.0, UiColors::BORDER)),
        )
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("You won!")
                        .size(28.0)
                        .color(UiColors::ACCENT_GOLD)
                        .strong(),
                );
                ui.add_space(10.0);

                ui.label(
                    egui::RichText::new(star_glyphs(summary.stars))
                        .size(24.0)
                        .color(UiColors::ACCENT_GOLD),
                );

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                ui.label(
                    egui::RichText::new(format!("Moves: {}", summary.moves))
                        .size(16.0)
                        .color(UiColors::TEXT_PRIMARY),
                );
                ui.label(
                    egui::RichText::new(format!("Time: {}", format_time(summary.seconds)))
                        .size(16.0)
                        .color(UiColors::TEXT_PRIMARY),
                );

                ui.add_space(12.0);
                if ui.button(egui::RichText::new("Play again").size(16.0)).clicked() {
                    restart.write(RestartRequested);
                }
            });
        });
}
