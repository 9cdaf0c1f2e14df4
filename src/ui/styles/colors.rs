//! Color palette for the Concentration UI
//!
//! Dark table-felt backgrounds with gold accents for the star rating.
//! Colors are defined as egui::Color32 for direct use in UI code.

use bevy_egui::egui;

/// Primary UI color palette
pub struct UiColors;

impl UiColors {
    /// Overlay background (semi-transparent, summary window)
    pub const BG_OVERLAY: egui::Color32 = egui::Color32::from_black_alpha(220);

    /// Primary accent (gold - star rating and the win heading)
    pub const ACCENT_GOLD: egui::Color32 = egui::Color32::from_rgb(218, 165, 32);

    /// Success color (green - the HUD result line)
    pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(40, 180, 40);

    /// Primary text (counters, timer)
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(240, 240, 245);

    /// Secondary text (pair progress)
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(200, 200, 205);

    /// Border color
    pub const BORDER: egui::Color32 = egui::Color32::from_rgb(60, 60, 65);
}
