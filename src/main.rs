use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use concentration::game::GamePlugin;
use concentration::rendering::{theme, BoardPlugin};

const WINDOW_WIDTH: u32 = 1280;
const WINDOW_HEIGHT: u32 = 820;

fn main() {
    let window = Window {
        title: "Concentration".to_string(),
        resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
        ..default()
    };
    let primary_window = Some(window);

    App::new()
        // Core plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window,
            ..default()
        }))
        .add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: false,
            ..Default::default()
        })

        // Game systems
        .add_plugins(GamePlugin)
        .add_plugins(BoardPlugin)

        // Startup systems
        .insert_resource(ClearColor(theme::TABLE))
        .add_systems(Startup, setup)
        .run();
}

fn setup(mut commands: Commands) {
    // The whole board is 2D sprites; egui draws over it.
    commands.spawn(Camera2d);
}
