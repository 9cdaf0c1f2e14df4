pub mod game;
pub mod rendering;
pub mod ui;
