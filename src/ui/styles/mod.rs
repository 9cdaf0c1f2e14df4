//! UI styling constants

pub mod colors;

pub use colors::UiColors;
