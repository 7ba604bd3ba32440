//! Themed to-do list demo built on egui.

pub mod color;
pub mod config;
pub mod error;
pub mod logging;
pub mod style;
pub mod theme;
pub mod ui;
