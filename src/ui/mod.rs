pub mod app;
pub mod global_style;
pub mod icons;
pub mod switcher;
pub mod todo_ui;
