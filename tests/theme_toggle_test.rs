// tests/theme_toggle_test.rs - Theme selection state machine and registry

use themed_todo::error::ThemeError;
use themed_todo::style::{resolve_item_style, InteractionState, ItemState};
use themed_todo::theme::{self, ThemeName};
use themed_todo::ui::app::TodoApp;

#[test]
fn test_app_starts_dark() {
    let app = TodoApp::default();
    assert_eq!(app.theme(), ThemeName::Dark);
    assert_eq!(app.active_theme(), ThemeName::Dark.record());
}

#[test]
fn test_toggle_flips_and_returns() {
    let mut app = TodoApp::default();
    app.toggle_theme();
    assert_eq!(app.theme(), ThemeName::Default);
    assert_eq!(app.active_theme().item_bg_color, egui::Color32::WHITE);
    app.toggle_theme();
    assert_eq!(app.theme(), ThemeName::Dark);
}

#[test]
fn test_unknown_theme_name_fails_fast() {
    let err = theme::lookup("neon").unwrap_err();
    assert_eq!(err, ThemeError::UnknownTheme("neon".to_string()));
    assert!(err.to_string().contains("neon"));
}

#[test]
fn test_hover_then_leave_restores_background() {
    for name in ThemeName::ALL {
        let record = name.record();
        let pending = ItemState { done: false };

        let hovered = resolve_item_style(
            record,
            pending,
            InteractionState { hovered: true, container_hovered: true },
        );
        assert_eq!(
            hovered.background,
            themed_todo::color::darken(record.item_bg_color, 0.15)
        );

        let left = resolve_item_style(
            record,
            pending,
            InteractionState { hovered: false, container_hovered: true },
        );
        assert_eq!(left.background, record.item_bg_color);
    }
}

#[test]
fn test_theme_name_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&ThemeName::Dark).unwrap(), "\"dark\"");
    assert_eq!(
        serde_json::from_str::<ThemeName>("\"default\"").unwrap(),
        ThemeName::Default
    );
}
