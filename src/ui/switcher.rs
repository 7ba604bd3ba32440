//! The "Toggle theme" button.

use eframe::egui::{Button, Color32, Response, Stroke, Ui, Vec2};

pub const TOGGLE_LABEL: &str = "Toggle theme";

type ButtonCustomizer = Box<dyn FnOnce(Button<'static>) -> Button<'static>>;

/// Button asking the owner to switch theme.
///
/// It holds no state: build it every frame, hand it the callback, and it
/// calls the callback when clicked. Any attribute set here goes straight to
/// the underlying [`Button`].
#[derive(Default)]
pub struct ThemeSwitcher {
    min_size: Option<Vec2>,
    fill: Option<Color32>,
    stroke: Option<Stroke>,
    tooltip: Option<String>,
    disabled: bool,
    customize: Option<ButtonCustomizer>,
}

impl ThemeSwitcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_size(mut self, size: Vec2) -> Self {
        self.min_size = Some(size);
        self
    }

    pub fn fill(mut self, fill: impl Into<Color32>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn stroke(mut self, stroke: impl Into<Stroke>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }

    pub fn tooltip(mut self, text: impl Into<String>) -> Self {
        self.tooltip = Some(text.into());
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.disabled = !enabled;
        self
    }

    /// Escape hatch for any other `egui::Button` setting.
    pub fn with_button(mut self, customize: impl FnOnce(Button<'static>) -> Button<'static> + 'static) -> Self {
        self.customize = Some(Box::new(customize));
        self
    }

    pub fn show(self, ui: &mut Ui, on_toggle: impl FnOnce()) -> Response {
        let mut button = Button::new(TOGGLE_LABEL);
        if let Some(size) = self.min_size {
            button = button.min_size(size);
        }
        if let Some(fill) = self.fill {
            button = button.fill(fill);
        }
        if let Some(stroke) = self.stroke {
            button = button.stroke(stroke);
        }
        if let Some(customize) = self.customize {
            button = customize(button);
        }

        let mut response = ui.add_enabled(!self.disabled, button);
        if let Some(tooltip) = self.tooltip {
            response = response.on_hover_text(tooltip);
        }
        if response.clicked() {
            on_toggle();
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{self, vec2, Pos2, RawInput, Rect};

    fn headless_input() -> RawInput {
        RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(800.0, 600.0))),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_click_no_notification() {
        let ctx = egui::Context::default();
        let mut notified = false;
        let mut width = 0.0;
        let _ = ctx.run(headless_input(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let response = ThemeSwitcher::new()
                    .min_size(vec2(160.0, 30.0))
                    .fill(Color32::LIGHT_GRAY)
                    .tooltip("Switch between dark and default")
                    .with_button(|button| button.small())
                    .show(ui, || notified = true);
                width = response.rect.width();
            });
        });
        assert!(!notified);
        assert!(width >= 160.0);
    }

    #[test]
    fn test_disabled_switcher_is_not_interactive() {
        let ctx = egui::Context::default();
        let mut enabled = true;
        let _ = ctx.run(headless_input(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                enabled = ThemeSwitcher::new().enabled(false).show(ui, || {}).enabled;
            });
        });
        assert!(!enabled);
    }
}
