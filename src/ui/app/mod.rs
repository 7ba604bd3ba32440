use eframe::egui;

use crate::style::ItemStyle;
use crate::theme::{self, ThemeName, ThemeRecord};
use crate::ui::global_style::GlobalStyle;
use crate::ui::switcher::ThemeSwitcher;
use crate::ui::todo_ui::{self, TodoContainer};

/// What a frame rendered: the theme it read, each entry's resolved style
/// and where the switcher and entries were laid out.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPass {
    pub theme: ThemeName,
    pub item_styles: Vec<ItemStyle>,
    pub item_rects: Vec<egui::Rect>,
    pub switcher_rect: egui::Rect,
}

pub struct TodoApp {
    theme: ThemeName,
    container: TodoContainer,
    global_style: GlobalStyle,
    is_first_frame: bool,
}

impl Default for TodoApp {
    fn default() -> Self {
        Self {
            theme: theme::initial_theme(),
            container: TodoContainer::demo(),
            global_style: GlobalStyle::default(),
            is_first_frame: true,
        }
    }
}

impl TodoApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self::default();
        app.global_style.apply(&cc.egui_ctx);
        app.is_first_frame = false;
        app
    }

    pub fn theme(&self) -> ThemeName {
        self.theme
    }

    pub fn active_theme(&self) -> &'static ThemeRecord {
        self.theme.record()
    }

    pub fn toggle_theme(&mut self) {
        let previous = self.theme;
        self.theme = previous.toggled();
        tracing::info!("Theme switched: {} -> {}", previous, self.theme);
    }

    /// Draws one frame: the switcher first, then the themed list.
    pub fn show(&mut self, ctx: &egui::Context) -> RenderPass {
        if self.is_first_frame {
            self.global_style.apply(ctx);
            self.is_first_frame = false;
        }

        let mut toggle_requested = false;
        let switcher_rect = egui::TopBottomPanel::top("theme_switcher")
            .show(ctx, |ui| {
                ui.add_space(4.0);
                let response = ThemeSwitcher::new().show(ui, || toggle_requested = true);
                ui.add_space(4.0);
                response.rect
            })
            .inner;

        // Appliquer le changement avant de dessiner la liste
        if toggle_requested {
            self.toggle_theme();
            ctx.request_repaint();
        }

        let theme = self.active_theme();
        let rendered = egui::CentralPanel::default()
            .frame(todo_ui::container_frame())
            .show(ctx, |ui| self.container.show(ui, theme))
            .inner;
        let item_styles: Vec<ItemStyle> = rendered.iter().map(|entry| entry.style).collect();
        let item_rects = rendered.iter().map(|entry| entry.rect).collect();

        tracing::debug!("Rendered {} items with theme {}", item_styles.len(), self.theme);

        RenderPass {
            theme: self.theme,
            item_styles,
            item_rects,
            switcher_rect,
        }
    }
}

impl eframe::App for TodoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}
