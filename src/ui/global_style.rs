//! Document-level styling shared by every view.

use eframe::egui::{self, Color32, FontFamily, TextStyle};

pub const MODAL_WRAPPER_FILL: Color32 = Color32::from_rgb(0x14, 0x14, 0x14);

#[derive(Debug, Clone, PartialEq)]
pub struct GlobalStyle {
    pub font_family: FontFamily,
    pub body_size: f32,
    pub visuals: egui::Visuals,
}

impl Default for GlobalStyle {
    fn default() -> Self {
        Self {
            font_family: FontFamily::Proportional,
            body_size: 16.0,
            visuals: egui::Visuals::light(),
        }
    }
}

impl GlobalStyle {
    /// Replaces the context style. Monospace text keeps its own family.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();
        style.visuals = self.visuals.clone();
        for (text_style, font_id) in style.text_styles.iter_mut() {
            match text_style {
                TextStyle::Monospace => {}
                TextStyle::Body | TextStyle::Button => {
                    font_id.family = self.font_family.clone();
                    font_id.size = self.body_size;
                }
                _ => font_id.family = self.font_family.clone(),
            }
        }
        ctx.set_style(style);
    }
}

/// Background frame for modal overlays.
pub fn modal_wrapper_frame() -> egui::Frame {
    egui::Frame::none().fill(MODAL_WRAPPER_FILL)
}
