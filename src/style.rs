//! Resolves concrete item styles from the active theme.
//!
//! Everything here is a pure function of its inputs and cheap enough to be
//! called for every item on every frame.

use eframe::egui::Color32;

use crate::color::darken;
use crate::theme::ThemeRecord;

/// Foreground used for finished items, whatever the theme.
pub const DONE_COLOR: Color32 = Color32::from_rgb(0x80, 0x80, 0x80);
/// Foreground of deleted items, whatever the theme.
pub const DELETED_COLOR: Color32 = Color32::from_rgb(0xff, 0x00, 0x00);
/// Lightness removed from the item background while it is hovered.
pub const HOVER_DARKEN: f32 = 0.15;
/// Scale applied to every item while the pointer is over the container.
pub const CONTAINER_HOVER_SCALE: f32 = 1.012;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemState {
    pub done: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub hovered: bool,
    pub container_hovered: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Decoration {
    #[default]
    None,
    Strikethrough,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemStyle {
    pub foreground: Color32,
    pub background: Color32,
    pub decoration: Decoration,
    pub scale: f32,
}

pub fn resolve_item_style(
    theme: &ThemeRecord,
    item: ItemState,
    interaction: InteractionState,
) -> ItemStyle {
    let (foreground, decoration) = if item.done {
        (DONE_COLOR, Decoration::Strikethrough)
    } else {
        (theme.item_color, Decoration::None)
    };

    let background = if interaction.hovered {
        darken(theme.item_bg_color, HOVER_DARKEN)
    } else {
        theme.item_bg_color
    };

    let scale = if interaction.container_hovered {
        CONTAINER_HOVER_SCALE
    } else {
        1.0
    };

    ItemStyle {
        foreground,
        background,
        decoration,
        scale,
    }
}

/// Style of a deleted item: a finished item painted red.
pub fn resolve_deleted_item_style(theme: &ThemeRecord, interaction: InteractionState) -> ItemStyle {
    ItemStyle {
        foreground: DELETED_COLOR,
        ..resolve_item_style(theme, ItemState { done: true }, interaction)
    }
}
