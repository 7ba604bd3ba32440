//! To-do list widgets: the container, plain items and deleted items.

use eframe::egui::{self, pos2, vec2, Color32, FontId, Rect, Sense, Stroke, Ui, Vec2};

use crate::style::{
    resolve_deleted_item_style, resolve_item_style, Decoration, InteractionState, ItemState,
    ItemStyle,
};
use crate::theme::ThemeRecord;

/// Fond du conteneur, identique quel que soit le thème
pub const CONTAINER_BG: Color32 = Color32::from_rgb(0xeb, 0xeb, 0xeb);
pub const BASE_FONT_SIZE: f32 = 16.0;
pub const FONT_SCALE: f32 = 3.0;
pub const ITEM_GAP: f32 = 6.0;
pub const ITEM_PADDING: Vec2 = Vec2::new(6.0, 4.0);
/// `#141414a1`, premultiplied.
pub const SHADOW_COLOR: Color32 = Color32::from_rgba_premultiplied(13, 13, 13, 0xa1);

/// Resolved style of one entry and the layout slot it was given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderedEntry {
    pub style: ItemStyle,
    pub rect: Rect,
}

/// One to-do entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub label: String,
    pub done: bool,
}

impl Item {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            done: false,
        }
    }

    pub fn done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    pub fn state(&self) -> ItemState {
        ItemState { done: self.done }
    }

    pub fn resolve(&self, theme: &ThemeRecord, interaction: InteractionState) -> ItemStyle {
        resolve_item_style(theme, self.state(), interaction)
    }

    fn show(&self, ui: &mut Ui, theme: &ThemeRecord, font_id: &FontId, container_hovered: bool) -> RenderedEntry {
        paint_entry(ui, &self.label, font_id, container_hovered, |interaction| {
            self.resolve(theme, interaction)
        })
    }
}

/// An [`Item`] that is always done and always painted red.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedItem {
    item: Item,
}

impl DeletedItem {
    pub fn new(label: impl Into<String>) -> Self {
        Item::new(label).into()
    }

    pub fn label(&self) -> &str {
        &self.item.label
    }

    pub fn state(&self) -> ItemState {
        self.item.state()
    }

    pub fn resolve(&self, theme: &ThemeRecord, interaction: InteractionState) -> ItemStyle {
        resolve_deleted_item_style(theme, interaction)
    }

    fn show(&self, ui: &mut Ui, theme: &ThemeRecord, font_id: &FontId, container_hovered: bool) -> RenderedEntry {
        paint_entry(ui, self.label(), font_id, container_hovered, |interaction| {
            self.resolve(theme, interaction)
        })
    }
}

impl From<Item> for DeletedItem {
    fn from(item: Item) -> Self {
        Self {
            item: item.done(true),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoEntry {
    Item(Item),
    Deleted(DeletedItem),
}

impl TodoEntry {
    pub fn label(&self) -> &str {
        match self {
            TodoEntry::Item(item) => &item.label,
            TodoEntry::Deleted(deleted) => deleted.label(),
        }
    }

    pub fn state(&self) -> ItemState {
        match self {
            TodoEntry::Item(item) => item.state(),
            TodoEntry::Deleted(deleted) => deleted.state(),
        }
    }

    pub fn resolve(&self, theme: &ThemeRecord, interaction: InteractionState) -> ItemStyle {
        match self {
            TodoEntry::Item(item) => item.resolve(theme, interaction),
            TodoEntry::Deleted(deleted) => deleted.resolve(theme, interaction),
        }
    }

    fn show(&self, ui: &mut Ui, theme: &ThemeRecord, font_id: &FontId, container_hovered: bool) -> RenderedEntry {
        match self {
            TodoEntry::Item(item) => item.show(ui, theme, font_id, container_hovered),
            TodoEntry::Deleted(deleted) => deleted.show(ui, theme, font_id, container_hovered),
        }
    }
}

impl From<Item> for TodoEntry {
    fn from(item: Item) -> Self {
        TodoEntry::Item(item)
    }
}

impl From<DeletedItem> for TodoEntry {
    fn from(deleted: DeletedItem) -> Self {
        TodoEntry::Deleted(deleted)
    }
}

/// Vertical list of entries centered in the available space.
#[derive(Debug, Clone, Default)]
pub struct TodoContainer {
    entries: Vec<TodoEntry>,
}

impl TodoContainer {
    pub fn new(entries: Vec<TodoEntry>) -> Self {
        Self { entries }
    }

    /// La liste fixe affichée par l'application
    pub fn demo() -> Self {
        Self::new(vec![
            Item::new("Read the docs").done(true).into(),
            Item::new("Practice what u have learnt").done(true).into(),
            Item::new("Give a lesson").into(),
            Item::new("Practice more").into(),
            DeletedItem::new("Deleted Item").into(),
        ])
    }

    pub fn entries(&self) -> &[TodoEntry] {
        &self.entries
    }

    /// Draws every entry with `theme` and returns what was drawn, in order.
    pub fn show(&self, ui: &mut Ui, theme: &ThemeRecord) -> Vec<RenderedEntry> {
        let container_hovered = ui.rect_contains_pointer(ui.max_rect());
        let font_id = FontId::proportional(BASE_FONT_SIZE * FONT_SCALE);

        let content_height = self
            .entries
            .iter()
            .map(|entry| entry_size(ui, entry.label(), &font_id).y)
            .sum::<f32>()
            + ITEM_GAP * self.entries.len().saturating_sub(1) as f32;
        let top = ((ui.available_height() - content_height) / 2.0).max(0.0);

        let mut rendered = Vec::with_capacity(self.entries.len());
        ui.vertical_centered(|ui| {
            ui.spacing_mut().item_spacing.y = ITEM_GAP;
            ui.add_space(top);
            for entry in &self.entries {
                rendered.push(entry.show(ui, theme, &font_id, container_hovered));
            }
        });
        rendered
    }
}

fn entry_size(ui: &Ui, label: &str, font_id: &FontId) -> Vec2 {
    let galley = ui
        .painter()
        .layout_no_wrap(label.to_owned(), font_id.clone(), Color32::BLACK);
    galley.size() + ITEM_PADDING * 2.0
}

fn paint_entry(
    ui: &mut Ui,
    label: &str,
    font_id: &FontId,
    container_hovered: bool,
    resolve: impl Fn(InteractionState) -> ItemStyle,
) -> RenderedEntry {
    let size = entry_size(ui, label, font_id);
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());

    // Hover is tested against the scaled box that actually gets painted.
    let scale = resolve(InteractionState {
        hovered: false,
        container_hovered,
    })
    .scale;
    let painted = Rect::from_center_size(rect.center(), rect.size() * scale);
    let style = resolve(InteractionState {
        hovered: ui.rect_contains_pointer(painted),
        container_hovered,
    });

    if !ui.is_rect_visible(painted) {
        return RenderedEntry { style, rect };
    }

    let painter = ui.painter();
    painter.rect_filled(painted.translate(vec2(1.0, 1.0)).expand(0.5), 0.0, SHADOW_COLOR);
    painter.rect_filled(painted, 0.0, style.background);

    let font_id = FontId::new(font_id.size * style.scale, font_id.family.clone());
    let stroke_width = (font_id.size / 20.0).max(1.0);
    let galley = painter.layout_no_wrap(label.to_owned(), font_id, style.foreground);
    let text_rect = Rect::from_center_size(painted.center(), galley.size());
    painter.galley(text_rect.min, galley, style.foreground);

    if style.decoration == Decoration::Strikethrough {
        let y = text_rect.center().y;
        painter.line_segment(
            [pos2(text_rect.left(), y), pos2(text_rect.right(), y)],
            Stroke::new(stroke_width, style.foreground),
        );
    }

    RenderedEntry { style, rect }
}

/// Frame used by the list background.
pub fn container_frame() -> egui::Frame {
    egui::Frame::none().fill(CONTAINER_BG)
}
