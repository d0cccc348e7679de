/// Monospace text blocks (robot art, binary rain).
use egui::{Color32, FontId, Galley, Ui};
use std::sync::Arc;

/// Lay out `text` as an unwrapped monospace block.
pub fn layout_block(ui: &Ui, text: &str, size: f32, color: Color32) -> Arc<Galley> {
    ui.fonts(|fonts| fonts.layout_no_wrap(text.to_owned(), FontId::monospace(size), color))
}

/// Paint a pre-laid-out block at the current cursor and advance past it.
pub fn show_block(ui: &mut Ui, galley: Arc<Galley>) {
    let (rect, _) = ui.allocate_exact_size(galley.size(), egui::Sense::hover());
    ui.painter().galley(rect.min, galley, Color32::PLACEHOLDER);
}
