/// Header: title, file count, storage usage and the latest event message.
use crate::state::DashboardState;
use crate::theme::NasBotTheme;
use crate::widgets::usage_bar::usage_bar;
use egui::{RichText, Ui};

/// Placeholder shown before the first event arrives.
const WAITING_MESSAGE: &str = "Waiting for file activity...";

pub fn header_panel(ui: &mut Ui, state: &DashboardState, theme: &NasBotTheme) {
    ui.vertical_centered(|ui| {
        ui.add_space(12.0);
        ui.label(
            RichText::new(&state.title)
                .size(32.0)
                .strong()
                .color(theme.title),
        );
        ui.add_space(12.0);

        ui.label(
            RichText::new(state.file_count_line())
                .size(20.0)
                .color(theme.readout),
        );
        ui.label(
            RichText::new(state.storage_line())
                .size(20.0)
                .color(theme.readout),
        );
        usage_bar(ui, theme, state.usage_percent(), 240.0, 6.0);
        ui.add_space(4.0);

        match &state.message {
            Some(message) => {
                ui.label(
                    RichText::new(message)
                        .size(16.0)
                        .strong()
                        .color(theme.message),
                );
            }
            None => {
                ui.label(
                    RichText::new(WAITING_MESSAGE)
                        .size(16.0)
                        .italics()
                        .color(theme.text_muted),
                );
            }
        }
        ui.add_space(8.0);
    });
}
