/// Bottom status bar — watch status and event statistics.
use crate::state::{DashboardState, WatchStatus};
use crate::theme::NasBotTheme;
use egui::Ui;
use nasbot_core::model::size::format_count;

/// Draw the status bar at the bottom of the window.
pub fn status_bar(ui: &mut Ui, state: &DashboardState, theme: &NasBotTheme) {
    ui.horizontal(|ui| {
        match &state.watch_status {
            WatchStatus::Live => {
                ui.label(egui::RichText::new("\u{25cf} Live").size(12.0).color(theme.live));
            }
            WatchStatus::Stopped(reason) => {
                ui.label(
                    egui::RichText::new(format!("\u{23f9} Updates stopped: {reason}"))
                        .size(12.0)
                        .color(theme.stopped),
                );
            }
        }

        ui.separator();

        let path = state.watch_path().display().to_string();
        ui.label(
            egui::RichText::new(format!("Watching {}", truncate_path(&path, 60)))
                .size(12.0)
                .color(theme.text_muted),
        )
        .on_hover_text(path);

        ui.separator();

        ui.label(
            egui::RichText::new(format!("{} events", format_count(state.events_seen)))
                .size(12.0)
                .color(theme.text_muted),
        );

        if let Some(at) = state.last_event_at {
            ui.separator();
            ui.label(
                egui::RichText::new(format!("Last at {}", at.format("%H:%M:%S")))
                    .size(12.0)
                    .color(theme.text_muted),
            );
        }

        if state.stats_stale {
            ui.separator();
            ui.label(
                egui::RichText::new("Statistics stale (last refresh failed)")
                    .size(12.0)
                    .color(theme.warning),
            );
        }
    });
}

/// Truncate a path to `max_chars` characters, replacing the middle with
/// "...". Counts characters, not bytes, so multi-byte names never split.
fn truncate_path(path: &str, max_chars: usize) -> String {
    let count = path.chars().count();
    if count <= max_chars {
        return path.to_owned();
    }
    let half = max_chars.saturating_sub(3) / 2;
    let head: String = path.chars().take(half).collect();
    let tail: String = path.chars().skip(count - half).collect();
    format!("{head}...{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_path_unchanged() {
        assert_eq!(truncate_path("/srv/share", 60), "/srv/share");
    }

    #[test]
    fn test_truncate_long_path() {
        let long = format!("/srv/{}", "x".repeat(100));
        let out = truncate_path(&long, 21);
        assert_eq!(out.chars().count(), 21);
        assert!(out.starts_with("/srv/xxxx"));
        assert!(out.contains("..."));
    }

    #[test]
    fn test_truncate_multibyte() {
        let path = "/données/".repeat(10);
        let out = truncate_path(&path, 15);
        assert_eq!(out.chars().count(), 15);
    }
}
