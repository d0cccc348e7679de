/// Main `eframe::App` implementation for NasBot.
///
/// This is the top-level UI layout that composes all panels and widgets.
use crate::panels;
use crate::state::DashboardState;
use crate::theme::NasBotTheme;
use crate::widgets;
use nasbot_core::config::DashboardConfig;
use nasbot_core::pipeline::WakeFn;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

/// Fallback repaint interval while live, in case a wake-up is missed.
const REPAINT_INTERVAL: Duration = Duration::from_millis(100);

/// Repaint target shared with background producers.
///
/// Producers start before the window exists, so the egui context is
/// attached later; wake-ups before that are dropped.
#[derive(Clone, Default)]
struct RepaintSlot(Arc<OnceLock<egui::Context>>);

impl RepaintSlot {
    fn wake_fn(&self) -> WakeFn {
        let slot = self.0.clone();
        Arc::new(move || {
            if let Some(ctx) = slot.get() {
                ctx.request_repaint();
            }
        })
    }

    fn attach(&self, ctx: &egui::Context) {
        let _ = self.0.set(ctx.clone());
    }
}

/// Pre-built application state.
///
/// Construct this **before** calling `eframe::run_native`: it validates the
/// watched directory and starts the watcher, so a bad path is reported
/// without ever opening a window.
pub struct NasBotState {
    pub(crate) inner: DashboardState,
    repaint: RepaintSlot,
}

impl NasBotState {
    /// Start watching `watch_path` with the given configuration.
    pub fn build(config: &DashboardConfig, watch_path: PathBuf) -> anyhow::Result<Self> {
        let repaint = RepaintSlot::default();
        let inner = DashboardState::start(config, watch_path, repaint.wake_fn())?;
        Ok(Self { inner, repaint })
    }

    pub fn title(&self) -> &str {
        &self.inner.title
    }
}

/// The NasBot application.
pub struct NasBotApp {
    state: DashboardState,
    theme: NasBotTheme,
}

impl NasBotApp {
    /// Create the application from pre-built state.
    pub fn with_state(cc: &eframe::CreationContext<'_>, state: NasBotState) -> Self {
        let theme = NasBotTheme::cyber();
        theme.apply(&cc.egui_ctx);
        state.repaint.attach(&cc.egui_ctx);

        Self {
            state: state.inner,
            theme,
        }
    }
}

impl eframe::App for NasBotApp {
    /// Override the GPU clear colour to match the panel background.
    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        let [r, g, b, a] = visuals.panel_fill.to_array();
        [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── Process background messages ───────────────────────────────────
        let _event_changed = self.state.process_pipeline_messages();
        let _frame_changed = self.state.process_animation_frames();

        // Animation runs for the lifetime of the window.
        ctx.request_repaint_after(REPAINT_INTERVAL);

        // ── Bottom status bar ─────────────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(24.0)
            .show(ctx, |ui| {
                ui.add_space(2.0);
                widgets::status_bar::status_bar(ui, &self.state, &self.theme);
                ui.add_space(2.0);
            });

        // ── Header ────────────────────────────────────────────────────────
        egui::TopBottomPanel::top("header")
            .show_separator_line(false)
            .show(ctx, |ui| {
                panels::header_panel::header_panel(ui, &self.state, &self.theme);
            });

        // ── Stage (rain + robot) ──────────────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    panels::stage_panel::stage_panel(ui, &self.state, &self.theme);
                });
        });
    }
}

impl Drop for NasBotApp {
    fn drop(&mut self) {
        tracing::info!("Window closed, stopping background threads");
        self.state.shutdown();
    }
}
