/// NasBot GUI — egui-based dashboard frontend.
///
/// This crate contains all UI code. Watching, formatting and statistics
/// live in `nasbot-core`.
pub mod app;
pub mod icon;
pub mod panels;
pub mod state;
pub mod theme;
pub mod widgets;

pub use app::{NasBotApp, NasBotState};
