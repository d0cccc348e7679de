/// Colour scheme for the dashboard.
///
/// Black terminal look: cyan title, yellow readouts, green binary rain,
/// white robot. All colour constants live here so the rest of the UI code
/// references semantically-named values rather than raw hex codes.

use egui::{Color32, Stroke, Visuals};

/// Semantic colour palette.
pub struct NasBotTheme {
    pub background: Color32,
    pub surface: Color32,
    pub title: Color32,
    pub readout: Color32,
    pub message: Color32,
    pub rain: Color32,
    pub robot: Color32,
    pub text_muted: Color32,
    pub live: Color32,
    pub stopped: Color32,
    pub warning: Color32,
    pub bar_low: Color32,
    pub bar_high: Color32,
    pub separator: Color32,
}

impl Default for NasBotTheme {
    fn default() -> Self {
        Self::cyber()
    }
}

impl NasBotTheme {
    pub fn cyber() -> Self {
        Self {
            background: Color32::BLACK,
            surface: Color32::from_rgb(0x10, 0x10, 0x14),
            title: Color32::from_rgb(0x00, 0xff, 0xff),
            readout: Color32::from_rgb(0xff, 0xff, 0x00),
            message: Color32::from_rgb(0xff, 0xff, 0x00),
            rain: Color32::from_rgb(0x00, 0xc0, 0x00),
            robot: Color32::WHITE,
            text_muted: Color32::from_rgb(0x6c, 0x70, 0x86),
            live: Color32::from_rgb(0xa6, 0xe3, 0xa1),
            stopped: Color32::from_rgb(0xf3, 0x8b, 0xa8),
            warning: Color32::from_rgb(0xfa, 0xb3, 0x87),
            bar_low: Color32::from_rgb(0x00, 0xc0, 0x00),
            bar_high: Color32::from_rgb(0xf3, 0x8b, 0xa8),
            separator: Color32::from_rgb(0x2a, 0x2a, 0x3c),
        }
    }

    /// Apply this theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();

        let mut visuals = Visuals::dark();
        visuals.panel_fill = self.background;
        visuals.window_fill = self.surface;
        visuals.extreme_bg_color = self.background;
        visuals.faint_bg_color = self.surface;

        visuals.widgets.noninteractive.bg_fill = self.background;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.robot);
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.separator);
        visuals.window_stroke = Stroke::new(1.0, self.separator);

        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }

    /// Usage bar colour, from `bar_low` at 0 % to `bar_high` at 100 %.
    pub fn bar_color(&self, percent: f32) -> Color32 {
        let t = (percent / 100.0).clamp(0.0, 1.0);
        lerp_color(self.bar_low, self.bar_high, t)
    }
}

/// Linear interpolation between two colours.
fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    Color32::from_rgb(
        (a.r() as f32 * (1.0 - t) + b.r() as f32 * t) as u8,
        (a.g() as f32 * (1.0 - t) + b.g() as f32 * t) as u8,
        (a.b() as f32 * (1.0 - t) + b.b() as f32 * t) as u8,
    )
}
