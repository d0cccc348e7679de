/// The stage: binary rain either side of the ASCII robot, centred as one
/// row in the available space.
use crate::state::DashboardState;
use crate::theme::NasBotTheme;
use crate::widgets::ascii_block::{layout_block, show_block};
use egui::Ui;

const RAIN_FONT_SIZE: f32 = 14.0;
const ROBOT_FONT_SIZE: f32 = 14.0;
/// Gap between each rain pane and the robot.
const PANE_GAP: f32 = 16.0;

pub fn stage_panel(ui: &mut Ui, state: &DashboardState, theme: &NasBotTheme) {
    let left = layout_block(ui, &state.rain_left, RAIN_FONT_SIZE, theme.rain);
    let robot = layout_block(ui, &state.robot_text(), ROBOT_FONT_SIZE, theme.robot);
    let right = layout_block(ui, &state.rain_right, RAIN_FONT_SIZE, theme.rain);

    // Rain panes may be empty before their first frame; reserve the width
    // of the robot's neighbours anyway so the robot does not jump.
    let rain_width = left.size().x.max(right.size().x);
    let row_width = robot.size().x + 2.0 * (rain_width + PANE_GAP);
    let lead = ((ui.available_width() - row_width) / 2.0).max(0.0);

    ui.horizontal_top(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.add_space(lead);

        // Left pane hugs the robot: pad on its outer side.
        ui.add_space(rain_width - left.size().x);
        show_block(ui, left);
        ui.add_space(PANE_GAP);
        show_block(ui, robot);
        ui.add_space(PANE_GAP);
        show_block(ui, right);
    });
}
