/// Dashboard panels.

pub mod header_panel;
pub mod stage_panel;
