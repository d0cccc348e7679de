/// UI widgets for NasBot.

pub mod ascii_block;
pub mod status_bar;
pub mod usage_bar;
