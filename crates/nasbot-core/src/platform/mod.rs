/// Platform-specific functionality — volume capacity queries.

pub mod volume;

pub use volume::{volume_usage, VolumeUsage};
