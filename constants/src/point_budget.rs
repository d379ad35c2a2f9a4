/// Total number of points the buffer is allocated for.
pub const MAX_POINTS: usize = 100_000;

/// Points generated and appended per frame while filling.
pub const POINTS_PER_FRAME: usize = 10_000;

/// Generated positions lie in `[-POSITION_EXTENT, POSITION_EXTENT]` on every axis.
pub const POSITION_EXTENT: f32 = 5.0;

/// Colour channels are drawn from `[0, COLOUR_MAX]`.
pub const COLOUR_MAX: f32 = 1.0;

/// Interval in seconds between fill progress notifications.
pub const PROGRESS_NOTIFY_INTERVAL_SECS: f32 = 0.5;
