//! Runtime diagnostics and host notifications.
//!
//! FPS and fill progress overlays (native), RPC notifications to the
//! embedding page, resize and GPU adapter logging.

/// Fill progress overlay, progress notifications and the completion report.
pub mod fill_progress;

/// FPS tracking and notification systems for performance monitoring.
///
/// Sends frame rate updates to frontend via RPC and updates native UI overlays.
pub mod fps_tracking;

/// One-time graphics adapter report.
pub mod gpu_info;

pub mod viewport;
