//! Compile-time tunables shared by the point cloud spawner.
//!
//! Nothing here is read from disk or the environment. The engine copies these
//! values into its runtime resources at startup.

/// Point budget, batch size and the extent of generated positions.
pub mod point_budget;

/// Sprite shader uniforms and clear colour.
pub mod render_settings;

/// Perspective projection and initial eye position.
pub mod camera;

/// Directional and ambient light parameters.
pub mod lighting;
