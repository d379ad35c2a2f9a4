//! Application setup.
//!
//! Builds the Bevy app, wires plugins and schedules, and configures the
//! window for native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Registers population, rendering, diagnostics and RPC plugins, and spawns
/// the camera, lights and native overlays at startup.
pub mod app_setup;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
