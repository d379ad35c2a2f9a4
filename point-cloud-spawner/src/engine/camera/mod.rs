//! Orbit camera for inspecting the point cloud.
//!
//! Pointer drag orbits or pans around a focus point, the wheel zooms, and the
//! camera transform eases towards the target each frame.

/// Orbit camera resource, spawning and the per-frame controller system.
pub mod orbit_camera;
