/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 35.0;

pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;

/// Initial eye position, looking at the origin.
pub const CAMERA_EYE: [f32; 3] = [-2.0, 2.0, 10.0];

/// Orbit distance limits.
pub const CAMERA_MIN_DISTANCE: f32 = 1.0;
pub const CAMERA_MAX_DISTANCE: f32 = 60.0;

/// Radians per pixel of pointer motion while orbiting.
pub const ORBIT_SENSITIVITY: f32 = 0.005;

/// World units per pixel per unit of distance while panning.
pub const PAN_SENSITIVITY: f32 = 0.0015;

/// Multiplicative zoom step per wheel line.
pub const ZOOM_STEP: f32 = 0.9;

/// Per-second easing rate of the camera transform towards its target.
pub const CAMERA_DAMPING: f32 = 12.0;
