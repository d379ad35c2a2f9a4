use bevy::color::Color;

/// Directional light position, aimed at the origin.
pub const MAIN_LIGHT_POSITION: [f32; 3] = [10.0, 10.0, 10.0];
pub const MAIN_LIGHT_ILLUMINANCE: f32 = 5_000.0;

/// Sky tint of the ambient fill light.
pub const AMBIENT_SKY_COLOUR: Color = Color::srgb(0.867, 0.933, 1.0);
pub const AMBIENT_BRIGHTNESS: f32 = 500.0;
