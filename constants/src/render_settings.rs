use bevy::color::Color;

/// Base sprite size before distance attenuation.
pub const SPRITE_SIZE: f32 = 5.0;

/// Attenuation scale, pixels = size * scale / view depth.
pub const SPRITE_SCALE: f32 = 10.0;

/// Tint multiplied with every per-point colour.
pub const SPRITE_DIFFUSE: [f32; 3] = [1.0, 1.0, 1.0];

/// Alpha written by the sprite fragment stage.
pub const SPRITE_OPACITY: f32 = 0.1;

/// Blend sprites using their opacity. When false the alpha is written but ignored.
pub const SPRITE_TRANSPARENT: bool = false;

/// Fragments further than this from the sprite centre (unit sprite space) are discarded.
pub const SPRITE_MASK_RADIUS: f32 = 0.4;

/// Sky blue.
pub const CLEAR_COLOUR: Color = Color::srgb(0.529, 0.808, 0.922);
