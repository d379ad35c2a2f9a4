use bevy::prelude::*;
use constants::lighting::{
    AMBIENT_BRIGHTNESS, AMBIENT_SKY_COLOUR, MAIN_LIGHT_ILLUMINANCE, MAIN_LIGHT_POSITION,
};
use constants::render_settings::CLEAR_COLOUR;

/// Sky background, a key light and an ambient fill. The point sprites are
/// unlit; the lights only matter for anything lit added to the scene.
pub fn spawn_lighting(commands: &mut Commands) {
    commands.insert_resource(ClearColor(CLEAR_COLOUR));

    commands.spawn((
        DirectionalLight {
            illuminance: MAIN_LIGHT_ILLUMINANCE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(Vec3::from_array(MAIN_LIGHT_POSITION))
            .looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.insert_resource(AmbientLight {
        color: AMBIENT_SKY_COLOUR,
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    });
}
