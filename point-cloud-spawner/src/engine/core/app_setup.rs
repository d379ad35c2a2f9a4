use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;

use crate::engine::camera::orbit_camera::{orbit_camera_controller, spawn_orbit_camera};
use crate::engine::core::window_config::create_window_config;
use crate::engine::population::{FrameSet, PopulationPlugin};
use crate::engine::render::PointSpriteRenderPlugin;
use crate::engine::scene::lighting::spawn_lighting;
use crate::engine::systems::fill_progress::{
    FillText, announce_population_complete, fill_progress_notification_system,
    fill_text_update_system,
};
use crate::engine::systems::fps_tracking::{
    FpsText, fps_notification_system, fps_text_update_system,
};
use crate::engine::systems::gpu_info::report_gpu_adapter;
use crate::engine::systems::viewport::log_window_resize;
use crate::rpc::web_rpc::WebRpcPlugin;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(WebRpcPlugin)
        .add_plugins(PopulationPlugin)
        .add_plugins(PointSpriteRenderPlugin);

    app.add_systems(Startup, (setup, report_gpu_adapter))
        .add_systems(
            Update,
            orbit_camera_controller.in_set(FrameSet::Interaction),
        )
        .add_systems(
            Update,
            (
                announce_population_complete,
                fill_progress_notification_system,
                fps_notification_system,
                log_window_resize,
            )
                .after(FrameSet::Populate),
        );

    // Overlay text only exists on native builds.
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(
            Update,
            (fps_text_update_system, fill_text_update_system).after(FrameSet::Populate),
        );
    }

    app
}

fn setup(mut commands: Commands) {
    info!("=== INCREMENTAL POINT CLOUD ===");

    spawn_lighting(&mut commands);
    spawn_orbit_camera(&mut commands);

    #[cfg(not(target_arch = "wasm32"))]
    {
        create_native_overlays(&mut commands);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn create_native_overlays(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
            parent.spawn((
                Text::new("Points: 0"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.1, 0.1, 0.1)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    left: Val::Px(12.0),
                    ..default()
                },
                FillText,
            ));
        });
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
