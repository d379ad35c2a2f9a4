use bevy::prelude::*;
use bevy::window::PresentMode;

/// Selector of the canvas the host page provides.
#[cfg(target_arch = "wasm32")]
const CANVAS_SELECTOR: &str = "#scene-container";

pub fn create_window_config() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        Window {
            canvas: Some(CANVAS_SELECTOR.into()),
            fit_canvas_to_parent: true,
            // Wheel and drag belong to the orbit camera.
            prevent_default_event_handling: true,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            title: "Point Cloud Spawner".into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}
