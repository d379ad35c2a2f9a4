use bevy::prelude::*;
use bevy::window::WindowResized;

/// Bevy's camera system refits the projection aspect and viewport on resize;
/// this only records the event.
pub fn log_window_resize(mut resize_events: EventReader<WindowResized>) {
    for event in resize_events.read() {
        debug!("Viewport resized to {:.0}x{:.0}", event.width, event.height);
    }
}
