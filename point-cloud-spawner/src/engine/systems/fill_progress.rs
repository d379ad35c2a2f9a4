use bevy::prelude::*;
use constants::point_budget::PROGRESS_NOTIFY_INTERVAL_SECS;

use crate::engine::population::systems::{PointCloudPopulation, PopulationComplete};
use crate::rpc::web_rpc::WebRpcInterface;

#[derive(Component)]
pub struct FillText;

/// Periodic `fill_progress` notification while the buffer is filling.
pub fn fill_progress_notification_system(
    mut rpc_interface: ResMut<WebRpcInterface>,
    population: Res<PointCloudPopulation>,
    mut last_send_time: Local<f32>,
    time: Res<Time>,
) {
    if population.populator.is_done() {
        return;
    }

    let current_time = time.elapsed_secs();
    if current_time - *last_send_time >= PROGRESS_NOTIFY_INTERVAL_SECS {
        rpc_interface.send_notification(
            "fill_progress",
            serde_json::json!({
                "filled": population.buffer.len(),
                "capacity": population.buffer.capacity(),
            }),
        );
        *last_send_time = current_time;
    }
}

/// Log the one-time completion and forward it to the host page.
pub fn announce_population_complete(
    mut complete_events: EventReader<PopulationComplete>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for event in complete_events.read() {
        info!(
            "Point cloud finished filling: {} of {} points",
            event.filled, event.capacity
        );
        rpc_interface.send_notification(
            "population_complete",
            serde_json::json!({
                "filled": event.filled,
                "capacity": event.capacity,
            }),
        );
    }
}

pub fn fill_text_update_system(
    population: Res<PointCloudPopulation>,
    mut query: Query<&mut Text, With<FillText>>,
) {
    if !population.is_changed() {
        return;
    }

    for mut text in &mut query {
        text.0 = format!(
            "Points: {} / {}",
            population.buffer.len(),
            population.buffer.capacity()
        );
    }
}
