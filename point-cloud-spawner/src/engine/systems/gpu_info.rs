use bevy::prelude::*;
use bevy::render::renderer::RenderAdapterInfo;

use crate::rpc::web_rpc::WebRpcInterface;

/// Report the graphics adapter once at startup.
pub fn report_gpu_adapter(
    adapter_info: Option<Res<RenderAdapterInfo>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    let Some(adapter_info) = adapter_info else {
        warn!("No render adapter information available");
        return;
    };

    info!(
        "GPU adapter: {} ({:?}, {:?})",
        adapter_info.name, adapter_info.backend, adapter_info.device_type
    );
    rpc_interface.send_notification(
        "gpu_info",
        serde_json::json!({
            "name": adapter_info.name,
            "backend": format!("{:?}", adapter_info.backend),
            "device_type": format!("{:?}", adapter_info.device_type),
        }),
    );
}
