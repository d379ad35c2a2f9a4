//! JSON-RPC 2.0 bridge to the embedding page.
//!
//! When the app runs inside an iframe, state changes are pushed to the parent
//! window with `postMessage` and the parent can query the engine:
//!
//! ```text
//! Host page (parent)  <──postMessage──>  Bevy (iframe)
//!        ├─ Request (with id) ─────────────────> │
//!        │ <──────────────── Response (with id) ─┤
//!        │ <──────────── Notification (no id) ───┤
//! ```
//!
//! ## Notifications
//! - `fill_progress`: `{ filled, capacity }` every half second while filling
//! - `population_complete`: `{ filled, capacity }` once
//! - `fps_update`: `{ fps }` every half second
//! - `gpu_info`: `{ name, backend, device_type }` once at startup
//!
//! ## Requests
//! - `get_fill_status` → `{ filled, capacity, done }`
//! - `get_fps` → `{ fps }`
//!
//! Unknown methods answer with error `-32601`. On native targets outgoing
//! messages are dropped.

/// JSON-RPC 2.0 message types, queueing and the wasm message listener.
pub mod web_rpc;
