//! Static scene contents: background and lights.

pub mod lighting;
