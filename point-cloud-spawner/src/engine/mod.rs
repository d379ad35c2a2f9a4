pub mod camera;
pub mod core;
pub mod mesh;
pub mod population;
pub mod render;
pub mod scene;
pub mod systems;
