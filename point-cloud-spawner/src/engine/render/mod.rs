//! Point sprite rendering.
//!
//! A custom unlit material draws the point buffer as round sprites. The
//! sync system mirrors every append into the sprite mesh on the same frame.

/// Sprite entity lifecycle and per-frame mesh sync.
pub mod point_cloud;

/// Round sprite material with size attenuation and circular fragment mask.
pub mod point_sprite_material;

use bevy::prelude::*;

use crate::engine::population::FrameSet;
use point_cloud::{setup_point_sprite_material, sync_point_sprites};
use point_sprite_material::PointSpriteMaterial;

pub struct PointSpriteRenderPlugin;

impl Plugin for PointSpriteRenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(MaterialPlugin::<PointSpriteMaterial>::default())
            .add_systems(Startup, setup_point_sprite_material)
            .add_systems(Update, sync_point_sprites.in_set(FrameSet::SyncRender));
    }
}
