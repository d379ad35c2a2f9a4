//! Point generation and the incremental fill protocol.
//!
//! The buffer and populator are plain types with no engine dependency; the
//! Bevy side wraps them in a single resource and drives one tick per frame.

pub mod point;
pub mod point_buffer;
pub mod populator;
pub mod settings;
pub mod systems;

use bevy::prelude::*;

use settings::PopulationSettings;
use systems::{
    PointsAppended, PopulationComplete, allocate_point_cloud_population, populate_point_cloud,
};

/// Ordering of the per-frame work: input, then population, then GPU buffer sync.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    Interaction,
    Populate,
    SyncRender,
}

pub struct PopulationPlugin;

impl Plugin for PopulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PopulationSettings>()
            .add_event::<PointsAppended>()
            .add_event::<PopulationComplete>()
            .configure_sets(
                Update,
                (
                    FrameSet::Interaction,
                    FrameSet::Populate,
                    FrameSet::SyncRender,
                )
                    .chain(),
            )
            .add_systems(PreStartup, allocate_point_cloud_population)
            .add_systems(Update, populate_point_cloud.in_set(FrameSet::Populate));
    }
}
