use std::ops::Range;

use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;
use bevy::render::view::NoFrustumCulling;

use super::point_sprite_material::PointSpriteMaterial;
use crate::engine::mesh::point_sprite_mesh::{create_point_sprite_mesh, write_sprite_points};
use crate::engine::population::systems::{PointCloudPopulation, PointsAppended};

/// Marker for the single entity drawing the point buffer.
#[derive(Component)]
pub struct PointCloudSprites;

#[derive(Resource)]
pub struct PointSpriteAssets {
    pub material: Handle<PointSpriteMaterial>,
}

pub fn setup_point_sprite_material(
    mut commands: Commands,
    mut materials: ResMut<Assets<PointSpriteMaterial>>,
) {
    commands.insert_resource(PointSpriteAssets {
        material: materials.add(PointSpriteMaterial::default()),
    });
}

/// Smallest range covering every append reported this frame.
fn dirty_range<'a>(events: impl Iterator<Item = &'a PointsAppended>) -> Option<Range<usize>> {
    events.fold(None, |acc: Option<Range<usize>>, event| match acc {
        Some(range) => Some(range.start.min(event.written.start)..range.end.max(event.written.end)),
        None => Some(event.written.clone()),
    })
}

/// Push newly written points into the sprite mesh and widen its draw range.
///
/// The entity is spawned on the first append so the GPU never sees an empty
/// index buffer. Later appends patch the existing mesh asset, which marks it
/// for re-upload.
pub fn sync_point_sprites(
    mut commands: Commands,
    mut appended_events: EventReader<PointsAppended>,
    population: Res<PointCloudPopulation>,
    sprite_assets: Option<Res<PointSpriteAssets>>,
    mut meshes: ResMut<Assets<Mesh>>,
    sprites: Query<&Mesh3d, With<PointCloudSprites>>,
) {
    let Some(written) = dirty_range(appended_events.read()) else {
        return;
    };
    let buffer = &population.buffer;

    if let Ok(mesh_handle) = sprites.single() {
        let Some(mesh) = meshes.get_mut(&mesh_handle.0) else {
            warn!("Point sprite mesh asset missing; dropping update {:?}", written);
            return;
        };
        write_sprite_points(mesh, buffer, written);
        return;
    }

    let Some(sprite_assets) = sprite_assets else {
        warn!("Point sprite material not ready; deferring first upload");
        return;
    };

    let mut mesh = create_point_sprite_mesh(buffer.capacity());
    write_sprite_points(&mut mesh, buffer, buffer.visible_range());

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(sprite_assets.material.clone()),
        Transform::IDENTITY,
        Visibility::Visible,
        NoFrustumCulling,
        NotShadowCaster,
        PointCloudSprites,
    ));

    info!(
        "Point sprite entity spawned: {} of {} points visible",
        buffer.len(),
        buffer.capacity()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::mesh::point_sprite_mesh::visible_sprites;
    use crate::engine::population::populator::OverflowPolicy;
    use crate::engine::population::settings::PopulationSettings;
    use crate::engine::population::{FrameSet, PopulationPlugin};

    fn sprite_app(capacity: usize, batch_size: usize) -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .init_asset::<Mesh>()
            .init_asset::<PointSpriteMaterial>()
            .insert_resource(PopulationSettings {
                capacity,
                batch_size,
                overflow_policy: OverflowPolicy::Clamp,
                seed: Some(12),
            })
            .add_plugins(PopulationPlugin)
            .add_systems(Startup, setup_point_sprite_material)
            .add_systems(Update, sync_point_sprites.in_set(FrameSet::SyncRender));
        app
    }

    fn sprite_count(app: &mut App) -> Option<usize> {
        let world = app.world_mut();
        let mut query = world.query_filtered::<&Mesh3d, With<PointCloudSprites>>();
        let handle = query.iter(world).next()?.0.clone();
        world
            .resource::<Assets<Mesh>>()
            .get(&handle)
            .map(visible_sprites)
    }

    fn filled(app: &App) -> usize {
        app.world().resource::<PointCloudPopulation>().buffer.len()
    }

    #[test]
    fn draw_range_matches_fill_on_every_frame() {
        let mut app = sprite_app(25, 10);
        let mut seen = Vec::new();
        for _ in 0..4 {
            app.update();
            let count = sprite_count(&mut app).expect("sprite entity after first append");
            assert_eq!(count, filled(&app));
            seen.push(count);
        }
        assert_eq!(seen, vec![10, 20, 25, 25]);
    }

    #[test]
    fn single_sprite_entity_is_spawned() {
        let mut app = sprite_app(30, 10);
        for _ in 0..5 {
            app.update();
        }
        let world = app.world_mut();
        let mut query = world.query_filtered::<Entity, With<PointCloudSprites>>();
        assert_eq!(query.iter(world).count(), 1);
    }

    #[test]
    fn dirty_range_spans_all_appends() {
        let events = [
            PointsAppended {
                written: 10..20,
                filled: 20,
            },
            PointsAppended {
                written: 20..25,
                filled: 25,
            },
        ];
        assert_eq!(dirty_range(events.iter()), Some(10..25));
        assert_eq!(dirty_range(std::iter::empty()), None);
    }
}
