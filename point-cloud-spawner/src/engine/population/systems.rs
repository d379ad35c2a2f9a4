use std::ops::Range;

use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::point_buffer::PointBuffer;
use super::populator::{FillStatus, IncrementalPopulator};
use super::settings::PopulationSettings;

/// Owns the point buffer, its populator and the generator state.
/// The populate system is the only writer.
#[derive(Resource, Debug)]
pub struct PointCloudPopulation {
    pub buffer: PointBuffer,
    pub populator: IncrementalPopulator,
    rng: SmallRng,
}

impl PointCloudPopulation {
    pub fn new(settings: &PopulationSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        Self {
            buffer: PointBuffer::with_capacity(settings.capacity),
            populator: IncrementalPopulator::new(settings.batch_size, settings.overflow_policy),
            rng,
        }
    }

    pub fn tick(&mut self) -> FillStatus {
        self.populator.tick(&mut self.buffer, &mut self.rng)
    }
}

/// Allocate the point buffer from whatever `PopulationSettings` is present
/// when the app starts, so settings inserted after the plugin still apply.
pub fn allocate_point_cloud_population(
    mut commands: Commands,
    settings: Option<Res<PopulationSettings>>,
) {
    let settings = settings
        .map(|settings| settings.validated_or_default())
        .unwrap_or_default();
    let population = PointCloudPopulation::new(&settings);

    info!(
        "Allocating point buffer: {} points, {} per frame, {:?} on overflow",
        population.buffer.capacity(),
        population.populator.batch_size(),
        population.populator.policy()
    );
    commands.insert_resource(population);
}

/// Points were written this frame; render buffers covering `written` are stale.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct PointsAppended {
    pub written: Range<usize>,
    pub filled: usize,
}

/// The buffer reached its terminal fill. Written exactly once.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopulationComplete {
    pub filled: usize,
    pub capacity: usize,
}

/// Per-frame append step.
pub fn populate_point_cloud(
    mut population: ResMut<PointCloudPopulation>,
    mut appended_events: EventWriter<PointsAppended>,
    mut complete_events: EventWriter<PopulationComplete>,
) {
    // Skip the mutable borrow once done so change detection stays quiet.
    if population.populator.is_done() {
        return;
    }

    let status = population.tick();
    let written = status.written();
    let filled = population.buffer.len();

    if !written.is_empty() {
        appended_events.write(PointsAppended { written, filled });
    }

    if let FillStatus::JustCompleted { .. } = status {
        complete_events.write(PopulationComplete {
            filled,
            capacity: population.buffer.capacity(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::population::PopulationPlugin;
    use crate::engine::population::populator::OverflowPolicy;

    #[derive(Resource, Default)]
    struct Seen {
        appended: Vec<Range<usize>>,
        completions: usize,
    }

    fn record(
        mut seen: ResMut<Seen>,
        mut appended: EventReader<PointsAppended>,
        mut complete: EventReader<PopulationComplete>,
    ) {
        for event in appended.read() {
            seen.appended.push(event.written.clone());
        }
        seen.completions += complete.read().count();
    }

    fn app(capacity: usize, batch_size: usize, overflow_policy: OverflowPolicy) -> App {
        let mut app = App::new();
        app.insert_resource(PopulationSettings {
            capacity,
            batch_size,
            overflow_policy,
            seed: Some(99),
        })
        .add_plugins(PopulationPlugin)
        .init_resource::<Seen>()
        .add_systems(Update, record.after(populate_point_cloud));
        app
    }

    fn filled(app: &App) -> usize {
        app.world().resource::<PointCloudPopulation>().buffer.len()
    }

    #[test]
    fn one_batch_per_frame_until_full() {
        let mut app = app(30, 10, OverflowPolicy::Clamp);
        let mut counts = Vec::new();
        for _ in 0..4 {
            app.update();
            counts.push(filled(&app));
        }

        assert_eq!(counts, vec![10, 20, 30, 30]);
        let seen = app.world().resource::<Seen>();
        assert_eq!(seen.appended, vec![0..10, 10..20, 20..30]);
        assert_eq!(seen.completions, 1);
    }

    #[test]
    fn dropped_remainder_emits_completion_without_append() {
        let mut app = app(25, 10, OverflowPolicy::DropRemainder);
        for _ in 0..6 {
            app.update();
        }

        assert_eq!(filled(&app), 20);
        let seen = app.world().resource::<Seen>();
        assert_eq!(seen.appended.len(), 2);
        assert_eq!(seen.completions, 1);
    }

    #[test]
    fn settings_inserted_after_plugin_are_used() {
        let mut app = App::new();
        app.add_plugins(PopulationPlugin);
        app.insert_resource(PopulationSettings {
            capacity: 30,
            batch_size: 10,
            overflow_policy: OverflowPolicy::Clamp,
            seed: Some(8),
        });
        app.update();

        let population = app.world().resource::<PointCloudPopulation>();
        assert_eq!(population.buffer.capacity(), 30);
        assert_eq!(population.buffer.len(), 10);
    }

    #[test]
    fn invalid_settings_fall_back_to_defaults() {
        let mut app = app(0, 10, OverflowPolicy::Clamp);
        app.update();
        let population = app.world().resource::<PointCloudPopulation>();
        assert_eq!(population.buffer.capacity(), 100_000);
        assert_eq!(population.buffer.len(), 10_000);
    }
}
