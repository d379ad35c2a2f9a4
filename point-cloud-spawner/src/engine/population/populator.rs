use std::ops::Range;

use rand::Rng;

use super::point::random_batch;
use super::point_buffer::PointBuffer;

/// What to do with the last batch when it does not fit the remaining capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Shrink the final batch so the buffer fills to exactly its capacity.
    #[default]
    Clamp,
    /// Write nothing once a whole batch no longer fits and stop there.
    DropRemainder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopulatorState {
    Filling,
    Done,
}

/// Outcome of one populator tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillStatus {
    /// Points were appended and more will follow.
    Filling { written: Range<usize> },
    /// This tick moved the populator to its terminal state. `written` may be
    /// empty when the final batch was dropped.
    JustCompleted { written: Range<usize> },
    /// Terminal; the tick did nothing.
    Done,
}

impl FillStatus {
    /// Point indices written by this tick.
    pub fn written(&self) -> Range<usize> {
        match self {
            FillStatus::Filling { written } | FillStatus::JustCompleted { written } => {
                written.clone()
            }
            FillStatus::Done => 0..0,
        }
    }
}

/// Appends one batch of random points per tick until the buffer is exhausted.
#[derive(Debug, Clone)]
pub struct IncrementalPopulator {
    batch_size: usize,
    policy: OverflowPolicy,
    state: PopulatorState,
}

impl IncrementalPopulator {
    pub fn new(batch_size: usize, policy: OverflowPolicy) -> Self {
        Self {
            batch_size,
            policy,
            state: PopulatorState::Filling,
        }
    }

    pub fn state(&self) -> PopulatorState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == PopulatorState::Done
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// Generate and append the next batch.
    ///
    /// Capacity is checked before any point is generated, so a refused batch
    /// leaves both the buffer and the RNG untouched.
    pub fn tick<R: Rng + ?Sized>(&mut self, buffer: &mut PointBuffer, rng: &mut R) -> FillStatus {
        if self.is_done() {
            return FillStatus::Done;
        }

        let batch_len = match self.policy {
            OverflowPolicy::Clamp => self.batch_size.min(buffer.remaining()),
            OverflowPolicy::DropRemainder => self.batch_size,
        };

        let start = buffer.len();
        let appended = if batch_len > 0 && batch_len <= buffer.remaining() {
            buffer.append(&random_batch(rng, batch_len))
        } else {
            0
        };
        let written = start..start + appended;

        if appended == 0 || buffer.is_full() {
            self.state = PopulatorState::Done;
            FillStatus::JustCompleted { written }
        } else {
            FillStatus::Filling { written }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn run(capacity: usize, batch: usize, policy: OverflowPolicy, ticks: usize) -> Vec<usize> {
        let mut buffer = PointBuffer::with_capacity(capacity);
        let mut populator = IncrementalPopulator::new(batch, policy);
        let mut rng = SmallRng::seed_from_u64(3);
        (0..ticks)
            .map(|_| {
                populator.tick(&mut buffer, &mut rng);
                buffer.len()
            })
            .collect()
    }

    #[test]
    fn exact_multiple_fills_and_completes_once() {
        let mut buffer = PointBuffer::with_capacity(30);
        let mut populator = IncrementalPopulator::new(10, OverflowPolicy::Clamp);
        let mut rng = SmallRng::seed_from_u64(11);

        assert_eq!(
            populator.tick(&mut buffer, &mut rng),
            FillStatus::Filling { written: 0..10 }
        );
        assert_eq!(
            populator.tick(&mut buffer, &mut rng),
            FillStatus::Filling { written: 10..20 }
        );
        assert_eq!(
            populator.tick(&mut buffer, &mut rng),
            FillStatus::JustCompleted { written: 20..30 }
        );
        assert_eq!(populator.state(), PopulatorState::Done);
        assert_eq!(populator.tick(&mut buffer, &mut rng), FillStatus::Done);
        assert_eq!(buffer.len(), 30);
    }

    #[test]
    fn exact_multiple_behaves_the_same_under_drop_remainder() {
        assert_eq!(
            run(30, 10, OverflowPolicy::DropRemainder, 4),
            vec![10, 20, 30, 30]
        );
    }

    #[test]
    fn clamp_fills_to_capacity_with_short_final_batch() {
        let mut buffer = PointBuffer::with_capacity(25);
        let mut populator = IncrementalPopulator::new(10, OverflowPolicy::Clamp);
        let mut rng = SmallRng::seed_from_u64(5);

        populator.tick(&mut buffer, &mut rng);
        populator.tick(&mut buffer, &mut rng);
        let status = populator.tick(&mut buffer, &mut rng);

        assert_eq!(status, FillStatus::JustCompleted { written: 20..25 });
        assert_eq!(status.written().len(), 5);
        assert_eq!(buffer.len(), 25);
    }

    #[test]
    fn drop_remainder_stops_at_last_whole_batch() {
        let mut buffer = PointBuffer::with_capacity(25);
        let mut populator = IncrementalPopulator::new(10, OverflowPolicy::DropRemainder);
        let mut rng = SmallRng::seed_from_u64(5);

        populator.tick(&mut buffer, &mut rng);
        populator.tick(&mut buffer, &mut rng);
        assert_eq!(
            populator.tick(&mut buffer, &mut rng),
            FillStatus::JustCompleted { written: 20..20 }
        );
        for _ in 0..5 {
            assert_eq!(populator.tick(&mut buffer, &mut rng), FillStatus::Done);
        }
        assert_eq!(buffer.len(), 20);
    }

    #[test]
    fn fill_count_follows_closed_form() {
        for (capacity, batch) in [(100, 7), (64, 8), (5, 10), (1, 1)] {
            let clamp = run(capacity, batch, OverflowPolicy::Clamp, 20);
            let drop = run(capacity, batch, OverflowPolicy::DropRemainder, 20);
            for (i, (&c, &d)) in clamp.iter().zip(&drop).enumerate() {
                let n = i + 1;
                assert_eq!(c, (n * batch).min(capacity));
                assert_eq!(d, (n * batch).min(capacity / batch * batch));
            }
        }
    }

    #[test]
    fn fill_count_is_monotonic_and_bounded() {
        let counts = run(1_000, 33, OverflowPolicy::Clamp, 50);
        assert!(counts.windows(2).all(|w| w[0] <= w[1]));
        assert!(counts.iter().all(|&c| c <= 1_000));
    }

    #[test]
    fn ticks_after_completion_leave_buffer_untouched() {
        let mut buffer = PointBuffer::with_capacity(12);
        let mut populator = IncrementalPopulator::new(4, OverflowPolicy::Clamp);
        let mut rng = SmallRng::seed_from_u64(9);
        while !populator.is_done() {
            populator.tick(&mut buffer, &mut rng);
        }
        let positions = buffer.positions().to_vec();
        let colours = buffer.colours().to_vec();

        for _ in 0..3 {
            assert_eq!(populator.tick(&mut buffer, &mut rng), FillStatus::Done);
        }
        assert_eq!(buffer.positions(), positions.as_slice());
        assert_eq!(buffer.colours(), colours.as_slice());
    }

    #[test]
    fn written_points_respect_value_ranges() {
        let mut buffer = PointBuffer::with_capacity(2_000);
        let mut populator = IncrementalPopulator::new(500, OverflowPolicy::Clamp);
        let mut rng = SmallRng::seed_from_u64(21);
        while !populator.is_done() {
            populator.tick(&mut buffer, &mut rng);
        }
        assert!(buffer.positions().iter().all(|c| (-5.0..=5.0).contains(c)));
        assert!(buffer.colours().iter().all(|c| (0.0..=1.0).contains(c)));
    }

    #[test]
    fn zero_capacity_completes_on_first_tick() {
        let mut buffer = PointBuffer::with_capacity(0);
        let mut populator = IncrementalPopulator::new(10, OverflowPolicy::Clamp);
        let mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(
            populator.tick(&mut buffer, &mut rng),
            FillStatus::JustCompleted { written: 0..0 }
        );
    }
}
