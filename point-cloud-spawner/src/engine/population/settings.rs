use bevy::prelude::*;
use constants::point_budget::{MAX_POINTS, POINTS_PER_FRAME};
use thiserror::Error;

use super::populator::OverflowPolicy;

/// Runtime copy of the population tunables. Insert before the first app
/// update to change the budget; it is read once, in `PreStartup`, when the
/// point buffer is allocated.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct PopulationSettings {
    pub capacity: usize,
    pub batch_size: usize,
    pub overflow_policy: OverflowPolicy,
    /// Fixed RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for PopulationSettings {
    fn default() -> Self {
        Self {
            capacity: MAX_POINTS,
            batch_size: POINTS_PER_FRAME,
            overflow_policy: OverflowPolicy::default(),
            seed: None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("point capacity must be greater than zero")]
    ZeroCapacity,
    #[error("batch size must be greater than zero")]
    ZeroBatchSize,
}

impl PopulationSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.capacity == 0 {
            return Err(SettingsError::ZeroCapacity);
        }
        if self.batch_size == 0 {
            return Err(SettingsError::ZeroBatchSize);
        }
        Ok(())
    }

    /// Validated settings, or the compile-time defaults if these are unusable.
    pub fn validated_or_default(&self) -> Self {
        match self.validate() {
            Ok(()) => self.clone(),
            Err(e) => {
                error!("Invalid population settings ({e}); using defaults");
                Self::default()
            }
        }
    }
}
