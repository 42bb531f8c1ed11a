//! Fluent builder that spawns a colony and its RNGs in one step.
//!
//! # Usage
//!
//! ```rust
//! use colony_agent::{AntParams, ColonyBuilder};
//! use colony_core::{Target, Vec2};
//!
//! let nest = Target::nest(Vec2::new(25.0, 25.0));
//! let food = Target::food(Vec2::new(575.0, 575.0));
//!
//! let (ants, rngs) = ColonyBuilder::new(25, /*seed=*/ 42, nest, food)
//!     .params(AntParams::default())
//!     .build();
//!
//! assert_eq!(ants.len(), 25);
//! assert_eq!(rngs.len(), 25);
//! assert!(ants.iter().all(|a| a.position == nest.position));
//! ```

use colony_core::{AgentId, Millis, Target, angle_to_direction};

use crate::{AgentRngs, Ant, AntParams};

/// Fluent builder for the initial `Vec<Ant>` + [`AgentRngs`].
///
/// Every ant spawns at the nest with a random unit heading drawn from its
/// own RNG and FOOD as its first target.
pub struct ColonyBuilder {
    count: usize,
    seed: u64,
    nest: Target,
    food: Target,
    params: AntParams,
    start: Millis,
    trail_start: Millis,
}

impl ColonyBuilder {
    pub fn new(count: usize, seed: u64, nest: Target, food: Target) -> Self {
        Self {
            count,
            seed,
            nest,
            food,
            params: AntParams::default(),
            start: Millis::ZERO,
            trail_start: Millis::ZERO,
        }
    }

    /// Sensing and movement parameters shared by every spawned ant.
    pub fn params(mut self, params: AntParams) -> Self {
        self.params = params;
        self
    }

    /// Clock readings at spawn: wall clock for trip timing, trail clock for
    /// the deposit interval.
    pub fn started_at(mut self, start: Millis, trail_start: Millis) -> Self {
        self.start = start;
        self.trail_start = trail_start;
        self
    }

    /// Construct the ants and their RNGs.
    ///
    /// The heading draw is the first value each ant's RNG produces, so the
    /// colony layout depends only on the seed.
    pub fn build(self) -> (Vec<Ant>, AgentRngs) {
        let mut rngs = AgentRngs::new(self.count, self.seed);
        let ants = (0..self.count as u32)
            .map(|i| {
                let heading = rngs.get_mut(AgentId(i)).heading();
                Ant::new(self.nest.position, angle_to_direction(heading), self.food, &self.params)
                    .started_at(self.start, self.trail_start)
            })
            .collect();
        (ants, rngs)
    }
}
