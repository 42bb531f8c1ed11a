//! `AgentRngs`: per-ant RNG state.
//!
//! # Why a separate struct?
//!
//! The update phase needs exclusive access to each ant's RNG while reading
//! the shared tick-start snapshot (ants, pheromones, obstacles).  Keeping the
//! RNGs out of `Ant` lets the driver hand out `&mut AgentRng` per ant while
//! the ant list stays immutably borrowed:
//!
//! ```ignore
//! let next: Vec<Ant> = ants
//!     .par_iter()
//!     .zip(rngs.inner.par_iter_mut())
//!     .map(|(ant, rng)| behavior.update(ant, &env, rng))
//!     .collect();
//! ```

use colony_core::{AgentId, AgentRng};

/// Per-ant deterministic RNG state, indexed by `AgentId`.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-ant RNGs from `global_seed`.
    pub fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one ant's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
