//! The `AntBehavior` trait, the seam between the driver and the decision
//! logic.

use colony_agent::Ant;
use colony_core::{AgentId, AgentRng};

use crate::{Environment, PheromoneDecisionConfig, update_ant_position};

/// Pluggable per-tick ant logic.
///
/// The driver calls [`update`][Self::update] once per ant per tick with a
/// read-only [`Environment`] captured at tick start and the ant's own
/// [`AgentRng`], so results do not depend on update order or thread count.
///
/// Implementations must be `Send + Sync`: with the `parallel` feature the
/// driver calls `update` for many ants concurrently.  Per-ant state belongs
/// in the returned [`Ant`], not in the behavior.
///
/// # Example
///
/// ```rust,ignore
/// struct StraightLine;
///
/// impl AntBehavior for StraightLine {
///     fn update(&self, _: AgentId, ant: &Ant, env: &Environment<'_>, _: &mut AgentRng) -> Ant {
///         Ant { position: ant.position + ant.direction * env.grid.cell_size, ..ant.clone() }
///     }
/// }
/// ```
pub trait AntBehavior: Send + Sync + 'static {
    /// Return the ant's state for the next tick.
    fn update(
        &self,
        agent: AgentId,
        ant:   &Ant,
        env:   &Environment<'_>,
        rng:   &mut AgentRng,
    ) -> Ant;
}

/// Target seeking, obstacle avoidance and stochastic trail following.
#[derive(Copy, Clone, Debug, Default)]
pub struct ForagingBehavior {
    pub decision: PheromoneDecisionConfig,
}

impl ForagingBehavior {
    pub fn new(decision: PheromoneDecisionConfig) -> Self {
        Self { decision }
    }
}

impl AntBehavior for ForagingBehavior {
    #[inline]
    fn update(&self, _agent: AgentId, ant: &Ant, env: &Environment<'_>, rng: &mut AgentRng) -> Ant {
        update_ant_position(ant, env, &self.decision, rng)
    }
}
