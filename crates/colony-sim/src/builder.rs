//! Fluent builder for constructing a [`Sim`].

use colony_agent::{AgentRngs, Ant, ColonyBuilder};
use colony_behavior::{AntBehavior, ForagingBehavior, ObstacleMap};
use colony_core::{SharedClock, SystemClock, Tick};
use colony_stats::AntSimulationStats;
use colony_trail::PheromoneTrail;
use tracing::info;

use crate::{Sim, SimConfig, SimError, SimResult};

/// Fluent builder for [`Sim<B>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: grid, nest/food, timing, ant parameters, …
/// - `B: AntBehavior`: the per-tick ant logic
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                                           |
/// |------------------|---------------------------------------------------|
/// | `.clock(c)`      | `SystemClock` (real time; `advance` sleeps)       |
/// | `.colony(a, r)`  | `config.ant_count` ants spawned at the nest       |
/// | `.obstacles(m)`  | No obstacles                                      |
///
/// # Example
///
/// ```rust,ignore
/// let (_handle, clock) = ManualClock::shared(Millis::ZERO);
/// let mut sim = SimBuilder::foraging(config)?.clock(clock).build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<B: AntBehavior> {
    config:    SimConfig,
    behavior:  B,
    clock:     Option<SharedClock>,
    colony:    Option<(Vec<Ant>, AgentRngs)>,
    obstacles: Option<ObstacleMap>,
}

impl SimBuilder<ForagingBehavior> {
    /// A builder for the standard foraging behavior, using the decision
    /// weights from `config`.
    pub fn foraging(config: SimConfig) -> SimResult<Self> {
        let decision = config.decision.validated()?;
        Ok(Self::new(config, ForagingBehavior::new(decision)))
    }
}

impl<B: AntBehavior> SimBuilder<B> {
    pub fn new(config: SimConfig, behavior: B) -> Self {
        Self { config, behavior, clock: None, colony: None, obstacles: None }
    }

    /// Clock shared by the trail, the statistics and the driver.
    pub fn clock(mut self, clock: SharedClock) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Supply the initial ants and their RNGs instead of spawning them.
    pub fn colony(mut self, ants: Vec<Ant>, rngs: AgentRngs) -> Self {
        self.colony = Some((ants, rngs));
        self
    }

    pub fn obstacles(mut self, obstacles: ObstacleMap) -> Self {
        self.obstacles = Some(obstacles);
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<B>> {
        self.config.validate()?;
        let config = self.config;
        let clock = self.clock.unwrap_or_else(SystemClock::shared);

        let trail = PheromoneTrail::new(clock.clone(), config.decay_time_ms);
        let stats = AntSimulationStats::new(clock.clone());

        let (ants, rngs) = match self.colony {
            Some((ants, rngs)) => {
                if rngs.len() != ants.len() {
                    return Err(SimError::AgentCountMismatch {
                        expected: ants.len(),
                        got:      rngs.len(),
                        what:     "agent RNGs",
                    });
                }
                (ants, rngs)
            }
            None => ColonyBuilder::new(config.ant_count, config.seed, config.nest(), config.food())
                .params(config.ant)
                .started_at(clock.now(), trail.effective_now())
                .build(),
        };

        let obstacles = match self.obstacles {
            Some(map) if map.cell_size() != config.cell_size => {
                return Err(SimError::Config(format!(
                    "obstacle map cell size {} does not match config cell size {}",
                    map.cell_size(),
                    config.cell_size
                )));
            }
            Some(map) => map,
            None => ObstacleMap::new(config.cell_size),
        };

        info!(
            ants = ants.len(),
            grid = config.grid_size,
            cell_size = config.cell_size,
            seed = config.seed,
            "simulation built"
        );

        Ok(Sim {
            grid:         config.grid(),
            nest:         config.nest(),
            food:         config.food(),
            config,
            behavior:     self.behavior,
            ants,
            rngs,
            trail,
            stats,
            obstacles,
            clock,
            current_tick: Tick::ZERO,
        })
    }
}
