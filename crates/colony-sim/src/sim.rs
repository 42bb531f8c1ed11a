//! The `Sim` struct and its tick loop.

use colony_agent::{AgentRngs, Ant};
use colony_behavior::{AntBehavior, Environment, Grid, ObstacleMap};
use colony_core::{AgentId, ColonyError, Millis, SharedClock, Target, Tick, Vec2};
use colony_stats::AntSimulationStats;
use colony_trail::{Pheromone, PheromoneTrail};
use tracing::{debug, info, warn};

use crate::{SimConfig, SimObserver, SimResult, TickSummary};

/// The simulation driver.
///
/// Each unpaused tick runs four steps:
///
/// 1. **Update** (parallel with the `parallel` feature): every ant is passed
///    to [`AntBehavior::update`] against an [`Environment`] built from the
///    tick-start trail and obstacle set.
/// 2. **Deposit** (sequential, ascending `AgentId`): ants whose deposit
///    interval has elapsed drop a pheromone on the centre of the cell they
///    started the tick in, tagged with the target they were heading for.
/// 3. **Decay**: the trail fades and drops expired markers.
/// 4. **Statistics** (sequential, ascending `AgentId`): every target switch
///    is recorded as a completed trip and restarts that ant's trip timer.
///
/// Ticks requested while paused do nothing.  Create via
/// [`SimBuilder`][crate::SimBuilder].
pub struct Sim<B: AntBehavior> {
    pub config: SimConfig,
    pub grid: Grid,
    pub nest: Target,
    pub food: Target,
    pub behavior: B,

    /// Current ant snapshots, indexed by `AgentId`.
    pub ants: Vec<Ant>,
    /// Per-ant RNGs, kept apart from `ants` for the split borrow in the
    /// update phase.
    pub rngs: AgentRngs,

    pub trail: PheromoneTrail,
    pub stats: AntSimulationStats,
    pub obstacles: ObstacleMap,

    pub(crate) clock: SharedClock,
    pub(crate) current_tick: Tick,
}

impl<B: AntBehavior> Sim<B> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until `config.total_ticks` ticks have executed, advancing the
    /// clock by `config.tick_interval_ms` after each one.
    ///
    /// Stops early if the simulation is paused, since paused ticks never
    /// complete.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        info!(from = %self.current_tick, to = self.config.total_ticks, "run started");
        while self.current_tick.0 < self.config.total_ticks {
            if self.is_paused() {
                warn!(tick = %self.current_tick, "run stopped: simulation is paused");
                break;
            }
            self.step(observer);
        }
        info!(
            tick = %self.current_tick,
            trips = self.stats.get_trips_count(),
            food = self.stats.get_food_delivered(),
            "run finished"
        );
        observer.on_sim_end(self.current_tick, &self.stats);
    }

    /// Request `n` ticks, advancing the clock after each request whether or
    /// not the tick ran.  Returns how many ticks actually executed.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> u64 {
        (0..n).filter(|_| self.step(observer)).count() as u64
    }

    /// Execute one tick if not paused.  Returns its summary, or `None` when
    /// paused.  Does not advance the clock.
    pub fn tick(&mut self) -> Option<TickSummary> {
        if self.is_paused() {
            return None;
        }
        let now = self.current_tick;
        let trail_now = self.trail.effective_now();

        let updated = self.update_phase();
        let previous = std::mem::replace(&mut self.ants, updated);

        self.deposit_phase(&previous, trail_now);
        self.trail.decay();
        self.statistics_phase(&previous);

        let summary = TickSummary {
            tick:               now,
            trail_time:         trail_now,
            ants:               self.ants.len(),
            pheromones:         self.trail.len(),
            trips:              self.stats.get_trips_count(),
            food_delivered:     self.stats.get_food_delivered(),
            avg_travel_time_ms: self.stats.get_avg_travel_time(),
        };
        debug!(
            tick = %now,
            %trail_now,
            pheromones = summary.pheromones,
            trips = summary.trips,
            "tick complete"
        );

        self.current_tick = now + 1;
        Some(summary)
    }

    /// Freeze the trail and start a statistics pause interval.
    pub fn pause(&mut self) {
        if self.is_paused() {
            return;
        }
        self.trail.pause();
        self.stats.on_pause();
        info!(tick = %self.current_tick, "simulation paused");
    }

    pub fn resume(&mut self) {
        if !self.is_paused() {
            return;
        }
        self.trail.resume();
        self.stats.on_resume();
        info!(
            tick = %self.current_tick,
            paused_ms = self.trail.paused_duration(),
            "simulation resumed"
        );
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.trail.is_paused()
    }

    // ── Obstacle editing ──────────────────────────────────────────────────

    /// Block the cell under `position`.  Returns `false` if already blocked.
    pub fn add_obstacle(&mut self, position: Vec2) -> SimResult<bool> {
        self.check_in_world(position)?;
        Ok(self.obstacles.insert_at(position))
    }

    pub fn remove_obstacle(&mut self, position: Vec2) -> SimResult<bool> {
        self.check_in_world(position)?;
        Ok(self.obstacles.remove_at(position))
    }

    /// Block the 3×3 block of cells around `position`.
    pub fn add_obstacle_brush(&mut self, position: Vec2) -> SimResult<usize> {
        self.check_in_world(position)?;
        Ok(self.obstacles.insert_brush_at(position))
    }

    pub fn remove_obstacle_brush(&mut self, position: Vec2) -> SimResult<usize> {
        self.check_in_world(position)?;
        Ok(self.obstacles.remove_brush_at(position))
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// Index of the next tick to execute.
    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.current_tick
    }

    #[inline]
    pub fn pheromones(&self) -> &[Pheromone] {
        self.trail.pheromones()
    }

    #[inline]
    pub fn clock(&self) -> &SharedClock {
        &self.clock
    }

    #[inline]
    pub fn now(&self) -> Millis {
        self.clock.now()
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> bool {
        let now = self.current_tick;
        let ran = if self.is_paused() {
            false
        } else {
            observer.on_tick_start(now);
            match self.tick() {
                Some(summary) => {
                    observer.on_tick_end(&summary);
                    true
                }
                None => false,
            }
        };
        self.clock.advance(self.config.tick_interval());
        ran
    }

    /// Compute every ant's next state from the tick-start snapshot.
    ///
    /// With the `parallel` Cargo feature the ants are spread over Rayon's
    /// thread pool; each ant only touches its own RNG.
    fn update_phase(&mut self) -> Vec<Ant> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let env = Environment::new(
            self.grid,
            self.nest,
            self.food,
            self.trail.pheromones(),
            &self.obstacles,
        );
        let behavior = &self.behavior;
        let ants = self.ants.as_slice();
        let rngs = self.rngs.inner.as_mut_slice();

        #[cfg(not(feature = "parallel"))]
        {
            ants.iter()
                .zip(rngs.iter_mut())
                .enumerate()
                .map(|(i, (ant, rng))| behavior.update(AgentId(i as u32), ant, &env, rng))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            ants.par_iter()
                .zip(rngs.par_iter_mut())
                .enumerate()
                .map(|(i, (ant, rng))| behavior.update(AgentId(i as u32), ant, &env, rng))
                .collect()
        }
    }

    fn deposit_phase(&mut self, previous: &[Ant], trail_now: Millis) {
        for (old, new) in previous.iter().zip(self.ants.iter_mut()) {
            if old.pheromone_due(trail_now) {
                let at = self.grid.snap(old.position);
                self.trail.add_pheromone(at, trail_now, old.current_target.kind);
                new.last_pheromone_time = trail_now;
            }
        }
    }

    fn statistics_phase(&mut self, previous: &[Ant]) {
        for (old, new) in previous.iter().zip(self.ants.iter_mut()) {
            let switched = self.stats.update_statistics(
                new.current_target.kind,
                old.current_target.kind,
                old.trip_start_time,
            );
            if switched {
                new.trip_start_time = self.clock.now();
            }
        }
    }

    fn check_in_world(&self, position: Vec2) -> SimResult<()> {
        let extent = self.grid.size as f32 * self.grid.cell_size;
        if (0.0..extent).contains(&position.x) && (0.0..extent).contains(&position.y) {
            Ok(())
        } else {
            Err(ColonyError::OutOfGrid { x: position.x, y: position.y, size: self.grid.size }.into())
        }
    }
}
