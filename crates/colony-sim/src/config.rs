//! Run configuration.
//!
//! Every field has a default, so a TOML file only needs the values it
//! changes:
//!
//! ```toml
//! seed      = 7
//! ant_count = 50
//!
//! [ant]
//! sight_distance = 80.0
//!
//! [decision]
//! chance_to_ignore = 10.0
//! strongest        = 50.0
//! weakest          = 50.0
//! ```

use std::time::Duration;

use colony_agent::AntParams;
use colony_behavior::{Grid, PheromoneDecisionConfig};
use colony_core::{ColonyError, Target};
use serde::{Deserialize, Serialize};

use crate::{SimError, SimResult};

/// Percentages for the pheromone-following lottery, as written in config
/// files.  Validated into a [`PheromoneDecisionConfig`] at build time.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionWeights {
    pub chance_to_ignore: f32,
    pub strongest: f32,
    pub farthest: f32,
    pub closest: f32,
    pub weakest: f32,
}

impl Default for DecisionWeights {
    fn default() -> Self {
        Self { chance_to_ignore: 5.0, strongest: 0.0, farthest: 0.0, closest: 0.0, weakest: 100.0 }
    }
}

impl DecisionWeights {
    pub fn validated(&self) -> SimResult<PheromoneDecisionConfig> {
        Ok(PheromoneDecisionConfig::new(
            self.chance_to_ignore,
            self.strongest,
            self.farthest,
            self.closest,
            self.weakest,
        )?)
    }
}

/// Global parameters for one simulation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Seeds every per-ant RNG.
    pub seed: u64,
    pub ant_count: usize,
    /// Cells per side.
    pub grid_size: u32,
    /// Side length of one cell, in grid units.  Ants move one cell per tick.
    pub cell_size: f32,
    pub nest_cell: [u32; 2],
    /// Defaults to five cells in from the far corner.
    pub food_cell: Option<[u32; 2]>,
    /// Clock time between two ticks.
    pub tick_interval_ms: u64,
    /// Ticks executed by [`Sim::run`][crate::Sim::run].
    pub total_ticks: u64,
    /// Time for a fresh pheromone to fade to zero.
    pub decay_time_ms: u64,
    /// Bin width of the travel-time histogram.
    pub histogram_bin_ms: i64,
    pub ant: AntParams,
    pub decision: DecisionWeights,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed:             0,
            ant_count:        25,
            grid_size:        120,
            cell_size:        5.0,
            nest_cell:        [5, 5],
            food_cell:        None,
            tick_interval_ms: 10,
            total_ticks:      10_000,
            decay_time_ms:    5_000,
            histogram_bin_ms: 1_000,
            ant:              AntParams::default(),
            decision:         DecisionWeights::default(),
        }
    }
}

impl SimConfig {
    #[inline]
    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_size, self.cell_size)
    }

    pub fn food_cell(&self) -> [u32; 2] {
        self.food_cell.unwrap_or_else(|| {
            let far = self.grid_size.saturating_sub(5);
            [far, far]
        })
    }

    pub fn nest(&self) -> Target {
        let [x, y] = self.nest_cell;
        Target::nest(self.grid().cell_center(x, y))
    }

    pub fn food(&self) -> Target {
        let [x, y] = self.food_cell();
        Target::food(self.grid().cell_center(x, y))
    }

    #[inline]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Check every field that the driver relies on.
    pub fn validate(&self) -> SimResult<()> {
        if self.grid_size == 0 {
            return Err(SimError::Config("grid_size must be > 0".into()));
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(SimError::Config(format!("cell_size must be > 0, got {}", self.cell_size)));
        }
        if self.tick_interval_ms == 0 {
            return Err(SimError::Config("tick_interval_ms must be > 0".into()));
        }
        if self.decay_time_ms == 0 {
            return Err(SimError::Config("decay_time_ms must be > 0".into()));
        }
        if self.histogram_bin_ms <= 0 {
            return Err(SimError::Config(format!(
                "histogram_bin_ms must be > 0, got {}",
                self.histogram_bin_ms
            )));
        }
        let fov = self.ant.field_of_view;
        if !(fov > 0.0 && fov <= 360.0) {
            return Err(SimError::Config(format!("ant.field_of_view must be in (0, 360], got {fov}")));
        }
        let turn = self.ant.max_turn_angle;
        if !(turn.is_finite() && turn >= 0.0) {
            return Err(SimError::Config(format!("ant.max_turn_angle must be finite and >= 0, got {turn}")));
        }
        let sight = self.ant.sight_distance;
        if !(sight.is_finite() && sight > 0.0) {
            return Err(SimError::Config(format!("ant.sight_distance must be finite and > 0, got {sight}")));
        }
        for [x, y] in [self.nest_cell, self.food_cell()] {
            if x >= self.grid_size || y >= self.grid_size {
                return Err(ColonyError::OutOfGrid { x: x as f32, y: y as f32, size: self.grid_size }.into());
            }
        }
        self.decision.validated()?;
        Ok(())
    }
}
