//! Simulation observer trait for progress reporting and data collection.

use colony_core::{Millis, Tick};
use colony_stats::AntSimulationStats;

/// What happened during one tick, as seen after its decay step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickSummary {
    pub tick: Tick,
    /// Pause-aware trail time at which the tick's deposits were stamped.
    pub trail_time: Millis,
    pub ants: usize,
    /// Live pheromones after decay.
    pub pheromones: usize,
    /// Cumulative trips completed.
    pub trips: usize,
    /// Cumulative food deliveries.
    pub food_delivered: usize,
    pub avg_travel_time_ms: f64,
}

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] and
/// [`Sim::run_ticks`][crate::Sim::run_ticks].
///
/// All methods default to no-ops.  Paused ticks produce no callbacks.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, summary: &TickSummary) {
///         if summary.tick.0 % self.interval == 0 {
///             println!("{}: {} trips", summary.tick, summary.trips);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    fn on_tick_start(&mut self, _tick: Tick) {}

    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called once when [`Sim::run`][crate::Sim::run] finishes.
    fn on_sim_end(&mut self, _final_tick: Tick, _stats: &AntSimulationStats) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
