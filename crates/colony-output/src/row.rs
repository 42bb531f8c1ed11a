//! Plain data row types written by output backends.

use colony_sim::TickSummary;

/// One tick's aggregate state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:               u64,
    /// Pause-aware trail clock, in milliseconds.
    pub trail_time_ms:      u64,
    pub live_pheromones:    u64,
    pub trips:              u64,
    pub food_delivered:     u64,
    pub avg_travel_time_ms: f64,
}

impl From<&TickSummary> for TickSummaryRow {
    fn from(s: &TickSummary) -> Self {
        Self {
            tick:               s.tick.0,
            trail_time_ms:      s.trail_time.0,
            live_pheromones:    s.pheromones as u64,
            trips:              s.trips as u64,
            food_delivered:     s.food_delivered as u64,
            avg_travel_time_ms: s.avg_travel_time_ms,
        }
    }
}

/// One bin of the travel-time histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramRow {
    /// Inclusive lower edge of the bin.
    pub bin_start_ms: i64,
    pub trips:        u64,
}
