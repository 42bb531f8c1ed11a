//! The run-wide statistics aggregator.

use std::collections::BTreeMap;

use colony_core::{Millis, SharedClock, TargetType};
use tracing::{debug, info, warn};

use crate::{PauseLog, build_histogram};

/// Counts completed trips and the time they took, excluding paused time.
///
/// A *trip* ends whenever an ant switches target.  The aggregator reads the
/// raw clock and subtracts any pause overlapping the trip, so a trip that
/// spans a pause is credited only with the time the simulation was running.
pub struct AntSimulationStats {
    clock: SharedClock,
    pauses: PauseLog,
    trip_times: Vec<i64>,
    total_travel_time: i64,
    trips: usize,
    food_delivered: usize,
}

impl AntSimulationStats {
    pub fn new(clock: SharedClock) -> Self {
        Self {
            clock,
            pauses: PauseLog::new(),
            trip_times: Vec::new(),
            total_travel_time: 0,
            trips: 0,
            food_delivered: 0,
        }
    }

    /// Record a finished trip if `current` differs from `previous`.
    ///
    /// Returns `true` when a trip was recorded; the caller then restarts the
    /// ant's trip timer.  Food counts as delivered when the new target is
    /// food, i.e. the ant has just reached the nest and is heading out again.
    pub fn update_statistics(
        &mut self,
        current:    TargetType,
        previous:   TargetType,
        trip_start: Millis,
    ) -> bool {
        if current == previous {
            return false;
        }
        let now = self.clock.now();
        let paused = self.pauses.overlap(trip_start, now) as i64;
        let trip_time = (now - trip_start) - paused;

        if trip_time <= 0 {
            warn!(trip_time, %trip_start, %now, "non-positive trip duration");
        }
        debug!(trip_time, from = %previous, to = %current, "trip completed");

        self.total_travel_time += trip_time;
        self.trips += 1;
        if current == TargetType::Food {
            self.food_delivered += 1;
        }
        self.trip_times.push(trip_time);
        true
    }

    /// Start a pause interval.  Repeated calls are ignored.
    pub fn on_pause(&mut self) {
        let now = self.clock.now();
        if self.pauses.on_pause(now) {
            info!(%now, "stats paused");
        }
    }

    /// Close the open pause interval.  Calls without a pause are ignored.
    pub fn on_resume(&mut self) {
        let now = self.clock.now();
        if self.pauses.on_resume(now) {
            info!(%now, "stats resumed");
        }
    }

    /// Mean of the positive trip durations, or 0 when there are none.
    pub fn get_avg_travel_time(&self) -> f64 {
        let (sum, n) = self
            .trip_times
            .iter()
            .filter(|&&t| t > 0)
            .fold((0i64, 0usize), |(s, n), &t| (s + t, n + 1));
        if n == 0 { 0.0 } else { sum as f64 / n as f64 }
    }

    /// Sum of all recorded trip durations.
    pub fn get_total_travel_time(&self) -> i64 {
        self.total_travel_time
    }

    pub fn get_food_delivered(&self) -> usize {
        self.food_delivered
    }

    pub fn get_trips_count(&self) -> usize {
        self.trips
    }

    /// Every recorded trip duration, oldest first.
    pub fn trip_times(&self) -> &[i64] {
        &self.trip_times
    }

    pub fn pauses(&self) -> &PauseLog {
        &self.pauses
    }

    /// Dense histogram of trip durations keyed by bin start.
    pub fn get_histogram(&self, bin_size: i64) -> BTreeMap<i64, usize> {
        build_histogram(&self.trip_times, bin_size)
    }
}
