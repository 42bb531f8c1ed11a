//! `StatsOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use colony_core::Tick;
use colony_sim::{SimObserver, TickSummary};
use colony_stats::AntSimulationStats;
use tracing::{debug, warn};

use crate::row::{HistogramRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that records tick summaries and, at the end of the
/// run, the travel-time histogram.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `sim.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct StatsOutputObserver<W: OutputWriter> {
    writer:           W,
    histogram_bin_ms: i64,
    /// Record every `interval`-th tick; 1 records all.
    interval:         u64,
    last_error:       Option<OutputError>,
}

impl<W: OutputWriter> StatsOutputObserver<W> {
    pub fn new(writer: W, histogram_bin_ms: i64) -> Self {
        Self { writer, histogram_bin_ms, interval: 1, last_error: None }
    }

    /// Only record ticks that are a multiple of `interval` (0 is treated
    /// as 1).
    pub fn every(mut self, interval: u64) -> Self {
        self.interval = interval.max(1);
        self
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            warn!(error = %e, "output write failed");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for StatsOutputObserver<W> {
    fn on_tick_end(&mut self, summary: &TickSummary) {
        if !summary.tick.0.is_multiple_of(self.interval) {
            return;
        }
        let result = self.writer.write_tick_summary(&TickSummaryRow::from(summary));
        self.store_err(result);
    }

    fn on_sim_end(&mut self, final_tick: Tick, stats: &AntSimulationStats) {
        let rows: Vec<HistogramRow> = stats
            .get_histogram(self.histogram_bin_ms)
            .into_iter()
            .map(|(bin_start_ms, trips)| HistogramRow { bin_start_ms, trips: trips as u64 })
            .collect();
        debug!(tick = %final_tick, bins = rows.len(), "writing travel histogram");

        let result = self.writer.write_histogram(&rows);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
