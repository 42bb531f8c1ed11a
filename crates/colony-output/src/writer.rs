//! The `OutputWriter` trait implemented by backend writers.

use crate::{HistogramRow, OutputResult, TickSummaryRow};

/// Sink for run output.
///
/// Errors are returned to the caller; [`StatsOutputObserver`] stores them
/// and exposes them through
/// [`take_error`][crate::StatsOutputObserver::take_error].
///
/// [`StatsOutputObserver`]: crate::StatsOutputObserver
pub trait OutputWriter {
    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Write the complete travel-time histogram, lowest bin first.
    fn write_histogram(&mut self, rows: &[HistogramRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
