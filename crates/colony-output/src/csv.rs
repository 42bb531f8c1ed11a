//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `tick_summaries.csv`
//! - `travel_histogram.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{HistogramRow, OutputResult, TickSummaryRow};

/// Writes run output to two CSV files.
pub struct CsvWriter {
    summaries: Writer<File>,
    histogram: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open both files and write their header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record([
            "tick",
            "trail_time_ms",
            "live_pheromones",
            "trips",
            "food_delivered",
            "avg_travel_time_ms",
        ])?;

        let mut histogram = Writer::from_path(dir.join("travel_histogram.csv"))?;
        histogram.write_record(["bin_start_ms", "trips"])?;

        Ok(Self { summaries, histogram, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.trail_time_ms.to_string(),
            row.live_pheromones.to_string(),
            row.trips.to_string(),
            row.food_delivered.to_string(),
            format!("{:.3}", row.avg_travel_time_ms),
        ])?;
        Ok(())
    }

    fn write_histogram(&mut self, rows: &[HistogramRow]) -> OutputResult<()> {
        for row in rows {
            self.histogram.write_record(&[row.bin_start_ms.to_string(), row.trips.to_string()])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.histogram.flush()?;
        Ok(())
    }
}
