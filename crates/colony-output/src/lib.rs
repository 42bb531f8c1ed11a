//! `colony-output`: run output writers for the ant colony simulation.
//!
//! The CSV backend creates two files in the output directory:
//!
//! | File                   | One row per                                   |
//! |------------------------|-----------------------------------------------|
//! | `tick_summaries.csv`   | recorded tick (trail time, trips, food, …)    |
//! | `travel_histogram.csv` | travel-time bin, written once at the end      |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`StatsOutputObserver`], which implements `colony_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use colony_output::{CsvWriter, StatsOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = StatsOutputObserver::new(writer, config.histogram_bin_ms);
//! sim.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::StatsOutputObserver;
pub use row::{HistogramRow, TickSummaryRow};
pub use writer::OutputWriter;
