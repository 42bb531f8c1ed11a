//! `colony-stats`: trip counting and travel-time aggregation.
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`pause`]     | `PauseLog`: closed and open pause intervals          |
//! | [`stats`]     | `AntSimulationStats`: the aggregator                 |
//! | [`histogram`] | `build_histogram`, `fill_missing_bins`                |
//!
//! All durations are signed milliseconds (`i64`), so a trip that appears
//! to end before it started is recorded as a negative value instead of
//! wrapping.  Such trips are counted but excluded from the average.

pub mod histogram;
pub mod pause;
pub mod stats;

#[cfg(test)]
mod tests;

pub use histogram::{build_histogram, fill_missing_bins};
pub use pause::PauseLog;
pub use stats::AntSimulationStats;
