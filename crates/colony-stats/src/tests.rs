//! Unit tests for colony-stats.

use std::collections::BTreeMap;
use std::sync::Arc;

use colony_core::{ManualClock, Millis, TargetType};

use crate::{AntSimulationStats, PauseLog, build_histogram, fill_missing_bins};

fn stats_at(start: u64) -> (Arc<ManualClock>, AntSimulationStats) {
    let (handle, clock) = ManualClock::shared(Millis(start));
    (handle, AntSimulationStats::new(clock))
}

#[cfg(test)]
mod pause_tests {
    use super::*;

    #[test]
    fn pause_and_resume_are_idempotent() {
        let mut log = PauseLog::new();
        assert!(log.on_pause(Millis(100)));
        assert!(!log.on_pause(Millis(150)));
        assert!(log.on_resume(Millis(300)));
        assert!(!log.on_resume(Millis(400)));
        assert_eq!(log.intervals(), &[(Millis(100), Millis(300))]);
        assert_eq!(log.total_closed(), 200);
    }

    #[test]
    fn overlap_clips_to_window() {
        let mut log = PauseLog::new();
        log.on_pause(Millis(100));
        log.on_resume(Millis(300));
        log.on_pause(Millis(500));
        log.on_resume(Millis(600));

        assert_eq!(log.overlap(Millis(0), Millis(1_000)), 300);
        assert_eq!(log.overlap(Millis(200), Millis(550)), 150);
        assert_eq!(log.overlap(Millis(300), Millis(500)), 0);
    }

    #[test]
    fn open_pause_counts_up_to_now() {
        let mut log = PauseLog::new();
        log.on_pause(Millis(100));
        assert!(log.is_paused());
        assert_eq!(log.overlap(Millis(0), Millis(250)), 150);
    }
}

#[cfg(test)]
mod stats_tests {
    use super::*;

    #[test]
    fn same_target_is_not_a_trip() {
        let (_clock, mut stats) = stats_at(0);
        assert!(!stats.update_statistics(TargetType::Food, TargetType::Food, Millis(0)));
        assert_eq!(stats.get_trips_count(), 0);
        assert!(stats.trip_times().is_empty());
    }

    #[test]
    fn trip_excludes_overlapping_pause() {
        let (clock, mut stats) = stats_at(0);
        clock.advance_ms(1_000);
        stats.on_pause();
        clock.advance_ms(500);
        stats.on_resume();
        clock.advance_ms(1_000);

        assert!(stats.update_statistics(TargetType::Nest, TargetType::Food, Millis(0)));
        assert_eq!(stats.trip_times(), &[2_000]);
        assert_eq!(stats.get_total_travel_time(), 2_000);
    }

    #[test]
    fn pause_before_trip_start_is_ignored() {
        let (clock, mut stats) = stats_at(0);
        stats.on_pause();
        clock.advance_ms(500);
        stats.on_resume();
        clock.advance_ms(100);
        let trip_start = Millis(600);
        clock.advance_ms(300);

        stats.update_statistics(TargetType::Nest, TargetType::Food, trip_start);
        assert_eq!(stats.trip_times(), &[300]);
    }

    #[test]
    fn food_counted_when_heading_back_out() {
        let (clock, mut stats) = stats_at(0);
        clock.advance_ms(100);
        stats.update_statistics(TargetType::Nest, TargetType::Food, Millis(0));
        assert_eq!(stats.get_food_delivered(), 0);
        stats.update_statistics(TargetType::Food, TargetType::Nest, Millis(0));
        assert_eq!(stats.get_food_delivered(), 1);
        assert_eq!(stats.get_trips_count(), 2);
    }

    #[test]
    fn average_skips_non_positive_trips() {
        let (clock, mut stats) = stats_at(1_000);
        stats.update_statistics(TargetType::Nest, TargetType::Food, Millis(1_000)); // 0
        stats.update_statistics(TargetType::Nest, TargetType::Food, Millis(1_200)); // -200
        clock.advance_ms(300);
        stats.update_statistics(TargetType::Nest, TargetType::Food, Millis(1_000)); // 300
        stats.update_statistics(TargetType::Nest, TargetType::Food, Millis(1_200)); // 100

        assert_eq!(stats.trip_times(), &[0, -200, 300, 100]);
        assert_eq!(stats.get_trips_count(), 4);
        assert_eq!(stats.get_avg_travel_time(), 200.0);
        assert_eq!(stats.get_total_travel_time(), 200);
    }

    #[test]
    fn empty_average_is_zero() {
        let (_clock, stats) = stats_at(0);
        assert_eq!(stats.get_avg_travel_time(), 0.0);
        assert!(stats.get_histogram(100).is_empty());
    }

    #[test]
    fn histogram_from_recorded_trips() {
        let (clock, mut stats) = stats_at(0);
        clock.advance_ms(250);
        stats.update_statistics(TargetType::Nest, TargetType::Food, Millis(0));
        clock.advance_ms(300);
        stats.update_statistics(TargetType::Food, TargetType::Nest, Millis(0));

        let h = stats.get_histogram(100);
        assert_eq!(h, BTreeMap::from([(200, 1), (300, 0), (400, 0), (500, 1)]));
    }
}

#[cfg(test)]
mod histogram_tests {
    use super::*;

    #[test]
    fn fills_gaps_between_min_and_max() {
        let sparse = BTreeMap::from([(200, 1), (500, 2)]);
        let dense = fill_missing_bins(&sparse, 100);
        assert_eq!(dense, BTreeMap::from([(200, 1), (300, 0), (400, 0), (500, 2)]));
    }

    #[test]
    fn bins_use_floor_division() {
        let h = build_histogram(&[0, 99, 100, 250, -1], 100);
        assert_eq!(h, BTreeMap::from([(-100, 1), (0, 2), (100, 1), (200, 1)]));
    }

    #[test]
    fn zero_bin_size_is_empty() {
        assert!(build_histogram(&[10, 20], 0).is_empty());
    }

    #[test]
    fn counts_sum_to_trip_count() {
        let trips = [5, 1_050, 2_999, 3_000, 7_400, 7_401];
        let h = build_histogram(&trips, 1_000);
        assert_eq!(h.values().sum::<usize>(), trips.len());
        assert_eq!(h.keys().copied().collect::<Vec<_>>(), vec![0, 1_000, 2_000, 3_000, 4_000, 5_000, 6_000, 7_000]);
    }
}
