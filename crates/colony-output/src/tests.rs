//! Integration tests for colony-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{HistogramRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn summary_row(tick: u64) -> TickSummaryRow {
        TickSummaryRow {
            tick,
            trail_time_ms:      tick * 10,
            live_pheromones:    tick * 3,
            trips:              2,
            food_delivered:     1,
            avg_travel_time_ms: 1234.5,
        }
    }

    fn headers(path: std::path::PathBuf) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("tick_summaries.csv").exists());
        assert!(dir.path().join("travel_histogram.csv").exists());
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("a");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(dir.path().join("tick_summaries.csv")),
            ["tick", "trail_time_ms", "live_pheromones", "trips", "food_delivered", "avg_travel_time_ms"]
        );
        assert_eq!(headers(dir.path().join("travel_histogram.csv")), ["bin_start_ms", "trips"]);
    }

    #[test]
    fn csv_tick_summary_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][1], "30");
        assert_eq!(&rows[0][2], "9");
        assert_eq!(&rows[0][5], "1234.500");
    }

    #[test]
    fn csv_histogram_written_in_order() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_histogram(&[
            HistogramRow { bin_start_ms: 200, trips: 1 },
            HistogramRow { bin_start_ms: 300, trips: 0 },
            HistogramRow { bin_start_ms: 400, trips: 4 },
        ])
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("travel_histogram.csv")).unwrap();
        let rows: Vec<String> = rdr
            .records()
            .map(|r| r.unwrap())
            .map(|r| format!("{}:{}", &r[0], &r[1]))
            .collect();
        assert_eq!(rows, ["200:1", "300:0", "400:4"]);
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_histogram_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_histogram(&[]).unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use colony_agent::{AgentRngs, Ant, AntParams};
    use colony_core::{ManualClock, Millis, Vec2};
    use colony_sim::{SimBuilder, SimConfig};
    use tempfile::TempDir;

    use crate::{CsvWriter, HistogramRow, OutputResult, OutputWriter, StatsOutputObserver, TickSummaryRow};

    /// Keeps rows in memory.
    #[derive(Default)]
    struct MemoryWriter {
        summaries: Vec<TickSummaryRow>,
        histogram: Vec<HistogramRow>,
        finished:  usize,
    }

    impl OutputWriter for MemoryWriter {
        fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
            self.summaries.push(*row);
            Ok(())
        }

        fn write_histogram(&mut self, rows: &[HistogramRow]) -> OutputResult<()> {
            self.histogram.extend_from_slice(rows);
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    /// Single ant walking straight at food 15 cells east; it arrives on
    /// tick 14 (index 13) after 130 ms.
    fn scout_sim(total_ticks: u64) -> colony_sim::Sim<colony_behavior::ForagingBehavior> {
        let config = SimConfig {
            grid_size: 40,
            cell_size: 1.0,
            nest_cell: [10, 10],
            food_cell: Some([25, 10]),
            total_ticks,
            histogram_bin_ms: 100,
            ..SimConfig::default()
        };
        let params = AntParams { max_turn_angle: 10.0, ..AntParams::default() };
        let ant = Ant::new(config.nest().position, Vec2::new(1.0, 0.0), config.food(), &params);
        let (_handle, clock) = ManualClock::shared(Millis::ZERO);
        SimBuilder::foraging(config)
            .unwrap()
            .clock(clock)
            .colony(vec![ant], AgentRngs::new(1, 3))
            .build()
            .unwrap()
    }

    #[test]
    fn records_every_tick_and_histogram() {
        let mut sim = scout_sim(20);
        let mut obs = StatsOutputObserver::new(MemoryWriter::default(), 100);
        sim.run(&mut obs);
        assert!(obs.take_error().is_none());

        let w = obs.into_writer();
        assert_eq!(w.summaries.len(), 20);
        assert_eq!(w.summaries[12].trips, 0);
        assert_eq!(w.summaries[13].trips, 1);
        assert_eq!(w.summaries[13].trail_time_ms, 130);
        assert_eq!(w.histogram, [HistogramRow { bin_start_ms: 100, trips: 1 }]);
        assert_eq!(w.finished, 1);
    }

    #[test]
    fn interval_thins_summaries() {
        let mut sim = scout_sim(20);
        let mut obs = StatsOutputObserver::new(MemoryWriter::default(), 100).every(5);
        sim.run(&mut obs);

        let ticks: Vec<u64> = obs.into_writer().summaries.iter().map(|r| r.tick).collect();
        assert_eq!(ticks, [0, 5, 10, 15]);
    }

    #[test]
    fn integration_csv() {
        let mut sim = scout_sim(20);
        let dir: TempDir = tempfile::tempdir().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = StatsOutputObserver::new(writer, sim.config.histogram_bin_ms);
        sim.run(&mut obs);
        assert!(obs.take_error().is_none(), "no write errors expected");

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        assert_eq!(rdr.records().count(), 20);

        let mut rdr = csv::Reader::from_path(dir.path().join("travel_histogram.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "100");
        assert_eq!(&rows[0][1], "1");
    }
}
