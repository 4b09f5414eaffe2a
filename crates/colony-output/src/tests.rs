//! Integration tests for colony-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{CatSnapshotRow, TickMetricsRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn metrics_row(tick: u64) -> TickMetricsRow {
        TickMetricsRow {
            tick,
            cat_population:         10,
            hunger_fraction:        0.5,
            mice_population:        7,
            min_ticks_until_hungry: None,
            pregnant:               1,
            fights:                 2,
            hit:                    0,
            removed:                0,
            mice_caught:            3,
            kittens_born:           0,
        }
    }

    fn snap_row(cat_id: u32, tick: u64) -> CatSnapshotRow {
        CatSnapshotRow {
            cat_id,
            tick,
            x:                  cat_id,
            y:                  2,
            sex:                "female",
            hungry:             true,
            asleep:             false,
            pregnant:           false,
            ticks_until_hungry: -4,
        }
    }

    fn headers(path: &std::path::Path) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("tick_metrics.csv").exists());
        assert!(dir.path().join("cat_snapshots.csv").exists());
    }

    #[test]
    fn missing_directory_is_created() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("a");
        let mut w = CsvWriter::new(&nested).unwrap();
        w.finish().unwrap();
        assert!(nested.join("tick_metrics.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(headers(&dir.path().join("tick_metrics.csv")), TickMetricsRow::HEADER);
        assert_eq!(headers(&dir.path().join("cat_snapshots.csv")), CatSnapshotRow::HEADER);
    }

    #[test]
    fn metrics_rows_written_in_order() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_metrics(&metrics_row(0)).unwrap();
        w.write_metrics(&TickMetricsRow { min_ticks_until_hungry: Some(-3), ..metrics_row(1) })
            .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_metrics.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "0");
        assert_eq!(&rows[0][2], "0.5");
        assert_eq!(&rows[0][4], "", "no cats leaves the minimum empty");
        assert_eq!(&rows[1][0], "1");
        assert_eq!(&rows[1][4], "-3");
        assert_eq!(&rows[1][9], "3");
    }

    #[test]
    fn snapshot_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(4, 10), snap_row(9, 10)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("cat_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "4");
        assert_eq!(&rows[0][1], "10");
        assert_eq!(&rows[1][2], "9");
        assert_eq!(&rows[1][4], "female");
        assert_eq!(&rows[1][5], "true");
        assert_eq!(&rows[1][8], "-4");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod row_tests {
    use colony_agent::{AgentRates, Sex};
    use colony_behavior::{Counters, World};
    use colony_core::{GridPos, SimRng, Tick};
    use colony_grid::MultiGrid;
    use colony_sim::TickMetrics;

    use crate::row::{CatSnapshotRow, TickMetricsRow};

    #[test]
    fn metrics_row_flattens_counters() {
        let metrics = TickMetrics {
            tick:                   Tick(12),
            cat_population:         5,
            hungry:                 2,
            hunger_fraction:        0.4,
            mice_population:        9,
            min_ticks_until_hungry: Some(-1),
            pregnant:               1,
            counters:               Counters {
                fights:       3,
                hit:          1,
                removed:      2,
                mice_caught:  4,
                kittens_born: 6,
            },
        };
        let row = TickMetricsRow::from(&metrics);
        assert_eq!(row.tick, 12);
        assert_eq!(row.cat_population, 5);
        assert_eq!(row.fights, 3);
        assert_eq!(row.removed, 2);
        assert_eq!(row.kittens_born, 6);
        assert_eq!(row.min_ticks_until_hungry, Some(-1));
    }

    #[test]
    fn snapshot_has_one_row_per_cat() {
        let grid = MultiGrid::new(5, 5, true).unwrap();
        let mut world = World::new(grid, AgentRates::default(), SimRng::new(3));
        let a = world.spawn_cat(Sex::Male, GridPos::new(1, 2)).unwrap();
        let b = world.spawn_cat(Sex::Female, GridPos::new(4, 0)).unwrap();
        world.agents.cat_mut(b).unwrap().is_asleep = true;

        let rows = CatSnapshotRow::collect(Tick(7), &world);
        assert_eq!(rows.len(), 2);
        let ra = rows.iter().find(|r| r.cat_id == a.0).unwrap();
        assert_eq!((ra.x, ra.y, ra.sex, ra.tick), (1, 2, "male", 7));
        let rb = rows.iter().find(|r| r.cat_id == b.0).unwrap();
        assert_eq!((rb.x, rb.y, rb.sex), (4, 0, "female"));
        assert!(rb.asleep);
    }
}

#[cfg(test)]
mod observer_tests {
    use colony_core::{ModelParams, SimConfig};
    use colony_sim::{SimBuilder, SimObserver};

    use crate::csv::CsvWriter;
    use crate::row::{CatSnapshotRow, TickMetricsRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult, SimOutputObserver};

    fn config(total_ticks: u64, output_interval_ticks: u64) -> SimConfig {
        SimConfig { tick_duration_secs: 900, total_ticks, seed: 11, output_interval_ticks }
    }

    fn params(num_cats: u32) -> ModelParams {
        ModelParams { width: 12, height: 8, num_cats, ..ModelParams::default() }
    }

    /// Fails every write after the first `ok` metrics rows.
    struct FailingWriter {
        ok:      usize,
        written: usize,
    }

    impl OutputWriter for FailingWriter {
        fn write_metrics(&mut self, _row: &TickMetricsRow) -> OutputResult<()> {
            self.written += 1;
            if self.written > self.ok {
                let kind = if self.written == self.ok + 1 {
                    std::io::ErrorKind::NotFound
                } else {
                    std::io::ErrorKind::Other
                };
                return Err(OutputError::Io(std::io::Error::new(kind, "disk gone")));
            }
            Ok(())
        }

        fn write_snapshots(&mut self, _rows: &[CatSnapshotRow]) -> OutputResult<()> {
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn run_writes_both_tables() {
        let dir = tempfile::tempdir().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        let mut sim = SimBuilder::colony(config(20, 5), params(6)).build().unwrap();
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());
        assert_eq!(obs.metrics_rows(), 20);

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_metrics.csv")).unwrap();
        let ticks: Vec<String> = rdr.records().map(|r| r.unwrap()[0].to_owned()).collect();
        assert_eq!(ticks.len(), 20);
        assert_eq!(ticks[0], "0");
        assert_eq!(ticks[19], "19");

        let mut rdr = csv::Reader::from_path(dir.path().join("cat_snapshots.csv")).unwrap();
        let snapshot_count = rdr.records().count();
        assert_eq!(snapshot_count, obs.snapshot_rows());
        assert!(snapshot_count > 0);
    }

    #[test]
    fn first_error_is_kept() {
        let writer = FailingWriter { ok: 2, written: 0 };
        let mut obs = SimOutputObserver::new(writer);
        let mut sim = SimBuilder::colony(config(6, 0), params(2)).build().unwrap();
        sim.run(&mut obs).unwrap();

        match obs.take_error() {
            Some(OutputError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected the first I/O error, got {other:?}"),
        }
        assert!(obs.take_error().is_none());
        assert_eq!(obs.metrics_rows(), 6);
    }

    #[test]
    fn empty_colony_writes_no_snapshots() {
        let dir = tempfile::tempdir().unwrap();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        let mut sim = SimBuilder::colony(config(4, 1), params(0)).build().unwrap();
        sim.run(&mut obs).unwrap();
        obs.on_sim_end(&sim.metrics());
        assert!(obs.take_error().is_none());
        assert_eq!(obs.snapshot_rows(), 0);
    }
}
