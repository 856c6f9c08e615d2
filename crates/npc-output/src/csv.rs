//! CSV trace backend.
//!
//! One run produces two files side by side in the output directory:
//! `agent_snapshots.csv` (positions/states at the snapshot cadence) and
//! `tick_summaries.csv` (one row per tick).

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, OutputResult, TickSummaryRow};

const SNAPSHOT_HEADER: [&str; 9] = [
    "agent_id", "tick", "x", "y", "z", "state", "dest_x", "dest_y", "dest_z",
];
const SUMMARY_HEADER: [&str; 3] = ["tick", "sim_time_secs", "chasing_agents"];

/// CSV-backed [`OutputWriter`].
pub struct CsvWriter {
    snapshot_file: Writer<File>,
    summary_file:  Writer<File>,
    finished:      bool,
}

impl CsvWriter {
    /// Create both trace files under `dir` (truncating existing ones) and
    /// emit their header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshot_file = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshot_file.write_record(SNAPSHOT_HEADER)?;

        let mut summary_file = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summary_file.write_record(SUMMARY_HEADER)?;

        Ok(Self {
            snapshot_file,
            summary_file,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for r in rows {
            self.snapshot_file.write_record(&[
                r.agent_id.to_string(),
                r.tick.to_string(),
                r.x.to_string(),
                r.y.to_string(),
                r.z.to_string(),
                r.state.to_string(),
                r.dest_x.to_string(),
                r.dest_y.to_string(),
                r.dest_z.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summary_file.write_record(&[
            row.tick.to_string(),
            row.sim_time_secs.to_string(),
            row.chasing_agents.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if !self.finished {
            self.snapshot_file.flush()?;
            self.summary_file.flush()?;
            self.finished = true;
        }
        Ok(())
    }
}
