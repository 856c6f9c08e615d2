//! The backend seam for trace persistence.

use crate::{AgentSnapshotRow, OutputResult, TickSummaryRow};

/// Persists trace rows produced by
/// [`SimOutputObserver`][crate::SimOutputObserver].
///
/// Writers may buffer freely; nothing is guaranteed on disk until
/// [`finish`][Self::finish] runs.
pub trait OutputWriter {
    /// Persist a batch of agent snapshots.
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    /// Persist one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush buffers and close out the trace.  Safe to call repeatedly.
    fn finish(&mut self) -> OutputResult<()>;
}
