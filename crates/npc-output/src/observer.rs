//! Bridges the sim's observer hooks to an [`OutputWriter`].

use npc_behavior::Agent;
use npc_core::{SimConfig, Tick};
use npc_nav::{NavigationTarget, SteeringNav};
use npc_perception::AgentBody;
use npc_sim::SimObserver;

use crate::row::{AgentSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that turns tick callbacks into trace rows.
///
/// Observer hooks cannot return errors, so a failed write is parked here
/// instead of propagated; once something has failed, later writes are still
/// attempted but only the first failure is kept.  Callers should check
/// [`take_error`][Self::take_error] once the run is over.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:             W,
    tick_duration_secs: f32,
    first_error:        Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Wrap `writer`; `config` supplies the tick-to-seconds factor for the
    /// summary rows.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            tick_duration_secs: config.tick_duration_secs,
            first_error:        None,
        }
    }

    /// The first write error of the run, if any, clearing it.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.first_error.take()
    }

    /// Give up the wrapped writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn record_failure(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            self.first_error.get_or_insert(e);
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, chasing: usize) {
        let result = self.writer.write_tick_summary(&TickSummaryRow {
            tick:           tick.0,
            sim_time_secs:  tick.0 as f32 * self.tick_duration_secs,
            chasing_agents: chasing as u64,
        });
        self.record_failure(result);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &[Agent], navs: &[SteeringNav]) {
        if agents.is_empty() {
            return;
        }

        let mut rows = Vec::with_capacity(agents.len());
        for (i, (agent, nav)) in agents.iter().zip(navs).enumerate() {
            let pos = nav.position();
            let dest = nav.destination();
            rows.push(AgentSnapshotRow {
                agent_id: i as u32,
                tick:     tick.0,
                x:        pos.x,
                y:        pos.y,
                z:        pos.z,
                state:    agent.state(),
                dest_x:   dest.x,
                dest_y:   dest.y,
                dest_z:   dest.z,
            });
        }

        let result = self.writer.write_snapshots(&rows);
        self.record_failure(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.record_failure(result);
    }
}
