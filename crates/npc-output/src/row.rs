//! Plain data row types written by output backends.

use npc_behavior::AgentState;

/// A snapshot of one agent's position and behavior state at a given tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub agent_id: u32,
    pub tick:     u64,
    pub x:        f32,
    pub y:        f32,
    pub z:        f32,
    pub state:    AgentState,
    /// Currently assigned navigation destination.
    pub dest_x:   f32,
    pub dest_y:   f32,
    pub dest_z:   f32,
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:           u64,
    pub sim_time_secs:  f32,
    /// Number of agents in the chase state at tick end.
    pub chasing_agents: u64,
}
