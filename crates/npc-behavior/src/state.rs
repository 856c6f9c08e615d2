//! Behavior states.

use std::fmt;

/// The three behavior states of a patrolling agent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentState {
    /// Dwelling in place after reaching a destination.
    Idle,
    /// Walking the waypoint circuit.
    Patrol,
    /// Heading for the target's last known position.
    Chase,
}

impl fmt::Display for AgentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AgentState::Idle   => "idle",
            AgentState::Patrol => "patrol",
            AgentState::Chase  => "chase",
        };
        f.write_str(name)
    }
}
