//! Entity seams — the two read-only views sensing needs.
//!
//! Both traits abstract over whatever actually owns the transforms (a physics
//! body, a steering integrator, a test fixture) so this crate has zero
//! dependency on any particular movement implementation.

use npc_core::Vec3;

/// Read-only view of the entity an agent hunts.
///
/// The perception code never mutates the target; it is written elsewhere,
/// once per global tick, before any agent senses.
pub trait TrackedEntity {
    /// World position of the entity.
    fn position(&self) -> Vec3;

    /// Whether the entity is currently lit up (carried lamp, stood in light).
    ///
    /// Selects which of the two configured sight distances applies: a lit
    /// target is spottable from much farther away than one in darkness.
    fn is_illuminated(&self) -> bool;
}

/// Placement of the sensing agent's own body.
pub trait AgentBody {
    /// World position of the agent.
    fn position(&self) -> Vec3;

    /// Unit vector the agent is facing along.
    fn forward(&self) -> Vec3;
}

/// A [`TrackedEntity`] that never moves.
///
/// Useful as a placeholder in tests or for fixed points of interest (a noise
/// source, a dropped lantern) that agents should investigate like a target.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StaticTarget {
    pub position:    Vec3,
    pub illuminated: bool,
}

impl StaticTarget {
    pub fn new(position: Vec3, illuminated: bool) -> Self {
        Self { position, illuminated }
    }
}

impl TrackedEntity for StaticTarget {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn is_illuminated(&self) -> bool {
        self.illuminated
    }
}
