//! The target seam of the simulation loop.

use npc_core::{Seconds, SimRng};
use npc_perception::{StaticTarget, TrackedEntity};

/// A tracked entity the simulation advances once per tick, before any agent
/// senses.
///
/// This is the single-writer side of the tick: the target mutates here and
/// is read-only for the rest of the tick, so the agent phase can run in
/// parallel without locking.  `Send + Sync` is required for the same reason.
pub trait DrivenTarget: TrackedEntity + Send + Sync {
    /// Advance the entity by one tick.  Default: hold still.
    fn advance(&mut self, _now: Seconds, _dt: Seconds, _rng: &mut SimRng) {}
}

impl DrivenTarget for StaticTarget {}
