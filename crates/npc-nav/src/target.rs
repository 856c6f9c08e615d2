//! The destination seam consumed by the behavior layer.

use npc_core::Vec3;

/// Destination assignment for a path-following body.
///
/// Implementations are expected to report back exactly the destination that
/// was last assigned — behavior code compares it for equality to avoid
/// redundant reassignment, and measures distance to it for arrival checks.
pub trait NavigationTarget {
    /// Replace the current destination.
    fn set_destination(&mut self, destination: Vec3);

    /// The currently assigned destination.
    fn destination(&self) -> Vec3;
}
