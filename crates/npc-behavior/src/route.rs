//! Patrol waypoint sequences.

use npc_core::Vec3;

use crate::{BehaviorError, BehaviorResult};

/// An ordered, fixed sequence of patrol waypoints.
///
/// Routes are built once at configuration time and shared (not owned) by the
/// agents walking them; indices into the route wrap modulo its length.
/// Construction rejects an empty sequence, so every method below can assume
/// at least one waypoint.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatrolRoute {
    waypoints: Vec<Vec3>,
}

impl PatrolRoute {
    /// Build a route from `waypoints`, rejecting an empty list.
    pub fn new(waypoints: Vec<Vec3>) -> BehaviorResult<Self> {
        if waypoints.is_empty() {
            return Err(BehaviorError::EmptyPatrolRoute);
        }
        Ok(Self { waypoints })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Always `false` — construction rejects empty routes.  Provided so the
    /// type reads like other collections.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Position of the waypoint at `index`.
    ///
    /// An index outside `[0, len)` is a logic defect in the caller's index
    /// bookkeeping, not a runtime condition — hence the debug assertion.
    #[inline]
    pub fn waypoint(&self, index: usize) -> Vec3 {
        debug_assert!(index < self.waypoints.len(), "patrol index {index} out of bounds");
        self.waypoints[index]
    }

    /// Index of the waypoint nearest to `position`.
    ///
    /// Distance ties go to the earliest waypoint in route order.  Compares
    /// squared distances; the argmin is the same.
    pub fn nearest_to(&self, position: Vec3) -> usize {
        let mut best = 0;
        let mut best_dist = (self.waypoints[0] - position).length_squared();
        for (i, &wp) in self.waypoints.iter().enumerate().skip(1) {
            let dist = (wp - position).length_squared();
            if dist < best_dist {
                best = i;
                best_dist = dist;
            }
        }
        best
    }

    /// The index after `index`, wrapping at the end of the route.
    #[inline]
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.waypoints.len()
    }
}
