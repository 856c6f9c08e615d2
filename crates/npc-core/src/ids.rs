//! Strongly typed agent identifier.

use std::fmt;

/// Index of an agent in the simulation's parallel storage vectors.
///
/// `Copy + Ord + Hash`, so it works as a map key without ceremony.  The
/// wrapped integer is `pub` for direct `id.0 as usize` indexing, though
/// [`index`][AgentId::index] reads better at call sites.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl AgentId {
    /// "No such agent" sentinel (`u32::MAX`).
    pub const INVALID: AgentId = AgentId(u32::MAX);

    /// The `Vec` index this ID addresses.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for AgentId {
    /// Defaults to [`INVALID`][Self::INVALID] so an unset ID is visibly unset.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}
