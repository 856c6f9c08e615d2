//! `npc-nav` — the path-following collaborator behavior code steers through.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`target`]   | `NavigationTarget` — destination set/get seam         |
//! | [`steering`] | `SteeringNav` — straight-line movement integrator     |
//!
//! # Design notes
//!
//! Behavior code only ever assigns a destination and reads it back for
//! arrival checks; *how* the body gets there is this crate's business.
//! `SteeringNav` is deliberately simple — straight-line travel with arrival
//! slowdown and smoothed heading — because the framework treats pathfinding
//! as an external capability.  A navmesh- or graph-backed implementation
//! slots in by implementing the same two traits.

pub mod steering;
pub mod target;


pub use steering::SteeringNav;
pub use target::NavigationTarget;
