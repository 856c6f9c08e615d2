//! `npc-perception` — how an agent notices its quarry.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                      |
//! |------------|---------------------------------------------------------------|
//! | [`entity`] | `TrackedEntity` / `AgentBody` traits, `StaticTarget`          |
//! | [`vision`] | `VisionConfig` — validated cone angle and sight distances     |
//! | [`sense`]  | `sense()`, `Sighting`, `SightingMemory`                       |
//! | [`error`]  | `PerceptionError`, `PerceptionResult<T>`                      |
//!
//! # Design notes
//!
//! Sensing is a pure geometric computation run once per tick: no raycasts, no
//! engine queries, no allocation.  The only persistent output is the sighting
//! memory (last known position and time), which is overwritten exclusively
//! while the target is actually visible — an agent that loses sight keeps
//! hunting a stale position, which is exactly the behavior the chase state
//! wants.

pub mod entity;
pub mod error;
pub mod sense;
pub mod vision;

#[cfg(test)]
mod tests;

pub use entity::{AgentBody, StaticTarget, TrackedEntity};
pub use error::{PerceptionError, PerceptionResult};
pub use sense::{Sighting, SightingMemory, sense};
pub use vision::VisionConfig;
