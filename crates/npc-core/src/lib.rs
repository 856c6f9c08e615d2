//! `npc-core` — foundational types for the `rust_npc` agent framework.
//!
//! This crate is a dependency of every other `npc-*` crate.  It intentionally
//! has no `npc-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                                  |
//! |-----------|-----------------------------------------------------------|
//! | [`ids`]   | `AgentId`                                                 |
//! | [`math`]  | `Vec3`, remapping and framerate-independent lerp helpers  |
//! | [`time`]  | `Tick`, `Seconds`, `SimClock`, `SimConfig`                |
//! | [`rng`]   | `SimRng` — deterministic RNG with game-math distributions |
//! | [`error`] | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod math;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::AgentId;
pub use math::Vec3;
pub use rng::SimRng;
pub use time::{Seconds, SimClock, SimConfig, Tick};
