//! `npc-behavior` — the Sense → Think → Act decision core.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                   |
//! |-----------|------------------------------------------------------------|
//! | [`state`] | `AgentState` — Idle / Patrol / Chase                       |
//! | [`route`] | `PatrolRoute` — validated waypoint sequence                |
//! | [`agent`] | `Agent`, `AgentConfig` — the state machine and its tick    |
//! | [`error`] | `BehaviorError`, `BehaviorResult<T>`                       |
//!
//! # The tick
//!
//! [`Agent::tick`] runs the three phases in fixed order, to completion,
//! before any other agent or system observes the result:
//!
//! 1. **Sense** — geometric visibility test, sighting memory update
//!    (npc-perception).
//! 2. **Think** — state transitions, with entry/exit hooks configuring
//!    per-state data.
//! 3. **Act** — hand the destination for the current state to the
//!    navigation collaborator.
//!
//! Agents share no mutable state; all collaborator access goes through the
//! [`TrackedEntity`][npc_perception::TrackedEntity] and
//! [`NavigationTarget`][npc_nav::NavigationTarget] seams.

pub mod agent;
pub mod error;
pub mod route;
pub mod state;


pub use agent::{Agent, AgentConfig};
pub use error::{BehaviorError, BehaviorResult};
pub use route::PatrolRoute;
pub use state::AgentState;
