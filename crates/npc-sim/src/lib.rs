//! `npc-sim` — tick loop orchestrator for the rust_npc framework.
//!
//! # The tick
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Target   — advance the tracked entity (single writer, runs first).
//!   ② Agents   — for each agent: Sense → Think → Act, then integrate its
//!                 body one step (parallel with the `parallel` feature).
//!   ③ Notify   — report state transitions and per-tick stats to the
//!                 observer; snapshot every `output_interval_ticks`.
//! ```
//!
//! Each agent tick runs to completion before anything observes its state;
//! agents share no mutable data with each other, which is what makes phase ②
//! embarrassingly parallel.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                              |
//! |------------|-----------------------------------------------------|
//! | `parallel` | Runs the agent phase on Rayon's thread pool.        |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! let mut sim = SimBuilder::new(config, intruder)
//!     .agents(agents)
//!     .navs(navs)
//!     .build()?;
//! sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod scripted;
pub mod sim;
pub mod target;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use scripted::ScriptedTarget;
pub use sim::Sim;
pub use target::DrivenTarget;
