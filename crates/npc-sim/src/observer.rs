//! Simulation observer trait for progress reporting and data collection.

use npc_behavior::{Agent, AgentState};
use npc_core::{AgentId, Tick};
use npc_nav::SteeringNav;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — alert printer
///
/// ```rust,ignore
/// struct AlertPrinter;
///
/// impl SimObserver for AlertPrinter {
///     fn on_state_change(&mut self, agent: AgentId, from: AgentState, to: AgentState, tick: Tick) {
///         println!("{tick}: {agent} {from} -> {to}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per agent state transition, after the agent phase, in
    /// ascending `AgentId` order.
    fn on_state_change(&mut self, _agent: AgentId, _from: AgentState, _to: AgentState, _tick: Tick) {}

    /// Called at the end of each tick.
    ///
    /// `chasing` is the number of agents in the chase state at tick end.
    fn on_tick_end(&mut self, _tick: Tick, _chasing: usize) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`).
    ///
    /// Provides read-only access to all agents and their bodies so output
    /// writers can record positions and states without the sim knowing about
    /// any specific output format.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &[Agent], _navs: &[SteeringNav]) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
