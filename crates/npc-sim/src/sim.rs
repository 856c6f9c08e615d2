//! The `Sim` struct and its tick loop.

use npc_behavior::{Agent, AgentState};
use npc_core::{AgentId, SimClock, SimConfig, SimRng};
use npc_nav::SteeringNav;

use crate::{DrivenTarget, SimObserver};

/// The main simulation runner.
///
/// `Sim<T>` holds all simulation state and drives the tick loop: advance the
/// target, run every agent's Sense → Think → Act, integrate bodies, notify
/// the observer.  Agents and their bodies live in two parallel vectors
/// indexed by [`AgentId`].
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<T: DrivenTarget> {
    /// Global configuration (total ticks, seed, tick duration, …).
    pub config: SimConfig,

    /// Simulation clock — current tick and the continuous time it maps to.
    pub clock: SimClock,

    /// The behavior state machines, indexed by `AgentId`.
    pub agents: Vec<Agent>,

    /// The navigation bodies, indexed by `AgentId` in lockstep with `agents`.
    pub navs: Vec<SteeringNav>,

    /// The entity every agent hunts.  Mutated only at the top of each tick.
    pub target: T,

    /// Deterministic RNG for scripted entities, seeded from `config.seed`.
    pub rng: SimRng,
}

impl<T: DrivenTarget> Sim<T> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    /// The steady-state loop is total: nothing in it can fail.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        while self.clock.current_tick < self.config.end_tick() {
            self.step(observer);
        }
        observer.on_sim_end(self.clock.current_tick);
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(observer);
        }
    }

    /// Number of agents in the simulation.
    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.now();
        let dt = self.clock.tick_duration;
        let tick = self.clock.current_tick;

        observer.on_tick_start(tick);

        // ── Phase 1: advance the target ───────────────────────────────────
        //
        // The target is the only entity written by something other than its
        // own tick, so it moves first and is read-only for the rest of the
        // tick.
        self.target.advance(now, dt, &mut self.rng);

        // ── Phase 2: agent ticks ──────────────────────────────────────────
        //
        // Explicit field borrows so the borrow checker sees disjoint access.
        let target = &self.target;
        let agents = &mut self.agents;
        let navs = &mut self.navs;

        #[cfg(not(feature = "parallel"))]
        let transitions: Vec<(AgentState, AgentState)> = agents
            .iter_mut()
            .zip(navs.iter_mut())
            .map(|(agent, nav)| {
                let before = agent.state();
                agent.tick(now, target, nav);
                nav.advance(dt);
                (before, agent.state())
            })
            .collect();

        #[cfg(feature = "parallel")]
        let transitions: Vec<(AgentState, AgentState)> = {
            use rayon::prelude::*;

            agents
                .par_iter_mut()
                .zip(navs.par_iter_mut())
                .map(|(agent, nav)| {
                    let before = agent.state();
                    agent.tick(now, target, nav);
                    nav.advance(dt);
                    (before, agent.state())
                })
                .collect()
        };

        // ── Phase 3: notify ───────────────────────────────────────────────
        //
        // Sequential, ascending AgentId, so observer output is deterministic
        // even when the agent phase ran in parallel.
        for (i, (before, after)) in transitions.into_iter().enumerate() {
            if before != after {
                let agent = AgentId(i as u32);
                log::debug!("{agent}: {before} -> {after} at {tick}");
                observer.on_state_change(agent, before, after, tick);
            }
        }

        let chasing = self.agents.iter().filter(|a| a.state() == AgentState::Chase).count();
        observer.on_tick_end(tick, chasing);

        if self.config.output_interval_ticks > 0
            && tick.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(tick, &self.agents, &self.navs);
        }

        self.clock.advance();
    }
}
