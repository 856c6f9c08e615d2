//! Fluent builder for constructing a [`Sim`].

use npc_behavior::Agent;
use npc_core::{SimConfig, SimRng};
use npc_nav::SteeringNav;

use crate::{DrivenTarget, Sim, SimError, SimResult};

/// Fluent builder for [`Sim<T>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — total ticks, seed, tick duration
/// - `T: DrivenTarget` — the entity agents hunt (a target is mandatory:
///   agents with nothing to perceive are a configuration error, not a
///   runtime mode)
///
/// # Optional inputs
///
/// | Method        | Default     |
/// |---------------|-------------|
/// | `.agents(v)`  | no agents   |
/// | `.navs(v)`    | no bodies   |
///
/// `agents` and `navs` must end up the same length — element `i` of each
/// belongs to `AgentId(i)`.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, intruder)
///     .agents(agents)
///     .navs(navs)
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<T: DrivenTarget> {
    config: SimConfig,
    target: T,
    agents: Vec<Agent>,
    navs:   Vec<SteeringNav>,
}

impl<T: DrivenTarget> SimBuilder<T> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, target: T) -> Self {
        Self {
            config,
            target,
            agents: Vec::new(),
            navs:   Vec::new(),
        }
    }

    /// Supply the behavior state machines, one per agent.
    pub fn agents(mut self, agents: Vec<Agent>) -> Self {
        self.agents = agents;
        self
    }

    /// Supply the navigation bodies, one per agent, in `agents` order.
    pub fn navs(mut self, navs: Vec<SteeringNav>) -> Self {
        self.navs = navs;
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<T>> {
        self.config.validate()?;

        if self.navs.len() != self.agents.len() {
            return Err(SimError::AgentCountMismatch {
                expected: self.agents.len(),
                got:      self.navs.len(),
                what:     "navigation body",
            });
        }

        Ok(Sim {
            clock:  self.config.make_clock(),
            rng:    SimRng::new(self.config.seed),
            config: self.config,
            agents: self.agents,
            navs:   self.navs,
            target: self.target,
        })
    }
}
