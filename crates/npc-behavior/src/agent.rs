//! The agent state machine and its per-tick entry point.

use std::sync::Arc;

use npc_core::{Seconds, Vec3};
use npc_nav::NavigationTarget;
use npc_perception::{AgentBody, Sighting, SightingMemory, TrackedEntity, VisionConfig, sense};

use crate::{AgentState, BehaviorError, BehaviorResult, PatrolRoute};

// ── AgentConfig ───────────────────────────────────────────────────────────────

/// Movement and dwell tunables for one agent.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentConfig {
    /// Arrival threshold: the agent has reached its destination when closer
    /// than this.  Must be positive.
    pub stopping_dist: f32,

    /// How long to linger after arriving at a patrol waypoint.
    pub idle_after_patrol: Seconds,

    /// How long to search in place after a chase goes cold.
    pub idle_after_chase: Seconds,
}

// ── Agent ─────────────────────────────────────────────────────────────────────

/// One patrolling agent: perception memory plus the Idle/Patrol/Chase
/// state machine.
///
/// The agent owns all of its mutable state exclusively; collaborators (the
/// tracked target, the navigation body) are borrowed per tick through their
/// seam traits.  Created in `Patrol` with the patrol index unresolved — the
/// first destination assignment resolves it to the nearest waypoint.
pub struct Agent {
    vision: VisionConfig,
    config: AgentConfig,
    route:  Arc<PatrolRoute>,
    memory: SightingMemory,

    state:          AgentState,
    previous_state: AgentState,
    entered_at:     Seconds,

    /// `None` until first resolved; reset on chase entry so the next patrol
    /// pass re-resolves to the nearest waypoint instead of resuming the
    /// old sequence.
    patrol_index: Option<usize>,

    /// Set when the patrol destination must be (re)assigned during Act.
    refresh_destination: bool,

    /// Dwell duration for the current idle period, chosen on idle entry
    /// based on the state that preceded it.
    idle_dwell: Seconds,
}

impl Agent {
    /// Build an agent, rejecting invalid movement configuration.
    ///
    /// The vision envelope and route were already validated by their own
    /// constructors.  `now` stamps the initial state entry time.
    pub fn new(
        vision: VisionConfig,
        config: AgentConfig,
        route:  Arc<PatrolRoute>,
        now:    Seconds,
    ) -> BehaviorResult<Self> {
        if !(config.stopping_dist > 0.0) {
            return Err(BehaviorError::InvalidStoppingDistance(config.stopping_dist));
        }
        Ok(Self {
            vision,
            config,
            route,
            memory: SightingMemory::default(),
            // Initial state is forced, not transitioned: no hooks fire.
            state:               AgentState::Patrol,
            previous_state:      AgentState::Patrol,
            entered_at:          now,
            patrol_index:        None,
            refresh_destination: true,
            idle_dwell:          Seconds::ZERO,
        })
    }

    // ── Read-only queries ─────────────────────────────────────────────────

    #[inline]
    pub fn state(&self) -> AgentState {
        self.state
    }

    #[inline]
    pub fn previous_state(&self) -> AgentState {
        self.previous_state
    }

    #[inline]
    pub fn patrol_index(&self) -> Option<usize> {
        self.patrol_index
    }

    /// Where the agent last saw its target (zero until the first sighting).
    #[inline]
    pub fn last_known_position(&self) -> Vec3 {
        self.memory.last_known_position
    }

    #[inline]
    pub fn last_seen(&self) -> Seconds {
        self.memory.last_seen
    }

    // ── The tick ──────────────────────────────────────────────────────────

    /// Run one Sense → Think → Act cycle.
    ///
    /// `now` comes from the host clock.  `nav` is the agent's own navigation
    /// body — it supplies placement for sensing and arrival checks and
    /// receives destination assignments.  Total over valid configuration:
    /// no failure path.
    pub fn tick<T, N>(&mut self, now: Seconds, target: &T, nav: &mut N)
    where
        T: TrackedEntity,
        N: NavigationTarget + AgentBody,
    {
        let sighting = sense(&self.vision, &mut self.memory, nav, target, now);
        self.think(&sighting, now, nav);
        self.apply_destination(nav);
    }

    // ── Think ─────────────────────────────────────────────────────────────

    /// Evaluate transition rules for this tick.
    ///
    /// The idle and patrol checks are mutually exclusive within a tick
    /// (`if`/`else if`); the chase check is a separate `if` so it observes
    /// any state switched earlier in the same tick.
    fn think<N>(&mut self, sighting: &Sighting, now: Seconds, nav: &mut N)
    where
        N: NavigationTarget + AgentBody,
    {
        if self.state == AgentState::Idle {
            if now - self.entered_at > self.idle_dwell {
                self.switch_state(AgentState::Patrol, now, nav);
                self.refresh_destination = true;
            }
        } else if self.state == AgentState::Patrol {
            if sighting.visible {
                self.switch_state(AgentState::Chase, now, nav);
            } else if !self.refresh_destination && self.arrived(nav) {
                // A pending refresh means the assigned destination is not the
                // current waypoint yet (a fresh spawn has none at all), so
                // arrival against it is meaningless.
                self.switch_state(AgentState::Idle, now, nav);
            }
        }

        // An agent that switched into Chase above was looking at a visible
        // target, so this cannot bounce it straight back out.
        if self.state == AgentState::Chase && !sighting.visible && self.arrived(nav) {
            self.switch_state(AgentState::Idle, now, nav);
        }
    }

    /// Shared arrival test: distance to the assigned destination is under
    /// the stopping threshold.
    fn arrived<N>(&self, nav: &N) -> bool
    where
        N: NavigationTarget + AgentBody,
    {
        nav.position().distance(nav.destination()) < self.config.stopping_dist
    }

    // ── State switching ───────────────────────────────────────────────────

    /// The single state-switch operation: exit hook, bookkeeping, entry-time
    /// stamp, entry hook.  No-op when `next` equals the current state.
    fn switch_state<N>(&mut self, next: AgentState, now: Seconds, nav: &mut N)
    where
        N: NavigationTarget + AgentBody,
    {
        if next == self.state {
            return;
        }
        self.exit_hook(self.state);
        self.previous_state = self.state;
        self.state = next;
        self.entered_at = now;
        self.entry_hook(next, nav);
    }

    /// Exit actions.  Every state currently leaves without cleanup; this is
    /// where a search animation or alert timer would be torn down.
    fn exit_hook(&mut self, _leaving: AgentState) {}

    fn entry_hook<N>(&mut self, entered: AgentState, nav: &mut N)
    where
        N: NavigationTarget + AgentBody,
    {
        match entered {
            AgentState::Idle => {
                self.idle_dwell = match self.previous_state {
                    AgentState::Patrol => self.config.idle_after_patrol,
                    AgentState::Chase  => self.config.idle_after_chase,
                    // Self-transitions never reach the hook; keep the
                    // previous dwell for any future transition that might.
                    AgentState::Idle   => self.idle_dwell,
                };
            }
            AgentState::Patrol => {
                self.patrol_index = Some(match self.patrol_index {
                    None        => self.route.nearest_to(nav.position()),
                    Some(index) => self.route.next_index(index),
                });
            }
            AgentState::Chase => {
                nav.set_destination(self.memory.last_known_position);
                self.patrol_index = None;
            }
        }
    }

    // ── Act ───────────────────────────────────────────────────────────────

    /// Hand the destination for the current state to the navigation body.
    fn apply_destination<N>(&mut self, nav: &mut N)
    where
        N: NavigationTarget + AgentBody,
    {
        match self.state {
            AgentState::Idle => {}

            AgentState::Patrol => {
                if self.refresh_destination {
                    // The forced initial Patrol state bypassed the entry
                    // hook, so the index may still be unresolved here.
                    let index = match self.patrol_index {
                        Some(index) => index,
                        None => {
                            let nearest = self.route.nearest_to(nav.position());
                            self.patrol_index = Some(nearest);
                            nearest
                        }
                    };
                    nav.set_destination(self.route.waypoint(index));
                    self.refresh_destination = false;
                }
            }

            AgentState::Chase => {
                // Keep the chase destination synced to the freshest sighting
                // without redundant reassignment.
                let last_known = self.memory.last_known_position;
                if nav.destination() != last_known {
                    nav.set_destination(last_known);
                }
            }
        }
    }
}
