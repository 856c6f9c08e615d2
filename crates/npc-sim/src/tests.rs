//! Unit and integration tests for npc-sim.

use std::sync::Arc;

use npc_behavior::{Agent, AgentConfig, AgentState, PatrolRoute};
use npc_core::{AgentId, Seconds, SimConfig, SimRng, Tick, Vec3};
use npc_nav::SteeringNav;
use npc_perception::{AgentBody, StaticTarget, TrackedEntity, VisionConfig};

use crate::{DrivenTarget, NoopObserver, ScriptedTarget, Sim, SimBuilder, SimError, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn sim_config(total_ticks: u64, output_interval_ticks: u64) -> SimConfig {
    SimConfig {
        tick_duration_secs: 0.1,
        total_ticks,
        seed: 42,
        output_interval_ticks,
    }
}

/// 60° half-angle, 15 m lit / 8 m dark, 1.5 m body sense.
fn guard_vision() -> VisionConfig {
    VisionConfig::new(60.0, 15.0, 8.0, 1.5).unwrap()
}

fn guard_config() -> AgentConfig {
    AgentConfig {
        stopping_dist:     0.5,
        idle_after_patrol: Seconds(1.0),
        idle_after_chase:  Seconds(1.0),
    }
}

/// A guard at `position` facing +Z, walking a two-point east-west route.
fn guard(position: Vec3) -> (Agent, SteeringNav) {
    let route = Arc::new(
        PatrolRoute::new(vec![Vec3::new(-5.0, 0.0, -2.0), Vec3::new(5.0, 0.0, -2.0)]).unwrap(),
    );
    let agent = Agent::new(guard_vision(), guard_config(), route, Seconds::ZERO).unwrap();
    let nav = SteeringNav::new(position, Vec3::new(0.0, 0.0, 1.0), 4.0);
    (agent, nav)
}

fn single_guard_sim<T: DrivenTarget>(target: T, config: SimConfig) -> Sim<T> {
    let (agent, nav) = guard(Vec3::new(0.0, 0.0, -2.0));
    SimBuilder::new(config, target)
        .agents(vec![agent])
        .navs(vec![nav])
        .build()
        .unwrap()
}

/// Records every state transition and counts snapshot callbacks.
#[derive(Default)]
struct TransitionRecorder {
    transitions: Vec<(AgentId, AgentState, AgentState)>,
    snapshots:   usize,
}

impl SimObserver for TransitionRecorder {
    fn on_state_change(&mut self, agent: AgentId, from: AgentState, to: AgentState, _tick: Tick) {
        self.transitions.push((agent, from, to));
    }

    fn on_snapshot(&mut self, _tick: Tick, _agents: &[Agent], _navs: &[SteeringNav]) {
        self.snapshots += 1;
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn rejects_agent_nav_count_mismatch() {
        let (agent, _) = guard(Vec3::ZERO);
        let result = SimBuilder::new(sim_config(10, 0), StaticTarget::new(Vec3::ZERO, false))
            .agents(vec![agent])
            .build();
        assert!(matches!(result, Err(SimError::AgentCountMismatch { expected: 1, got: 0, .. })));
    }

    #[test]
    fn rejects_nonpositive_tick_duration() {
        let config = SimConfig { tick_duration_secs: 0.0, ..sim_config(10, 0) };
        let result = SimBuilder::new(config, StaticTarget::new(Vec3::ZERO, false)).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn builds_with_no_agents() {
        let mut sim = SimBuilder::new(sim_config(5, 0), StaticTarget::new(Vec3::ZERO, false))
            .build()
            .unwrap();
        sim.run(&mut NoopObserver);
        assert_eq!(sim.clock.current_tick, Tick(5));
    }
}

// ── Scripted target ───────────────────────────────────────────────────────────

#[cfg(test)]
mod scripted_target {
    use super::*;

    const DT: Seconds = Seconds(0.1);

    #[test]
    fn static_target_never_moves() {
        let mut target = StaticTarget::new(Vec3::new(1.0, 2.0, 3.0), true);
        let mut rng = SimRng::new(0);
        target.advance(Seconds(1.0), DT, &mut rng);
        assert_eq!(target.position(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn empty_route_stands_still() {
        let mut target = ScriptedTarget::new(Vec3::new(4.0, 0.0, 0.0), vec![], 3.0);
        let mut rng = SimRng::new(0);
        for i in 0..20 {
            target.advance(Seconds(i as f32 * DT.0), DT, &mut rng);
        }
        assert_eq!(target.position(), Vec3::new(4.0, 0.0, 0.0));
    }

    #[test]
    fn walks_the_route_and_wraps() {
        let route = vec![Vec3::new(2.0, 0.0, 0.0), Vec3::new(2.0, 0.0, 2.0)];
        let mut target = ScriptedTarget::new(Vec3::ZERO, route.clone(), 2.0);
        let mut rng = SimRng::new(0);

        let mut visited = vec![];
        let mut now = Seconds::ZERO;
        for _ in 0..200 {
            now = now + DT;
            target.advance(now, DT, &mut rng);
            if route.contains(&target.position()) && visited.last() != Some(&target.position()) {
                visited.push(target.position());
            }
        }
        // Both waypoints reached, in order, more than once.
        assert!(visited.len() >= 3, "visited {visited:?}");
        assert_eq!(visited[0], route[0]);
        assert_eq!(visited[1], route[1]);
        assert_eq!(visited[2], route[0]);
    }

    #[test]
    fn pauses_at_waypoints() {
        let route = vec![Vec3::new(1.0, 0.0, 0.0)];
        let mut target =
            ScriptedTarget::new(Vec3::ZERO, route, 2.0).with_waypoint_pause(Seconds(5.0));
        let mut rng = SimRng::new(7);

        // Reach the waypoint.
        let mut now = Seconds::ZERO;
        while target.position() != Vec3::new(1.0, 0.0, 0.0) {
            now = now + DT;
            target.advance(now, DT, &mut rng);
        }

        // Immediately afterwards the target lingers in place.
        now = now + DT;
        target.advance(now, DT, &mut rng);
        assert_eq!(target.position(), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn lamp_toggle_changes_light_state() {
        let mut target = ScriptedTarget::new(Vec3::ZERO, vec![], 1.0);
        assert!(target.is_illuminated());
        target.set_illuminated(false);
        assert!(!target.is_illuminated());
    }
}

// ── Tick loop ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tick_loop {
    use super::*;

    #[test]
    fn snapshot_cadence_follows_output_interval() {
        let mut sim = single_guard_sim(StaticTarget::new(Vec3::new(0.0, -500.0, 0.0), false), sim_config(11, 5));
        let mut recorder = TransitionRecorder::default();
        sim.run(&mut recorder);
        // Ticks 0, 5, and 10.
        assert_eq!(recorder.snapshots, 3);
    }

    #[test]
    fn zero_interval_disables_snapshots() {
        let mut sim = single_guard_sim(StaticTarget::new(Vec3::new(0.0, -500.0, 0.0), false), sim_config(11, 0));
        let mut recorder = TransitionRecorder::default();
        sim.run(&mut recorder);
        assert_eq!(recorder.snapshots, 0);
    }

    #[test]
    fn visible_target_triggers_a_chase() {
        // Lit target 8 m in front of the guard: inside the 15 m lit range.
        let mut sim = single_guard_sim(StaticTarget::new(Vec3::new(0.0, 0.0, 6.0), true), sim_config(5, 0));
        sim.run(&mut NoopObserver);
        assert_eq!(sim.agents[0].state(), AgentState::Chase);
    }

    #[test]
    fn distant_dark_target_is_ignored() {
        // 12 m ahead in the dark: outside the 8 m dark range.
        let mut sim = single_guard_sim(StaticTarget::new(Vec3::new(0.0, 0.0, 10.0), false), sim_config(30, 0));
        let mut recorder = TransitionRecorder::default();
        sim.run(&mut recorder);
        assert!(
            recorder.transitions.iter().all(|&(_, _, to)| to != AgentState::Chase),
            "unexpected chase: {:?}",
            recorder.transitions
        );
    }

    #[test]
    fn transitions_reported_in_agent_order() {
        let (agent_a, nav_a) = guard(Vec3::new(-1.0, 0.0, 0.0));
        let (agent_b, nav_b) = guard(Vec3::new(1.0, 0.0, 0.0));
        let mut sim = SimBuilder::new(sim_config(1, 0), StaticTarget::new(Vec3::new(0.0, 0.0, 5.0), true))
            .agents(vec![agent_a, agent_b])
            .navs(vec![nav_a, nav_b])
            .build()
            .unwrap();

        let mut recorder = TransitionRecorder::default();
        sim.run(&mut recorder);

        let agents: Vec<AgentId> = recorder.transitions.iter().map(|&(id, _, _)| id).collect();
        assert_eq!(agents, vec![AgentId(0), AgentId(1)]);
    }

    #[test]
    fn pursuit_runs_the_full_cycle_back_to_patrol() {
        // An intruder sprints away up the +Z corridor, faster than the guard:
        // spotted, lost, trail followed to the last known position, short
        // search, then back on patrol.
        let intruder = ScriptedTarget::new(
            Vec3::new(0.0, 0.0, 8.0),
            vec![Vec3::new(0.0, 0.0, 500.0)],
            12.0,
        );
        let mut sim = single_guard_sim(intruder, sim_config(400, 0));
        let mut recorder = TransitionRecorder::default();
        sim.run(&mut recorder);

        let states: Vec<(AgentState, AgentState)> = recorder
            .transitions
            .iter()
            .map(|&(_, from, to)| (from, to))
            .collect();
        assert!(
            states.len() >= 3,
            "expected a full spotted/lost/resume cycle, got {states:?}"
        );
        assert_eq!(states[0], (AgentState::Patrol, AgentState::Chase));
        assert_eq!(states[1], (AgentState::Chase, AgentState::Idle));
        assert_eq!(states[2], (AgentState::Idle, AgentState::Patrol));
    }

    #[test]
    fn same_seed_runs_identically() {
        let make = || {
            let intruder = ScriptedTarget::new(
                Vec3::ZERO,
                vec![Vec3::new(3.0, 0.0, 0.0), Vec3::new(-3.0, 0.0, 0.0)],
                2.0,
            )
            .with_waypoint_pause(Seconds(0.5));
            single_guard_sim(intruder, sim_config(200, 0))
        };

        let mut a = make();
        let mut b = make();
        a.run(&mut NoopObserver);
        b.run(&mut NoopObserver);

        assert_eq!(a.target.position(), b.target.position());
        assert_eq!(a.navs[0].position(), b.navs[0].position());
        assert_eq!(a.agents[0].state(), b.agents[0].state());
    }
}
