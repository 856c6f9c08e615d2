//! pursuit — smallest runnable scenario for the rust_npc framework.
//!
//! Two guards patrol a gallery floor while a scripted intruder crosses it,
//! lamp switching on and off at random intervals.  Agent traces land in
//! `output/pursuit/`; set `RUST_LOG=debug` to watch state transitions live.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use npc_behavior::{Agent, AgentConfig, AgentState, PatrolRoute};
use npc_core::{AgentId, Seconds, SimConfig, SimRng, Tick, Vec3};
use npc_nav::{NavigationTarget, SteeringNav};
use npc_output::{CsvWriter, OutputWriter, SimOutputObserver};
use npc_perception::{AgentBody, TrackedEntity, VisionConfig};
use npc_sim::{ScriptedTarget, SimBuilder, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:                  u64 = 42;
const TICK_DURATION_SECS:    f32 = 0.1;
const SIM_SECONDS:           u64 = 120;
const OUTPUT_INTERVAL_TICKS: u64 = 5;

const GUARD_SPEED:    f32 = 3.5;
const INTRUDER_SPEED: f32 = 2.5;

/// Lamp on/off span bounds, shaped toward short flickers.
const LAMP_SPAN_MIN_SECS: f32 = 4.0;
const LAMP_SPAN_MAX_SECS: f32 = 12.0;

// ── Observer wrapper to surface alerts ────────────────────────────────────────

struct AlertObserver<W: OutputWriter> {
    inner:  SimOutputObserver<W>,
    alerts: usize,
}

impl<W: OutputWriter> AlertObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, alerts: 0 }
    }
}

impl<W: OutputWriter> SimObserver for AlertObserver<W> {
    fn on_state_change(&mut self, agent: AgentId, _from: AgentState, to: AgentState, tick: Tick) {
        if to == AgentState::Chase {
            self.alerts += 1;
            println!("[{tick}] {agent} spotted the intruder");
        }
    }

    fn on_tick_end(&mut self, tick: Tick, chasing: usize) {
        self.inner.on_tick_end(tick, chasing);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &[Agent], navs: &[SteeringNav]) {
        self.inner.on_snapshot(tick, agents, navs);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── Scenario setup ────────────────────────────────────────────────────────────

fn make_guard(route: Vec<Vec3>, start: Vec3, facing: Vec3) -> Result<(Agent, SteeringNav)> {
    let vision = VisionConfig::new(
        55.0, // half-angle, degrees
        14.0, // lit sight distance
        6.0,  // dark sight distance
        1.2,  // body sense radius
    )?;
    let config = AgentConfig {
        stopping_dist:     0.6,
        idle_after_patrol: Seconds(2.5),
        idle_after_chase:  Seconds(5.0),
    };
    let route = std::sync::Arc::new(PatrolRoute::new(route)?);
    let agent = Agent::new(vision, config, route, Seconds::ZERO)?;
    let nav = SteeringNav::new(start, facing, GUARD_SPEED);
    Ok((agent, nav))
}

/// Candidate intruder paths across the floor, most-trodden first.
fn entry_routes() -> [Vec<Vec3>; 3] {
    [
        // West sweep: hugs the outer wall.
        vec![
            Vec3::new(-10.0, 0.0, -8.0),
            Vec3::new(-10.0, 0.0, 8.0),
            Vec3::new(0.0, 0.0, 8.0),
        ],
        // Center dash: straight through both patrol lanes.
        vec![Vec3::new(0.0, 0.0, -8.0), Vec3::new(0.0, 0.0, 8.0)],
        // East loop: doubles back once.
        vec![
            Vec3::new(10.0, 0.0, -8.0),
            Vec3::new(10.0, 0.0, 4.0),
            Vec3::new(6.0, 0.0, -2.0),
            Vec3::new(10.0, 0.0, 8.0),
        ],
    ]
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== pursuit — rust_npc scenario ===");
    println!("Guards: 2  |  Sim: {SIM_SECONDS} s  |  Seed: {SEED}");
    println!();

    // 1. Pick the intruder's path (weighted toward the common ones) and set
    //    up its lamp schedule.  Scenario randomness is seeded separately from
    //    the sim's own RNG so both streams stay reproducible.
    let mut scenario_rng = SimRng::new(SEED + 1);
    let routes = entry_routes();
    let pick = scenario_rng.weighted_index(&[3, 2, 1]);
    log::info!("intruder takes entry route {pick}");

    let start = routes[pick][0];
    let intruder = ScriptedTarget::new(start, routes[pick].clone(), INTRUDER_SPEED)
        .with_waypoint_pause(Seconds(1.5));

    // 2. Guards: one walks the west gallery loop, one holds the east lane.
    let (guard_w, nav_w) = make_guard(
        vec![
            Vec3::new(-8.0, 0.0, -6.0),
            Vec3::new(-8.0, 0.0, 6.0),
            Vec3::new(0.0, 0.0, 6.0),
            Vec3::new(0.0, 0.0, -6.0),
        ],
        Vec3::new(-4.0, 0.0, -6.0),
        Vec3::new(1.0, 0.0, 0.0),
    )?;
    let (guard_e, nav_e) = make_guard(
        vec![Vec3::new(8.0, 0.0, -6.0), Vec3::new(8.0, 0.0, 6.0)],
        Vec3::new(8.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
    )?;

    // 3. Sim config and build.
    let config = SimConfig {
        tick_duration_secs:    TICK_DURATION_SECS,
        total_ticks:           (SIM_SECONDS as f32 / TICK_DURATION_SECS) as u64,
        seed:                  SEED,
        output_interval_ticks: OUTPUT_INTERVAL_TICKS,
    };
    let mut sim = SimBuilder::new(config.clone(), intruder)
        .agents(vec![guard_w, guard_e])
        .navs(vec![nav_w, nav_e])
        .build()?;

    // 4. Output.
    std::fs::create_dir_all("output/pursuit")?;
    let writer = CsvWriter::new(Path::new("output/pursuit"))?;
    let mut observer = AlertObserver::new(SimOutputObserver::new(writer, &config));

    // 5. Run tick by tick, toggling the intruder's lamp on a jittered
    //    schedule between ticks.
    let t0 = Instant::now();
    let mut next_toggle = Seconds(scenario_rng.range_exp_weighted(
        LAMP_SPAN_MIN_SECS,
        LAMP_SPAN_MAX_SECS,
        2.0,
    ));
    while sim.clock.current_tick < sim.config.end_tick() {
        if sim.clock.now() >= next_toggle {
            let lit = !sim.target.is_illuminated();
            sim.target.set_illuminated(lit);
            next_toggle = sim.clock.now()
                + Seconds(scenario_rng.range_exp_weighted(
                    LAMP_SPAN_MIN_SECS,
                    LAMP_SPAN_MAX_SECS,
                    2.0,
                ));
        }
        sim.run_ticks(1, &mut observer);
    }
    observer.on_sim_end(sim.clock.current_tick);
    let elapsed = t0.elapsed();

    if let Some(e) = observer.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    println!();
    println!(
        "Simulation complete in {:.3} s ({} agents, {} ticks, {} alerts)",
        elapsed.as_secs_f64(),
        sim.agent_count(),
        sim.clock.current_tick.0,
        observer.alerts,
    );
    println!("Traces written to output/pursuit/");
    println!();

    println!("{:<10} {:<8} {:<22} {:<22}", "Agent", "State", "Position", "Destination");
    println!("{}", "-".repeat(64));
    for (i, (agent, nav)) in sim.agents.iter().zip(&sim.navs).enumerate() {
        println!(
            "{:<10} {:<8} {:<22} {:<22}",
            i,
            agent.state().to_string(),
            nav.position().to_string(),
            nav.destination().to_string(),
        );
    }
    println!(
        "{:<10} {:<8} {:<22}",
        "intruder",
        if sim.target.is_illuminated() { "lit" } else { "dark" },
        sim.target.position().to_string(),
    );

    Ok(())
}
