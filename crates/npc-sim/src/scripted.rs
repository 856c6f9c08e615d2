//! A scripted target entity.

use npc_core::{Seconds, SimRng, Vec3};
use npc_perception::TrackedEntity;

use crate::DrivenTarget;

/// A waypoint-following [`TrackedEntity`] with a togglable light.
///
/// Stands in for a player-controlled character in demos and integration
/// tests: it walks a fixed circuit at constant speed, lingers briefly at
/// each waypoint (jittered so runs don't look metronomic), and can have its
/// lamp switched on and off by the host between ticks.
#[derive(Clone, Debug)]
pub struct ScriptedTarget {
    position:       Vec3,
    route:          Vec<Vec3>,
    next:           usize,
    speed:          f32,
    illuminated:    bool,
    paused_until:   Seconds,
    waypoint_pause: Seconds,
}

impl ScriptedTarget {
    /// Create a lit target at `start` walking `route` at `speed` m/s.
    ///
    /// An empty route is allowed and means "stand still" — useful for
    /// scripting a target that only moves in later scenario phases.
    pub fn new(start: Vec3, route: Vec<Vec3>, speed: f32) -> Self {
        Self {
            position:       start,
            route,
            next:           0,
            speed,
            illuminated:    true,
            paused_until:   Seconds::ZERO,
            waypoint_pause: Seconds::ZERO,
        }
    }

    /// Linger roughly `pause` at each waypoint (gaussian-jittered ±25 %).
    pub fn with_waypoint_pause(mut self, pause: Seconds) -> Self {
        self.waypoint_pause = pause;
        self
    }

    /// Switch the carried lamp on or off.
    pub fn set_illuminated(&mut self, lit: bool) {
        self.illuminated = lit;
    }
}

impl TrackedEntity for ScriptedTarget {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn is_illuminated(&self) -> bool {
        self.illuminated
    }
}

impl DrivenTarget for ScriptedTarget {
    fn advance(&mut self, now: Seconds, dt: Seconds, rng: &mut SimRng) {
        if self.route.is_empty() || now < self.paused_until {
            return;
        }

        let goal = self.route[self.next];
        let to_goal = goal - self.position;
        let dist = to_goal.length();
        let step = self.speed * dt.0;

        if dist <= step {
            self.position = goal;
            self.next = (self.next + 1) % self.route.len();
            if self.waypoint_pause > Seconds::ZERO {
                let pause = rng.gaussian(self.waypoint_pause.0 * 0.25, self.waypoint_pause.0);
                self.paused_until = now + Seconds(pause.max(0.0));
            }
        } else {
            self.position = self.position + to_goal * (step / dist);
        }
    }
}
