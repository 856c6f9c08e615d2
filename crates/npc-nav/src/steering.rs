//! Straight-line steering body.

use npc_core::math::{asymptotic_lerp_frac, remap_clamped};
use npc_core::{Seconds, Vec3};
use npc_perception::AgentBody;

use crate::NavigationTarget;

/// Per-step heading lerp fraction at the 30 Hz reference rate.
const TURN_SMOOTHING: f32 = 0.25;

/// Radius inside which travel speed ramps down toward the destination.
const SLOW_RADIUS: f32 = 2.0;

/// A body that walks straight at its destination.
///
/// Owns the agent's placement (position + forward) and its assigned
/// destination.  [`advance`][SteeringNav::advance] integrates one time step:
/// the body moves toward the destination at up to `max_speed`, ramping down
/// inside [`SLOW_RADIUS`], and its heading eases toward the travel direction
/// with a framerate-independent lerp.  It never overshoots and it never
/// rotates while standing still.
#[derive(Clone, Debug)]
pub struct SteeringNav {
    position:    Vec3,
    forward:     Vec3,
    destination: Vec3,
    max_speed:   f32,
}

impl SteeringNav {
    /// Create a stationary body at `position` facing along `forward`.
    ///
    /// `forward` need not be unit length; it is normalized here.  The
    /// destination starts at `position`, so the body holds still until one
    /// is assigned.
    pub fn new(position: Vec3, forward: Vec3, max_speed: f32) -> Self {
        Self {
            position,
            forward: forward.normalized(),
            destination: position,
            max_speed,
        }
    }

    /// Teleport the body to `position` without touching destination or
    /// heading (initial placement, test setup).
    pub fn place(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Integrate one time step of movement toward the destination.
    pub fn advance(&mut self, dt: Seconds) {
        let to_dest = self.destination - self.position;
        let dist = to_dest.length();
        if dist <= f32::EPSILON {
            return;
        }

        let speed = remap_clamped(dist, 0.0, SLOW_RADIUS, 0.0, self.max_speed);
        let step = (speed * dt.0).min(dist);
        let dir = to_dest * (1.0 / dist);
        self.position = self.position + dir * step;

        let frac = asymptotic_lerp_frac(TURN_SMOOTHING, dt.0);
        self.forward = self.forward.lerp(dir, frac).normalized();
    }
}

impl AgentBody for SteeringNav {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn forward(&self) -> Vec3 {
        self.forward
    }
}

impl NavigationTarget for SteeringNav {
    fn set_destination(&mut self, destination: Vec3) {
        self.destination = destination;
    }

    fn destination(&self) -> Vec3 {
        self.destination
    }
}
