//! The per-tick sensing routine.

use npc_core::{Seconds, Vec3};

use crate::{AgentBody, TrackedEntity, VisionConfig};

/// Per-tick sensing result.
///
/// `visible` is valid only for the tick it was computed on; the position and
/// time fields mirror the [`SightingMemory`] after this tick's update.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sighting {
    pub visible:             bool,
    pub last_known_position: Vec3,
    pub last_seen:           Seconds,
}

/// Persistent sighting memory carried by an agent across ticks.
///
/// Overwritten only while the target is visible, so the recorded position
/// stays frozen at the point of last contact once sight is lost.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SightingMemory {
    pub last_known_position: Vec3,
    pub last_seen:           Seconds,
}

/// Determine whether `target` is detectable by `body` this tick.
///
/// Detection is the union of two tests:
///
/// - **body sense** — target inside `body_sense_dist`, regardless of facing;
/// - **view cone** — target inside the effective sight distance for its
///   light state AND strictly inside the cone around `body.forward()`.
///
/// On a positive result the sighting memory is updated with the target's
/// current position and `now`; that side effect is the only persisted output.
pub fn sense<B, T>(
    vision: &VisionConfig,
    memory: &mut SightingMemory,
    body:   &B,
    target: &T,
    now:    Seconds,
) -> Sighting
where
    B: AgentBody,
    T: TrackedEntity,
{
    let to_target = target.position() - body.position();
    let dist = to_target.length();

    let in_close_range = dist < vision.body_sense_dist();

    let visible = in_close_range || {
        let in_sight_range = dist < vision.effective_sight_dist(target.is_illuminated());
        let in_cone = vision.within_cone(to_target.normalized().dot(body.forward()));
        in_sight_range && in_cone
    };

    if visible {
        memory.last_known_position = target.position();
        memory.last_seen = now;
    }

    Sighting {
        visible,
        last_known_position: memory.last_known_position,
        last_seen:           memory.last_seen,
    }
}
