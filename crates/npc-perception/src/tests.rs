//! Unit tests for npc-perception.

use npc_core::{Seconds, Vec3};

use crate::{AgentBody, Sighting, SightingMemory, StaticTarget, VisionConfig, sense};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// A body pinned at a fixed position and facing.
struct FixedBody {
    position: Vec3,
    forward:  Vec3,
}

impl FixedBody {
    fn at_origin_facing(forward: Vec3) -> Self {
        Self { position: Vec3::ZERO, forward: forward.normalized() }
    }
}

impl AgentBody for FixedBody {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn forward(&self) -> Vec3 {
        self.forward
    }
}

/// 45° half-angle cone, 20 m lit / 10 m dark sight, 1.5 m body sense.
fn vision() -> VisionConfig {
    VisionConfig::new(45.0, 20.0, 10.0, 1.5).unwrap()
}

fn run_sense(vision: &VisionConfig, memory: &mut SightingMemory, target: StaticTarget) -> Sighting {
    let body = FixedBody::at_origin_facing(Vec3::new(0.0, 0.0, 1.0));
    sense(vision, memory, &body, &target, Seconds(1.0))
}

/// A point `dist` metres from the origin, `angle_deg` off the +Z axis in XZ.
fn off_axis(angle_deg: f32, dist: f32) -> Vec3 {
    let rad = angle_deg.to_radians();
    Vec3::new(rad.sin() * dist, 0.0, rad.cos() * dist)
}

// ── VisionConfig ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod vision_config {
    use super::*;

    #[test]
    fn accepts_open_interval_angles() {
        assert!(VisionConfig::new(0.1, 1.0, 1.0, 1.0).is_ok());
        assert!(VisionConfig::new(90.0, 1.0, 1.0, 1.0).is_ok());
        assert!(VisionConfig::new(179.9, 1.0, 1.0, 1.0).is_ok());
    }

    #[test]
    fn rejects_degenerate_angles() {
        assert!(VisionConfig::new(0.0, 1.0, 1.0, 1.0).is_err());
        assert!(VisionConfig::new(180.0, 1.0, 1.0, 1.0).is_err());
        assert!(VisionConfig::new(-30.0, 1.0, 1.0, 1.0).is_err());
        assert!(VisionConfig::new(270.0, 1.0, 1.0, 1.0).is_err());
    }

    #[test]
    fn cosine_derived_from_half_angle() {
        let v = VisionConfig::new(60.0, 1.0, 1.0, 1.0).unwrap();
        assert_eq!(v.fov_half_angle_deg(), 60.0);
        assert!((v.cos_fov() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn effective_sight_dist_follows_light_state() {
        let v = vision();
        assert_eq!(v.effective_sight_dist(true), 20.0);
        assert_eq!(v.effective_sight_dist(false), 10.0);
    }

    #[test]
    fn cone_boundary_is_excluded() {
        // Strict inequality: a dot product exactly equal to cos(fov) is out.
        let v = vision();
        assert!(!v.within_cone(v.cos_fov()));
        assert!(v.within_cone(v.cos_fov() + 1e-6));
        assert!(!v.within_cone(v.cos_fov() - 1e-6));
    }
}

// ── sense ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sensing {
    use super::*;

    #[test]
    fn straight_ahead_in_range_is_visible() {
        let v = vision();
        let mut mem = SightingMemory::default();
        let s = run_sense(&v, &mut mem, StaticTarget::new(Vec3::new(0.0, 0.0, 5.0), true));
        assert!(s.visible);
    }

    #[test]
    fn beyond_effective_range_is_invisible() {
        let v = vision();
        let mut mem = SightingMemory::default();
        let s = run_sense(&v, &mut mem, StaticTarget::new(Vec3::new(0.0, 0.0, 25.0), true));
        assert!(!s.visible);
    }

    #[test]
    fn light_state_selects_sight_distance() {
        // 15 m ahead: inside the 20 m lit range, outside the 10 m dark range.
        let v = vision();
        let mut mem = SightingMemory::default();
        let pos = Vec3::new(0.0, 0.0, 15.0);
        assert!(run_sense(&v, &mut mem, StaticTarget::new(pos, true)).visible);
        assert!(!run_sense(&v, &mut mem, StaticTarget::new(pos, false)).visible);
    }

    #[test]
    fn inside_cone_visible_outside_invisible() {
        let v = vision();
        let mut mem = SightingMemory::default();
        assert!(run_sense(&v, &mut mem, StaticTarget::new(off_axis(40.0, 8.0), true)).visible);
        assert!(!run_sense(&v, &mut mem, StaticTarget::new(off_axis(50.0, 8.0), true)).visible);
    }

    #[test]
    fn perpendicular_target_outside_45_degree_cone() {
        let v = vision();
        let mut mem = SightingMemory::default();
        let s = run_sense(&v, &mut mem, StaticTarget::new(Vec3::new(5.0, 0.0, 0.0), true));
        assert!(!s.visible);
    }

    #[test]
    fn body_sense_overrides_facing() {
        // Directly behind the agent, but inside the 1.5 m body radius.
        let v = vision();
        let mut mem = SightingMemory::default();
        let s = run_sense(&v, &mut mem, StaticTarget::new(Vec3::new(0.0, 0.0, -1.0), false));
        assert!(s.visible);
    }

    #[test]
    fn body_sense_radius_is_bounded() {
        let v = vision();
        let mut mem = SightingMemory::default();
        let s = run_sense(&v, &mut mem, StaticTarget::new(Vec3::new(0.0, 0.0, -2.0), false));
        assert!(!s.visible);
    }

    #[test]
    fn memory_updates_only_while_visible() {
        let v = vision();
        let body = FixedBody::at_origin_facing(Vec3::new(0.0, 0.0, 1.0));
        let mut mem = SightingMemory::default();

        // Seen at z=5: memory records it.
        let seen_at = Vec3::new(0.0, 0.0, 5.0);
        let s = sense(&v, &mut mem, &body, &StaticTarget::new(seen_at, true), Seconds(1.0));
        assert!(s.visible);
        assert_eq!(mem.last_known_position, seen_at);
        assert_eq!(mem.last_seen, Seconds(1.0));

        // Target slips behind the agent: memory must stay frozen.
        let hidden = StaticTarget::new(Vec3::new(0.0, 0.0, -8.0), true);
        let s = sense(&v, &mut mem, &body, &hidden, Seconds(2.0));
        assert!(!s.visible);
        assert_eq!(mem.last_known_position, seen_at);
        assert_eq!(mem.last_seen, Seconds(1.0));
        assert_eq!(s.last_known_position, seen_at);
    }
}
