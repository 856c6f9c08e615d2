//! Validated vision parameters.

use crate::{PerceptionError, PerceptionResult};

/// An agent's sensing envelope: view cone plus a short omnidirectional radius.
///
/// Constructed once per agent; the cone half-angle is validated and its
/// cosine cached here so the per-tick test is a single comparison.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VisionConfig {
    fov_half_angle_deg:  f32,
    cos_fov:             f32,
    max_sight_dist_lit:  f32,
    max_sight_dist_dark: f32,
    body_sense_dist:     f32,
}

impl VisionConfig {
    /// Build a vision envelope.
    ///
    /// `fov_half_angle_deg` is the half-angle of the view cone, measured from
    /// the forward vector, and must lie strictly between 0° and 180°.
    /// `max_sight_dist_lit` / `max_sight_dist_dark` bound cone sensing for an
    /// illuminated vs. unlit target; `body_sense_dist` is the radius inside
    /// which the target is noticed regardless of facing.
    pub fn new(
        fov_half_angle_deg:  f32,
        max_sight_dist_lit:  f32,
        max_sight_dist_dark: f32,
        body_sense_dist:     f32,
    ) -> PerceptionResult<Self> {
        if !(fov_half_angle_deg > 0.0 && fov_half_angle_deg < 180.0) {
            return Err(PerceptionError::InvalidFieldOfView(fov_half_angle_deg));
        }
        Ok(Self {
            fov_half_angle_deg,
            cos_fov: fov_half_angle_deg.to_radians().cos(),
            max_sight_dist_lit,
            max_sight_dist_dark,
            body_sense_dist,
        })
    }

    #[inline]
    pub fn fov_half_angle_deg(&self) -> f32 {
        self.fov_half_angle_deg
    }

    /// Cosine of the half-angle, derived once at construction.
    #[inline]
    pub fn cos_fov(&self) -> f32 {
        self.cos_fov
    }

    #[inline]
    pub fn body_sense_dist(&self) -> f32 {
        self.body_sense_dist
    }

    /// The sight distance that applies given the target's light state.
    #[inline]
    pub fn effective_sight_dist(&self, illuminated: bool) -> f32 {
        if illuminated {
            self.max_sight_dist_lit
        } else {
            self.max_sight_dist_dark
        }
    }

    /// Cone membership for a forward·to-target dot product.
    ///
    /// Strict: a direction exactly on the cone boundary is outside.
    #[inline]
    pub fn within_cone(&self, dot: f32) -> bool {
        dot > self.cos_fov
    }
}
