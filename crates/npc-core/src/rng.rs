//! Deterministic simulation RNG with game-math distribution helpers.
//!
//! # Determinism strategy
//!
//! A run owns exactly one `SimRng`, seeded from the configured master seed.
//! Agents themselves are deterministic pure functions of their inputs and
//! never draw randomness; only scripted entities and scenario setup do, and
//! those run on the single-threaded side of the tick.  The same seed
//! therefore always produces an identical run.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level deterministic RNG.
///
/// Wraps `SmallRng` and adds the weighted/shaped distributions that scenario
/// scripting tends to need.  Use only in single-threaded contexts; give each
/// concurrent consumer its own `SimRng` if that ever changes.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// The inner `SmallRng`, for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample any `Standard`-distributed type uniformly.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Uniform value in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    // ── Shaped distributions ──────────────────────────────────────────────

    /// Index drawn with probability proportional to `weights[i]`.
    ///
    /// At least one weight must be positive.
    pub fn weighted_index(&mut self, weights: &[u32]) -> usize {
        let total: u32 = weights.iter().sum();
        debug_assert!(total > 0, "weighted_index requires a positive total weight");
        let mut roll = self.gen_range(0..total.max(1));
        for (i, &weight) in weights.iter().enumerate() {
            if roll < weight {
                return i;
            }
            roll -= weight;
        }
        weights.len() - 1
    }

    /// Value in `[min, max]` with an exponentially shaped distribution.
    ///
    /// `distribution_power` must be positive: 1.0 is uniform, powers above
    /// 1 weight toward `min`, powers below 1 weight toward `max`.
    pub fn range_exp_weighted(&mut self, min: f32, max: f32, distribution_power: f32) -> f32 {
        let t: f32 = self.random();
        min + (max - min) * t.powf(distribution_power)
    }

    /// Approximate gaussian sample via the Box–Muller polar method.
    pub fn gaussian(&mut self, std_dev: f32, mean: f32) -> f32 {
        loop {
            let u = self.gen_range(-1.0f32..1.0);
            let v = self.gen_range(-1.0f32..1.0);
            let s = u * u + v * v;
            if s > f32::EPSILON && s < 1.0 {
                let z0 = u * ((-2.0 * s.ln()) / s).sqrt();
                return z0 * std_dev + mean;
            }
        }
    }
}
