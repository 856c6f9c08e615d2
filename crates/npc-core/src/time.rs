//! Simulation time model.
//!
//! # Design
//!
//! The host loop advances an integer [`Tick`] counter; each tick spans a fixed
//! number of wall-clock seconds.  Behavior code never counts ticks — it
//! compares [`Seconds`] spans (time in state vs. dwell duration), so the
//! continuous clock is the canonical unit and the tick counter exists for
//! scheduling and output cadence.
//!
//! Both are carried by [`SimClock`]:
//!
//!   elapsed = tick * tick_duration
//!
//! The clock is externally advanced, once per host iteration; nothing in the
//! framework reads wall time on its own.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// Absolute tick count since simulation start.
///
/// `u64` inner value: at 60 ticks/second that is ~9.7 billion years of
/// headroom, so overflow is not a practical concern.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── Seconds ───────────────────────────────────────────────────────────────────

/// A span of (or point in) simulated time, in seconds.
///
/// Thin `f32` newtype so time values cannot be confused with distances or
/// speeds at API boundaries.  The inner value is `pub` for arithmetic that
/// the provided operators don't cover.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seconds(pub f32);

impl Seconds {
    pub const ZERO: Seconds = Seconds(0.0);
}

impl std::ops::Add for Seconds {
    type Output = Seconds;
    #[inline]
    fn add(self, rhs: Seconds) -> Seconds {
        Seconds(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Seconds {
    type Output = Seconds;
    #[inline]
    fn sub(self, rhs: Seconds) -> Seconds {
        Seconds(self.0 - rhs.0)
    }
}

impl std::ops::Mul<f32> for Seconds {
    type Output = Seconds;
    #[inline]
    fn mul(self, rhs: f32) -> Seconds {
        Seconds(self.0 * rhs)
    }
}

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}s", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The simulation clock: current tick plus the continuous time it maps to.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The current tick — advanced by [`SimClock::advance`] each iteration.
    pub current_tick: Tick,
    /// How many simulated seconds one tick represents.
    pub tick_duration: Seconds,
    /// Continuous time at `current_tick`.  Accumulated, not recomputed, so a
    /// long run never loses precision to a large multiply.
    pub elapsed: Seconds,
}

impl SimClock {
    /// Create a clock at tick zero with the given resolution.
    pub fn new(tick_duration_secs: f32) -> Self {
        Self {
            current_tick:  Tick::ZERO,
            tick_duration: Seconds(tick_duration_secs),
            elapsed:       Seconds::ZERO,
        }
    }

    /// Current simulated time.
    #[inline]
    pub fn now(&self) -> Seconds {
        self.elapsed
    }

    /// Step forward one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick + 1;
        self.elapsed = self.elapsed + self.tick_duration;
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.current_tick, self.elapsed)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Constructed in code by the application crate and passed to the simulation
/// builder; validated there via [`SimConfig::validate`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Seconds per tick.  Typical game-style runs use 0.05–0.2.
    pub tick_duration_secs: f32,

    /// Total ticks to simulate.  For 60 s at 10 ticks/second: 600.
    pub total_ticks: u64,

    /// Master seed for all scenario randomness; identical seeds replay
    /// identical runs.
    pub seed: u64,

    /// Write an agent snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_duration_secs)
    }

    /// Reject configurations the tick loop cannot run with.
    pub fn validate(&self) -> crate::CoreResult<()> {
        if !(self.tick_duration_secs > 0.0) || !self.tick_duration_secs.is_finite() {
            return Err(crate::CoreError::Config(format!(
                "tick duration must be a positive finite number of seconds, got {}",
                self.tick_duration_secs
            )));
        }
        Ok(())
    }
}
