//! Seeded random sources.
//!
//! Every draw in a run comes from one of two handles:
//!
//! - [`AgentRng`]: one per ant.  Covers the spawn heading, random wandering
//!   and the pheromone-following lottery.  Ants never share a stream, so the
//!   order (or thread) in which ants are updated does not change what any
//!   ant draws.
//! - [`SimRng`]: run-level draws made by a driver or front-end, such as
//!   scattering obstacles.
//!
//! Streams are derived as `seed ^ (stream_id * φ64)`, where `φ64` is the
//! 64-bit fractional part of the golden ratio.  Consecutive ids land far
//! apart in seed space, and appending ants leaves earlier streams untouched.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{AgentId, Angle, Vec2, angle_to_direction};

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

#[inline]
fn stream_seed(seed: u64, stream: u64) -> u64 {
    seed ^ stream.wrapping_mul(GOLDEN_GAMMA)
}

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Random stream owned by a single ant.
pub struct AgentRng(SmallRng);

impl AgentRng {
    pub fn new(seed: u64, agent: AgentId) -> Self {
        AgentRng(SmallRng::seed_from_u64(stream_seed(seed, agent.0 as u64)))
    }

    /// Uniform in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f32 {
        self.0.r#gen::<f32>()
    }

    /// Uniform in `[0, 100)`, for percentage lotteries.
    #[inline]
    pub fn percent(&mut self) -> f32 {
        self.unit() * 100.0
    }

    /// Any heading, uniform in `[0, 360)`.
    #[inline]
    pub fn heading(&mut self) -> Angle {
        Angle::new(self.0.gen_range(0.0f32..360.0))
    }

    /// Unit vector along a heading drawn uniformly from the arc of width
    /// `spread` centred on `center`.
    pub fn direction_near(&mut self, center: Angle, spread: f32) -> Vec2 {
        let half = (spread / 2.0).abs();
        if half == 0.0 {
            return angle_to_direction(center);
        }
        angle_to_direction(center + self.0.gen_range(-half..=half))
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Run-level random stream.  Not shared across threads.
pub struct SimRng(SmallRng);

impl SimRng {
    /// A stream independent of the per-ant streams of the same seed.
    ///
    /// `purpose` tells callers apart; pick a distinct constant per use.
    pub fn for_purpose(seed: u64, purpose: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(stream_seed(!seed, purpose)))
    }

    /// A uniformly chosen cell of a `grid_size`×`grid_size` grid.
    ///
    /// `grid_size` must be non-zero.
    pub fn cell(&mut self, grid_size: u32) -> (u32, u32) {
        (self.0.gen_range(0..grid_size), self.0.gen_range(0..grid_size))
    }
}
