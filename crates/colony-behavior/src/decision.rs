//! The stochastic pheromone-following policy.

use crate::{BehaviorError, BehaviorResult, PheromoneInfo};

/// Which candidate marker to steer toward.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PheromoneChoice {
    Strongest,
    Farthest,
    Closest,
    Weakest,
}

impl PheromoneChoice {
    /// The matching candidate offset from `info`, if one was found.
    #[inline]
    pub fn pick(self, info: &PheromoneInfo) -> Option<colony_core::Vec2> {
        match self {
            PheromoneChoice::Strongest => info.strongest,
            PheromoneChoice::Farthest => info.farthest,
            PheromoneChoice::Closest => info.closest,
            PheromoneChoice::Weakest => info.weakest,
        }
    }
}

/// Percentages steering the following lottery.
///
/// `chance_to_ignore` is the probability of wandering instead of following.
/// The four weights split the remaining probability mass and must add up to
/// 100.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PheromoneDecisionConfig {
    chance_to_ignore: f32,
    strongest: f32,
    farthest: f32,
    closest: f32,
    weakest: f32,
}

impl PheromoneDecisionConfig {
    pub fn new(
        chance_to_ignore: f32,
        strongest:        f32,
        farthest:         f32,
        closest:          f32,
        weakest:          f32,
    ) -> BehaviorResult<Self> {
        let named = [
            ("chance_to_ignore", chance_to_ignore),
            ("strongest", strongest),
            ("farthest", farthest),
            ("closest", closest),
            ("weakest", weakest),
        ];
        for (name, value) in named {
            if !(0.0..=100.0).contains(&value) {
                return Err(BehaviorError::Config(format!(
                    "{name} must be a percentage in [0, 100], got {value}"
                )));
            }
        }
        let sum = strongest + farthest + closest + weakest;
        if (sum - 100.0).abs() > 1e-3 {
            return Err(BehaviorError::Config(format!(
                "pheromone weights must sum to 100, got {sum}"
            )));
        }
        Ok(Self { chance_to_ignore, strongest, farthest, closest, weakest })
    }

    pub fn chance_to_ignore(&self) -> f32 {
        self.chance_to_ignore
    }

    /// `(strongest, farthest, closest, weakest)`.
    pub fn weights(&self) -> (f32, f32, f32, f32) {
        (self.strongest, self.farthest, self.closest, self.weakest)
    }

    /// Resolve a draw `follow_chance` in `[0, 100)`.
    ///
    /// Draws below `chance_to_ignore` return `None` (wander).  The rest are
    /// rescaled onto `[0, 100)` and bucketed by the cumulative weights in
    /// the order strongest, farthest, closest, weakest.
    pub fn choose(&self, follow_chance: f32) -> Option<PheromoneChoice> {
        let span = 100.0 - self.chance_to_ignore;
        if follow_chance < self.chance_to_ignore || span <= 0.0 {
            return None;
        }
        let scaled = (follow_chance - self.chance_to_ignore) / span * 100.0;

        let mut edge = self.strongest;
        if scaled < edge {
            return Some(PheromoneChoice::Strongest);
        }
        edge += self.farthest;
        if scaled < edge {
            return Some(PheromoneChoice::Farthest);
        }
        edge += self.closest;
        if scaled < edge {
            return Some(PheromoneChoice::Closest);
        }
        Some(PheromoneChoice::Weakest)
    }
}

impl Default for PheromoneDecisionConfig {
    /// Ignore markers 5% of the time, otherwise follow the weakest one.
    fn default() -> Self {
        Self { chance_to_ignore: 5.0, strongest: 0.0, farthest: 0.0, closest: 0.0, weakest: 100.0 }
    }
}
