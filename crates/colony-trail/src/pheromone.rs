use colony_core::{Millis, TargetType, Vec2};

/// A single scent marker.
///
/// `kind` is the target the depositing ant was heading to when it laid the
/// marker.  Strength only ever decreases after creation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pheromone {
    pub position: Vec2,
    /// In `[0, 1]`; 1.0 at deposit.
    pub strength: f32,
    /// Trail-clock time of the deposit.
    pub timestamp: Millis,
    pub kind: TargetType,
}

impl Pheromone {
    #[inline]
    pub fn fresh(position: Vec2, timestamp: Millis, kind: TargetType) -> Self {
        Self { position, strength: 1.0, timestamp, kind }
    }

    /// Strength at `now` for a marker that fades out after `decay_time_ms`.
    #[inline]
    pub fn strength_at(&self, now: Millis, decay_time_ms: u64) -> f32 {
        let age = (now - self.timestamp).max(0) as f32;
        (1.0 - age / decay_time_ms as f32).clamp(0.0, 1.0)
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.strength <= 0.0
    }
}
