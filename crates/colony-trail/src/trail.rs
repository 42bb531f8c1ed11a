//! The `PheromoneTrail`: every live marker plus the pause-aware decay clock.

use colony_core::{Millis, SharedClock, TargetType, Vec2};
use tracing::trace;

use crate::Pheromone;

/// Markers fade to zero this long after deposit.
pub const DEFAULT_DECAY_TIME_MS: u64 = 5_000;

/// Owns the pheromone markers of one run.
///
/// The trail reads time from the injected clock and subtracts the total
/// time spent paused.  While paused, [`decay`](Self::decay) is a no-op and
/// [`effective_now`](Self::effective_now) stands still.
pub struct PheromoneTrail {
    pheromones:      Vec<Pheromone>,
    decay_time_ms:   u64,
    clock:           SharedClock,
    /// Raw clock reading at which the current pause began.
    pause_time:      Option<Millis>,
    /// Sum of all completed pauses.
    paused_duration: u64,
}

impl PheromoneTrail {
    /// An empty, running trail.  `decay_time_ms` must be non-zero.
    pub fn new(clock: SharedClock, decay_time_ms: u64) -> Self {
        debug_assert!(decay_time_ms > 0, "decay time must be positive");
        Self {
            pheromones: Vec::new(),
            decay_time_ms: decay_time_ms.max(1),
            clock,
            pause_time: None,
            paused_duration: 0,
        }
    }

    /// Append a full-strength marker.  Markers at the same position coexist.
    pub fn add_pheromone(&mut self, position: Vec2, timestamp: Millis, kind: TargetType) {
        self.pheromones.push(Pheromone::fresh(position, timestamp, kind));
    }

    /// Recompute every strength from its age and drop expired markers.
    pub fn decay(&mut self) {
        if self.is_paused() {
            return;
        }
        let now = self.effective_now();
        let decay_time = self.decay_time_ms;
        for p in &mut self.pheromones {
            p.strength = p.strength_at(now, decay_time);
        }

        let before = self.pheromones.len();
        self.pheromones.retain(|p| !p.is_expired());
        let removed = before - self.pheromones.len();
        if removed > 0 {
            trace!(removed, live = self.pheromones.len(), %now, "expired pheromones dropped");
        }
    }

    /// Freeze decay.  Idempotent.
    pub fn pause(&mut self) {
        if self.pause_time.is_none() {
            self.pause_time = Some(self.clock.now());
        }
    }

    /// Unfreeze decay, crediting the pause to the clock offset.  Idempotent.
    pub fn resume(&mut self) {
        if let Some(start) = self.pause_time.take() {
            self.paused_duration += self.clock.now().since(start);
        }
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.pause_time.is_some()
    }

    /// Clock reading with all paused time removed.  Deposits should be
    /// stamped with this so that their age is measured on the same scale.
    pub fn effective_now(&self) -> Millis {
        let raw = self.pause_time.unwrap_or_else(|| self.clock.now());
        raw.saturating_sub(self.paused_duration)
    }

    /// The live markers.  Order is deposit order and carries no meaning.
    #[inline]
    pub fn pheromones(&self) -> &[Pheromone] {
        &self.pheromones
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pheromones.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pheromones.is_empty()
    }

    #[inline]
    pub fn decay_time_ms(&self) -> u64 {
        self.decay_time_ms
    }

    /// Total milliseconds spent in completed pauses.
    #[inline]
    pub fn paused_duration(&self) -> u64 {
        self.paused_duration
    }

    /// Remove every marker, keeping the clock state.
    pub fn clear(&mut self) {
        self.pheromones.clear();
    }
}
