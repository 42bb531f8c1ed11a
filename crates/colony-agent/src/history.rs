//! Bounded record of an ant's recent headings, used for stuck detection.

use std::collections::VecDeque;

use colony_core::Angle;

/// Maximum number of headings retained; the oldest is evicted first.
pub const HISTORY_CAPACITY: usize = 25;

/// Headings the ant faced on its most recent ticks, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DirectionHistory {
    angles: VecDeque<Angle>,
}

impl DirectionHistory {
    pub fn new() -> Self {
        Self { angles: VecDeque::with_capacity(HISTORY_CAPACITY) }
    }

    /// A copy of this history with `angle` appended, evicting the oldest
    /// entry when the history is full.
    pub fn pushed(&self, angle: Angle) -> DirectionHistory {
        let mut angles = self.angles.clone();
        if angles.len() >= HISTORY_CAPACITY {
            angles.pop_front();
        }
        angles.push_back(angle);
        DirectionHistory { angles }
    }

    /// Arithmetic mean of the normalized headings, or `None` when empty.
    ///
    /// This is deliberately not a circular mean: an ant oscillating around
    /// 0°/360° averages to ~180°, which the stuck check treats as not stuck.
    pub fn average(&self) -> Option<f32> {
        if self.angles.is_empty() {
            return None;
        }
        let sum: f32 = self.angles.iter().map(|a| a.normalized()).sum();
        Some(sum / self.angles.len() as f32)
    }

    /// `true` when the average heading sits within `tolerance` degrees of an
    /// axis direction (0, 90, 180, 270 or 360).  Ants sliding along a wall
    /// keep reflecting onto the same axis and show up here.
    pub fn is_stuck(&self, tolerance: f32) -> bool {
        const AXES: [f32; 5] = [0.0, 90.0, 180.0, 270.0, 360.0];
        match self.average() {
            Some(avg) => AXES.iter().any(|axis| (avg - axis).abs() <= tolerance),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.angles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Angle> {
        self.angles.iter()
    }

    /// Most recently recorded heading.
    pub fn last(&self) -> Option<Angle> {
        self.angles.back().copied()
    }
}
