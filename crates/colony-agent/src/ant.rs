//! The ant: an immutable value snapshot replaced wholesale every tick.

use colony_core::{Angle, Millis, Target, Vec2, direction_to_angle};

use crate::DirectionHistory;

/// Per-ant sensing and movement parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AntParams {
    /// Width of the vision cone in degrees.
    pub field_of_view: f32,
    /// Turn budget in degrees per tick.  A single steering step turns at
    /// most half of this.
    pub max_turn_angle: f32,
    /// How far the ant can see, in grid units.
    pub sight_distance: f32,
    /// Minimum time between two pheromone deposits, in milliseconds.
    pub pheromone_interval_ms: u64,
}

impl Default for AntParams {
    fn default() -> Self {
        Self {
            field_of_view:         90.0,
            max_turn_angle:        20.0,
            sight_distance:        50.0,
            pheromone_interval_ms: 10,
        }
    }
}

/// State of one ant at one tick.
///
/// The behavior engine never mutates an `Ant` in place; it returns a new
/// one.  The driver writes the result back into its list, so every ant
/// update within a tick reads the same tick-start snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct Ant {
    pub position: Vec2,
    /// Unit heading vector.
    pub direction: Vec2,
    pub current_angle: Angle,
    pub current_target: Target,
    pub direction_history: DirectionHistory,

    pub field_view_angle_range: f32,
    pub max_turn_angle: f32,
    pub sight_distance: f32,
    pub pheromone_interval: u64,

    /// Trail-clock time of the last deposit.
    pub last_pheromone_time: Millis,
    /// Wall-clock time at which the current trip began.
    pub trip_start_time: Millis,
}

impl Ant {
    /// A fresh ant at `position` facing `direction` and heading for `target`.
    pub fn new(position: Vec2, direction: Vec2, target: Target, params: &AntParams) -> Self {
        Self {
            position,
            direction,
            current_angle: direction_to_angle(direction),
            current_target: target,
            direction_history: DirectionHistory::new(),
            field_view_angle_range: params.field_of_view,
            max_turn_angle: params.max_turn_angle,
            sight_distance: params.sight_distance,
            pheromone_interval: params.pheromone_interval_ms,
            last_pheromone_time: Millis::ZERO,
            trip_start_time: Millis::ZERO,
        }
    }

    /// Set both trip and deposit clocks at spawn.
    pub fn started_at(mut self, trip_start: Millis, trail_now: Millis) -> Self {
        self.trip_start_time = trip_start;
        self.last_pheromone_time = trail_now;
        self
    }

    /// `true` once at least `pheromone_interval` has passed since the last
    /// deposit, measured on the trail clock.
    #[inline]
    pub fn pheromone_due(&self, trail_now: Millis) -> bool {
        trail_now.since(self.last_pheromone_time) >= self.pheromone_interval
    }
}
