//! What an ant can see: targets, obstacles and pheromones in its vision cone.

use colony_core::{Angle, TargetType, Vec2, angle_is_in_range, direction_to_angle};
use colony_trail::Pheromone;

use crate::ObstacleMap;

/// Pheromones weaker than this are never picked as the "weakest" candidate.
pub const WEAKEST_MIN_STRENGTH: f32 = 0.25;

/// Markers closer than this sit under the ant and have no usable bearing.
const MIN_PHEROMONE_DISTANCE: f32 = 1e-3;

/// `true` if `target` is within `sight_distance` of `position` and inside
/// the vision cone of width `field_of_view` around `heading`.
pub fn is_target_in_sight(
    position:       Vec2,
    target:         Vec2,
    heading:        Angle,
    field_of_view:  f32,
    sight_distance: f32,
) -> bool {
    position.distance(target) <= sight_distance
        && angle_is_in_range(direction_to_angle(target - position), heading, field_of_view)
}

/// `true` if any blocked cell is within sight and inside the vision cone.
pub fn are_obstacles_in_sight(
    position:       Vec2,
    heading:        Angle,
    field_of_view:  f32,
    sight_distance: f32,
    obstacles:      &ObstacleMap,
) -> bool {
    obstacles.positions().any(|o| {
        position.distance(o) <= sight_distance
            && angle_is_in_range(direction_to_angle(o - position), heading, field_of_view)
    })
}

/// Offsets (pheromone position minus ant position) of the four candidate
/// markers an ant may follow.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PheromoneInfo {
    pub strongest: Option<Vec2>,
    pub farthest: Option<Vec2>,
    pub closest: Option<Vec2>,
    pub weakest: Option<Vec2>,
}

impl PheromoneInfo {
    /// `true` if at least one candidate was found.
    pub fn has_any(&self) -> bool {
        self.strongest.is_some() || self.farthest.is_some() || self.closest.is_some() || self.weakest.is_some()
    }
}

/// Scan `pheromones` for markers relevant to an ant heading for
/// `target_kind`.
///
/// Only markers of the other kind count: an ant looking for food follows
/// trails laid by ants coming back from food toward the nest, and vice
/// versa.  A marker must be within `sight_distance` and inside the vision
/// cone.  Ties keep the first marker seen.
pub fn analyze_pheromones(
    position:       Vec2,
    heading:        Angle,
    field_of_view:  f32,
    sight_distance: f32,
    target_kind:    TargetType,
    pheromones:     &[Pheromone],
) -> PheromoneInfo {
    let mut info = PheromoneInfo::default();
    let mut max_strength = f32::NEG_INFINITY;
    let mut min_strength = f32::INFINITY;
    let mut max_distance = f32::NEG_INFINITY;
    let mut min_distance = f32::INFINITY;

    for p in pheromones.iter().filter(|p| p.kind != target_kind) {
        let offset = p.position - position;
        let distance = offset.length();
        if distance > sight_distance || distance < MIN_PHEROMONE_DISTANCE {
            continue;
        }
        if !angle_is_in_range(direction_to_angle(offset), heading, field_of_view) {
            continue;
        }

        if p.strength > max_strength {
            max_strength = p.strength;
            info.strongest = Some(offset);
        }
        if p.strength < min_strength && p.strength >= WEAKEST_MIN_STRENGTH {
            min_strength = p.strength;
            info.weakest = Some(offset);
        }
        if distance > max_distance {
            max_distance = distance;
            info.farthest = Some(offset);
        }
        if distance < min_distance {
            min_distance = distance;
            info.closest = Some(offset);
        }
    }
    info
}
