//! The per-tick ant update.

use colony_agent::Ant;
use colony_core::{AgentRng, Vec2, direction_to_angle, get_offset, reflect_direction};

use crate::avoidance::offset_from_obstacles;
use crate::sensing::{analyze_pheromones, are_obstacles_in_sight, is_target_in_sight};
use crate::{Environment, PheromoneDecisionConfig};

/// Distance from a boundary, in grid units, at which the edge branch takes
/// over from normal steering.
pub const EDGE_THRESHOLD: f32 = 5.0;

/// How close (degrees) the average recent heading must be to an axis for
/// the ant to count as stuck.
pub const STUCK_TOLERANCE: f32 = 0.75;

/// `true` if `position` is within `threshold` of either bound on either axis.
#[inline]
pub fn is_near_edge(position: Vec2, min_bound: f32, max_bound: f32, threshold: f32) -> bool {
    position.x <= min_bound + threshold
        || position.x >= max_bound - threshold
        || position.y <= min_bound + threshold
        || position.y >= max_bound - threshold
}

/// Advance `ant` by one tick.
///
/// Pure with respect to `ant` and `env`; the only side effect is consuming
/// draws from `rng`.  The caller owns pheromone deposits and statistics.
pub fn update_ant_position(
    ant:      &Ant,
    env:      &Environment<'_>,
    decision: &PheromoneDecisionConfig,
    rng:      &mut AgentRng,
) -> Ant {
    let history = ant.direction_history.pushed(ant.current_angle);
    let cell_size = env.grid.cell_size;
    let (min_bound, max_bound) = (env.grid.min_bound(), env.grid.max_bound());
    let potential = ant.position + ant.direction * cell_size;

    if is_near_edge(potential, min_bound, max_bound, EDGE_THRESHOLD) {
        let direction = if history.is_stuck(STUCK_TOLERANCE) {
            rng.direction_near(ant.current_angle, ant.max_turn_angle)
        } else {
            reflect_direction(ant.direction, potential, min_bound, max_bound)
        };
        return Ant {
            position: (ant.position + direction * cell_size).clamp(min_bound, max_bound),
            direction,
            current_angle: direction_to_angle(direction),
            direction_history: history,
            ..ant.clone()
        };
    }

    let target = if ant.position.distance(ant.current_target.position) <= 2.0 * cell_size {
        env.target(ant.current_target.kind.opposite())
    } else {
        ant.current_target
    };

    let heading = direction_to_angle(ant.direction);
    let fov = ant.field_view_angle_range;
    let sight = ant.sight_distance;

    let direction = if is_target_in_sight(ant.position, target.position, heading, fov, sight) {
        let bearing = direction_to_angle(target.position - ant.position);
        get_offset(heading, bearing, ant.max_turn_angle)
    } else if !env.obstacles.is_empty()
        && are_obstacles_in_sight(ant.position, heading, fov, sight, env.obstacles)
    {
        offset_from_obstacles(ant, env.obstacles)
    } else {
        let info = analyze_pheromones(ant.position, heading, fov, sight, target.kind, env.pheromones);
        let follow_chance = rng.percent();
        let chosen = match decision.choose(follow_chance) {
            Some(choice) if info.has_any() => choice.pick(&info),
            _ => None,
        };
        match chosen {
            Some(offset) => get_offset(heading, direction_to_angle(offset), ant.max_turn_angle),
            // Wander spread is ±max_turn_angle/2, the same cap as get_offset.
            None => rng.direction_near(heading, ant.max_turn_angle),
        }
    };

    // A boxed-in reversal is not turn-capped and can point past the edge.
    Ant {
        position: (ant.position + direction * cell_size).clamp(min_bound, max_bound),
        direction,
        current_angle: direction_to_angle(direction),
        current_target: target,
        direction_history: history,
        ..ant.clone()
    }
}
