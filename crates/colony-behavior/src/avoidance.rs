//! Steering around blocked cells by subtracting their angular footprints
//! from the vision cone.
//!
//! All arcs are expressed on the raw-degree branch of the ant's heading:
//! obstacle bearings are unwrapped near the heading before subtraction, so
//! a cone straddling 0° is handled like any other.

use colony_agent::Ant;
use colony_core::{Angle, AngleRange, Vec2, angle_to_direction, direction_to_angle, get_offset};

use crate::ObstacleMap;

/// Obstacles this close (in cells) make a boxed-in ant turn around.
const REVERSE_DISTANCE_CELLS: f32 = 3.0;

/// Angular size in degrees of an object `diameter` wide seen from
/// `distance`, using the object's half-diagonal.
#[inline]
pub fn angular_size(diameter: f32, distance: f32) -> f32 {
    (2.0 * ((std::f32::consts::SQRT_2 * diameter / 2.0) / distance).atan()).to_degrees()
}

/// The arc of headings blocked by an obstacle at `obstacle`, seen from
/// `position`, on the branch closest to `heading`.
pub fn exclusion_range(position: Vec2, heading: Angle, obstacle: Vec2, cell_size: f32) -> AngleRange {
    let offset = obstacle - position;
    let bearing = direction_to_angle(offset).unwrap_near(heading);
    let size = angular_size(cell_size * 2.0, offset.length());
    AngleRange::new(bearing - size, bearing + size)
}

/// What is left of the cone of width `field_of_view` around `heading` after
/// removing every exclusion arc.  Empty when the cone is fully blocked.
pub fn calculate_remaining_angle_range(
    exclusions:    &[AngleRange],
    field_of_view: f32,
    heading:       Angle,
) -> Vec<AngleRange> {
    let mut remaining = vec![AngleRange::centered(heading, field_of_view)];
    for exclusion in exclusions {
        remaining = remaining.iter().flat_map(|r| r.subtract(exclusion)).collect();
        if remaining.is_empty() {
            break;
        }
    }
    remaining
}

/// The widest arc; the first one wins a tie.
pub fn find_widest_range(ranges: &[AngleRange]) -> Option<AngleRange> {
    ranges
        .iter()
        .copied()
        .reduce(|best, r| if r.width() > best.width() { r } else { best })
}

/// New heading for an ant that has obstacles in view.
///
/// Steers (within the turn limit) toward the middle of the widest free arc.
/// When no arc is free, an ant with an obstacle within three cells turns
/// around; otherwise it turns away from the farthest visible obstacle.
pub fn offset_from_obstacles(ant: &Ant, obstacles: &ObstacleMap) -> Vec2 {
    let heading = ant.current_angle;
    let cell_size = obstacles.cell_size();
    let visible: Vec<(Vec2, f32)> = obstacles.within(ant.position, ant.sight_distance).collect();

    let exclusions: Vec<AngleRange> = visible
        .iter()
        .map(|&(o, _)| exclusion_range(ant.position, heading, o, cell_size))
        .collect();
    let remaining = calculate_remaining_angle_range(&exclusions, ant.field_view_angle_range, heading);

    if remaining.is_empty() {
        let closest = visible.iter().min_by(|a, b| a.1.total_cmp(&b.1));
        let farthest = visible.iter().max_by(|a, b| a.1.total_cmp(&b.1));
        if let Some(&(_, d)) = closest {
            if d <= REVERSE_DISTANCE_CELLS * cell_size {
                return angle_to_direction(heading + 180.0);
            }
        }
        if let Some(&(far, _)) = farthest {
            let away = direction_to_angle(ant.position - far);
            return get_offset(heading, away, ant.max_turn_angle);
        }
    }

    match find_widest_range(&remaining) {
        Some(widest) => get_offset(heading, widest.midpoint(), ant.max_turn_angle),
        None => angle_to_direction(heading),
    }
}
