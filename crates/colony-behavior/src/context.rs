//! Read-only simulation state passed to every ant update.

use colony_core::{Target, TargetType, Vec2};
use colony_trail::Pheromone;

use crate::ObstacleMap;

/// Square simulation grid: `size` cells of `cell_size` units per side.
///
/// Ants live inside `[cell_size / 2, size * cell_size - cell_size / 2]` on
/// both axes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Grid {
    pub size: u32,
    pub cell_size: f32,
}

impl Grid {
    #[inline]
    pub fn new(size: u32, cell_size: f32) -> Self {
        Self { size, cell_size }
    }

    #[inline]
    pub fn min_bound(&self) -> f32 {
        self.cell_size / 2.0
    }

    #[inline]
    pub fn max_bound(&self) -> f32 {
        self.size as f32 * self.cell_size - self.cell_size / 2.0
    }

    /// Centre of cell `(x, y)` in grid coordinates.
    #[inline]
    pub fn cell_center(&self, x: u32, y: u32) -> Vec2 {
        Vec2::new((x as f32 + 0.5) * self.cell_size, (y as f32 + 0.5) * self.cell_size)
    }

    /// Centre of the cell containing `position`.
    #[inline]
    pub fn snap(&self, position: Vec2) -> Vec2 {
        let cs = self.cell_size;
        Vec2::new(((position.x / cs).floor() + 0.5) * cs, ((position.y / cs).floor() + 0.5) * cs)
    }

    /// `true` if `position` is inside the movable area.
    #[inline]
    pub fn contains(&self, position: Vec2) -> bool {
        let (lo, hi) = (self.min_bound(), self.max_bound());
        (lo..=hi).contains(&position.x) && (lo..=hi).contains(&position.y)
    }
}

/// A read-only snapshot of the world, built once per tick by the driver and
/// shared (immutably) across every ant update of that tick.
pub struct Environment<'a> {
    pub grid: Grid,
    pub nest: Target,
    pub food: Target,
    /// Live markers as of the start of the tick.
    pub pheromones: &'a [Pheromone],
    pub obstacles: &'a ObstacleMap,
}

impl<'a> Environment<'a> {
    #[inline]
    pub fn new(
        grid:       Grid,
        nest:       Target,
        food:       Target,
        pheromones: &'a [Pheromone],
        obstacles:  &'a ObstacleMap,
    ) -> Self {
        Self { grid, nest, food, pheromones, obstacles }
    }

    /// The fixed target of the given kind.
    #[inline]
    pub fn target(&self, kind: TargetType) -> Target {
        match kind {
            TargetType::Food => self.food,
            TargetType::Nest => self.nest,
        }
    }
}
