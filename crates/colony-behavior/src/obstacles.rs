//! User-placed blocking cells.

use colony_core::Vec2;
use rustc_hash::FxHashSet;

/// The set of blocked grid cells.
///
/// Cells are stored as integer coordinates; geometry works with each cell's
/// centre.  `FxHashSet` iteration order depends only on insertion history,
/// which keeps obstacle scans reproducible across runs with the same seed.
#[derive(Clone, Debug)]
pub struct ObstacleMap {
    cell_size: f32,
    cells: FxHashSet<(i32, i32)>,
}

impl ObstacleMap {
    pub fn new(cell_size: f32) -> Self {
        Self { cell_size, cells: FxHashSet::default() }
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Grid cell containing `position`.
    #[inline]
    pub fn cell_of(&self, position: Vec2) -> (i32, i32) {
        (
            (position.x / self.cell_size).floor() as i32,
            (position.y / self.cell_size).floor() as i32,
        )
    }

    /// Centre of `cell` in grid coordinates.
    #[inline]
    pub fn cell_center(&self, cell: (i32, i32)) -> Vec2 {
        Vec2::new(
            (cell.0 as f32 + 0.5) * self.cell_size,
            (cell.1 as f32 + 0.5) * self.cell_size,
        )
    }

    /// Block `cell`.  Returns `false` if it was already blocked.
    pub fn insert_cell(&mut self, cell: (i32, i32)) -> bool {
        self.cells.insert(cell)
    }

    /// Unblock `cell`.  Returns `false` if it was not blocked.
    pub fn remove_cell(&mut self, cell: (i32, i32)) -> bool {
        self.cells.remove(&cell)
    }

    /// Block the cell under `position`.
    pub fn insert_at(&mut self, position: Vec2) -> bool {
        let cell = self.cell_of(position);
        self.insert_cell(cell)
    }

    /// Unblock the cell under `position`.
    pub fn remove_at(&mut self, position: Vec2) -> bool {
        let cell = self.cell_of(position);
        self.remove_cell(cell)
    }

    /// Block the cell under `position` and its eight neighbours.
    /// Returns how many cells were newly blocked.
    pub fn insert_brush_at(&mut self, position: Vec2) -> usize {
        let (cx, cy) = self.cell_of(position);
        brush(cx, cy).filter(|&c| self.cells.insert(c)).count()
    }

    /// Unblock the cell under `position` and its eight neighbours.
    /// Returns how many cells were unblocked.
    pub fn remove_brush_at(&mut self, position: Vec2) -> usize {
        let (cx, cy) = self.cell_of(position);
        brush(cx, cy).filter(|c| self.cells.remove(c)).count()
    }

    #[inline]
    pub fn contains_cell(&self, cell: (i32, i32)) -> bool {
        self.cells.contains(&cell)
    }

    /// `true` if the cell under `position` is blocked.
    #[inline]
    pub fn is_blocked_at(&self, position: Vec2) -> bool {
        self.contains_cell(self.cell_of(position))
    }

    /// Centres of every blocked cell.
    pub fn positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.cells.iter().map(|&c| self.cell_center(c))
    }

    /// `(centre, distance)` for every blocked cell strictly closer than
    /// `radius` to `origin`.
    pub fn within(&self, origin: Vec2, radius: f32) -> impl Iterator<Item = (Vec2, f32)> + '_ {
        self.positions()
            .map(move |p| (p, origin.distance(p)))
            .filter(move |&(_, d)| d < radius)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }
}

fn brush(cx: i32, cy: i32) -> impl Iterator<Item = (i32, i32)> {
    (-1..=1).flat_map(move |dy| (-1..=1).map(move |dx| (cx + dx, cy + dy)))
}
