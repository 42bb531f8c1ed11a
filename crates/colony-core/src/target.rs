//! The two fixed points of interest an ant travels between.

use crate::Vec2;

/// What kind of place a [`Target`] is.
///
/// A pheromone is tagged with the `TargetType` its depositor was heading to
/// *before* the deposit, so ants read trails left by ants travelling the
/// opposite way.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetType {
    Food,
    Nest,
}

impl TargetType {
    /// The other target type.
    #[inline]
    pub fn opposite(self) -> TargetType {
        match self {
            TargetType::Food => TargetType::Nest,
            TargetType::Nest => TargetType::Food,
        }
    }

    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            TargetType::Food => "food",
            TargetType::Nest => "nest",
        }
    }
}

impl std::fmt::Display for TargetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fixed destination in grid coordinates.  Immutable once created.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Target {
    pub position: Vec2,
    pub kind: TargetType,
}

impl Target {
    #[inline]
    pub fn new(position: Vec2, kind: TargetType) -> Self {
        Self { position, kind }
    }

    #[inline]
    pub fn food(position: Vec2) -> Self {
        Self::new(position, TargetType::Food)
    }

    #[inline]
    pub fn nest(position: Vec2) -> Self {
        Self::new(position, TargetType::Nest)
    }
}
