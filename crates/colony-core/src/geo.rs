//! Planar vector type and boundary physics.
//!
//! `Vec2` uses `f32`.  Grids are a few hundred cells across, so single
//! precision keeps positions exact to well below a pixel while halving
//! memory compared to `f64`.
//!
//! The same type plays two roles: a *position* (absolute grid coordinates)
//! and a *direction* (normally unit length).  Directions may be transiently
//! non-normalized; callers normalize where it matters.

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A 2D float vector.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (self - other).length()
    }

    /// Unit vector in the same direction, or `None` for (near-)zero vectors.
    pub fn try_normalize(self) -> Option<Vec2> {
        let len = self.length();
        if len <= f32::EPSILON || !len.is_finite() {
            return None;
        }
        Some(Vec2::new(self.x / len, self.y / len))
    }

    /// Clamp both components into `[min, max]`.
    #[inline]
    pub fn clamp(self, min: f32, max: f32) -> Vec2 {
        Vec2::new(self.x.clamp(min, max), self.y.clamp(min, max))
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Distance between two positions.
#[inline]
pub fn calculate_distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Mirror `direction` about the plane with unit `normal`: `d - 2(d·n)n`.
#[inline]
pub fn reflect(direction: Vec2, normal: Vec2) -> Vec2 {
    direction - normal * (2.0 * direction.dot(normal))
}

/// Bounce `direction` off whichever grid boundary `position` has crossed.
///
/// The y bounds are checked first, so a corner crossing flips only y on this
/// call; the x component is handled on a later tick.  Interior positions
/// return `direction` unchanged.
pub fn reflect_direction(direction: Vec2, position: Vec2, min_bound: f32, max_bound: f32) -> Vec2 {
    if position.y <= min_bound || position.y >= max_bound {
        let ny = if position.y <= min_bound { 1.0 } else { -1.0 };
        reflect(direction, Vec2::new(0.0, ny))
    } else if position.x <= min_bound || position.x >= max_bound {
        let nx = if position.x <= min_bound { 1.0 } else { -1.0 };
        reflect(direction, Vec2::new(nx, 0.0))
    } else {
        direction
    }
}
