//! Headings in degrees, arcs of headings, and the steering primitive.
//!
//! # Conventions
//!
//! - 0° points along +x, 90° along +y (grid y grows downwards on screen, so
//!   90° is "south" when rendered; the simulation does not care).
//! - An [`Angle`] keeps its *raw* degree value so that arcs built by adding
//!   and subtracting half-widths stay contiguous (e.g. `[-45, 45]`).  Reads
//!   that need a canonical heading go through [`Angle::normalized`].
//! - [`AngleRange`] arithmetic is done on raw values.  Callers that mix
//!   bearings from different sources must first unwrap them onto the same
//!   branch (see [`Angle::unwrap_near`]).

use std::ops::{Add, Sub};

use crate::Vec2;

/// Wrap any finite degree value into `[0, 360)`.
#[inline]
pub fn normalize_angle(degrees: f32) -> f32 {
    let r = degrees.rem_euclid(360.0);
    // rem_euclid of a tiny negative value rounds up to exactly 360.0 in f32.
    if r >= 360.0 { 0.0 } else { r }
}

// ── Angle ─────────────────────────────────────────────────────────────────────

/// A heading in degrees.  Equality compares normalized values.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Angle(f32);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    #[inline]
    pub const fn new(degrees: f32) -> Self {
        Angle(degrees)
    }

    /// The raw, un-normalized degree value.
    #[inline]
    pub fn value(self) -> f32 {
        self.0
    }

    /// The heading wrapped into `[0, 360)`.
    #[inline]
    pub fn normalized(self) -> f32 {
        normalize_angle(self.0)
    }

    #[inline]
    pub fn to_radians(self) -> f32 {
        self.normalized().to_radians()
    }

    /// The representative of this heading closest to `reference`'s raw value.
    ///
    /// `Angle(350).unwrap_near(Angle(10))` is `Angle(-10)`.
    #[inline]
    pub fn unwrap_near(self, reference: Angle) -> Angle {
        Angle(reference.0 + angular_distance(reference, self))
    }
}

impl PartialEq for Angle {
    fn eq(&self, other: &Angle) -> bool {
        self.normalized() == other.normalized()
    }
}

impl From<f32> for Angle {
    #[inline]
    fn from(degrees: f32) -> Angle {
        Angle(degrees)
    }
}

impl Add<f32> for Angle {
    type Output = Angle;
    #[inline]
    fn add(self, rhs: f32) -> Angle {
        Angle(self.0 + rhs)
    }
}

impl Add for Angle {
    type Output = Angle;
    #[inline]
    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0 + rhs.0)
    }
}

impl Sub<f32> for Angle {
    type Output = Angle;
    #[inline]
    fn sub(self, rhs: f32) -> Angle {
        Angle(self.0 - rhs)
    }
}

impl Sub for Angle {
    type Output = Angle;
    #[inline]
    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0 - rhs.0)
    }
}

impl std::fmt::Display for Angle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.normalized())
    }
}

// ── AngleRange ────────────────────────────────────────────────────────────────

/// An arc of headings from `left` to `right` (raw values, `left <= right`).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AngleRange {
    pub left: Angle,
    pub right: Angle,
}

impl AngleRange {
    #[inline]
    pub fn new(left: Angle, right: Angle) -> Self {
        Self { left, right }
    }

    /// The arc of total width `width` centred on `center`.
    #[inline]
    pub fn centered(center: Angle, width: f32) -> Self {
        Self::new(center - width / 2.0, center + width / 2.0)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right.value() - self.left.value()
    }

    #[inline]
    pub fn midpoint(&self) -> Angle {
        Angle((self.left.value() + self.right.value()) / 2.0)
    }

    /// `true` if the raw arcs share more than a boundary point.
    #[inline]
    pub fn overlaps(&self, other: &AngleRange) -> bool {
        other.right.value() > self.left.value() && other.left.value() < self.right.value()
    }

    /// Remove `exclusion` from this arc.
    ///
    /// Returns the arc unchanged when they do not overlap, up to two
    /// remainders (left and/or right of the exclusion) on a partial overlap,
    /// and nothing when the exclusion covers the whole arc.
    pub fn subtract(&self, exclusion: &AngleRange) -> Vec<AngleRange> {
        if !self.overlaps(exclusion) {
            return vec![*self];
        }
        let mut out = Vec::with_capacity(2);
        if exclusion.left.value() > self.left.value() {
            out.push(AngleRange::new(self.left, exclusion.left));
        }
        if exclusion.right.value() < self.right.value() {
            out.push(AngleRange::new(exclusion.right, self.right));
        }
        out
    }
}

// ── Heading ↔ vector conversion ───────────────────────────────────────────────

/// Heading of `direction` (`atan2(y, x)` in degrees, normalized).
#[inline]
pub fn direction_to_angle(direction: Vec2) -> Angle {
    Angle(normalize_angle(direction.y.atan2(direction.x).to_degrees()))
}

/// Unit vector pointing along `angle`.
#[inline]
pub fn angle_to_direction(angle: Angle) -> Vec2 {
    let (sin, cos) = angle.to_radians().sin_cos();
    Vec2::new(cos, sin)
}

/// Signed shortest rotation from `from` to `to`, in `(-180, 180]`.
///
/// Never returns negative zero.
pub fn angular_distance(from: Angle, to: Angle) -> f32 {
    let mut diff = normalize_angle(to.value() - from.value());
    if diff > 180.0 {
        diff -= 360.0;
    }
    if diff == 0.0 {
        // Collapses -0.0 as well.
        diff = 0.0;
    }
    diff
}

/// `true` if `angle` lies within the arc of width `field_of_view` centred on
/// `center`, boundaries included.  Arcs that cross 0° are split in two.
pub fn angle_is_in_range(angle: Angle, center: Angle, field_of_view: f32) -> bool {
    if field_of_view >= 360.0 {
        return true;
    }
    let half = field_of_view / 2.0;
    let min = normalize_angle(center.normalized() - half);
    let max = normalize_angle(center.normalized() + half);
    let a = angle.normalized();

    if min <= max {
        (min..=max).contains(&a)
    } else {
        (min..360.0).contains(&a) || (0.0..=max).contains(&a)
    }
}

/// Turn from `current` toward `target`, at most `max_turn_angle / 2` degrees.
///
/// Snaps straight onto `target` when it is already within the per-tick
/// limit.  Every heading change toward a goal goes through here.
pub fn get_offset(current: Angle, target: Angle, max_turn_angle: f32) -> Vec2 {
    let diff = angular_distance(current, target);
    let limit = max_turn_angle / 2.0;

    if diff.abs() <= limit {
        angle_to_direction(target)
    } else {
        angle_to_direction(current + diff.signum() * limit)
    }
}
