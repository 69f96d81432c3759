//! The basic units of the slanted coordinate system: points/vectors and
//! directions. See the parent module documentation for a description of the
//! coordinate system itself.

use crate::screen::Point2;
use derive_more::{Add, AddAssign, Display, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_3;
use strum::{EnumIter, EnumString};

/// A point on the slanted hex grid. Doubles as a displacement vector: a
/// ship's velocity is an `AxialPoint` that gets added to its position every
/// turn. Components are `i32` because drift can accumulate without bound;
/// there is no board-size cap on velocity.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Add,
    Sub,
    Neg,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", "self.x", "self.y")]
pub struct AxialPoint {
    pub x: i32,
    pub y: i32,
}

impl AxialPoint {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Convert this point to Cartesian screen space, with unit cell spacing.
    /// The `y` axis of the board is slanted 120° from `+x`, so this just
    /// un-slants it: `(x - y/2, y·√3/2)`.
    pub fn to_screen_space(self) -> Point2 {
        let x = f64::from(self.x);
        let y = f64::from(self.y);
        Point2 {
            x: x - y / 2.0,
            y: y * 3.0_f64.sqrt() / 2.0,
        }
    }
}

/// The seven directions a ship can be told to accelerate in: the six compass
/// directions around a hexagon, plus no acceleration at all. The compass
/// variants form a closed 6-cycle in 60° steps; `NoAcceleration` is a fixed
/// point of every rotation and inversion.
///
/// All of the per-direction geometry (ordering, unit vectors, angles) is
/// derived from [Self::CLOCKWISE] and its parallel vector table, so there is
/// exactly one place that knows which way each direction points.
#[derive(
    Copy,
    Clone,
    Debug,
    EnumIter,
    EnumString,
    strum::Display,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    NoAcceleration,
    West,
    NorthWest,
    NorthEast,
    East,
    SouthEast,
    SouthWest,
}

impl Direction {
    /// The six compass directions in clockwise order, starting from
    /// northeast at angle 0. This ordering is the source of truth for all
    /// rotation math.
    pub const CLOCKWISE: &'static [Self] = &[
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// Unit displacement vectors, parallel to [Self::CLOCKWISE]. Adding one
    /// of these to a point yields the adjacent cell in that direction.
    const VECTORS: &'static [AxialPoint] = &[
        AxialPoint::new(1, 1),   // northeast
        AxialPoint::new(1, 0),   // east
        AxialPoint::new(0, -1),  // southeast
        AxialPoint::new(-1, -1), // southwest
        AxialPoint::new(-1, 0),  // west
        AxialPoint::new(0, 1),   // northwest
    ];

    /// Index of this direction in the clockwise cycle, or `None` for
    /// `NoAcceleration` (which isn't on the compass).
    fn compass_index(self) -> Option<usize> {
        Self::CLOCKWISE.iter().position(|dir| *dir == self)
    }

    /// Get the direction geometrically opposite this one. Inverting is an
    /// involution, and for compass directions it equals rotating 3 steps.
    /// `NoAcceleration` is its own opposite.
    pub fn invert(self) -> Self {
        match self.compass_index() {
            Some(index) => Self::CLOCKWISE[(index + 3) % 6],
            None => Self::NoAcceleration,
        }
    }

    /// Rotate this direction `turns` steps clockwise around the compass,
    /// where each step is 60°. `turns` may be negative (counterclockwise)
    /// or beyond a full cycle; it is normalized into `[0, 6)` first.
    /// `NoAcceleration` is unaffected by any rotation.
    pub fn clockwise(self, turns: i32) -> Self {
        match self.compass_index() {
            Some(index) => {
                Self::CLOCKWISE[(index + turns.rem_euclid(6) as usize) % 6]
            }
            None => Self::NoAcceleration,
        }
    }

    /// The rotation, in radians, of a ship heading this way. Northeast is 0
    /// and the angle grows counterclockwise in 60° increments, staying in
    /// `[0, 2π)`. `NoAcceleration` maps to 0; it never appears as a heading.
    pub fn angle(self) -> f64 {
        match self.compass_index() {
            Some(index) => ((6 - index) % 6) as f64 * FRAC_PI_3,
            None => 0.0,
        }
    }

    /// The unit displacement for this direction; `(0, 0)` for
    /// `NoAcceleration`.
    pub fn to_vector(self) -> AxialPoint {
        match self.compass_index() {
            Some(index) => Self::VECTORS[index],
            None => AxialPoint::ORIGIN,
        }
    }

    /// Look a unit vector back up to its compass direction. Returns `None`
    /// for anything that isn't one of the six unit displacements (including
    /// the zero vector).
    pub fn from_vector(vector: AxialPoint) -> Option<Self> {
        let index = Self::VECTORS.iter().position(|v| *v == vector)?;
        Some(Self::CLOCKWISE[index])
    }
}
