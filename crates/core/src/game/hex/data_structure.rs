use crate::game::hex::{AxialPoint, Direction};
use fnv::FnvBuildHasher;
use serde::{Deserialize, Serialize};
use std::{
    collections::{HashMap, HashSet},
    fmt::Debug,
};

/// A set of board positions
pub type PointSet = HashSet<AxialPoint, FnvBuildHasher>;
/// A map of board positions to some `T`
pub type PointMap<T> = HashMap<AxialPoint, T, FnvBuildHasher>;

/// A static mapping of compass directions to values. This always holds
/// exactly 6 values, one per non-null direction, accessible via static
/// fields. Having static fields keeps serialization simple for external
/// apps, and there is no "missing direction" state to handle.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DirectionValues<T: Copy + Clone + Debug + PartialEq + Serialize> {
    pub northeast: T,
    pub east: T,
    pub southeast: T,
    pub southwest: T,
    pub west: T,
    pub northwest: T,
}

impl<T: Copy + Clone + Debug + PartialEq + Serialize> DirectionValues<T> {
    /// Build a value for each compass direction. The producer is invoked
    /// once per direction, in clockwise order starting from northeast.
    pub fn from_fn(mut produce: impl FnMut(Direction) -> T) -> Self {
        Self {
            northeast: produce(Direction::NorthEast),
            east: produce(Direction::East),
            southeast: produce(Direction::SouthEast),
            southwest: produce(Direction::SouthWest),
            west: produce(Direction::West),
            northwest: produce(Direction::NorthWest),
        }
    }

    /// Get the value for a compass direction. Panics for `NoAcceleration`,
    /// which has no slot here; passing it is a caller bug.
    pub fn get(&self, direction: Direction) -> &T {
        match direction {
            Direction::NorthEast => &self.northeast,
            Direction::East => &self.east,
            Direction::SouthEast => &self.southeast,
            Direction::SouthWest => &self.southwest,
            Direction::West => &self.west,
            Direction::NorthWest => &self.northwest,
            Direction::NoAcceleration => {
                panic!("no_acceleration has no direction slot")
            }
        }
    }

    /// Copy all values in this struct into an array, in the same clockwise
    /// order as [Direction::CLOCKWISE].
    pub fn as_array(&self) -> [T; 6] {
        [
            self.northeast,
            self.east,
            self.southeast,
            self.southwest,
            self.west,
            self.northwest,
        ]
    }
}
