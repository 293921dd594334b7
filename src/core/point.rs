//! Integer grid coordinates for dead-reckoning room positions.

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// Grid coordinates of a room relative to the exploration origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// X coordinate (east positive)
    pub x: i32,
    /// Y coordinate (north positive)
    pub y: i32,
}

impl GridCoord {
    /// The origin room's coordinate.
    pub const ORIGIN: GridCoord = GridCoord { x: 0, y: 0 };

    /// Create a new grid coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Coordinate one step away in `direction`.
    ///
    /// `N:(x,y+1)`, `S:(x,y-1)`, `E:(x+1,y)`, `W:(x-1,y)`.
    #[inline]
    pub fn step(self, direction: Direction) -> GridCoord {
        self + direction.offset()
    }

    /// Manhattan distance to another coordinate
    #[inline]
    pub fn manhattan_distance(&self, other: &GridCoord) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// The 4 cardinal neighbors, paired with the direction that reaches them.
    #[inline]
    pub fn neighbors_4(&self) -> [(Direction, GridCoord); 4] {
        Direction::ALL.map(|dir| (dir, self.step(dir)))
    }
}

impl Add for GridCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GridCoord::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for GridCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GridCoord::new(self.x - other.x, self.y - other.y)
    }
}

impl From<(i32, i32)> for GridCoord {
    fn from((x, y): (i32, i32)) -> Self {
        GridCoord::new(x, y)
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
