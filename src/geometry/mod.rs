use std::fmt;

use num_traits::{Float, Num, Signed};
use serde::{Deserialize, Serialize};


/// Manhattan distance
pub fn manhattan_distance<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Num + Copy + Signed,
    {
    (x1 - x2).abs() + (y1 - y2).abs()
}

/// Chebyshev (diagonal) distance
pub fn chebyshev_distance<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Num + Copy + Signed + PartialOrd,
    {
    let dx = (x1 - x2).abs();
    let dy = (y1 - y2).abs();
    if dx > dy { dx } else { dy }
}

/// Euclidean distance
pub fn euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
    {
    ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt()
}


/// Integer grid coordinate
/// Ordered by x, then y - this order canonicalizes `Edge`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position shifted by (dx, dy)
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    pub fn manhattan_distance(&self, other: &Position) -> u32 {
        manhattan_distance(self.x, self.y, other.x, other.y) as u32
    }

    pub fn chebyshev_distance(&self, other: &Position) -> u32 {
        chebyshev_distance(self.x, self.y, other.x, other.y) as u32
    }

    pub fn euclidean_distance(&self, other: &Position) -> f64 {
        euclidean(self.x as f64, self.y as f64, other.x as f64, other.y as f64)
    }

    /// True when the two positions share a side
    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}


/// Undirected grid segment between two positions
/// Endpoints are stored sorted so Edge::new(a, b) == Edge::new(b, a)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    low: Position,
    high: Position,
}

impl Edge {

    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    pub fn endpoints(&self) -> (Position, Position) {
        (self.low, self.high)
    }

    pub fn connects(&self, pos: &Position) -> bool {
        self.low == *pos || self.high == *pos
    }

    /// The endpoint opposite `pos`, None if `pos` is not on this edge
    pub fn other_end(&self, pos: &Position) -> Option<Position> {
        if *pos == self.low {
            Some(self.high)
        } else if *pos == self.high {
            Some(self.low)
        } else {
            None
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}->{}]", self.low, self.high)
    }
}
