//! Core coordinate and action types.
//!
//! Defines integer grid cells, continuous positions, and the five
//! movement directions used throughout the game model.

use std::fmt;
use std::str::FromStr;

use super::error::ParseDirectionError;

/// Movement direction, including the no-op `Stop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    South,
    East,
    West,
    Stop,
}

impl Direction {
    /// Returns all directions in canonical order.
    ///
    /// Neighbor expansion follows this order, so it also fixes the BFS
    /// visiting order.
    pub fn all() -> [Direction; 5] {
        [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
            Direction::Stop,
        ]
    }

    /// Unit displacement `(dx, dy)` with `y` growing northward.
    pub fn to_vector(&self) -> (i64, i64) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::Stop => (0, 0),
        }
    }

    /// The opposite direction. `Stop` is its own reverse.
    pub fn reverse(&self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Stop => Direction::Stop,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::North => write!(f, "North"),
            Direction::South => write!(f, "South"),
            Direction::East => write!(f, "East"),
            Direction::West => write!(f, "West"),
            Direction::Stop => write!(f, "Stop"),
        }
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "north" => Ok(Direction::North),
            "south" => Ok(Direction::South),
            "east" => Ok(Direction::East),
            "west" => Ok(Direction::West),
            "stop" => Ok(Direction::Stop),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

/// An integer grid cell. `y = 0` is the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    /// Creates a new cell.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the cell displaced by `(dx, dy)`, or `None` if either
    /// coordinate would become negative.
    pub fn offset(&self, dx: i64, dy: i64) -> Option<Cell> {
        let x = usize::try_from(self.x as i64 + dx).ok()?;
        let y = usize::try_from(self.y as i64 + dy).ok()?;
        Some(Cell { x, y })
    }

    /// The cell reached by taking `direction` from here.
    pub fn step(&self, direction: Direction) -> Option<Cell> {
        let (dx, dy) = direction.to_vector();
        self.offset(dx, dy)
    }

    /// Manhattan distance to a continuous position.
    pub fn manhattan_to(&self, other: &Position) -> f64 {
        Position::from(*self).manhattan_to(other)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A continuous 2D position. Ghosts may sit between cells while moving.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Creates a new position.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another position.
    pub fn manhattan_to(&self, other: &Position) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// The grid cell this position rounds to (half-up), or `None` if it
    /// rounds to a negative coordinate.
    pub fn nearest_cell(&self) -> Option<Cell> {
        let x = (self.x + 0.5).floor();
        let y = (self.y + 0.5).floor();
        if x < 0.0 || y < 0.0 || !x.is_finite() || !y.is_finite() {
            return None;
        }
        Some(Cell::new(x as usize, y as usize))
    }
}

impl From<Cell> for Position {
    fn from(cell: Cell) -> Self {
        Self {
            x: cell.x as f64,
            y: cell.y as f64,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
