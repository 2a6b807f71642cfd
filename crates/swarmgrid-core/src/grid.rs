//! Grid geometry: positions, compass directions, and bounded rays.
//!
//! This module provides the spatial value types for the simulation:
//! - [`Position`]: an immutable 1-based integer coordinate pair
//! - [`Direction`]: the eight compass directions with fixed text labels
//! - [`Ray`]: the bounded walk along a direction shared by the visibility
//!   scan and the travel execution
//!
//! # Axes
//!
//! The board uses screen-style axes: `x` grows eastward, `y` grows southward.
//! North therefore steps toward smaller `y`, and the north-west diagonal steps
//! toward smaller `x` and smaller `y`. Both coordinates are 1-based and valid
//! within `1..=size` for a board of side length `size`.
//!
//! # Example
//!
//! ```
//! use swarmgrid_core::grid::{Direction, Position, Ray};
//!
//! let origin = Position::new(4, 4);
//! assert_eq!(origin.advance(Direction::North, 1), Position::new(4, 3));
//!
//! // A ray never yields its own origin and stops at the board edge.
//! let visited: Vec<_> = Ray::new(origin, Direction::North, 1, 8).collect();
//! assert_eq!(
//!     visited,
//!     vec![Position::new(4, 3), Position::new(4, 2), Position::new(4, 1)]
//! );
//! ```

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 1-based coordinate pair on the board.
///
/// `Position` is an immutable value type compared by structural equality.
/// The `Ord` implementation (row-major: `y` first, then `x`) exists so the
/// board can store positions in a `BTreeMap` with deterministic iteration
/// order.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    y: i32,
    x: i32,
}

impl Position {
    /// Creates a position from its `x` and `y` coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { y, x }
    }

    /// Returns the `x` coordinate (grows eastward).
    #[must_use]
    pub const fn x(self) -> i32 {
        self.x
    }

    /// Returns the `y` coordinate (grows southward).
    #[must_use]
    pub const fn y(self) -> i32 {
        self.y
    }

    /// Returns the position `distance` steps away along `direction`.
    ///
    /// The result may lie outside any particular board; use
    /// [`Position::in_bounds`] to check.
    #[must_use]
    pub fn advance(self, direction: Direction, distance: i32) -> Self {
        let offset = direction.offset() * distance;
        Self::new(self.x + offset.x, self.y + offset.y)
    }

    /// Returns `true` if both coordinates lie within `1..=size`.
    #[must_use]
    pub const fn in_bounds(self, size: i32) -> bool {
        self.x >= 1 && self.x <= size && self.y >= 1 && self.y <= size
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the eight compass directions.
///
/// Each direction carries a fixed text label used in result records
/// (e.g. `"North-East"`) and a unit offset on the grid. Movement code treats
/// a direction as an opaque step function via [`Position::advance`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Toward smaller `y`.
    North,
    /// Toward larger `x`.
    East,
    /// Toward larger `y`.
    South,
    /// Toward smaller `x`.
    West,
    /// Toward larger `x`, smaller `y`.
    NorthEast,
    /// Toward smaller `x`, smaller `y`.
    NorthWest,
    /// Toward larger `x`, larger `y`.
    SouthEast,
    /// Toward smaller `x`, larger `y`.
    SouthWest,
}

/// The four orthogonal directions in tie-break priority order.
pub const ORTHOGONALS: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

/// The four diagonal directions in tie-break priority order.
pub const DIAGONALS: [Direction; 4] = [
    Direction::NorthEast,
    Direction::NorthWest,
    Direction::SouthEast,
    Direction::SouthWest,
];

impl Direction {
    /// Returns the unit offset of this direction.
    #[must_use]
    pub const fn offset(self) -> IVec2 {
        match self {
            Self::North => IVec2::new(0, -1),
            Self::East => IVec2::new(1, 0),
            Self::South => IVec2::new(0, 1),
            Self::West => IVec2::new(-1, 0),
            Self::NorthEast => IVec2::new(1, -1),
            Self::NorthWest => IVec2::new(-1, -1),
            Self::SouthEast => IVec2::new(1, 1),
            Self::SouthWest => IVec2::new(-1, 1),
        }
    }

    /// Returns the fixed text label of this direction.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::East => "East",
            Self::South => "South",
            Self::West => "West",
            Self::NorthEast => "North-East",
            Self::NorthWest => "North-West",
            Self::SouthEast => "South-East",
            Self::SouthWest => "South-West",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A bounded walk along a direction.
///
/// The ray starts one `step` away from its origin (the origin itself is never
/// yielded) and advances by `step` each iteration until the next position
/// falls outside `1..=size` on either axis. Both the read-only visibility
/// scan and the mutating travel execution iterate the same ray, which keeps
/// the two path definitions identical by construction.
#[derive(Debug, Clone)]
pub struct Ray {
    cursor: Position,
    direction: Direction,
    step: i32,
    size: i32,
}

impl Ray {
    /// Creates a ray from `origin` along `direction` on a board of side
    /// length `size`, advancing `step` cells at a time.
    #[must_use]
    pub const fn new(origin: Position, direction: Direction, step: i32, size: i32) -> Self {
        Self {
            cursor: origin,
            direction,
            step,
            size,
        }
    }
}

impl Iterator for Ray {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        let next = self.cursor.advance(self.direction, self.step);
        if next.in_bounds(self.size) {
            self.cursor = next;
            Some(next)
        } else {
            None
        }
    }
}
