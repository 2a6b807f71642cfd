//! The sparse game board.
//!
//! The board maps positions to the entities occupying them, plus the grid's
//! side length. It is the sole mutable state of a run: the loader fills it
//! once, and afterwards it changes only inside a creature's travel execution.
//!
//! # Determinism
//!
//! Cells are stored in a `BTreeMap` so that iteration (used by tests and by
//! callers inspecting the final state) is deterministic across platforms.
//!
//! # Invariant
//!
//! At most one entity occupies a position at any time. The validated loader
//! guarantees this at load time and the movement engine only ever removes
//! entities, so [`Board::insert`] asserts the cell is free rather than
//! handling collisions at runtime.
//!
//! # Example
//!
//! ```
//! use swarmgrid_core::board::Board;
//! use swarmgrid_core::entity::Entity;
//! use swarmgrid_core::grid::Position;
//!
//! let mut board = Board::new(8);
//! board.insert(Position::new(4, 1), Entity::food(5));
//!
//! assert_eq!(board.lookup(Position::new(4, 1)), Some(Entity::food(5)));
//! board.remove(Position::new(4, 1));
//! assert!(board.lookup(Position::new(4, 1)).is_none());
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::grid::Position;

/// A square board of side length `size` with sparse occupancy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: i32,
    cells: BTreeMap<Position, Entity>,
}

impl Board {
    /// Creates an empty board of the given side length.
    #[must_use]
    pub fn new(size: i32) -> Self {
        Self {
            size,
            cells: BTreeMap::new(),
        }
    }

    /// Returns the board's side length.
    #[must_use]
    pub const fn size(&self) -> i32 {
        self.size
    }

    /// Places an entity at a position.
    ///
    /// The caller guarantees the position is free; the validated loader is
    /// the only production caller. A duplicate position would mean the
    /// loader broke its contract, so it is asserted rather than handled.
    pub fn insert(&mut self, position: Position, entity: Entity) {
        let previous = self.cells.insert(position, entity);
        debug_assert!(
            previous.is_none(),
            "two entities placed at {position}: {previous:?} and {entity:?}"
        );
    }

    /// Returns the occupant of a position, if any.
    #[must_use]
    pub fn lookup(&self, position: Position) -> Option<Entity> {
        self.cells.get(&position).copied()
    }

    /// Returns `true` if the position holds an entity.
    #[must_use]
    pub fn is_occupied(&self, position: Position) -> bool {
        self.cells.contains_key(&position)
    }

    /// Removes the occupant of a position; no-op if the cell is empty.
    pub fn remove(&mut self, position: Position) {
        self.cells.remove(&position);
    }

    /// Returns the number of entities on the board.
    #[must_use]
    pub fn occupied_cells(&self) -> usize {
        self.cells.len()
    }

    /// Iterates all occupied cells in deterministic position order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Entity)> + '_ {
        self.cells.iter().map(|(pos, entity)| (*pos, *entity))
    }
}
