//! Test helper functions for setting up boards and turn drivers.

use crate::board::Board;
use crate::entity::{Color, Entity, Kind};
use crate::grid::Position;
use crate::turn::TurnDriver;

/// Builds a board of the given size with the listed occupants.
pub fn board_with(size: i32, entities: &[(Position, Entity)]) -> Board {
    let mut board = Board::new(size);
    for (position, entity) in entities {
        board.insert(*position, *entity);
    }
    board
}

/// Builds a driver with creatures enrolled in the given declaration order
/// and food scattered on the board.
///
/// Creature entities are placed on the board automatically; food entries
/// are `(position, value)` pairs.
pub fn driver_with(
    size: i32,
    creatures: &[(Color, Kind, Position)],
    food: &[(Position, u32)],
) -> TurnDriver {
    let mut board = Board::new(size);
    for (color, kind, origin) in creatures {
        board.insert(*origin, Entity::creature(*color, *kind));
    }
    for (position, value) in food {
        board.insert(*position, Entity::food(*value));
    }
    let mut driver = TurnDriver::new(board);
    for (color, kind, origin) in creatures {
        driver.enroll(*color, *kind, *origin);
    }
    driver
}
