//! The turn driver: one decision-and-travel turn per creature.
//!
//! The driver owns the board for the duration of the run and advances each
//! creature through a three-state lifecycle:
//!
//! 1. **Pending**: the creature has not acted yet.
//! 2. **Decided**: the best direction has been computed against the live
//!    board (as left by the previous creature's execution).
//! 3. **Executed**: the travel has been applied and the result recorded.
//!
//! Creatures act strictly in declaration order and are never revisited, so
//! the board after creature *i*'s turn is exactly the input to creature
//! *i+1*'s decision. The run is single-threaded and fully sequential; the
//! board is never shared.
//!
//! # Example
//!
//! ```
//! use swarmgrid_core::board::Board;
//! use swarmgrid_core::entity::{Color, Entity, Kind};
//! use swarmgrid_core::grid::Position;
//! use swarmgrid_core::turn::TurnDriver;
//!
//! let mut board = Board::new(8);
//! board.insert(Position::new(4, 4), Entity::creature(Color::Red, Kind::Crawler));
//! board.insert(Position::new(4, 1), Entity::food(5));
//!
//! let mut driver = TurnDriver::new(board);
//! driver.enroll(Color::Red, Kind::Crawler, Position::new(4, 4));
//!
//! let records = driver.run();
//! assert_eq!(records[0].to_string(), "Red Crawler North 5");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::board::Board;
use crate::entity::{Color, Kind};
use crate::grid::{Direction, Position};
use crate::movement::{best_direction, travel};

/// Lifecycle state of one creature's turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
enum TurnState {
    /// Not yet acted.
    Pending,
    /// Best direction computed, travel not yet applied.
    Decided(Direction),
    /// Travel applied and result recorded; terminal.
    Executed(Direction, u32),
}

/// One enrolled creature and its turn progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CreatureTurn {
    color: Color,
    kind: Kind,
    origin: Position,
    state: TurnState,
}

/// The result record of one creature's turn.
///
/// Its `Display` implementation produces the output line format:
/// `"<Color> <Kind> <DirectionLabel> <eaten>"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The creature's faction color.
    pub color: Color,
    /// The creature's kind.
    pub kind: Kind,
    /// The direction chosen by the visibility scan.
    pub direction: Direction,
    /// Total food value consumed during travel.
    pub eaten: u32,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.color, self.kind, self.direction, self.eaten
        )
    }
}

/// Drives every enrolled creature through its turn, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnDriver {
    board: Board,
    roster: Vec<CreatureTurn>,
}

impl TurnDriver {
    /// Creates a driver that takes ownership of a loaded board.
    #[must_use]
    pub const fn new(board: Board) -> Self {
        Self {
            board,
            roster: Vec::new(),
        }
    }

    /// Enrolls a creature for the run.
    ///
    /// Enrollment order is declaration order: creatures act in exactly the
    /// order they are enrolled. The creature's entity must already sit on
    /// the board at `origin`; the loader guarantees this.
    pub fn enroll(&mut self, color: Color, kind: Kind, origin: Position) {
        self.roster.push(CreatureTurn {
            color,
            kind,
            origin,
            state: TurnState::Pending,
        });
    }

    /// Runs every pending creature's turn and returns one record each.
    ///
    /// Each creature's decision sees the board exactly as the previous
    /// creature's execution left it. The driver never revisits a creature,
    /// so calling `run` twice yields no further records.
    pub fn run(&mut self) -> Vec<MoveRecord> {
        let mut records = Vec::with_capacity(self.roster.len());
        for entry in &mut self.roster {
            if entry.state != TurnState::Pending {
                continue;
            }
            let capability = entry.kind.capability();

            let (direction, seen) = best_direction(&self.board, entry.origin, capability);
            entry.state = TurnState::Decided(direction);
            debug!(
                color = %entry.color,
                kind = %entry.kind,
                origin = %entry.origin,
                %direction,
                seen,
                "direction decided"
            );

            let eaten = travel(
                &mut self.board,
                entry.origin,
                entry.color,
                direction,
                capability.step(),
            );
            entry.state = TurnState::Executed(direction, eaten);
            debug!(color = %entry.color, kind = %entry.kind, eaten, "travel executed");

            records.push(MoveRecord {
                color: entry.color,
                kind: entry.kind,
                direction,
                eaten,
            });
        }
        records
    }

    /// Returns the board in its current state.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Consumes the driver and returns the final board.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }
}
