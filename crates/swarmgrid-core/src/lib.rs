//! # Swarmgrid Core
//!
//! Single-turn movement simulation on a square grid of colored creatures
//! and food markers.
//!
//! Each creature, in declaration order, picks the single most food-valuable
//! direction its kind can see, travels it (consuming food, stopped by
//! rival-colored creatures), vacates the board, and reports the chosen
//! direction and the amount eaten. Every turn mutates the shared board, so
//! later creatures decide against the results of earlier ones.
//!
//! ## Architecture
//!
//! - **Grid**: position, compass direction, and bounded-ray value types
//! - **Entities**: food points and creatures with per-kind capabilities
//! - **Board**: sparse position-to-entity map, the run's only mutable state
//! - **Movement engine**: stateless scan / select / travel algorithms
//! - **Turn driver**: sequences the per-creature decision-and-travel turns
//!
//! ## Usage
//!
//! ```rust
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
//! for record in driver.run() {
//!     println!("{record}");
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod board;
pub mod entity;
pub mod grid;
pub mod movement;
pub mod turn;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use board::Board;
pub use entity::{Capability, Color, Entity, Kind, ScanAxes};
pub use grid::{Direction, Position, Ray};
pub use movement::{best_direction, travel, visible_value};
pub use turn::{MoveRecord, TurnDriver};
