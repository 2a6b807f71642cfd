//! Input parsing and validation for the file-based front end.
//!
//! The input format is line-oriented:
//!
//! ```text
//! <board size>
//! <number of creatures>
//! <number of food points>
//! <Color> <Kind> <x> <y>     (one line per creature)
//! <value> <x> <y>            (one line per food point)
//! ```
//!
//! Every fallible condition is checked here, before the core ever runs:
//! the core asserts validated input and is total at runtime. Each failure
//! maps to one [`InputError`] variant with a single descriptive message.

use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use swarmgrid_core::board::Board;
use swarmgrid_core::entity::{Color, Entity, Kind};
use swarmgrid_core::grid::Position;
use swarmgrid_core::turn::TurnDriver;

/// Board side length bounds.
const SIZE_RANGE: std::ops::RangeInclusive<i32> = 4..=1000;
/// Creature count bounds.
const CREATURE_RANGE: std::ops::RangeInclusive<usize> = 1..=16;
/// Food point count bounds.
const FOOD_RANGE: std::ops::RangeInclusive<usize> = 1..=200;

/// A validation failure in the input.
///
/// The message of each variant is the complete text reported to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Board size outside `4..=1000`.
    #[error("Invalid board size")]
    InvalidBoardSize,

    /// Creature count outside `1..=16`.
    #[error("Invalid number of creatures")]
    InvalidCreatureCount,

    /// Food point count outside `1..=200`.
    #[error("Invalid number of food points")]
    InvalidFoodCount,

    /// Unknown color name.
    #[error("Invalid creature color")]
    InvalidColor,

    /// Unknown kind name.
    #[error("Invalid creature kind")]
    InvalidKind,

    /// A position outside the board.
    #[error("Invalid entity position")]
    InvalidPosition,

    /// Two entities declared on the same position.
    #[error("Two entities in the same position")]
    PositionCollision,

    /// The same kind declared twice for one color.
    #[error("Duplicate creatures")]
    DuplicateCreature,

    /// Missing line, missing field, or a field that is not a number.
    #[error("Invalid input format")]
    Malformed,
}

fn parse_color(token: &str) -> Result<Color, InputError> {
    match token {
        "Red" => Ok(Color::Red),
        "Green" => Ok(Color::Green),
        "Blue" => Ok(Color::Blue),
        "Yellow" => Ok(Color::Yellow),
        _ => Err(InputError::InvalidColor),
    }
}

fn parse_kind(token: &str) -> Result<Kind, InputError> {
    match token {
        "Hopper" => Ok(Kind::Hopper),
        "Flutterer" => Ok(Kind::Flutterer),
        "Weaver" => Ok(Kind::Weaver),
        "Crawler" => Ok(Kind::Crawler),
        _ => Err(InputError::InvalidKind),
    }
}

fn parse_number<T: std::str::FromStr>(token: &str) -> Result<T, InputError> {
    token.parse().map_err(|_| InputError::Malformed)
}

/// Parses and validates a complete input text.
///
/// On success, returns a [`TurnDriver`] with the board loaded and every
/// creature enrolled in declaration order, ready to run.
///
/// # Errors
///
/// Returns the first [`InputError`] encountered, in reading order. Line
/// shape is checked before field semantics, and within a creature line the
/// checks run kind, color, position, duplicate, collision — so the reported
/// failure for a multiply-invalid input is deterministic.
pub fn load(text: &str) -> Result<TurnDriver, InputError> {
    let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());
    let mut next_line = || lines.next().ok_or(InputError::Malformed);

    let size: i32 = parse_number(next_line()?)?;
    if !SIZE_RANGE.contains(&size) {
        return Err(InputError::InvalidBoardSize);
    }

    let creature_count: usize = parse_number(next_line()?)?;
    if !CREATURE_RANGE.contains(&creature_count) {
        return Err(InputError::InvalidCreatureCount);
    }

    let food_count: usize = parse_number(next_line()?)?;
    if !FOOD_RANGE.contains(&food_count) {
        return Err(InputError::InvalidFoodCount);
    }

    let mut board = Board::new(size);
    let mut roster: Vec<(Color, Kind, Position)> = Vec::with_capacity(creature_count);
    let mut seen: HashSet<(Color, Kind)> = HashSet::new();

    for _ in 0..creature_count {
        let line = next_line()?;
        let mut fields = line.split_whitespace();
        let color_token = fields.next().ok_or(InputError::Malformed)?;
        let kind_token = fields.next().ok_or(InputError::Malformed)?;
        let x: i32 = parse_number(fields.next().ok_or(InputError::Malformed)?)?;
        let y: i32 = parse_number(fields.next().ok_or(InputError::Malformed)?)?;
        if fields.next().is_some() {
            return Err(InputError::Malformed);
        }

        let kind = parse_kind(kind_token)?;
        let color = parse_color(color_token)?;
        let position = Position::new(x, y);
        if !position.in_bounds(size) {
            return Err(InputError::InvalidPosition);
        }
        if !seen.insert((color, kind)) {
            return Err(InputError::DuplicateCreature);
        }
        if board.is_occupied(position) {
            return Err(InputError::PositionCollision);
        }

        board.insert(position, Entity::creature(color, kind));
        roster.push((color, kind, position));
    }

    for _ in 0..food_count {
        let line = next_line()?;
        let mut fields = line.split_whitespace();
        let value: u32 = parse_number(fields.next().ok_or(InputError::Malformed)?)?;
        let x: i32 = parse_number(fields.next().ok_or(InputError::Malformed)?)?;
        let y: i32 = parse_number(fields.next().ok_or(InputError::Malformed)?)?;
        if fields.next().is_some() {
            return Err(InputError::Malformed);
        }

        let position = Position::new(x, y);
        if !position.in_bounds(size) {
            return Err(InputError::InvalidPosition);
        }
        if board.is_occupied(position) {
            return Err(InputError::PositionCollision);
        }

        board.insert(position, Entity::food(value));
    }

    debug!(
        size,
        creatures = roster.len(),
        entities = board.occupied_cells(),
        "input validated"
    );

    let mut driver = TurnDriver::new(board);
    for (color, kind, position) in roster {
        driver.enroll(color, kind, position);
    }
    Ok(driver)
}
