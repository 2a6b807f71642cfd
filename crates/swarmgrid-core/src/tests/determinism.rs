//! Determinism tests: fixed tie-break priority and scan invariants.

use proptest::prelude::*;

use super::helpers::board_with;
use crate::board::Board;
use crate::entity::{Color, Entity, Kind};
use crate::grid::{Direction, Position, DIAGONALS, ORTHOGONALS};
use crate::movement::{best_direction, visible_value};

#[test]
fn four_way_tie_picks_north_for_orthogonal_kinds() {
    // Equal food in all four orthogonal directions.
    let board = board_with(
        9,
        &[
            (Position::new(5, 2), Entity::food(3)),
            (Position::new(8, 5), Entity::food(3)),
            (Position::new(5, 8), Entity::food(3)),
            (Position::new(2, 5), Entity::food(3)),
        ],
    );
    for kind in [Kind::Flutterer, Kind::Crawler] {
        let (direction, value) = best_direction(&board, Position::new(5, 5), kind.capability());
        assert_eq!(direction, Direction::North, "kind {kind}");
        assert_eq!(value, 3);
    }
}

#[test]
fn four_way_tie_picks_north_east_for_weaver() {
    let board = board_with(
        9,
        &[
            (Position::new(7, 3), Entity::food(2)),
            (Position::new(3, 3), Entity::food(2)),
            (Position::new(7, 7), Entity::food(2)),
            (Position::new(3, 7), Entity::food(2)),
        ],
    );
    let (direction, value) = best_direction(&board, Position::new(5, 5), Kind::Weaver.capability());
    assert_eq!(direction, Direction::NorthEast);
    assert_eq!(value, 2);
}

#[test]
fn orthogonal_beats_equal_diagonal_for_crawler() {
    // West and north-east tie; west sits earlier in the priority order.
    let board = board_with(
        9,
        &[
            (Position::new(2, 5), Entity::food(4)),
            (Position::new(7, 3), Entity::food(4)),
        ],
    );
    let (direction, _) = best_direction(&board, Position::new(5, 5), Kind::Crawler.capability());
    assert_eq!(direction, Direction::West);
}

#[test]
fn higher_value_overrides_priority() {
    // South-west strictly outscores north: priority only breaks ties.
    let board = board_with(
        9,
        &[
            (Position::new(5, 2), Entity::food(3)),
            (Position::new(2, 8), Entity::food(9)),
        ],
    );
    let (direction, value) = best_direction(&board, Position::new(5, 5), Kind::Crawler.capability());
    assert_eq!(direction, Direction::SouthWest);
    assert_eq!(value, 9);
}

#[test]
fn repeated_decision_is_stable() {
    // The scan never mutates the board, so the decision must not drift.
    let board = board_with(
        8,
        &[
            (Position::new(4, 2), Entity::food(5)),
            (Position::new(6, 4), Entity::food(5)),
        ],
    );
    let first = best_direction(&board, Position::new(4, 4), Kind::Crawler.capability());
    for _ in 0..10 {
        assert_eq!(
            best_direction(&board, Position::new(4, 4), Kind::Crawler.capability()),
            first
        );
    }
}

fn arb_position(size: i32) -> impl Strategy<Value = Position> {
    (1..=size, 1..=size).prop_map(|(x, y)| Position::new(x, y))
}

proptest! {
    /// A board with no food scores 0 on every ray, for every kind.
    #[test]
    fn foodless_board_scores_zero_everywhere(
        origin in arb_position(12),
        rival in arb_position(12),
    ) {
        let mut board = Board::new(12);
        if rival != origin {
            board.insert(rival, Entity::creature(Color::Blue, Kind::Crawler));
        }
        for direction in ORTHOGONALS.into_iter().chain(DIAGONALS) {
            for step in [1, 2] {
                prop_assert_eq!(visible_value(&board, origin, direction, step), 0);
            }
        }
    }

    /// Food at an odd offset never contributes to a double-step scan.
    #[test]
    fn odd_offset_food_is_invisible_to_double_step(
        origin in arb_position(16),
        value in 1u32..100,
    ) {
        for direction in ORTHOGONALS {
            let spot = origin.advance(direction, 1);
            if !spot.in_bounds(16) {
                continue;
            }
            let board = board_with(16, &[(spot, Entity::food(value))]);
            prop_assert_eq!(visible_value(&board, origin, direction, 2), 0);
            prop_assert_eq!(visible_value(&board, origin, direction, 1), value);
        }
    }

    /// The chosen direction always carries the maximum visibility value of
    /// the kind's eligible set, and is the earliest such entry.
    #[test]
    fn choice_is_earliest_maximum(
        origin in arb_position(10),
        food in proptest::collection::vec((arb_position(10), 1u32..20), 0..6),
    ) {
        let mut board = Board::new(10);
        for (position, value) in &food {
            if *position != origin && !board.is_occupied(*position) {
                board.insert(*position, Entity::food(*value));
            }
        }
        for kind in [Kind::Hopper, Kind::Flutterer, Kind::Weaver, Kind::Crawler] {
            let capability = kind.capability();
            let (chosen, value) = best_direction(&board, origin, capability);
            let scanned: Vec<(Direction, u32)> = capability
                .priority()
                .map(|d| (d, visible_value(&board, origin, d, capability.step())))
                .collect();
            let max = scanned.iter().map(|(_, v)| *v).max().unwrap_or(0);
            prop_assert_eq!(value, max);
            let earliest = scanned.iter().find(|(_, v)| *v == max).map(|(d, _)| *d);
            prop_assert_eq!(Some(chosen), earliest);
        }
    }
}
