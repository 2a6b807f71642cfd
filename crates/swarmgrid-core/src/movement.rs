//! The movement engine: visibility scan, best-direction selection, travel.
//!
//! All three operations are stateless algorithms over a board, parameterized
//! by a creature kind's [`Capability`]. The visibility scan is the read
//! phase: it prices every direction the kind supports without touching the
//! board. Travel is the write phase: it re-walks the chosen ray and mutates
//! the board. Keeping the phases on the same [`Ray`] guarantees the scan and
//! the travel agree on which cells the creature visits.
//!
//! # Tie-breaking
//!
//! [`best_direction`] compares visibility values with a floor of 0 and
//! resolves ties by the kind's fixed priority order (orthogonals N, E, S, W
//! first, then diagonals NE, NW, SE, SW, restricted to the supported axes).
//! A creature that sees no food anywhere still receives the first direction
//! of its priority list, never "no direction".

use tracing::debug;

use crate::board::Board;
use crate::entity::{Capability, Color, Entity};
use crate::grid::{Direction, Position, Ray};

/// Sums the food values visible from `origin` along `direction`.
///
/// The scan starts one step away and walks to the board edge. Creatures of
/// any color are transparent: they neither contribute value nor stop the
/// scan. The result is what [`best_direction`] compares; it is not the
/// amount a travel along the same ray would eat, since travel can be cut
/// short by a rival creature.
#[must_use]
pub fn visible_value(
    board: &Board,
    origin: Position,
    direction: Direction,
    step: i32,
) -> u32 {
    Ray::new(origin, direction, step, board.size())
        .filter_map(|position| board.lookup(position).and_then(|entity| entity.as_food()))
        .sum()
}

/// Selects the best travel direction for a creature at `origin`.
///
/// Every direction in the capability's priority order is scanned; the first
/// one whose visibility value equals the maximum wins. The maximum has a
/// floor of 0, so an all-zero scan yields the first priority direction.
///
/// Returns the chosen direction and its visibility value.
#[must_use]
pub fn best_direction(
    board: &Board,
    origin: Position,
    capability: Capability,
) -> (Direction, u32) {
    let mut best = None;
    for direction in capability.priority() {
        let value = visible_value(board, origin, direction, capability.step());
        debug!(%origin, %direction, value, "scanned direction");
        match best {
            None => best = Some((direction, value)),
            Some((_, best_value)) if value > best_value => best = Some((direction, value)),
            Some(_) => {}
        }
    }
    // The priority list of every kind is non-empty.
    best.expect("capability with no supported directions")
}

/// Executes a creature's travel from `origin` along `direction`.
///
/// Re-walks the scan ray, this time mutating the board. Food on the path is
/// accumulated into the eaten total and marked for removal; removal is
/// deferred until the walk concludes so the walk reads the same board the
/// scan did. A different-colored creature stops the walk immediately and is
/// left untouched; same-colored creatures are transparent. In every case the
/// traveler vacates `origin` exactly once.
///
/// Returns the total food value eaten.
pub fn travel(
    board: &mut Board,
    origin: Position,
    color: Color,
    direction: Direction,
    step: i32,
) -> u32 {
    let mut eaten = 0;
    let mut consumed: Vec<Position> = Vec::new();

    for position in Ray::new(origin, direction, step, board.size()) {
        match board.lookup(position) {
            Some(Entity::Food { value }) => {
                eaten += value;
                consumed.push(position);
            }
            Some(Entity::Creature { color: other, .. }) if other != color => {
                debug!(%origin, %position, "travel blocked by rival creature");
                break;
            }
            // Same-colored creatures and empty cells are passed through.
            Some(Entity::Creature { .. }) | None => {}
        }
    }

    board.remove(origin);
    for position in consumed {
        board.remove(position);
    }
    eaten
}
