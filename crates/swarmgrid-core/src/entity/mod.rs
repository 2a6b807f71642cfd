//! Board entities: creatures and food points.
//!
//! This module provides the occupant types for the simulation:
//! - [`Color`]: the four creature colors
//! - [`Kind`]: the four creature kinds, each mapping to a [`Capability`]
//! - [`Entity`]: the closed set of board occupants (food or creature)
//!
//! # Design
//!
//! Kinds are a closed set of tagged variants rather than a type hierarchy.
//! All kind-specific behavior lives in the capability descriptor returned by
//! [`Kind::capability`]; the movement engine dispatches one shared algorithm
//! on it instead of duplicating near-identical per-kind methods.
//!
//! # Example
//!
//! ```
//! use swarmgrid_core::entity::{Color, Entity, Kind};
//!
//! let creature = Entity::creature(Color::Red, Kind::Crawler);
//! assert!(creature.as_food().is_none());
//! assert_eq!(creature.as_creature(), Some((Color::Red, Kind::Crawler)));
//! ```

pub mod capability;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use capability::{Capability, ScanAxes};

/// A creature's color.
///
/// Colors partition creatures into factions: a traveling creature passes
/// through same-colored creatures and is stopped by different-colored ones.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Red faction.
    Red,
    /// Green faction.
    Green,
    /// Blue faction.
    Blue,
    /// Yellow faction.
    Yellow,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => f.write_str("Red"),
            Self::Green => f.write_str("Green"),
            Self::Blue => f.write_str("Blue"),
            Self::Yellow => f.write_str("Yellow"),
        }
    }
}

/// A creature's kind.
///
/// The kind is immutable after creation and fully determines the creature's
/// movement capability (scan axes, step size, tie-break priority order).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    /// Orthogonal scanner with a double step: only even offsets are visible.
    Hopper,
    /// Orthogonal scanner, single step.
    Flutterer,
    /// Diagonal scanner, single step.
    Weaver,
    /// Scans all eight directions, single step.
    Crawler,
}

impl Kind {
    /// Returns this kind's movement capability descriptor.
    #[must_use]
    pub const fn capability(self) -> Capability {
        match self {
            Self::Hopper => Capability::new(ScanAxes::ORTHOGONAL, 2),
            Self::Flutterer => Capability::new(ScanAxes::ORTHOGONAL, 1),
            Self::Weaver => Capability::new(ScanAxes::DIAGONAL, 1),
            Self::Crawler => Capability::new(ScanAxes::ORTHOGONAL.union(ScanAxes::DIAGONAL), 1),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hopper => f.write_str("Hopper"),
            Self::Flutterer => f.write_str("Flutterer"),
            Self::Weaver => f.write_str("Weaver"),
            Self::Crawler => f.write_str("Crawler"),
        }
    }
}

/// A board occupant.
///
/// Entities are created once during loading and removed at most once: a
/// creature at the end of its own travel, a food point the instant a
/// traveling creature consumes it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entity {
    /// A static food marker with a consumable value.
    Food {
        /// The nonnegative amount a creature gains by consuming this point.
        value: u32,
    },
    /// A colored, kind-tagged creature that moves exactly once.
    Creature {
        /// The creature's faction color.
        color: Color,
        /// The creature's kind.
        kind: Kind,
    },
}

impl Entity {
    /// Creates a food point entity.
    #[must_use]
    pub const fn food(value: u32) -> Self {
        Self::Food { value }
    }

    /// Creates a creature entity.
    #[must_use]
    pub const fn creature(color: Color, kind: Kind) -> Self {
        Self::Creature { color, kind }
    }

    /// Returns the food value if this entity is a food point.
    #[must_use]
    pub const fn as_food(&self) -> Option<u32> {
        match self {
            Self::Food { value } => Some(*value),
            Self::Creature { .. } => None,
        }
    }

    /// Returns the color and kind if this entity is a creature.
    #[must_use]
    pub const fn as_creature(&self) -> Option<(Color, Kind)> {
        match self {
            Self::Creature { color, kind } => Some((*color, *kind)),
            Self::Food { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod color_tests {
        use super::*;

        #[test]
        fn display_matches_wire_format() {
            assert_eq!(format!("{}", Color::Red), "Red");
            assert_eq!(format!("{}", Color::Green), "Green");
            assert_eq!(format!("{}", Color::Blue), "Blue");
            assert_eq!(format!("{}", Color::Yellow), "Yellow");
        }
    }

    mod kind_tests {
        use super::*;

        #[test]
        fn display_matches_wire_format() {
            assert_eq!(format!("{}", Kind::Hopper), "Hopper");
            assert_eq!(format!("{}", Kind::Flutterer), "Flutterer");
            assert_eq!(format!("{}", Kind::Weaver), "Weaver");
            assert_eq!(format!("{}", Kind::Crawler), "Crawler");
        }

        #[test]
        fn capability_axes() {
            assert_eq!(Kind::Hopper.capability().axes(), ScanAxes::ORTHOGONAL);
            assert_eq!(Kind::Flutterer.capability().axes(), ScanAxes::ORTHOGONAL);
            assert_eq!(Kind::Weaver.capability().axes(), ScanAxes::DIAGONAL);
            assert_eq!(
                Kind::Crawler.capability().axes(),
                ScanAxes::ORTHOGONAL | ScanAxes::DIAGONAL
            );
        }
    }

    mod entity_tests {
        use super::*;

        #[test]
        fn accessors_are_variant_exclusive() {
            let food = Entity::food(7);
            assert_eq!(food.as_food(), Some(7));
            assert!(food.as_creature().is_none());

            let creature = Entity::creature(Color::Blue, Kind::Weaver);
            assert!(creature.as_food().is_none());
            assert_eq!(creature.as_creature(), Some((Color::Blue, Kind::Weaver)));
        }

        #[test]
        fn serialization_roundtrip() {
            let entity = Entity::creature(Color::Yellow, Kind::Hopper);
            let json = serde_json::to_string(&entity).unwrap();
            let back: Entity = serde_json::from_str(&json).unwrap();
            assert_eq!(entity, back);
        }
    }
}
