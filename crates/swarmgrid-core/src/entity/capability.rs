//! Per-kind movement capabilities.
//!
//! Every creature kind shares the same scan and travel algorithms; what
//! differs is a small capability descriptor: which scan axes the kind
//! supports, how far one step carries it, and the fixed priority order used
//! to break ties between equally valuable directions. Dispatching the shared
//! algorithm on this descriptor replaces a per-kind method hierarchy.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::grid::{Direction, DIAGONALS, ORTHOGONALS};

bitflags! {
    /// The scan axes a creature kind supports.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ScanAxes: u8 {
        /// North, East, South, West.
        const ORTHOGONAL = 1 << 0;
        /// North-East, North-West, South-East, South-West.
        const DIAGONAL = 1 << 1;
    }
}

/// Movement capability descriptor for a creature kind.
///
/// # Priority order
///
/// The tie-break priority order is fully determined by the supported axes:
/// orthogonals first (N, E, S, W), then diagonals (NE, NW, SE, SW). Each
/// kind's published priority list is exactly the subsequence its axes allow.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capability {
    axes: ScanAxes,
    step: i32,
}

impl Capability {
    /// Creates a capability descriptor.
    #[must_use]
    pub const fn new(axes: ScanAxes, step: i32) -> Self {
        Self { axes, step }
    }

    /// Returns the supported scan axes.
    #[must_use]
    pub const fn axes(self) -> ScanAxes {
        self.axes
    }

    /// Returns the step size of one move (2 for Hopper, 1 otherwise).
    #[must_use]
    pub const fn step(self) -> i32 {
        self.step
    }

    /// Returns the supported directions in tie-break priority order.
    pub fn priority(self) -> impl Iterator<Item = Direction> {
        let orthogonal = self.axes.contains(ScanAxes::ORTHOGONAL);
        let diagonal = self.axes.contains(ScanAxes::DIAGONAL);
        ORTHOGONALS
            .into_iter()
            .filter(move |_| orthogonal)
            .chain(DIAGONALS.into_iter().filter(move |_| diagonal))
    }
}
