use std::fmt;

use crate::lattice::Point;

/// Constraint violations. Ordinary outcomes (a candidate that is not a tangle,
/// an orbit image already consumed) are never reported through this type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TangleError {
    NonAdjacent { a: Point, b: Point },
    NegativeSize { requested: i64 },
}

impl fmt::Display for TangleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonAdjacent { a, b } => {
                write!(f, "points {a} and {b} are not unit-adjacent lattice points")
            }
            Self::NegativeSize { requested } => {
                write!(f, "maximum size must be non-negative, got {requested}")
            }
        }
    }
}

impl std::error::Error for TangleError {}
