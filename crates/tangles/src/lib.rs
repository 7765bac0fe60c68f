//! Enumeration of planar tangles.
//!
//! A tangle is drawn here through its dual graph: a connected set of unit edges
//! on the square lattice (a polystick) whose cycle space is spanned by unit
//! squares alone. The crate grows every polystick up to a size bound, keeps
//! those that qualify, and counts them up to translation (`fixed`), rotation
//! (`one-sided`) and the full dihedral group (`free`).
//!
//! Layout
//! - `lattice`: points, unit edges, polysticks (canonical form, transforms, rendering).
//! - `symmetry`: the dihedral group of the square as integer matrices.
//! - `enumerate`: Redelmeier growth with a fixed lower border.
//! - `classify`: minimum cycle basis and the tangle predicate.
//! - `census`: `generate_tangles`, tables, and orbit reduction.
//! - `sample`: seeded random polysticks for tests and benches.

pub mod census;
pub mod classify;
pub mod enumerate;
mod error;
pub mod lattice;
pub mod sample;
pub mod symmetry;

pub use census::{census, generate_tangles, Census, CensusCfg, Kind, TangleTable};
pub use classify::{classify, ClassifyCfg, Rejection, Tangle, Verdict};
pub use error::TangleError;
pub use lattice::{Edge, Point, Polystick};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::census::{census, generate_tangles, Census, CensusCfg, Kind, TangleTable};
    pub use crate::classify::{classify, ClassifyCfg, Tangle, Verdict};
    pub use crate::lattice::{Edge, Point, Polystick};
    pub use crate::symmetry::Symmetry;
    pub use crate::TangleError;
}
