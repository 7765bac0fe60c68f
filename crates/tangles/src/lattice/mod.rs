//! Square-lattice primitives: points, unit edges, and polysticks.
//!
//! A polystick is any finite edge set; the enumerator only produces connected
//! ones. Shape comparisons go through `Polystick::canonical_form`, which fixes
//! the translation by anchoring the lowest-leftmost edge.

mod edge;
mod polystick;
mod render;

pub use edge::{Edge, Point};
pub use polystick::Polystick;
