//! The dihedral group of the square (order 8) acting on the lattice.
//!
//! Each element is `R^k ∘ F^r` with `R: (x, y) ↦ (-y, x)` the quarter turn
//! about the origin and `F: (x, y) ↦ (x, -y)` the mirror in the x-axis.
//! Elements act on shapes through their integer matrices; translations are
//! absorbed by canonicalization afterwards.

use nalgebra::Matrix2;

use crate::lattice::Polystick;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Symmetry {
    quarter_turns: u8,
    reflected: bool,
}

impl Symmetry {
    pub const IDENTITY: Self = Self::new(0, false);
    pub const ROTATE: Self = Self::new(1, false);
    pub const REFLECT: Self = Self::new(0, true);

    pub const fn new(quarter_turns: u8, reflected: bool) -> Self {
        Self {
            quarter_turns: quarter_turns % 4,
            reflected,
        }
    }

    /// The four rotations (the cyclic subgroup C4).
    pub fn rotations() -> impl Iterator<Item = Symmetry> {
        (0..4).map(|k| Self::new(k, false))
    }

    /// All eight elements, rotations first.
    pub fn all() -> impl Iterator<Item = Symmetry> {
        Self::rotations().chain((0..4).map(|k| Self::new(k, true)))
    }

    pub fn matrix(&self) -> Matrix2<i32> {
        let rot = match self.quarter_turns {
            0 => Matrix2::new(1, 0, 0, 1),
            1 => Matrix2::new(0, -1, 1, 0),
            2 => Matrix2::new(-1, 0, 0, -1),
            _ => Matrix2::new(0, 1, -1, 0),
        };
        if self.reflected {
            rot * Matrix2::new(1, 0, 0, -1)
        } else {
            rot
        }
    }

    /// `self ∘ other` (apply `other` first).
    pub fn compose(&self, other: &Symmetry) -> Symmetry {
        // F R^k = R^{-k} F
        let k = if self.reflected {
            self.quarter_turns + 4 - other.quarter_turns
        } else {
            self.quarter_turns + other.quarter_turns
        };
        Self::new(k, self.reflected ^ other.reflected)
    }

    /// Canonical image of `shape`.
    pub fn apply(&self, shape: &Polystick) -> Polystick {
        if *self == Self::IDENTITY {
            shape.canonical_form()
        } else {
            shape.transform(&self.matrix())
        }
    }
}

/// Distinct canonical images of `shape` under `group`.
pub fn orbit<I: IntoIterator<Item = Symmetry>>(shape: &Polystick, group: I) -> Vec<Polystick> {
    let mut images: Vec<Polystick> = group.into_iter().map(|g| g.apply(shape)).collect();
    images.sort_unstable();
    images.dedup();
    images
}

/// Symmetries fixing `shape` (its stabilizer in `group`).
pub fn stabilizer<I: IntoIterator<Item = Symmetry>>(shape: &Polystick, group: I) -> Vec<Symmetry> {
    let base = shape.canonical_form();
    group.into_iter().filter(|g| g.apply(shape) == base).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::Edge;

    #[test]
    fn matrices_match_group_law() {
        for a in Symmetry::all() {
            for b in Symmetry::all() {
                assert_eq!(a.compose(&b).matrix(), a.matrix() * b.matrix(), "{a:?} ∘ {b:?}");
            }
        }
    }

    #[test]
    fn group_has_eight_distinct_elements() {
        let mats: Vec<_> = Symmetry::all().map(|g| g.matrix()).collect();
        for (i, a) in mats.iter().enumerate() {
            for b in &mats[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn square_is_fully_symmetric_and_l_tromino_is_not() {
        let square = Polystick::from_edges([
            Edge::horizontal(0, 0),
            Edge::horizontal(0, 1),
            Edge::vertical(0, 0),
            Edge::vertical(1, 0),
        ]);
        assert_eq!(orbit(&square, Symmetry::all()).len(), 1);
        assert_eq!(stabilizer(&square, Symmetry::all()).len(), 8);

        let ell = Polystick::from_edges([Edge::vertical(0, 0), Edge::horizontal(0, 0)]);
        assert_eq!(orbit(&ell, Symmetry::rotations()).len(), 4);
        // the diagonal mirror fixes an L
        assert_eq!(orbit(&ell, Symmetry::all()).len(), 4);
        assert_eq!(stabilizer(&ell, Symmetry::all()).len(), 2);
    }
}
