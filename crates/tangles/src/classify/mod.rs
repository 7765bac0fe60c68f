//! The tangle predicate.
//!
//! A connected polystick is the dual graph of a tangle iff its cycle space is
//! spanned by unit squares: it has at least one cycle and every cycle of a
//! minimum cycle basis has length 4. The basis size is then the number of
//! squares. The empty polystick (the circle) is accepted unconditionally.
//!
//! Rejections are ordinary outcomes during enumeration and come back as a
//! `Verdict` variant, not as errors.

mod cycles;

pub use cycles::{Cycle, LatticeGraph};

use crate::lattice::Polystick;

/// Classifier switches.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClassifyCfg {
    /// Accept acyclic polysticks as tangles with zero squares. Off by default:
    /// only the circle is exempt from having a cycle.
    pub admit_trees: bool,
}

/// A polystick that passed the predicate, with its square count.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tangle {
    polystick: Polystick,
    squares: usize,
}

impl Tangle {
    /// The circle: no edges, no squares, class 1.
    pub fn circle() -> Self {
        Self {
            polystick: Polystick::empty(),
            squares: 0,
        }
    }

    #[inline]
    pub fn polystick(&self) -> &Polystick {
        &self.polystick
    }

    /// Number of edges.
    #[inline]
    pub fn size(&self) -> usize {
        self.polystick.len()
    }

    #[inline]
    pub fn squares(&self) -> usize {
        self.squares
    }

    /// `size - 2 * squares + 1`; at least 1 for every tangle.
    #[inline]
    pub fn class(&self) -> usize {
        self.size() + 1 - 2 * self.squares
    }

    /// `4 * class`.
    #[inline]
    pub fn length(&self) -> usize {
        4 * self.class()
    }

    /// Canonical form of the same tangle.
    pub fn canonical(&self) -> Self {
        self.map(Polystick::canonical_form)
    }

    /// Quarter turn, canonicalized. Square count is invariant.
    pub fn rotated(&self) -> Self {
        self.map(Polystick::rotate)
    }

    /// Mirror image, canonicalized.
    pub fn reflected(&self) -> Self {
        self.map(Polystick::reflect)
    }

    fn map(&self, f: impl FnOnce(&Polystick) -> Polystick) -> Self {
        Self {
            polystick: f(&self.polystick),
            squares: self.squares,
        }
    }
}

/// Why a polystick is not a tangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    Disconnected { components: usize },
    /// No cycle at all (a non-empty tree).
    Acyclic,
    /// A minimum cycle basis contains a cycle longer than a unit square.
    LongCycle { length: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Tangle(Tangle),
    Rejected(Rejection),
}

impl Verdict {
    pub fn tangle(self) -> Option<Tangle> {
        match self {
            Verdict::Tangle(t) => Some(t),
            Verdict::Rejected(_) => None,
        }
    }

    #[inline]
    pub fn is_tangle(&self) -> bool {
        matches!(self, Verdict::Tangle(_))
    }
}

/// Decide whether `shape` is (the dual graph of) a tangle.
pub fn classify(shape: &Polystick, cfg: ClassifyCfg) -> Verdict {
    if shape.is_empty() {
        return Verdict::Tangle(Tangle::circle());
    }
    let graph = LatticeGraph::from_polystick(shape);
    let components = graph.components();
    if components != 1 {
        return Verdict::Rejected(Rejection::Disconnected { components });
    }
    let tangle = |squares| {
        Verdict::Tangle(Tangle {
            polystick: shape.clone(),
            squares,
        })
    };
    if graph.cyclomatic_number() == 0 {
        return if cfg.admit_trees {
            tangle(0)
        } else {
            Verdict::Rejected(Rejection::Acyclic)
        };
    }
    let basis = graph.minimum_cycle_basis();
    match basis.iter().map(Cycle::len).find(|&len| len != 4) {
        Some(length) => Verdict::Rejected(Rejection::LongCycle { length }),
        None => tangle(basis.len()),
    }
}
