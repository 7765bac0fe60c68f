//! Polysticks: finite sets of lattice edges.

use nalgebra::Matrix2;

use super::edge::Edge;
use crate::symmetry::Symmetry;

/// A set of distinct lattice edges, kept sorted so structural `Eq`/`Hash`
/// coincide with set equality.
///
/// Shape equality means equality of canonical forms; two raw polysticks that
/// differ by a translation compare unequal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Polystick {
    edges: Vec<Edge>,
}

impl Polystick {
    /// The empty polystick (the circle).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Collects edges, collapsing duplicates.
    pub fn from_edges<I: IntoIterator<Item = Edge>>(edges: I) -> Self {
        let mut edges: Vec<Edge> = edges.into_iter().collect();
        edges.sort_unstable();
        edges.dedup();
        Self { edges }
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    #[inline]
    pub fn contains(&self, edge: &Edge) -> bool {
        self.edges.binary_search(edge).is_ok()
    }

    /// `self ∪ {edge}`.
    pub fn with_edge(&self, edge: Edge) -> Self {
        let mut edges = self.edges.clone();
        if let Err(pos) = edges.binary_search(&edge) {
            edges.insert(pos, edge);
        }
        Self { edges }
    }

    /// `self ∪ other`.
    pub fn union(&self, other: &Polystick) -> Self {
        let mut edges = Vec::with_capacity(self.len() + other.len());
        let (mut i, mut j) = (0, 0);
        while i < self.edges.len() && j < other.edges.len() {
            let (a, b) = (self.edges[i], other.edges[j]);
            match a.cmp(&b) {
                std::cmp::Ordering::Less => {
                    edges.push(a);
                    i += 1;
                }
                std::cmp::Ordering::Greater => {
                    edges.push(b);
                    j += 1;
                }
                std::cmp::Ordering::Equal => {
                    edges.push(a);
                    i += 1;
                    j += 1;
                }
            }
        }
        edges.extend_from_slice(&self.edges[i..]);
        edges.extend_from_slice(&other.edges[j..]);
        Self { edges }
    }

    /// Translation sending the lowest-leftmost edge to `(0,0)–(0,1)` when it is
    /// vertical, or to `(-1,0)–(0,0)` when only a horizontal edge sits there.
    fn anchor_offset(&self) -> Option<(i32, i32)> {
        let y0 = self.edges.iter().map(|e| e.tail().y).min()?;
        let bottom = self.edges.iter().filter(|e| e.tail().y == y0);
        let x0 = bottom.clone().map(|e| e.tail().x).min()?;
        let vertical_corner = bottom
            .filter(|e| e.tail().x == x0)
            .any(|e| e.is_vertical());
        if vertical_corner {
            Some((-x0, -y0))
        } else {
            Some((-1 - x0, -y0))
        }
    }

    /// Canonical translate of this shape. Idempotent; the empty set is fixed.
    pub fn canonical_form(&self) -> Self {
        match self.anchor_offset() {
            Some((0, 0)) | None => self.clone(),
            Some((dx, dy)) => self.translate(dx, dy),
        }
    }

    #[inline]
    pub fn is_canonical(&self) -> bool {
        matches!(self.anchor_offset(), Some((0, 0)) | None)
    }

    /// Translation preserves the lexicographic order, so no re-sort.
    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        Self {
            edges: self.edges.iter().map(|e| e.translate(dx, dy)).collect(),
        }
    }

    /// Image under a linear lattice map, in canonical form.
    pub fn transform(&self, m: &Matrix2<i32>) -> Self {
        Self::from_edges(self.edges.iter().map(|e| e.transform(m))).canonical_form()
    }

    /// Quarter turn `(x, y) ↦ (-y, x)`, canonicalized.
    pub fn rotate(&self) -> Self {
        self.transform(&Symmetry::ROTATE.matrix())
    }

    /// Mirror `(x, y) ↦ (x, -y)`, canonicalized.
    pub fn reflect(&self) -> Self {
        self.transform(&Symmetry::REFLECT.matrix())
    }

    /// Whether both are the same shape up to translation.
    pub fn same_shape(&self, other: &Polystick) -> bool {
        self.len() == other.len() && self.canonical_form() == other.canonical_form()
    }

    /// Bounding box `(min, max)` over all endpoints.
    pub fn bounds(&self) -> Option<((i32, i32), (i32, i32))> {
        let first = self.edges.first()?;
        let mut lo = (first.tail().x, first.tail().y);
        let mut hi = lo;
        for e in &self.edges {
            lo = (lo.0.min(e.tail().x), lo.1.min(e.tail().y));
            hi = (hi.0.max(e.head().x), hi.1.max(e.head().y));
        }
        Some((lo, hi))
    }
}

impl FromIterator<Edge> for Polystick {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}
