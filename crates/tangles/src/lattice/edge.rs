//! Lattice points and unit edges.

use std::fmt;

use nalgebra::{Matrix2, Vector2};

use crate::TangleError;

/// Integer lattice point, ordered lexicographically by `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Unchecked translation. Shapes are built near the origin, so
    /// coordinates stay far from `i32` bounds; overflow panics under
    /// `overflow-checks`.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Manhattan distance exactly one, for any pair of coordinates.
    #[inline]
    pub fn is_adjacent(self, other: Point) -> bool {
        u64::from(self.x.abs_diff(other.x)) + u64::from(self.y.abs_diff(other.y)) == 1
    }

    /// Image under a linear lattice map (rotation/reflection matrix).
    #[inline]
    pub fn transform(self, m: &Matrix2<i32>) -> Self {
        Self::from(m * Vector2::from(self))
    }
}

impl From<Vector2<i32>> for Point {
    fn from(v: Vector2<i32>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for Vector2<i32> {
    fn from(p: Point) -> Self {
        Vector2::new(p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Unit edge between two adjacent lattice points.
///
/// Stored with `tail < head`, so `head - tail` is `(1, 0)` or `(0, 1)`:
/// the tail is the left end of a horizontal edge and the bottom end of a
/// vertical one. Field order makes the derived `Ord` sort by tail first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    tail: Point,
    head: Point,
}

impl Edge {
    /// Edge joining `a` and `b` in either order.
    pub fn new(a: Point, b: Point) -> Result<Self, TangleError> {
        if !a.is_adjacent(b) {
            return Err(TangleError::NonAdjacent { a, b });
        }
        Ok(Self::between(a, b))
    }

    /// Horizontal edge `(x, y)–(x+1, y)`.
    #[inline]
    pub const fn horizontal(x: i32, y: i32) -> Self {
        Self {
            tail: Point::new(x, y),
            head: Point::new(x + 1, y),
        }
    }

    /// Vertical edge `(x, y)–(x, y+1)`.
    #[inline]
    pub const fn vertical(x: i32, y: i32) -> Self {
        Self {
            tail: Point::new(x, y),
            head: Point::new(x, y + 1),
        }
    }

    /// Caller guarantees adjacency (images of valid edges under lattice maps).
    #[inline]
    pub(crate) fn between(a: Point, b: Point) -> Self {
        debug_assert!(a.is_adjacent(b));
        if a < b {
            Self { tail: a, head: b }
        } else {
            Self { tail: b, head: a }
        }
    }

    #[inline]
    pub fn tail(&self) -> Point {
        self.tail
    }

    #[inline]
    pub fn head(&self) -> Point {
        self.head
    }

    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.head.y == self.tail.y
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.head.x == self.tail.x
    }

    /// The six edges sharing exactly one endpoint with `self`.
    ///
    /// Order matters to the enumerator only through visitation order:
    /// tail side first, then head side.
    pub fn neighbors(&self) -> [Edge; 6] {
        let (t, h) = (self.tail, self.head);
        if self.is_horizontal() {
            [
                Self::between(t, t.offset(0, 1)),
                Self::between(t, t.offset(-1, 0)),
                Self::between(t, t.offset(0, -1)),
                Self::between(h, h.offset(0, 1)),
                Self::between(h, h.offset(1, 0)),
                Self::between(h, h.offset(0, -1)),
            ]
        } else {
            [
                Self::between(t, t.offset(1, 0)),
                Self::between(t, t.offset(-1, 0)),
                Self::between(t, t.offset(0, -1)),
                Self::between(h, h.offset(0, 1)),
                Self::between(h, h.offset(1, 0)),
                Self::between(h, h.offset(-1, 0)),
            ]
        }
    }

    /// True iff `other` is one of `self.neighbors()`.
    #[inline]
    pub fn touches(&self, other: &Edge) -> bool {
        self != other
            && (self.tail == other.tail
                || self.tail == other.head
                || self.head == other.tail
                || self.head == other.head)
    }

    #[inline]
    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        Self {
            tail: self.tail.offset(dx, dy),
            head: self.head.offset(dx, dy),
        }
    }

    #[inline]
    pub fn transform(&self, m: &Matrix2<i32>) -> Self {
        Self::between(self.tail.transform(m), self.head.transform(m))
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.tail, self.head)
    }
}
