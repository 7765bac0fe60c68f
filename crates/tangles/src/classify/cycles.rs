//! Lattice graphs and minimum cycle bases over GF(2).
//!
//! Candidates follow Horton: for every root `v` and every edge `(x, y)` off the
//! BFS tree of `v`, the closed walk `P(v,x) + (x,y) + P(y,v)`. Sorted by length
//! and fed through greedy Gaussian elimination, they yield a minimum-weight
//! basis of the cycle space. Graphs here have at most a few dozen edges, so
//! edge sets are plain word bitsets.

use std::collections::{HashMap, VecDeque};

use crate::lattice::{Edge, Point, Polystick};

/// Undirected simple graph on the endpoints of a polystick.
#[derive(Clone, Debug)]
pub struct LatticeGraph {
    nodes: Vec<Point>,
    edges: Vec<Edge>,
    /// `(endpoint indices)` per edge, aligned with `edges`.
    ends: Vec<(usize, usize)>,
    /// `(neighbor, edge index)` per node.
    adj: Vec<Vec<(usize, usize)>>,
}

/// One cycle, as its edge set in sorted order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cycle {
    edges: Vec<Edge>,
}

impl Cycle {
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of edges (= number of vertices, for a simple cycle).
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Every vertex touched has degree exactly two within the cycle.
    pub fn is_closed(&self) -> bool {
        let mut degree: HashMap<Point, usize> = HashMap::new();
        for e in &self.edges {
            *degree.entry(e.tail()).or_default() += 1;
            *degree.entry(e.head()).or_default() += 1;
        }
        !self.edges.is_empty() && degree.values().all(|&d| d == 2)
    }
}

#[derive(Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Bits(Vec<u64>);

impl Bits {
    fn zeros(n: usize) -> Self {
        Self(vec![0; n.div_ceil(64)])
    }
    fn flip(&mut self, i: usize) {
        self.0[i / 64] ^= 1 << (i % 64);
    }
    fn xor(&mut self, other: &Bits) {
        for (a, b) in self.0.iter_mut().zip(&other.0) {
            *a ^= b;
        }
    }
    fn count(&self) -> usize {
        self.0.iter().map(|w| w.count_ones() as usize).sum()
    }
    fn highest(&self) -> Option<usize> {
        self.0
            .iter()
            .enumerate()
            .rev()
            .find(|(_, w)| **w != 0)
            .map(|(k, w)| k * 64 + 63 - w.leading_zeros() as usize)
    }
    fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().enumerate().flat_map(|(k, &w)| {
            (0..64).filter(move |b| (w >> b) & 1 == 1).map(move |b| k * 64 + b)
        })
    }
}

impl LatticeGraph {
    pub fn from_polystick(shape: &Polystick) -> Self {
        let mut index: HashMap<Point, usize> = HashMap::new();
        let mut nodes = Vec::new();
        let mut id = |p: Point, nodes: &mut Vec<Point>| {
            *index.entry(p).or_insert_with(|| {
                nodes.push(p);
                nodes.len() - 1
            })
        };
        let mut ends = Vec::with_capacity(shape.len());
        for e in shape.edges() {
            let a = id(e.tail(), &mut nodes);
            let b = id(e.head(), &mut nodes);
            ends.push((a, b));
        }
        let mut adj = vec![Vec::new(); nodes.len()];
        for (k, &(a, b)) in ends.iter().enumerate() {
            adj[a].push((b, k));
            adj[b].push((a, k));
        }
        Self {
            nodes,
            edges: shape.edges().to_vec(),
            ends,
            adj,
        }
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// BFS from `root`: per node, the tree edge used to reach it (if reached).
    fn bfs_tree(&self, root: usize) -> (Vec<bool>, Vec<Option<usize>>, Vec<usize>) {
        let n = self.nodes.len();
        let mut seen = vec![false; n];
        let mut via = vec![None; n];
        let mut parent = vec![root; n];
        let mut queue = VecDeque::from([root]);
        seen[root] = true;
        while let Some(u) = queue.pop_front() {
            for &(w, k) in &self.adj[u] {
                if !seen[w] {
                    seen[w] = true;
                    via[w] = Some(k);
                    parent[w] = u;
                    queue.push_back(w);
                }
            }
        }
        (seen, via, parent)
    }

    pub fn components(&self) -> usize {
        let mut seen = vec![false; self.nodes.len()];
        let mut count = 0;
        for start in 0..self.nodes.len() {
            if seen[start] {
                continue;
            }
            count += 1;
            let (reached, _, _) = self.bfs_tree(start);
            for (s, r) in seen.iter_mut().zip(reached) {
                *s |= r;
            }
        }
        count
    }

    /// Dimension of the cycle space: `E - V + C`.
    pub fn cyclomatic_number(&self) -> usize {
        self.edge_count() + self.components() - self.node_count()
    }

    /// A minimum cycle basis, shortest cycles first. Empty for forests.
    pub fn minimum_cycle_basis(&self) -> Vec<Cycle> {
        let rank = self.cyclomatic_number();
        if rank == 0 {
            return Vec::new();
        }
        let m = self.edges.len();
        let mut candidates: Vec<Bits> = Vec::new();
        for root in 0..self.nodes.len() {
            let (seen, via, parent) = self.bfs_tree(root);
            let path = |mut v: usize| {
                let mut bits = Bits::zeros(m);
                while let Some(k) = via[v] {
                    bits.flip(k);
                    v = parent[v];
                }
                bits
            };
            for (k, &(a, b)) in self.ends.iter().enumerate() {
                if !seen[a] || via[a] == Some(k) || via[b] == Some(k) {
                    continue;
                }
                let mut c = path(a);
                c.xor(&path(b));
                c.flip(k);
                candidates.push(c);
            }
        }
        candidates.sort_by(|a, b| a.count().cmp(&b.count()).then_with(|| a.cmp(b)));
        candidates.dedup();

        let mut pivots: Vec<Option<Bits>> = vec![None; m];
        let mut basis = Vec::with_capacity(rank);
        for cand in candidates {
            let mut r = cand.clone();
            let independent = loop {
                let Some(top) = r.highest() else {
                    break false;
                };
                match &pivots[top] {
                    Some(row) => r.xor(row),
                    None => {
                        pivots[top] = Some(r);
                        break true;
                    }
                }
            };
            if independent {
                basis.push(Cycle {
                    edges: cand.ones().map(|k| self.edges[k]).collect(),
                });
                if basis.len() == rank {
                    break;
                }
            }
        }
        basis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_at(x: i32, y: i32) -> [Edge; 4] {
        [
            Edge::horizontal(x, y),
            Edge::horizontal(x, y + 1),
            Edge::vertical(x, y),
            Edge::vertical(x + 1, y),
        ]
    }

    #[test]
    fn path_is_a_tree() {
        let p = Polystick::from_edges([Edge::horizontal(0, 0), Edge::horizontal(1, 0)]);
        let g = LatticeGraph::from_polystick(&p);
        assert_eq!(g.components(), 1);
        assert_eq!(g.cyclomatic_number(), 0);
        assert!(g.minimum_cycle_basis().is_empty());
    }

    #[test]
    fn two_by_two_grid_basis_is_four_squares() {
        let p: Polystick = [square_at(0, 0), square_at(1, 0), square_at(0, 1), square_at(1, 1)]
            .into_iter()
            .flatten()
            .collect();
        assert_eq!(p.len(), 12);
        let g = LatticeGraph::from_polystick(&p);
        let basis = g.minimum_cycle_basis();
        assert_eq!(basis.len(), 4);
        assert!(basis.iter().all(|c| c.len() == 4 && c.is_closed()));
    }

    #[test]
    fn frame_with_domino_hole_needs_one_hexagon() {
        // 4x3 block of squares minus the two middle ones: the hole is 2x1.
        let mut edges = Vec::new();
        for (x, y) in [(0, 0), (1, 0), (2, 0), (3, 0), (0, 1), (3, 1), (0, 2), (1, 2), (2, 2), (3, 2)]
        {
            edges.extend(square_at(x, y));
        }
        let p = Polystick::from_edges(edges);
        let g = LatticeGraph::from_polystick(&p);
        let basis = g.minimum_cycle_basis();
        assert_eq!(basis.len(), g.cyclomatic_number());
        assert_eq!(basis.len(), 11);
        let lengths: Vec<usize> = basis.iter().map(Cycle::len).collect();
        assert_eq!(lengths.iter().filter(|&&l| l == 4).count(), 10);
        assert_eq!(*lengths.last().unwrap(), 6);
    }

    #[test]
    fn disconnected_edges_count_components() {
        let p = Polystick::from_edges([Edge::horizontal(0, 0), Edge::horizontal(5, 5)]);
        let g = LatticeGraph::from_polystick(&p);
        assert_eq!(g.components(), 2);
        assert_eq!(g.cyclomatic_number(), 0);
    }
}
