//! Redelmeier/Malkis growth of polysticks with a fixed lower border.
//!
//! Every connected edge set with `1..=max_size` edges is produced exactly once,
//! already in canonical form: the border forbids edges whose tail lies below
//! row 0 or left of the origin on row 0, so the seed stays the lowest-leftmost
//! edge. A shape whose corner edge is horizontal grows from `(-1,0)–(0,0)`, one
//! whose corner edge is vertical grows from `(0,0)–(0,1)`.
//!
//! The search keeps an explicit stack of frames `(parent, untried)`; popping
//! from the back of `untried` reproduces the recursive formulation's order.
//! An edge leaves `untried` for good once tried, so later siblings never
//! regenerate shapes containing it.

use tracing::debug;

use crate::lattice::{Edge, Polystick};

/// Seed for shapes whose lowest-leftmost edge is horizontal.
pub const HORIZONTAL_SEED: Edge = Edge::horizontal(-1, 0);
/// Seed for shapes whose lowest-leftmost edge is vertical.
pub const VERTICAL_SEED: Edge = Edge::vertical(0, 0);

struct Frame {
    parent: Polystick,
    untried: Vec<Edge>,
}

/// An edge may join `parent` iff it stays inside the border, is not already
/// used, and was not reachable from `parent` before (then it was offered
/// earlier and either taken or discarded on this branch).
fn is_new(candidate: &Edge, parent: &Polystick) -> bool {
    let tail = candidate.tail();
    if tail.y < 0 || (tail.y == 0 && tail.x < 0) {
        return false;
    }
    if parent.contains(candidate) {
        return false;
    }
    !parent.edges().iter().any(|e| e.touches(candidate))
}

/// Grow from `seed`, calling `visit` once per shape in visitation order.
pub fn grow<F: FnMut(&Polystick)>(seed: Edge, max_size: usize, mut visit: F) {
    if max_size == 0 {
        return;
    }
    let mut stack = vec![Frame {
        parent: Polystick::empty(),
        untried: vec![seed],
    }];
    loop {
        let Some(frame) = stack.last_mut() else {
            break;
        };
        let Some(edge) = frame.untried.pop() else {
            stack.pop();
            continue;
        };
        let child = frame.parent.with_edge(edge);
        visit(&child);
        if child.len() < max_size {
            let mut untried = frame.untried.clone();
            untried.extend(
                edge.neighbors()
                    .into_iter()
                    .filter(|n| is_new(n, &frame.parent)),
            );
            stack.push(Frame {
                parent: child,
                untried,
            });
        }
    }
}

/// All shapes grown from one seed.
pub fn redelmeier(seed: Edge, max_size: usize) -> Vec<Polystick> {
    let mut out = Vec::new();
    grow(seed, max_size, |p| out.push(p.clone()));
    out
}

/// Every connected polystick with `1..=max_size` edges, once each, canonical.
pub fn enumerate_polysticks(max_size: usize) -> Vec<Polystick> {
    let mut out = redelmeier(HORIZONTAL_SEED, max_size);
    let horizontal = out.len();
    out.extend(redelmeier(VERTICAL_SEED, max_size));
    debug!(
        max_size,
        horizontal,
        vertical = out.len() - horizontal,
        "enumerated polysticks"
    );
    out
}

/// Fixed polystick counts indexed by edge count (`[0]` is always 0).
pub fn count_polysticks(max_size: usize) -> Vec<u64> {
    let mut counts = vec![0u64; max_size + 1];
    for seed in [HORIZONTAL_SEED, VERTICAL_SEED] {
        grow(seed, max_size, |p| counts[p.len()] += 1);
    }
    counts
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::classify::LatticeGraph;

    /// Level-by-level growth with canonical dedup; slow but obviously right.
    fn brute_force(max_size: usize) -> HashSet<Polystick> {
        let mut level: HashSet<Polystick> = [HORIZONTAL_SEED, VERTICAL_SEED]
            .into_iter()
            .map(|e| Polystick::from_edges([e]))
            .collect();
        let mut all = level.clone();
        for _ in 1..max_size {
            let mut next = HashSet::new();
            for shape in &level {
                for e in shape.edges() {
                    for n in e.neighbors() {
                        if !shape.contains(&n) {
                            next.insert(shape.with_edge(n).canonical_form());
                        }
                    }
                }
            }
            all.extend(next.iter().cloned());
            level = next;
        }
        all
    }

    #[test]
    fn fixed_polystick_counts() {
        assert_eq!(count_polysticks(6), vec![0, 2, 6, 22, 88, 372, 1628]);
        assert_eq!(count_polysticks(0), vec![0]);
    }

    #[test]
    fn matches_brute_force_without_duplicates() {
        for max_size in 1..=6 {
            let grown = enumerate_polysticks(max_size);
            let unique: HashSet<Polystick> = grown.iter().cloned().collect();
            assert_eq!(unique.len(), grown.len(), "duplicate at max_size {max_size}");
            assert_eq!(unique, brute_force(max_size), "mismatch at max_size {max_size}");
        }
    }

    #[test]
    fn shapes_are_canonical_and_connected() {
        for p in enumerate_polysticks(5) {
            assert!(p.is_canonical(), "{p}");
            assert_eq!(LatticeGraph::from_polystick(&p).components(), 1);
        }
    }

    #[test]
    fn deterministic_visitation() {
        assert_eq!(enumerate_polysticks(5), enumerate_polysticks(5));
    }

    #[test]
    fn seeds_partition_by_corner_orientation() {
        for p in redelmeier(HORIZONTAL_SEED, 4) {
            assert!(p.contains(&HORIZONTAL_SEED));
        }
        for p in redelmeier(VERTICAL_SEED, 4) {
            assert!(p.contains(&VERTICAL_SEED) && !p.contains(&HORIZONTAL_SEED));
        }
    }
}
