//! Orbit reduction by peeling.
//!
//! Walk a bucket from the back; each unconsumed tangle yields one
//! representative, and the representative's four rotations are marked
//! consumed wherever they occur in the bucket. A rotation that is absent (or
//! already consumed) is skipped. Lookups go through a hash index over the
//! canonical polysticks, so the bucket itself is never shrunk.

use std::collections::HashMap;

use crate::classify::Tangle;
use crate::lattice::Polystick;

/// Rotation-orbit representatives of a bucket of distinct canonical tangles.
pub fn one_sided(fixed: &[Tangle]) -> Vec<Tangle> {
    peel(fixed, false)
}

/// Dihedral-orbit representatives of a one-sided bucket. Each representative
/// is the mirror image of the one-sided tangle it was peeled from.
pub fn free(one_sided: &[Tangle]) -> Vec<Tangle> {
    peel(one_sided, true)
}

fn peel(bucket: &[Tangle], mirror: bool) -> Vec<Tangle> {
    let index: HashMap<&Polystick, usize> = bucket
        .iter()
        .enumerate()
        .map(|(i, t)| (t.polystick(), i))
        .collect();
    let mut consumed = vec![false; bucket.len()];
    let mut reps = Vec::new();
    for i in (0..bucket.len()).rev() {
        if consumed[i] {
            continue;
        }
        consumed[i] = true;
        let rep = if mirror {
            bucket[i].reflected()
        } else {
            bucket[i].clone()
        };
        let mut image = rep.polystick().clone();
        for _ in 0..4 {
            image = image.rotate();
            if let Some(&j) = index.get(&image) {
                consumed[j] = true;
            }
        }
        reps.push(rep);
    }
    reps
}
