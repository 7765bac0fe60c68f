//! Random connected polysticks (seeded growth + replay tokens).
//!
//! Purpose
//! - Feed property tests and benches with shapes outside the tiny sizes that
//!   exhaustive enumeration reaches quickly.
//!
//! Model
//! - Start from the unit edge `(0,0)–(1,0)` and repeatedly add a uniformly
//!   chosen edge touching the current shape. With probability `closure_bias`
//!   the choice is restricted to edges completing a unit square, which makes
//!   tangles common instead of rare.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::classify::{classify, ClassifyCfg, Tangle, Verdict};
use crate::lattice::{Edge, Polystick};

/// Edge count distribution.
#[derive(Clone, Copy, Debug)]
pub enum EdgeCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl EdgeCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            EdgeCount::Fixed(n) => n.max(1),
            EdgeCount::Uniform { min, max } => {
                let lo = min.max(1);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Growth sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct GrowthCfg {
    pub edge_count: EdgeCount,
    /// Probability of preferring square-closing edges at each step. Clamped to [0, 1].
    pub closure_bias: f64,
}

impl Default for GrowthCfg {
    fn default() -> Self {
        Self {
            edge_count: EdgeCount::Uniform { min: 1, max: 16 },
            closure_bias: 0.5,
        }
    }
}

/// Replay token: `(seed, index)` identifies one draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }

    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

/// The two unit squares having `e` as a side, each as its other three sides.
fn flanking_squares(e: &Edge) -> [[Edge; 3]; 2] {
    let t = e.tail();
    if e.is_horizontal() {
        [
            [
                Edge::horizontal(t.x, t.y + 1),
                Edge::vertical(t.x, t.y),
                Edge::vertical(t.x + 1, t.y),
            ],
            [
                Edge::horizontal(t.x, t.y - 1),
                Edge::vertical(t.x, t.y - 1),
                Edge::vertical(t.x + 1, t.y - 1),
            ],
        ]
    } else {
        [
            [
                Edge::vertical(t.x + 1, t.y),
                Edge::horizontal(t.x, t.y),
                Edge::horizontal(t.x, t.y + 1),
            ],
            [
                Edge::vertical(t.x - 1, t.y),
                Edge::horizontal(t.x - 1, t.y),
                Edge::horizontal(t.x - 1, t.y + 1),
            ],
        ]
    }
}

fn closes_square(shape: &Polystick, e: &Edge) -> bool {
    flanking_squares(e)
        .iter()
        .any(|sides| sides.iter().all(|s| shape.contains(s)))
}

/// Draw one connected polystick. Returned in canonical form.
pub fn draw_polystick(cfg: GrowthCfg, tok: ReplayToken) -> Polystick {
    let mut rng = tok.to_std_rng();
    let target = cfg.edge_count.sample(&mut rng);
    let bias = cfg.closure_bias.clamp(0.0, 1.0);
    let mut shape = Polystick::from_edges([Edge::horizontal(0, 0)]);
    while shape.len() < target {
        let mut frontier: Vec<Edge> = shape
            .edges()
            .iter()
            .flat_map(|e| e.neighbors())
            .filter(|n| !shape.contains(n))
            .collect();
        frontier.sort_unstable();
        frontier.dedup();
        let closing: Vec<Edge> = frontier
            .iter()
            .copied()
            .filter(|e| closes_square(&shape, e))
            .collect();
        let pool = if !closing.is_empty() && rng.gen_bool(bias) {
            &closing
        } else {
            &frontier
        };
        let pick = pool[rng.gen_range(0..pool.len())];
        shape = shape.with_edge(pick);
    }
    shape.canonical_form()
}

/// Draw polysticks until one classifies as a tangle, advancing the token's
/// index per attempt. Returns the tangle and the token that produced it.
pub fn draw_tangle(
    cfg: GrowthCfg,
    tok: ReplayToken,
    max_attempts: usize,
) -> Option<(Tangle, ReplayToken)> {
    let classify_cfg = ClassifyCfg::default();
    let mut tok = tok;
    for _ in 0..max_attempts {
        if let Verdict::Tangle(t) = classify(&draw_polystick(cfg, tok), classify_cfg) {
            return Some((t, tok));
        }
        tok = tok.next();
    }
    None
}
