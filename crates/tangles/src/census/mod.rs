//! Census driver: enumerate, classify, bucket, reduce.
//!
//! `generate_tangles(p)` grows every polystick with at most `p` edges, keeps
//! the tangles, files them by `(size, class)` into the `fixed` table, adds the
//! circle at `(0, 1)`, and reduces each cell to rotation-orbit (`one-sided`)
//! and dihedral-orbit (`free`) representatives. Cells are independent once
//! the fixed table is complete.

pub mod reduce;
mod table;

pub use table::TangleTable;

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::classify::{classify, ClassifyCfg, Tangle, Verdict};
use crate::enumerate::{grow, HORIZONTAL_SEED, VERTICAL_SEED};
use crate::TangleError;

/// Symmetry level of a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Translation only.
    Fixed,
    /// Up to rotation.
    OneSided,
    /// Up to rotation and reflection.
    Free,
}

impl Kind {
    pub const ALL: [Kind; 3] = [Kind::Fixed, Kind::OneSided, Kind::Free];

    pub fn name(&self) -> &'static str {
        match self {
            Kind::Fixed => "fixed",
            Kind::OneSided => "one-sided",
            Kind::Free => "free",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fixed" => Ok(Kind::Fixed),
            "one-sided" | "onesided" | "one_sided" => Ok(Kind::OneSided),
            "free" => Ok(Kind::Free),
            other => Err(format!(
                "unknown table kind `{other}` (expected fixed, one-sided or free)"
            )),
        }
    }
}

/// Census configuration.
#[derive(Clone, Copy, Debug)]
pub struct CensusCfg {
    /// Largest edge count enumerated.
    pub max_size: usize,
    pub classify: ClassifyCfg,
}

impl CensusCfg {
    /// Default configuration with a caller-supplied bound, rejecting `p < 0`.
    pub fn with_max_size(p: i64) -> Result<Self, TangleError> {
        let max_size =
            usize::try_from(p).map_err(|_| TangleError::NegativeSize { requested: p })?;
        Ok(Self {
            max_size,
            ..Self::default()
        })
    }
}

impl Default for CensusCfg {
    fn default() -> Self {
        Self {
            max_size: 8,
            classify: ClassifyCfg::default(),
        }
    }
}

/// The three classification tables of one run.
#[derive(Clone, Debug)]
pub struct Census {
    cfg: CensusCfg,
    fixed: TangleTable,
    one_sided: TangleTable,
    free: TangleTable,
}

impl Census {
    #[inline]
    pub fn cfg(&self) -> CensusCfg {
        self.cfg
    }

    #[inline]
    pub fn max_size(&self) -> usize {
        self.cfg.max_size
    }

    pub fn table(&self, kind: Kind) -> &TangleTable {
        match kind {
            Kind::Fixed => &self.fixed,
            Kind::OneSided => &self.one_sided,
            Kind::Free => &self.free,
        }
    }

    #[inline]
    pub fn fixed(&self) -> &TangleTable {
        &self.fixed
    }

    #[inline]
    pub fn one_sided(&self) -> &TangleTable {
        &self.one_sided
    }

    #[inline]
    pub fn free(&self) -> &TangleTable {
        &self.free
    }

    /// `counts()[size][class - 1]` for one table.
    pub fn counts(&self, kind: Kind) -> Vec<Vec<usize>> {
        self.table(kind).counts()
    }
}

/// Run the census for every tangle with at most `p` edges.
///
/// Fails only for `p < 0`; nothing is computed in that case. Run time grows
/// exponentially with `p` (roughly 4.6× per edge), so `p` in the teens is
/// the practical ceiling.
pub fn generate_tangles(p: i64) -> Result<Census, TangleError> {
    CensusCfg::with_max_size(p).map(census)
}

/// Run the census with explicit configuration.
pub fn census(cfg: CensusCfg) -> Census {
    let fixed = fixed_table(cfg);
    let mut one_sided = TangleTable::new(cfg.max_size);
    let mut free = TangleTable::new(cfg.max_size);
    for (size, class, bucket) in fixed.occupied() {
        let os = reduce::one_sided(bucket);
        let fr = reduce::free(&os);
        debug!(
            size,
            class,
            fixed = bucket.len(),
            one_sided = os.len(),
            free = fr.len(),
            "reduced cell"
        );
        one_sided.set(size, class, os);
        free.set(size, class, fr);
    }
    Census {
        cfg,
        fixed,
        one_sided,
        free,
    }
}

/// Every tangle once per translation class, circle included.
fn fixed_table(cfg: CensusCfg) -> TangleTable {
    let mut table = TangleTable::new(cfg.max_size);
    table.push(Tangle::circle());
    let mut candidates = 0usize;
    for seed in [HORIZONTAL_SEED, VERTICAL_SEED] {
        grow(seed, cfg.max_size, |shape| {
            candidates += 1;
            if let Verdict::Tangle(t) = classify(shape, cfg.classify) {
                debug_assert!(t.polystick().is_canonical());
                table.push(t);
            }
        });
    }
    debug!(
        max_size = cfg.max_size,
        candidates,
        tangles = table.total(),
        "classified polysticks"
    );
    table
}

#[cfg(test)]
mod tests;
