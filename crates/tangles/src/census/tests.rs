use std::collections::HashSet;

use super::*;
use crate::classify::LatticeGraph;
use crate::lattice::Polystick;
use crate::symmetry::{orbit, Symmetry};

fn occupied_cells(table: &TangleTable) -> Vec<(usize, usize)> {
    table.occupied().map(|(m, c, _)| (m, c)).collect()
}

fn cell_counts(census: &Census, size: usize, class: usize) -> [usize; 3] {
    Kind::ALL.map(|k| census.table(k).count(size, class))
}

#[test]
fn negative_size_is_rejected() {
    assert_eq!(
        generate_tangles(-1).unwrap_err(),
        TangleError::NegativeSize { requested: -1 }
    );
}

#[test]
fn size_zero_holds_only_the_circle() {
    let census = generate_tangles(0).unwrap();
    for kind in Kind::ALL {
        let table = census.table(kind);
        assert_eq!(occupied_cells(table), vec![(0, 1)], "{kind}");
        assert_eq!(table.get(0, 1)[0], Tangle::circle());
    }
}

#[test]
fn unit_square_appears_at_size_four() {
    let census = generate_tangles(4).unwrap();
    assert_eq!(occupied_cells(census.fixed()), vec![(0, 1), (4, 3)]);
    assert_eq!(cell_counts(&census, 4, 3), [1, 1, 1]);
    let square = &census.fixed().get(4, 3)[0];
    assert_eq!(square.squares(), 1);
    assert_eq!(square.length(), 12);
}

#[test]
fn known_cell_counts_up_to_eight_edges() {
    let census = generate_tangles(8).unwrap();
    let expected = [
        ((0, 1), [1, 1, 1]),
        ((4, 3), [1, 1, 1]),
        ((5, 4), [8, 2, 1]),
        ((6, 5), [52, 14, 9]),
        ((7, 4), [2, 1, 1]),
        ((7, 6), [304, 76, 38]),
        ((8, 5), [22, 6, 4]),
        ((8, 7), [1706, 432, 224]),
    ];
    assert_eq!(
        occupied_cells(census.fixed()),
        expected.iter().map(|(cell, _)| *cell).collect::<Vec<_>>()
    );
    for ((m, c), counts) in expected {
        assert_eq!(cell_counts(&census, m, c), counts, "cell ({m}, {c})");
    }
}

#[test]
fn short_polysticks_never_qualify() {
    let census = generate_tangles(6).unwrap();
    for size in 1..=3 {
        assert_eq!(census.fixed().size_totals()[size], 0, "size {size}");
    }
}

#[test]
fn fixed_cells_are_distinct_shapes() {
    let census = generate_tangles(7).unwrap();
    for (_, _, cell) in census.fixed().occupied() {
        let shapes: HashSet<Polystick> = cell.iter().map(|t| t.polystick().canonical_form()).collect();
        assert_eq!(shapes.len(), cell.len());
    }
}

#[test]
fn tangle_attributes_are_consistent() {
    let census = generate_tangles(7).unwrap();
    for (size, class, cell) in census.fixed().occupied() {
        for t in cell {
            assert_eq!(t.size(), size);
            assert_eq!(t.polystick().len(), size);
            assert_eq!(t.class(), class);
            assert!(t.class() >= 1);
            if size == 0 {
                assert_eq!((t.squares(), t.class()), (0, 1));
                continue;
            }
            let basis = LatticeGraph::from_polystick(t.polystick()).minimum_cycle_basis();
            assert_eq!(basis.len(), t.squares());
            assert!(basis.iter().all(|c| c.len() == 4 && c.is_closed()));
        }
    }
}

#[test]
fn orbit_sizes_divide_the_group() {
    let census = generate_tangles(7).unwrap();
    for (size, class, fixed) in census.fixed().occupied() {
        let one_sided = census.one_sided().get(size, class);
        let free = census.free().get(size, class);
        assert!(fixed.len() >= one_sided.len() && one_sided.len() >= free.len());

        let fixed_shapes: HashSet<&Polystick> = fixed.iter().map(Tangle::polystick).collect();
        let mut covered = 0;
        for rep in one_sided {
            let rotations = orbit(rep.polystick(), Symmetry::rotations());
            assert!([1, 2, 4].contains(&rotations.len()));
            assert!(rotations.iter().all(|r| fixed_shapes.contains(r)));
            covered += rotations.len();
        }
        assert_eq!(covered, fixed.len(), "cell ({size}, {class})");

        let mut paired = 0;
        for rep in free {
            let dihedral: HashSet<Polystick> =
                orbit(rep.polystick(), Symmetry::all()).into_iter().collect();
            let members = one_sided
                .iter()
                .filter(|o| dihedral.contains(o.polystick()))
                .count();
            assert!(members == 1 || members == 2, "cell ({size}, {class})");
            paired += members;
        }
        assert_eq!(paired, one_sided.len(), "cell ({size}, {class})");
    }
}

#[test]
fn admitting_trees_fills_the_top_classes() {
    let census = census(CensusCfg {
        max_size: 3,
        classify: ClassifyCfg { admit_trees: true },
    });
    // every polystick with at most 3 edges is a tree, of class size + 1
    assert_eq!(cell_counts(&census, 1, 2), [2, 1, 1]);
    assert_eq!(cell_counts(&census, 2, 3), [6, 2, 2]);
    assert_eq!(census.fixed().count(3, 4), 22);
    assert_eq!(census.free().count(3, 4), 5);
}

#[test]
fn census_is_deterministic() {
    let a = generate_tangles(6).unwrap();
    let b = generate_tangles(6).unwrap();
    for kind in Kind::ALL {
        assert_eq!(a.table(kind), b.table(kind));
    }
}

#[test]
fn kind_parses_from_names() {
    for kind in Kind::ALL {
        assert_eq!(kind.name().parse::<Kind>().unwrap(), kind);
    }
    assert_eq!("One_Sided".parse::<Kind>().unwrap(), Kind::OneSided);
    assert!("mirror".parse::<Kind>().is_err());
}
