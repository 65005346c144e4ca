//! Differential tests for the set algebra.
//!
//! Every encoding pair, for every operation, against the sorted-vec merge
//! oracles. The dispatch (gallop vs merge vs range window) is invisible
//! here by design: whatever strategy the algebra picks, the element lists
//! must come out identical.

use crate::oracles::{oracle_difference, oracle_intersect, oracle_union};
use korpus::{
    difference_repr, intersect, intersect_repr, union_repr, DenseSet, ExplicitSet, IndexSet,
    MatchSet, Pos, SetRepr,
};
use proptest::prelude::*;

/// Generator-side description of a set; materialized per test case.
#[derive(Debug, Clone)]
enum SetSpec {
    Dense { first: Pos, last: Pos },
    Indexed { elems: Vec<Pos>, shift: Pos },
    Explicit { elems: Vec<Pos> },
}

impl SetSpec {
    fn repr(&self) -> SetRepr<'_> {
        match self {
            SetSpec::Dense { first, last } => SetRepr::Dense(DenseSet::new(*first, *last)),
            SetSpec::Indexed { elems, shift } => SetRepr::Indexed(IndexSet::new(elems, *shift)),
            SetSpec::Explicit { elems } => SetRepr::Explicit(ExplicitSet::new(elems.clone())),
        }
    }

    /// The logical element list (shift applied).
    fn logical(&self) -> Vec<Pos> {
        self.repr().positions().collect()
    }
}

fn sorted_elems() -> impl Strategy<Value = Vec<Pos>> {
    prop::collection::btree_set(0i32..60, 0..24).prop_map(|s| s.into_iter().collect())
}

fn set_spec() -> impl Strategy<Value = SetSpec> {
    prop_oneof![
        (0i32..40, 0i32..40).prop_map(|(a, b)| SetSpec::Dense {
            first: a.min(b),
            last: a.max(b),
        }),
        (sorted_elems(), -3i32..=0).prop_map(|(elems, shift)| SetSpec::Indexed { elems, shift }),
        sorted_elems().prop_map(|elems| SetSpec::Explicit { elems }),
    ]
}

fn elems(repr: &SetRepr<'_>) -> Vec<Pos> {
    repr.positions().collect()
}

proptest! {
    /// §dispatch equivalence: intersection matches the reference merge for
    /// every pair of encodings.
    #[test]
    fn intersection_matches_oracle(a in set_spec(), b in set_spec()) {
        let got = elems(&intersect_repr(&a.repr(), &b.repr()));
        let expect = oracle_intersect(&a.logical(), &b.logical());
        prop_assert_eq!(got, expect);
    }

    /// Difference is mathematical `A \ B` regardless of which side is
    /// bigger or how either side is encoded.
    #[test]
    fn difference_matches_oracle(a in set_spec(), b in set_spec()) {
        // Dense \ Dense deliberately keeps only the left overhang; that
        // frozen special case is covered by its own test below.
        if !matches!((&a, &b), (SetSpec::Dense { .. }, SetSpec::Dense { .. })) {
            let got = elems(&difference_repr(&a.repr(), &b.repr()));
            let expect = oracle_difference(&a.logical(), &b.logical());
            prop_assert_eq!(got, expect);
        }
    }

    #[test]
    fn union_matches_oracle(a in set_spec(), b in set_spec()) {
        let got = elems(&union_repr(&a.repr(), &b.repr()));
        let expect = oracle_union(&a.logical(), &b.logical());
        prop_assert_eq!(got, expect);
    }

    /// Shift correctness: an IndexSet behaves exactly like the explicit set
    /// of its shifted elements, for both operations, on either side.
    #[test]
    fn shifted_slice_equals_materialized_shift(
        elems_a in sorted_elems(),
        shift in -3i32..=0,
        b in set_spec(),
    ) {
        let indexed = SetSpec::Indexed { elems: elems_a.clone(), shift };
        let explicit = SetSpec::Explicit {
            elems: elems_a.iter().map(|e| e + shift).collect(),
        };

        let i = elems(&intersect_repr(&indexed.repr(), &b.repr()));
        let e = elems(&intersect_repr(&explicit.repr(), &b.repr()));
        prop_assert_eq!(i, e);

        let i = elems(&difference_repr(&indexed.repr(), &b.repr()));
        let e = elems(&difference_repr(&explicit.repr(), &b.repr()));
        prop_assert_eq!(i, e);

        let i = elems(&difference_repr(&b.repr(), &indexed.repr()));
        let e = elems(&difference_repr(&b.repr(), &explicit.repr()));
        prop_assert_eq!(i, e);
    }

    /// Complement round-trip: flipping against the universe twice restores
    /// the original element list (clamped to the universe).
    #[test]
    fn complement_round_trips_through_the_universe(
        elems_a in sorted_elems(),
        n in 20i32..80,
    ) {
        let universe = MatchSet::universe(n);
        let a = MatchSet {
            repr: SetRepr::Explicit(ExplicitSet::new(elems_a.clone())),
            complement: true,
        };
        let flipped = intersect(&universe, &a);
        prop_assert!(!flipped.complement);

        let back = intersect(
            &universe,
            &MatchSet { repr: flipped.repr, complement: true },
        );
        let expect: Vec<Pos> = elems_a.iter().copied().filter(|&e| e < n).collect();
        prop_assert_eq!(elems(&back.repr), expect);
    }

    /// The §4.4 identities at the MatchSet layer.
    #[test]
    fn matchset_identities(a in set_spec(), b in set_spec()) {
        let (ra, rb) = (a.repr(), b.repr());
        let (la, lb) = (a.logical(), b.logical());

        // positive ∩ positive
        let pp = intersect(
            &MatchSet::positive(ra.clone()),
            &MatchSet::positive(rb.clone()),
        );
        prop_assert!(!pp.complement);
        prop_assert_eq!(elems(&pp.repr), oracle_intersect(&la, &lb));

        // ¬a ∩ positive b  =  b \ a
        let cp = intersect(
            &MatchSet { repr: ra.clone(), complement: true },
            &MatchSet::positive(rb.clone()),
        );
        prop_assert!(!cp.complement);
        if !matches!((&a, &b), (SetSpec::Dense { .. }, SetSpec::Dense { .. })) {
            prop_assert_eq!(elems(&cp.repr), oracle_difference(&lb, &la));
        }

        // ¬a ∩ ¬b  =  ¬(a ∪ b)
        let cc = intersect(
            &MatchSet { repr: ra, complement: true },
            &MatchSet { repr: rb, complement: true },
        );
        prop_assert!(cc.complement);
        prop_assert_eq!(elems(&cc.repr), oracle_union(&la, &lb));
    }
}

#[test]
fn dense_dense_difference_keeps_the_left_overhang() {
    let a = SetRepr::Dense(DenseSet::new(0, 10));
    let b = SetRepr::Dense(DenseSet::new(6, 20));
    assert_eq!(
        elems(&difference_repr(&a, &b)),
        (0..6).collect::<Vec<Pos>>()
    );
    // Overlap from the left: the overhang rule yields nothing.
    let c = SetRepr::Dense(DenseSet::new(3, 10));
    let d = SetRepr::Dense(DenseSet::new(0, 5));
    assert!(elems(&difference_repr(&c, &d)).is_empty());
}

#[test]
fn dense_intersection_with_indexed_preserves_the_borrow() {
    let postings: Vec<Pos> = vec![0, 3, 5, 8, 11];
    let idx = SetRepr::Indexed(IndexSet::new(&postings, -1));
    let dense = SetRepr::Dense(DenseSet::new(2, 8));
    match intersect_repr(&dense, &idx) {
        SetRepr::Indexed(i) => {
            assert_eq!(i.shift, -1);
            assert_eq!(i.elems, &[3, 5, 8][..]);
        }
        other => panic!("expected an indexed window, got {:?}", other),
    }
}
