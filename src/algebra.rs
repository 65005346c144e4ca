// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pairwise set operations over the three physical encodings.
//!
//! All nine ordered encoding combinations are supported for intersection and
//! difference, plus the union needed when two complemented sets meet. Every
//! comparison happens in the shared logical-offset space: an element of an
//! [`IndexSet`] only means something after its shift is applied, and mixing
//! shifts raw is the classic bug here.
//!
//! # Strategy selection
//!
//! Binary operations on two sorted sides pick between:
//!
//! - **gallop**: iterate the smaller side, binary-search the larger. Chosen
//!   when the sides differ by more than [`SIZE_RATIO`].
//! - **two-cursor merge**: linear walk of both sides, when the sizes are
//!   comparable.
//! - **range window**: when one operand is dense, the matching elements of a
//!   sorted side form one contiguous window, found with two
//!   `partition_point` calls.
//!
//! The choice affects only speed; the property tests in `tests/property/`
//! hold every pair against a sorted-vec reference merge.
//!
//! # Result encodings
//!
//! | A \ B    | Dense              | Indexed  | Explicit |
//! |----------|--------------------|----------|----------|
//! | Dense    | Dense              | Indexed  | Explicit |
//! | Indexed  | Indexed            | Explicit | Explicit |
//! | Explicit | Explicit           | Explicit | Explicit |
//!
//! (intersection; dense ∩ indexed keeps the borrowed slice because the
//! window of a position-sorted slice is itself a valid postings sub-slice).
//! Differences materialize except dense \ dense, which keeps only the left
//! overhang - acceptable because the sole dense operand in practice is the
//! corpus universe, whose overhang is empty.

use crate::sets::{DenseSet, ExplicitSet, IndexSet, MatchSet, SetRepr};
use crate::types::Pos;

/// Size ratio above which the gallop strategy beats a linear merge.
/// Fixed, not tuned; correctness never depends on it.
pub const SIZE_RATIO: usize = 5;

// =============================================================================
// MATCHSET LAYER (complement-aware)
// =============================================================================

/// Intersect two match sets, rewriting complements into concrete operations.
///
/// The complement bit is preserved only when both sides carry it
/// (`(U\a) ∩ (U\b) = U \ (a ∪ b)`, so the underlying sets are unioned and
/// the flag stays). A single complemented side becomes a difference, and the
/// result is positive from then on. No complement is ever materialized here;
/// the evaluator's final universe intersection does that once.
pub fn intersect<'a>(a: &MatchSet<'a>, b: &MatchSet<'a>) -> MatchSet<'a> {
    match (a.complement, b.complement) {
        (true, true) => MatchSet {
            repr: union_repr(&a.repr, &b.repr),
            complement: true,
        },
        (true, false) => MatchSet::positive(difference_repr(&b.repr, &a.repr)),
        (false, true) => MatchSet::positive(difference_repr(&a.repr, &b.repr)),
        (false, false) => MatchSet::positive(intersect_repr(&a.repr, &b.repr)),
    }
}

// =============================================================================
// INTERSECTION
// =============================================================================

/// `A ∩ B` over plain (complement-free) encodings.
pub fn intersect_repr<'a>(a: &SetRepr<'a>, b: &SetRepr<'a>) -> SetRepr<'a> {
    match (a, b) {
        (SetRepr::Dense(x), SetRepr::Dense(y)) => {
            let first = x.first.max(y.first);
            let last = x.last.min(y.last);
            if first < last {
                SetRepr::Dense(DenseSet::new(first, last))
            } else {
                SetRepr::Dense(DenseSet::new(0, 0))
            }
        }
        (SetRepr::Dense(d), SetRepr::Indexed(i)) | (SetRepr::Indexed(i), SetRepr::Dense(d)) => {
            let (lo, hi) = range_window(i.elems, i.shift, *d);
            SetRepr::Indexed(IndexSet::new(&i.elems[lo..hi], i.shift))
        }
        (SetRepr::Dense(d), SetRepr::Explicit(e)) | (SetRepr::Explicit(e), SetRepr::Dense(d)) => {
            let (lo, hi) = range_window(&e.elems, 0, *d);
            SetRepr::Explicit(ExplicitSet::new(e.elems[lo..hi].to_vec()))
        }
        (SetRepr::Indexed(x), SetRepr::Indexed(y)) => {
            SetRepr::Explicit(ExplicitSet::new(sorted_intersect(
                x.elems, x.shift, y.elems, y.shift,
            )))
        }
        (SetRepr::Indexed(x), SetRepr::Explicit(y)) => SetRepr::Explicit(ExplicitSet::new(
            sorted_intersect(x.elems, x.shift, &y.elems, 0),
        )),
        (SetRepr::Explicit(x), SetRepr::Indexed(y)) => SetRepr::Explicit(ExplicitSet::new(
            sorted_intersect(&x.elems, 0, y.elems, y.shift),
        )),
        (SetRepr::Explicit(x), SetRepr::Explicit(y)) => SetRepr::Explicit(ExplicitSet::new(
            sorted_intersect(&x.elems, 0, &y.elems, 0),
        )),
    }
}

// =============================================================================
// DIFFERENCE
// =============================================================================

/// `A \ B` over plain encodings.
pub fn difference_repr<'a>(a: &SetRepr<'a>, b: &SetRepr<'a>) -> SetRepr<'a> {
    match (a, b) {
        (SetRepr::Dense(x), SetRepr::Dense(y)) => {
            // Left overhang only. The only dense A in practice is the
            // universe, where the overhang is empty anyway.
            if x.last <= y.first || x.first >= y.last {
                SetRepr::Dense(*x)
            } else if x.first < y.first {
                SetRepr::Dense(DenseSet::new(x.first, y.first))
            } else {
                SetRepr::Dense(DenseSet::new(0, 0))
            }
        }
        (SetRepr::Dense(d), SetRepr::Indexed(i)) => {
            SetRepr::Explicit(ExplicitSet::new(dense_minus_sorted(*d, i.elems, i.shift)))
        }
        (SetRepr::Dense(d), SetRepr::Explicit(e)) => {
            SetRepr::Explicit(ExplicitSet::new(dense_minus_sorted(*d, &e.elems, 0)))
        }
        (SetRepr::Indexed(i), SetRepr::Dense(d)) => {
            SetRepr::Explicit(ExplicitSet::new(sorted_minus_dense(i.elems, i.shift, *d)))
        }
        (SetRepr::Explicit(e), SetRepr::Dense(d)) => {
            SetRepr::Explicit(ExplicitSet::new(sorted_minus_dense(&e.elems, 0, *d)))
        }
        (SetRepr::Indexed(x), SetRepr::Indexed(y)) => {
            SetRepr::Explicit(ExplicitSet::new(sorted_difference(
                x.elems, x.shift, y.elems, y.shift,
            )))
        }
        (SetRepr::Indexed(x), SetRepr::Explicit(y)) => SetRepr::Explicit(ExplicitSet::new(
            sorted_difference(x.elems, x.shift, &y.elems, 0),
        )),
        (SetRepr::Explicit(x), SetRepr::Indexed(y)) => SetRepr::Explicit(ExplicitSet::new(
            sorted_difference(&x.elems, 0, y.elems, y.shift),
        )),
        (SetRepr::Explicit(x), SetRepr::Explicit(y)) => SetRepr::Explicit(ExplicitSet::new(
            sorted_difference(&x.elems, 0, &y.elems, 0),
        )),
    }
}

// =============================================================================
// UNION (needed only under a shared complement)
// =============================================================================

/// `A ∪ B` over plain encodings.
///
/// Only reached when two complemented sets meet in the fold, so the operands
/// are postings slices or prior merge results - never large dense ranges.
/// Output size is on the order of the input sizes regardless of strategy, so
/// a single merge pass is already optimal.
pub fn union_repr<'a>(a: &SetRepr<'a>, b: &SetRepr<'a>) -> SetRepr<'a> {
    if let (SetRepr::Dense(x), SetRepr::Dense(y)) = (a, b) {
        if x.is_empty() {
            return SetRepr::Dense(*y);
        }
        if y.is_empty() {
            return SetRepr::Dense(*x);
        }
        // Overlapping or adjacent ranges stay dense.
        if x.first <= y.last && y.first <= x.last {
            return SetRepr::Dense(DenseSet::new(x.first.min(y.first), x.last.max(y.last)));
        }
    }

    let mut out = Vec::with_capacity(a.len() + b.len());
    let mut pa = a.positions().peekable();
    let mut pb = b.positions().peekable();
    loop {
        match (pa.peek().copied(), pb.peek().copied()) {
            (Some(x), Some(y)) => {
                if x < y {
                    out.push(x);
                    pa.next();
                } else if y < x {
                    out.push(y);
                    pb.next();
                } else {
                    out.push(x);
                    pa.next();
                    pb.next();
                }
            }
            (Some(_), None) => {
                out.extend(&mut pa);
                break;
            }
            (None, Some(_)) => {
                out.extend(&mut pb);
                break;
            }
            (None, None) => break,
        }
    }
    SetRepr::Explicit(ExplicitSet::new(out))
}

// =============================================================================
// SORTED-SLICE PRIMITIVES
// =============================================================================
//
// Each takes (elems, shift) pairs and works entirely in logical space.
// Explicit sets pass shift 0. Results are emitted in logical space, ready to
// become ExplicitSet storage.

/// Window of indices in `elems` whose shifted value lands inside `range`.
fn range_window(elems: &[Pos], shift: Pos, range: DenseSet) -> (usize, usize) {
    let lo = elems.partition_point(|&e| e + shift < range.first);
    let hi = elems.partition_point(|&e| e + shift < range.last);
    (lo, hi)
}

fn sorted_intersect(a: &[Pos], sa: Pos, b: &[Pos], sb: Pos) -> Vec<Pos> {
    if a.len() * SIZE_RATIO < b.len() {
        gallop_intersect(a, sa, b, sb)
    } else if b.len() * SIZE_RATIO < a.len() {
        gallop_intersect(b, sb, a, sa)
    } else {
        merge_intersect(a, sa, b, sb)
    }
}

/// Iterate the smaller side, probe the larger. `small` drives the output
/// order, so the result stays ascending.
fn gallop_intersect(small: &[Pos], ss: Pos, large: &[Pos], ls: Pos) -> Vec<Pos> {
    let mut out = Vec::new();
    for &e in small {
        let logical = e + ss;
        if large.binary_search(&(logical - ls)).is_ok() {
            out.push(logical);
        }
    }
    out
}

fn merge_intersect(a: &[Pos], sa: Pos, b: &[Pos], sb: Pos) -> Vec<Pos> {
    let mut out = Vec::new();
    let (mut p, mut q) = (0, 0);
    while p < a.len() && q < b.len() {
        let x = a[p] + sa;
        let y = b[q] + sb;
        if x < y {
            p += 1;
        } else if y < x {
            q += 1;
        } else {
            out.push(x);
            p += 1;
            q += 1;
        }
    }
    out
}

fn sorted_difference(a: &[Pos], sa: Pos, b: &[Pos], sb: Pos) -> Vec<Pos> {
    if a.len() * SIZE_RATIO < b.len() {
        // Probe every element of A against B. Galloping the other way
        // around cannot produce A \ B without touching all of A anyway.
        let mut out = Vec::new();
        for &e in a {
            let logical = e + sa;
            if b.binary_search(&(logical - sb)).is_err() {
                out.push(logical);
            }
        }
        out
    } else {
        merge_difference(a, sa, b, sb)
    }
}

fn merge_difference(a: &[Pos], sa: Pos, b: &[Pos], sb: Pos) -> Vec<Pos> {
    let mut out = Vec::new();
    let (mut p, mut q) = (0, 0);
    while p < a.len() && q < b.len() {
        let x = a[p] + sa;
        let y = b[q] + sb;
        if x < y {
            out.push(x);
            p += 1;
        } else if y < x {
            q += 1;
        } else {
            p += 1;
            q += 1;
        }
    }
    // Tail of A survives untouched.
    while p < a.len() {
        out.push(a[p] + sa);
        p += 1;
    }
    out
}

/// `[first, last) \ sorted-side`, dispatching on relative size.
fn dense_minus_sorted(d: DenseSet, b: &[Pos], sb: Pos) -> Vec<Pos> {
    if d.is_empty() {
        return Vec::new();
    }
    if b.len() > d.len() * SIZE_RATIO {
        (d.first..d.last)
            .filter(|&p| b.binary_search(&(p - sb)).is_err())
            .collect()
    } else {
        let mut out = Vec::new();
        let mut q = 0;
        for p in d.first..d.last {
            while q < b.len() && b[q] + sb < p {
                q += 1;
            }
            if q < b.len() && b[q] + sb == p {
                continue;
            }
            out.push(p);
        }
        out
    }
}

/// Sorted side minus a dense range: keep everything that falls outside.
fn sorted_minus_dense(a: &[Pos], sa: Pos, d: DenseSet) -> Vec<Pos> {
    a.iter()
        .map(|&e| e + sa)
        .filter(|&p| !d.contains(p))
        .collect()
}
