// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the index invariants.
//!
//! Debug-build assertions for the preconditions the set algebra silently
//! relies on. They are:
//!
//! 1. **Zero-cost in release builds** (all `debug_assert!`)
//! 2. **Loud during development** - a violated invariant here is a
//!    precondition bug, not a user error, so aborting is the right call
//!
//! The load-bearing ones:
//!
//! - `check_postings_permutation`: each attribute index is a permutation of
//!   `[0, N)`, position-sorted within every run of equal attribute values.
//!   Equal-range lookups and the whole algebra assume this.
//! - `check_sentence_offsets`: strictly increasing, starts at 0, ends at N.
//!   `sentence_of` is a bare `partition_point` on top of it.
//! - `check_strictly_ascending`: every materialized explicit set.

use crate::types::{Attr, Pos, Token};

/// Check that `index` is a permutation of `[0, N)` sorted by `attr` with
/// position as the tiebreaker.
#[inline]
pub fn check_postings_permutation(tokens: &[Token], attr: Attr, index: &[Pos]) {
    debug_assert_eq!(
        index.len(),
        tokens.len(),
        "postings for {} must cover every token",
        attr.as_str()
    );

    #[cfg(debug_assertions)]
    {
        let mut seen = vec![false; tokens.len()];
        for &p in index {
            debug_assert!(
                (p as usize) < tokens.len() && !seen[p as usize],
                "postings for {} are not a permutation (position {})",
                attr.as_str(),
                p
            );
            seen[p as usize] = true;
        }
        for w in index.windows(2) {
            let (a, b) = (w[0] as usize, w[1] as usize);
            let (ka, kb) = (tokens[a].get(attr), tokens[b].get(attr));
            debug_assert!(
                ka < kb || (ka == kb && w[0] < w[1]),
                "postings for {} lost the (value, position) order at {} -> {}",
                attr.as_str(),
                w[0],
                w[1]
            );
        }
    }
}

/// Check the sentence offset array: strictly increasing, `0` first, `n` last.
#[inline]
pub fn check_sentence_offsets(sentences: &[Pos], n: Pos) {
    debug_assert!(!sentences.is_empty(), "sentence array must hold offset 0");
    debug_assert_eq!(sentences[0], 0, "first sentence must start at offset 0");
    debug_assert_eq!(
        *sentences.last().unwrap_or(&0),
        n,
        "sentence array must terminate at the corpus extent"
    );
    debug_assert!(
        sentences.windows(2).all(|w| w[0] < w[1]),
        "sentence offsets must be strictly increasing"
    );
}

/// Check that a materialized set is strictly ascending (no duplicates).
#[inline]
pub fn check_strictly_ascending(elems: &[Pos]) {
    debug_assert!(
        elems.windows(2).all(|w| w[0] < w[1]),
        "explicit set is not strictly ascending"
    );
}
