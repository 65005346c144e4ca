// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query evaluator: clause sets, the fold, and match projection.
//!
//! Evaluation never walks tokens. Each literal becomes a borrowed postings
//! slice shifted into start-offset space (clause `j` contributes shift
//! `-j`), the resulting pool is folded smallest-first through the
//! complement-aware intersection, and only the surviving start offsets are
//! projected into sentence-local matches.
//!
//! The evaluator is total: unsatisfiable literals flow through as empty
//! sets, negated unknowns as complemented empty sets, and the worst that
//! can come out is an empty match list.

use crate::algebra;
use crate::corpus::Corpus;
use crate::sets::{IndexSet, MatchSet, SetRepr};
use crate::types::{Clause, Match, Pos, Query};

/// Evaluate a parsed query, returning matches in ascending start order.
pub fn find_matches(corpus: &Corpus, query: &Query) -> Vec<Match> {
    if query.is_empty() || corpus.is_empty() {
        return Vec::new();
    }
    let n = corpus.len() as Pos;
    let k = query.len();

    // 1. One shifted, possibly complemented set per literal. Wildcard
    //    clauses contribute no set, only the obligation to mask against the
    //    corpus extent later.
    let mut pool: Vec<MatchSet<'_>> = Vec::new();
    let mut has_wildcard = false;
    for (j, clause) in query.clauses.iter().enumerate() {
        match clause {
            Clause::Any => has_wildcard = true,
            Clause::Literals(literals) => {
                for literal in literals {
                    let range = corpus.equal_range(literal.attr, literal.value);
                    pool.push(MatchSet {
                        repr: SetRepr::Indexed(IndexSet::new(range.elems, -(j as Pos))),
                        complement: literal.polarity == crate::types::Polarity::Ne,
                    });
                }
            }
        }
    }

    // 2. Fold smallest-first so early intersections shrink the accumulator
    //    as fast as possible.
    pool.sort_by_key(|set| set.size());
    let mut sets = pool.into_iter();
    let mut acc = match sets.next() {
        Some(first) => first,
        // Every clause was a wildcard: start from the whole extent.
        None => MatchSet::universe(n),
    };
    for set in sets {
        acc = algebra::intersect(&set, &acc);
    }

    // 3. A wildcard clause widens nothing, but the mask forces any borrowed
    //    or complemented encoding into a concrete positive set over [0, N).
    if has_wildcard {
        acc = algebra::intersect(&MatchSet::universe(n), &acc);
    }

    // 4. All-negated queries can leave the fold still complemented; one
    //    universe intersection flips it concrete.
    if acc.complement {
        acc = algebra::intersect(&MatchSet::universe(n), &acc);
    }

    // 5. Project surviving starts into sentence coordinates. Shifted slices
    //    can carry starts that fall outside the extent; drop them here.
    let k_len = k as Pos;
    let mut matches = Vec::new();
    for start in acc.repr.positions() {
        if start < 0 || start + k_len > n {
            continue;
        }
        let sentence = corpus.sentence_of(start);
        let (s_start, s_end) = corpus.sentence_bounds(sentence);
        if start + k_len <= s_end {
            matches.push(Match {
                sentence,
                pos: (start - s_start) as usize,
                len: k,
            });
        }
    }
    matches
}
