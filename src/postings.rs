// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-attribute position permutations with equal-range lookup.
//!
//! For each of the four attributes we keep a permutation of `[0, N)`,
//! stable-sorted by that attribute's [`TermId`]. Stability is what makes the
//! whole set algebra work: within a run of equal attribute values the
//! positions keep their natural order, so the sub-slice returned by
//! [`Postings::equal_range`] is sorted by position and can be treated as a
//! sorted set without copying anything.
//!
//! Built once after the token pass, immutable afterwards.

use crate::contracts::check_postings_permutation;
use crate::types::{Attr, Pos, TermId, Token};

/// The four stable-sorted attribute indexes.
#[derive(Debug, Default, Clone)]
pub struct Postings {
    word: Vec<Pos>,
    c5: Vec<Pos>,
    lemma: Vec<Pos>,
    pos: Vec<Pos>,
}

/// Stable-sort `[0, N)` by one attribute column.
fn build_one(tokens: &[Token], attr: Attr) -> Vec<Pos> {
    let mut index: Vec<Pos> = (0..tokens.len() as Pos).collect();
    // sort_by_key is stable: equal attribute values keep position order.
    index.sort_by_key(|&p| tokens[p as usize].get(attr));
    check_postings_permutation(tokens, attr, &index);
    index
}

impl Postings {
    /// Build all four indexes. With the `parallel` feature the four stable
    /// sorts run as two nested rayon joins; the result is identical either
    /// way.
    pub fn build(tokens: &[Token]) -> Self {
        #[cfg(feature = "parallel")]
        {
            let ((word, c5), (lemma, pos)) = rayon::join(
                || {
                    rayon::join(
                        || build_one(tokens, Attr::Word),
                        || build_one(tokens, Attr::C5),
                    )
                },
                || {
                    rayon::join(
                        || build_one(tokens, Attr::Lemma),
                        || build_one(tokens, Attr::Pos),
                    )
                },
            );
            Postings {
                word,
                c5,
                lemma,
                pos,
            }
        }

        #[cfg(not(feature = "parallel"))]
        {
            Postings {
                word: build_one(tokens, Attr::Word),
                c5: build_one(tokens, Attr::C5),
                lemma: build_one(tokens, Attr::Lemma),
                pos: build_one(tokens, Attr::Pos),
            }
        }
    }

    /// The full permutation for one attribute.
    #[inline]
    pub fn index(&self, attr: Attr) -> &[Pos] {
        match attr {
            Attr::Word => &self.word,
            Attr::C5 => &self.c5,
            Attr::Lemma => &self.lemma,
            Attr::Pos => &self.pos,
        }
    }

    /// The sub-slice of positions whose `attr` value equals `value`.
    ///
    /// Empty when the value never occurs or is [`TermId::NONE`]. The
    /// returned slice is sorted by position and borrows the index, so it can
    /// back an `IndexSet` directly.
    pub fn equal_range<'a>(
        &'a self,
        tokens: &[Token],
        attr: Attr,
        value: TermId,
    ) -> &'a [Pos] {
        if value.is_none() {
            return &[];
        }
        let index = self.index(attr);
        let lo = index.partition_point(|&p| tokens[p as usize].get(attr) < value);
        let hi = index.partition_point(|&p| tokens[p as usize].get(attr) <= value);
        &index[lo..hi]
    }

    /// Number of distinct values occurring in one attribute column.
    pub fn distinct_values(&self, tokens: &[Token], attr: Attr) -> usize {
        let index = self.index(attr);
        let mut count = 0;
        let mut last: Option<TermId> = None;
        for &p in index {
            let v = tokens[p as usize].get(attr);
            if last != Some(v) {
                count += 1;
                last = Some(v);
            }
        }
        count
    }
}
