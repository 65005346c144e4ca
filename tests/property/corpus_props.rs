//! Structural invariants of the loaded corpus: postings, sentences, interner.

use crate::common::corpus_text_from_ids;
use korpus::{Attr, Corpus, Pos};
use proptest::prelude::*;

fn sentences_strategy() -> impl Strategy<Value = Vec<Vec<(u8, u8, u8, u8)>>> {
    let token = (0u8..10, 0u8..6, 0u8..8, 0u8..4);
    let sentence = prop::collection::vec(token, 1..10);
    prop::collection::vec(sentence, 1..8)
}

fn load(sentences: &[Vec<(u8, u8, u8, u8)>]) -> Corpus {
    Corpus::from_reader(corpus_text_from_ids(sentences).as_bytes()).expect("reads")
}

proptest! {
    /// Every attribute index is a permutation of [0, N), non-decreasing in
    /// the attribute value, with position breaking ties.
    #[test]
    fn postings_are_sorted_permutations(sentences in sentences_strategy()) {
        let corpus = load(&sentences);
        let n = corpus.len();
        for attr in Attr::ALL {
            // equal_range over every occurring value must tile [0, N).
            let mut covered = vec![false; n];
            let mut total = 0usize;
            for p in 0..n as Pos {
                let value = corpus.token(p).get(attr);
                let range = corpus.equal_range(attr, value);
                // Position-sorted within the run.
                prop_assert!(range.elems.windows(2).all(|w| w[0] < w[1]));
                for &e in range.elems {
                    if !covered[e as usize] {
                        covered[e as usize] = true;
                        total += 1;
                    }
                }
                // The queried position is inside its own run.
                prop_assert!(range.elems.binary_search(&p).is_ok());
            }
            prop_assert_eq!(total, n);
        }
    }

    /// `sentence_of` agrees with a linear scan over the boundary array.
    #[test]
    fn sentence_of_matches_linear_scan(sentences in sentences_strategy()) {
        let corpus = load(&sentences);
        let mut expected_sentence = 0usize;
        let mut next_boundary = corpus.sentence_bounds(0).1;
        for p in 0..corpus.len() as Pos {
            while p >= next_boundary {
                expected_sentence += 1;
                next_boundary = corpus.sentence_bounds(expected_sentence).1;
            }
            prop_assert_eq!(corpus.sentence_of(p), expected_sentence);
        }
        prop_assert_eq!(corpus.sentence_count(), sentences.len());
    }

    /// Every attribute string on every token survives an intern round trip.
    #[test]
    fn interner_round_trips_token_attributes(sentences in sentences_strategy()) {
        let corpus = load(&sentences);
        for p in 0..corpus.len() as Pos {
            for attr in Attr::ALL {
                let id = corpus.token(p).get(attr);
                let s = corpus.resolve(id);
                prop_assert_eq!(corpus.lookup(s), Some(id));
            }
        }
    }

    /// Sentence lengths written in are the lengths read back.
    #[test]
    fn sentence_bounds_partition_the_corpus(sentences in sentences_strategy()) {
        let corpus = load(&sentences);
        let mut offset = 0 as Pos;
        for (k, sentence) in sentences.iter().enumerate() {
            let (start, end) = corpus.sentence_bounds(k);
            prop_assert_eq!(start, offset);
            prop_assert_eq!((end - start) as usize, sentence.len());
            offset = end;
        }
        prop_assert_eq!(offset as usize, corpus.len());
    }
}
