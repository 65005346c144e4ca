// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures so every test site works from the same
//! corpus shape.

#![doc(hidden)]

use crate::corpus::Corpus;

/// Build a corpus from complete file text (header line included).
pub fn corpus_from(text: &str) -> Corpus {
    Corpus::from_reader(text.as_bytes()).expect("in-memory corpus always reads")
}

/// The canonical two-sentence fixture:
///
/// ```text
/// 0: The/the/DET/AT0   4: A/a/DET/AT0
/// 1: cat/cat/SUBST/NN1 5: dog/dog/SUBST/NN1
/// 2: sat/sit/VERB/VVD  6: ran/run/VERB/VVD
/// 3: ././PUN/PUN       7: ././PUN/PUN
/// ```
///
/// Sentence offsets `[0, 4, 8]`.
pub fn tiny_corpus() -> Corpus {
    corpus_from(
        "word c5 lemma pos\n\
         The AT0 the DET\n\
         cat NN1 cat SUBST\n\
         sat VVD sit VERB\n\
         . PUN . PUN\n\
         \n\
         A AT0 a DET\n\
         dog NN1 dog SUBST\n\
         ran VVD run VERB\n\
         . PUN . PUN\n",
    )
}
