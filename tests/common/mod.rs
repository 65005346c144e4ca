//! Shared test utilities and fixtures.

#![allow(dead_code)]

use korpus::{Corpus, Match};

/// Build a corpus from complete file text (header included).
pub fn corpus_from(text: &str) -> Corpus {
    Corpus::from_reader(text.as_bytes()).expect("in-memory corpus always reads")
}

/// The canonical two-sentence fixture (`The cat sat .` / `A dog ran .`),
/// sentence offsets `[0, 4, 8]`.
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

/// Render numeric token ids into corpus file text. Each sentence is a list
/// of `(word, c5, lemma, pos)` id tuples; ids map to `w0`, `c0`, `l0`, `p0`
/// style strings.
pub fn corpus_text_from_ids(sentences: &[Vec<(u8, u8, u8, u8)>]) -> String {
    let mut text = String::from("word c5 lemma pos\n");
    for (i, sentence) in sentences.iter().enumerate() {
        if i > 0 {
            text.push('\n');
        }
        for (w, c, l, p) in sentence {
            text.push_str(&format!("w{} c{} l{} p{}\n", w, c, l, p));
        }
    }
    text
}

/// Shorthand match constructor.
pub fn m(sentence: usize, pos: usize, len: usize) -> Match {
    Match { sentence, pos, len }
}
