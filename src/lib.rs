//! Positional phrase queries over part-of-speech annotated corpora.
//!
//! A corpus is a flat sequence of tokens - each carrying a surface word, a
//! fine tag, a lemma, and a coarse tag - partitioned into sentences. A query
//! names one constraint per window position (`[lemma="house" pos!="VERB"][]`)
//! and evaluation finds every sentence-internal window where all of them
//! hold, without ever scanning tokens: per-attribute postings are shifted
//! into start-offset space and folded through a three-encoding set algebra.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐    ┌──────────────┐    ┌─────────────┐
//! │ corpus.rs  │───▶│ postings.rs  │───▶│  search.rs  │
//! │ (loader,   │    │ (stable-sort │    │ (clause sets│
//! │  sentences)│    │  equal_range)│    │  fold, emit)│
//! └────────────┘    └──────────────┘    └─────────────┘
//!       │                  │                   │
//!       ▼                  ▼                   ▼
//! ┌─────────────────────────────────────────────────────┐
//! │              sets.rs + algebra.rs                   │
//! │  (Dense / Indexed / Explicit encodings, complement  │
//! │   bit, cardinality-dispatched ∩ and \)              │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use korpus::Corpus;
//!
//! let corpus = Corpus::load("bnc-sample.csv");
//! for m in corpus.query("[pos=\"SUBST\"][pos=\"VERB\"]").unwrap() {
//!     println!("sentence {} at {} (+{})", m.sentence, m.pos, m.len);
//! }
//! ```

// Module declarations
mod algebra;
pub mod contracts;
mod corpus;
mod intern;
mod postings;
mod query;
mod search;
mod sets;
pub mod testing;
mod types;

// Re-exports for public API
pub use algebra::{difference_repr, intersect, intersect_repr, union_repr, SIZE_RATIO};
pub use corpus::Corpus;
pub use intern::Interner;
pub use postings::Postings;
pub use query::{parse_query, ParseError};
pub use search::find_matches;
pub use sets::{DenseSet, ExplicitSet, IndexSet, MatchSet, Positions, SetRepr};
pub use types::{Attr, Clause, Literal, Match, Polarity, Pos, Query, TermId, Token};
