// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the korpus command-line interface.
//!
//! Three subcommands: `search` to run one query against a corpus file,
//! `repl` for an interactive session over a loaded corpus, and `stats` to
//! summarize a corpus. The search command includes a benchmarking mode that
//! keeps sampling until the mean evaluation time settles.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "korpus",
    about = "Positional phrase queries over annotated corpora",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one query against a corpus file and print the matches
    Search {
        /// Path to the corpus file
        corpus: String,

        /// Query, e.g. '[lemma="house" pos!="VERB"][]'
        query: String,

        /// Maximum number of matches to display
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Emit the full match list as JSON instead of styled output
        #[arg(long)]
        json: bool,

        /// Re-run the evaluation until its mean timing settles
        #[arg(long)]
        bench: bool,
    },

    /// Interactive query loop over a loaded corpus
    Repl {
        /// Path to the corpus file
        corpus: String,
    },

    /// Summarize a corpus file
    Stats {
        /// Path to the corpus file
        corpus: String,
    },
}
