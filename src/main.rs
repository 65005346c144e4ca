// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! korpus CLI: query, explore, and summarize annotated corpora.
//!
//! ```bash
//! # One-shot query, matches as concordance lines
//! korpus search bnc-sample.csv '[lemma="house" pos!="VERB"][]'
//!
//! # Interactive session (the corpus loads once)
//! korpus repl bnc-sample.csv
//!
//! # Corpus summary
//! korpus stats bnc-sample.csv
//! ```
//!
//! The search command also supports `--json` for pipelines and `--bench`
//! for adaptive timing runs.

use clap::Parser;
use std::io::Write;
use std::time::{Duration, Instant};

use korpus::{find_matches, parse_query, Corpus, Match, Query};

mod cli;
use cli::display::{field, fmt_timing, heading, paint, print_matches, Tone};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            corpus,
            query,
            limit,
            json,
            bench,
        } => {
            if bench {
                benchmark_search(&corpus, &query);
            } else {
                run_search(&corpus, &query, limit, json);
            }
        }
        Commands::Repl { corpus } => run_repl(&corpus),
        Commands::Stats { corpus } => run_stats(&corpus),
    }
}

/// Load a corpus, with a spinner when the terminal will show it.
fn load_corpus(path: &str) -> (Corpus, Duration) {
    #[cfg(feature = "parallel")]
    let spinner = {
        let pb = indicatif::ProgressBar::new_spinner();
        pb.set_style(
            indicatif::ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| indicatif::ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("Loading {}...", path));
        pb.enable_steady_tick(Duration::from_millis(80));
        pb
    };

    let start = Instant::now();
    let corpus = Corpus::load(path);
    let elapsed = start.elapsed();

    #[cfg(feature = "parallel")]
    spinner.finish_and_clear();

    if corpus.is_empty() {
        eprintln!(
            "{}",
            paint(Tone::Warn, &format!("note: {} loaded empty", path))
        );
    }
    (corpus, elapsed)
}

fn parse_or_exit(text: &str, corpus: &Corpus) -> Query {
    match parse_query(text, corpus) {
        Ok(query) => query,
        Err(e) => {
            eprintln!(
                "{}",
                paint(Tone::Bad, &format!("query syntax error: {}", e))
            );
            std::process::exit(1);
        }
    }
}

/// One-shot search: load, parse, evaluate, display.
fn run_search(path: &str, query_text: &str, limit: usize, json: bool) {
    let (corpus, load_time) = load_corpus(path);
    let query = parse_or_exit(query_text, &corpus);

    let eval_start = Instant::now();
    let matches = find_matches(&corpus, &query);
    let eval_time = eval_start.elapsed();

    if json {
        match serde_json::to_string_pretty(&matches) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("error: could not serialize matches: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    heading("korpus search");
    field("corpus", path);
    field("query", query_text);
    field("tokens", &corpus.len().to_string());
    field("load", &fmt_timing(load_time, Duration::from_millis(150)));
    field("evaluate", &fmt_timing(eval_time, Duration::from_millis(1)));

    print_matches(&corpus, &matches, limit);
}

/// Interactive loop: one query per line, empty line exits.
fn run_repl(path: &str) {
    let (corpus, _) = load_corpus(path);
    println!(
        "{} tokens, {} sentences. Empty line exits.",
        corpus.len(),
        corpus.sentence_count()
    );

    let stdin = std::io::stdin();
    loop {
        print!("query> ");
        if std::io::stdout().flush().is_err() {
            break;
        }
        let mut line = String::new();
        match stdin.read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                eprintln!("error reading input: {}", e);
                break;
            }
        }
        let text = line.trim();
        if text.is_empty() {
            break;
        }

        match corpus.query(text) {
            Ok(matches) => print_matches(&corpus, &matches, 10),
            Err(e) => eprintln!(
                "{}",
                paint(Tone::Bad, &format!("query syntax error: {}", e))
            ),
        }
    }
}

/// Corpus summary.
fn run_stats(path: &str) {
    let (corpus, load_time) = load_corpus(path);

    heading("corpus");
    field("file", path);
    field("tokens", &corpus.len().to_string());
    field("sentences", &corpus.sentence_count().to_string());
    let avg = if corpus.sentence_count() > 0 {
        corpus.len() as f64 / corpus.sentence_count() as f64
    } else {
        0.0
    };
    field("avg length", &format!("{:.1}", avg));
    field("load", &fmt_timing(load_time, Duration::from_millis(150)));

    heading("distinct values");
    field("terms", &corpus.distinct_terms().to_string());
    for attr in korpus::Attr::ALL {
        field(attr.as_str(), &corpus.distinct_values(attr).to_string());
    }
    println!();
}

// ============================================================================
// BENCHMARK MODE
// ============================================================================

/// Mean and spread of a timing sample, in microseconds.
struct Timing {
    mean: f64,
    std_dev: f64,
    min: f64,
    max: f64,
}

impl Timing {
    fn of(samples: &[f64]) -> Timing {
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let var = samples.iter().map(|s| (s - mean) * (s - mean)).sum::<f64>() / (n - 1.0);
        Timing {
            mean,
            std_dev: var.sqrt(),
            min: samples.iter().copied().fold(f64::INFINITY, f64::min),
            max: samples.iter().copied().fold(0.0, f64::max),
        }
    }

    /// The mean is settled once its standard error drops under one percent
    /// of the mean itself. Noisy queries keep sampling; quiet ones stop
    /// early.
    fn settled(&self, n: usize) -> bool {
        self.mean > 0.0 && self.std_dev / (n as f64).sqrt() < self.mean * 0.01
    }
}

/// Benchmark one query with adaptive sampling.
fn benchmark_search(path: &str, query_text: &str) {
    const WARMUP: usize = 50;
    const MIN_SAMPLES: usize = 30;
    const MAX_SAMPLES: usize = 1000;

    let (corpus, load_time) = load_corpus(path);
    let query = parse_or_exit(query_text, &corpus);

    heading("korpus benchmark");
    field("corpus", path);
    field("query", query_text);
    field("load", &fmt_timing(load_time, Duration::from_millis(150)));
    println!();

    // Prime caches and the branch predictor before timing anything.
    let mut matches: Vec<Match> = Vec::new();
    for _ in 0..WARMUP {
        matches = find_matches(&corpus, &query);
    }

    let mut samples: Vec<f64> = Vec::with_capacity(MAX_SAMPLES);
    print!("  sampling ");
    let _ = std::io::stdout().flush();

    loop {
        let start = Instant::now();
        let result = find_matches(&corpus, &query);
        samples.push(start.elapsed().as_secs_f64() * 1e6);
        matches = result;

        let n = samples.len();
        if n % 100 == 0 {
            print!(".");
            let _ = std::io::stdout().flush();
        }
        if n >= MIN_SAMPLES {
            let timing = Timing::of(&samples);
            if timing.settled(n) || n >= MAX_SAMPLES {
                break;
            }
        }
    }
    println!(" done");

    let timing = Timing::of(&samples);
    let tokens_per_sec = if timing.mean > 0.0 {
        corpus.len() as f64 / (timing.mean / 1e6)
    } else {
        0.0
    };

    heading("results");
    field("samples", &samples.len().to_string());
    field(
        "mean",
        &format!(
            "{} {}",
            paint(Tone::Good, &format!("{:.2} µs", timing.mean)),
            paint(Tone::Note, &format!("σ {:.2}", timing.std_dev))
        ),
    );
    field(
        "range",
        &format!("{:.2} µs .. {:.2} µs", timing.min, timing.max),
    );
    field("matches", &matches.len().to_string());
    field("tokens/sec", &format!("{:.0}", tokens_per_sec));
    println!();
}
