// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the korpus CLI: concordance lines and summaries.
//!
//! Matches print in KWIC (keyword-in-context) layout, the way concordancers
//! have always done it: the left context right-aligned into a fixed gutter,
//! the matched window painted, the right context trailing off. Long
//! contexts are clipped with an ellipsis so the hit column stays put.
//!
//! Color is deliberately thin. The CLI draws six things (headings, hits,
//! dim notes, and good/warn/bad signals), so those six roles are the whole
//! palette - one truecolor value each for dark and light backgrounds. The
//! background is read from `KORPUS_THEME` when set, otherwise guessed from
//! the `COLORFGBG` hint some terminals export, otherwise assumed dark.
//! `NO_COLOR` or a piped stdout turns styling off entirely; the matched
//! window then gets `[` `]` so pipelines still see where the hit was.

use korpus::{Corpus, Match, Pos};
use std::sync::OnceLock;
use std::time::Duration;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// Visible width of the left-context gutter in a concordance line.
const LEFT_WIDTH: usize = 28;
/// Clip point for the right context.
const RIGHT_WIDTH: usize = 44;

// ═══════════════════════════════════════════════════════════════════════════
// TONES
// ═══════════════════════════════════════════════════════════════════════════

/// The roles this CLI colors. Nothing else gets styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Section headings.
    Heading,
    /// The matched window of a concordance line.
    Hit,
    /// Dim metadata: sentence numbers, field labels.
    Note,
    /// Timings under budget, totals.
    Good,
    /// Timings over budget.
    Warn,
    /// Errors and badly slow timings.
    Bad,
}

/// One truecolor value per role and background. Hits lean amber so they
/// read as highlights rather than syntax.
fn tone_rgb(tone: Tone, dark: bool) -> (u8, u8, u8) {
    match (tone, dark) {
        (Tone::Heading, true) => (86, 156, 214),
        (Tone::Heading, false) => (38, 102, 180),
        (Tone::Hit, true) => (255, 199, 88),
        (Tone::Hit, false) => (146, 91, 0),
        (Tone::Note, true) => (110, 118, 129),
        (Tone::Note, false) => (140, 145, 150),
        (Tone::Good, true) => (96, 200, 120),
        (Tone::Good, false) => (34, 134, 58),
        (Tone::Warn, true) => (224, 175, 104),
        (Tone::Warn, false) => (154, 103, 0),
        (Tone::Bad, true) => (242, 110, 110),
        (Tone::Bad, false) => (196, 46, 38),
    }
}

/// Is the terminal background dark? `KORPUS_THEME` wins; `COLORFGBG`
/// ("fg;bg", occasionally "fg;default;bg") is consulted next, where the
/// low half of the 16-color cube plus bright black count as dark. With no
/// signal at all, dark is the safer guess.
fn detect_dark_background() -> bool {
    if let Ok(pref) = std::env::var("KORPUS_THEME") {
        if pref.eq_ignore_ascii_case("light") || pref.eq_ignore_ascii_case("l") {
            return false;
        }
        if pref.eq_ignore_ascii_case("dark") || pref.eq_ignore_ascii_case("d") {
            return true;
        }
    }
    if let Ok(hint) = std::env::var("COLORFGBG") {
        if let Some(bg) = hint.rsplit(';').next().and_then(|s| s.parse::<u8>().ok()) {
            return bg <= 6 || bg == 8;
        }
    }
    true
}

fn dark_background() -> bool {
    static DARK: OnceLock<bool> = OnceLock::new();
    *DARK.get_or_init(detect_dark_background)
}

/// Styling is on only for an interactive stdout with `NO_COLOR` unset.
pub fn colors_enabled() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| {
        std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
    })
}

/// Color `text` for its role, or pass it through untouched.
pub fn paint(tone: Tone, text: &str) -> String {
    if !colors_enabled() {
        return text.to_string();
    }
    let (r, g, b) = tone_rgb(tone, dark_background());
    format!("\x1b[38;2;{};{};{}m{}{}", r, g, b, text, RESET)
}

/// Bold variant of [`paint`].
pub fn strong(tone: Tone, text: &str) -> String {
    if !colors_enabled() {
        return text.to_string();
    }
    let (r, g, b) = tone_rgb(tone, dark_background());
    format!("{}\x1b[38;2;{};{};{}m{}{}", BOLD, r, g, b, text, RESET)
}

// ═══════════════════════════════════════════════════════════════════════════
// SUMMARY LAYOUT
// ═══════════════════════════════════════════════════════════════════════════

/// `── heading ─────` rule. Pad before painting so the escape codes never
/// enter the width math.
pub fn heading(text: &str) {
    const WIDTH: usize = 64;
    let rule = "─".repeat(WIDTH.saturating_sub(text.chars().count() + 4));
    println!(
        "\n{} {} {}",
        paint(Tone::Note, "──"),
        strong(Tone::Heading, text),
        paint(Tone::Note, &rule)
    );
}

/// One `label  value` summary line under a heading.
pub fn field(label: &str, value: &str) {
    println!("  {} {}", paint(Tone::Note, &format!("{:<11}", label)), value);
}

/// A duration with an auto-picked unit, toned against `budget`: within
/// budget is good, up to ten times over is a warning, beyond that is bad.
pub fn fmt_timing(d: Duration, budget: Duration) -> String {
    let text = if d.as_secs_f64() >= 1.0 {
        format!("{:.2} s", d.as_secs_f64())
    } else if d.as_millis() >= 1 {
        format!("{:.2} ms", d.as_secs_f64() * 1e3)
    } else {
        format!("{:.0} µs", d.as_secs_f64() * 1e6)
    };
    let tone = if d <= budget {
        Tone::Good
    } else if d <= budget * 10 {
        Tone::Warn
    } else {
        Tone::Bad
    };
    paint(tone, &text)
}

// ═══════════════════════════════════════════════════════════════════════════
// CONCORDANCE RENDERING
// ═══════════════════════════════════════════════════════════════════════════

/// Keep the last `width` columns, ellipsis in front when clipped.
fn clip_left(s: &str, width: usize) -> String {
    let count = s.chars().count();
    if count <= width {
        return s.to_string();
    }
    let tail: String = s.chars().skip(count - (width - 1)).collect();
    format!("…{}", tail)
}

/// Keep the first `width` columns, ellipsis at the end when clipped.
fn clip_right(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let head: String = s.chars().take(width - 1).collect();
    format!("{}…", head)
}

/// Surface words of the token range `[from, to)`, space-joined.
fn words(corpus: &Corpus, from: Pos, to: Pos) -> String {
    (from..to)
        .map(|p| corpus.resolve(corpus.token(p).word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One KWIC line: sentence number, right-aligned left context, painted
/// window, clipped right context.
pub fn kwic_line(corpus: &Corpus, m: &Match) -> String {
    let (start, end) = corpus.sentence_bounds(m.sentence);
    let hit_from = start + m.pos as Pos;
    let hit_to = hit_from + m.len as Pos;

    let left = clip_left(&words(corpus, start, hit_from), LEFT_WIDTH);
    let hit = words(corpus, hit_from, hit_to);
    let right = clip_right(&words(corpus, hit_to, end), RIGHT_WIDTH);

    let window = if colors_enabled() {
        strong(Tone::Hit, &hit)
    } else {
        format!("[{}]", hit)
    };

    format!(
        "{} {:>lw$} {} {}",
        paint(Tone::Note, &format!("{:>6}", m.sentence)),
        left,
        window,
        right,
        lw = LEFT_WIDTH
    )
}

/// Print a match list as a concordance: first `limit` lines, then the total.
pub fn print_matches(corpus: &Corpus, matches: &[Match], limit: usize) {
    if matches.is_empty() {
        println!("No matches found.");
        return;
    }

    println!();
    let shown = matches.len().min(limit);
    for m in &matches[..shown] {
        println!("{}", kwic_line(corpus, m));
    }
    if matches.len() > shown {
        println!(
            "{}",
            paint(
                Tone::Note,
                &format!("       … {} more not shown", matches.len() - shown)
            )
        );
    }
    println!(
        "\n{}",
        paint(Tone::Good, &format!("{} match(es)", matches.len()))
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
