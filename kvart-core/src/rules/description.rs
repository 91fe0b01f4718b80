//! The description cleaner.
//!
//! TimeEdit descriptions carry internal booking identifiers ("ID 88213")
//! and raw newlines. The cleaner scrubs those and appends the instructor
//! names resolved by the summary rewriter.

use std::sync::LazyLock;

use regex::Regex;

/// Internal booking identifiers embedded in feed descriptions.
static ID_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"ID\s+\d+").unwrap());

/// Scrub booking identifiers and normalize whitespace. Idempotent: running
/// it on already-cleaned text is a no-op.
pub fn scrub(raw: &str) -> String {
    ID_TAG
        .replace_all(raw, "")
        .trim()
        .replace('\n', " ")
        .trim_matches([',', ' '])
        .to_string()
}

/// Build the final description: the cleaned feed text and the comma-joined
/// instructor list, joined with `" | "`. Empty segments are omitted; when
/// both are empty the result is the empty string.
pub fn compose(raw: &str, instructors: &[String]) -> String {
    let cleaned = scrub(raw);

    let mut segments = Vec::new();
    if !cleaned.is_empty() {
        segments.push(cleaned);
    }
    if !instructors.is_empty() {
        segments.push(instructors.join(", "));
    }

    segments.join(" | ")
}
