// src/core/duplicates/headings.rs
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static CODE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```.*?```").expect("valid regex literal"));

/// Normalized headings of a markdown document: marker-stripped, trimmed and
/// lower-cased. Repeated headings collapse into one.
#[must_use]
pub fn extract_headings(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with('#'))
        .map(|line| line.trim_start_matches('#').trim().to_lowercase())
        .filter(|heading| !heading.is_empty())
        .collect()
}

/// Jaccard similarity of two heading sets; 0.0 when either side is empty.
#[must_use]
pub fn heading_overlap(first: &BTreeSet<String>, second: &BTreeSet<String>) -> f64 {
    if first.is_empty() || second.is_empty() {
        return 0.0;
    }
    let shared = first.intersection(second).count();
    let union = first.union(second).count();
    shared as f64 / union as f64
}

/// Headings only in `first`, only in `second`, and in both.
#[must_use]
pub fn find_unique_headings(
    first: &BTreeSet<String>,
    second: &BTreeSet<String>,
) -> (BTreeSet<String>, BTreeSet<String>, BTreeSet<String>) {
    (
        first.difference(second).cloned().collect(),
        second.difference(first).cloned().collect(),
        first.intersection(second).cloned().collect(),
    )
}

/// Drops every fenced code block, fences included. Matching is non-greedy, so
/// an unterminated trailing fence is left in place.
#[must_use]
pub fn remove_code_blocks(markdown: &str) -> String {
    CODE_BLOCK.replace_all(markdown, "").into_owned()
}
