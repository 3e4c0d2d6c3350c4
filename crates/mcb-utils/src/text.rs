//! Grapheme-aware text truncation and lightweight token-overlap scoring.
//!
//! The token-overlap helpers back the "heuristic similarity without
//! embeddings" scorers the conflict-detection and pattern-inference engines
//! use (spec §9 — "treat them as explicit pluggable scorers").

use std::collections::HashSet;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// Truncate `text` to at most `max_graphemes` Unicode grapheme clusters,
/// appending an ellipsis if truncated. Never splits inside a grapheme.
#[must_use]
pub fn truncate_graphemes(text: &str, max_graphemes: usize) -> String {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    if graphemes.len() <= max_graphemes {
        return text.to_owned();
    }
    let mut out: String = graphemes[..max_graphemes].concat();
    out.push('\u{2026}');
    out
}

/// Lowercase, alphanumeric-only token set, filtering tokens shorter than
/// `min_len`. Used for Jaccard-style overlap scoring.
#[must_use]
pub fn tokenize(text: &str, min_len: usize) -> HashSet<String> {
    text.unicode_words()
        .map(str::to_lowercase)
        .filter(|w| w.chars().count() >= min_len)
        .collect()
}

/// Jaccard similarity between the token sets of two texts, in `[0, 1]`.
#[must_use]
pub fn jaccard_overlap(a: &str, b: &str) -> f32 {
    let tokens_a = tokenize(a, 2);
    let tokens_b = tokenize(b, 2);
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }
    let intersection = tokens_a.intersection(&tokens_b).count();
    let union = tokens_a.union(&tokens_b).count();
    if union == 0 {
        0.0
    } else {
        intersection as f32 / union as f32
    }
}

/// Compile a case-insensitive "whole word" regex for `needle`, escaping any
/// regex metacharacters in it first.
///
/// # Errors
///
/// Propagates `regex::Error` if somehow the escaped pattern still fails to
/// compile (should not happen in practice).
pub fn word_boundary_pattern(needle: &str) -> Result<Regex, regex::Error> {
    let escaped = regex::escape(needle);
    Regex::new(&format!(r"(?i)\b{escaped}\b"))
}
