//! Utterance normalization
//!
//! The pure text-to-tokens capability the statistics counters consume:
//! lowercase, ASCII punctuation replaced by spaces, whitespace
//! tokenization. Kept free of any counter state so it can be swapped or
//! reused as-is.

use regex::Regex;
use std::sync::OnceLock;

fn punctuation() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r##"[!"#$%&'()*+,\-./:;<=>?@\\\[\]^_`{|}~]"##)
            .expect("punctuation class is valid")
    })
}

/// Normalize an utterance into lowercased, punctuation-free tokens.
#[must_use]
pub fn normalize(utterance: &str) -> Vec<String> {
    let lowered = utterance.to_lowercase();
    let stripped = punctuation().replace_all(&lowered, " ");
    stripped.split_whitespace().map(str::to_string).collect()
}
