//! Composite scoring of a candidate phrase against a user message
//!
//! The score is an additive integer built from independent heuristics:
//! exact/substring match, word-boundary token hits, a full-coverage bonus and
//! a single-token-equality bonus. Weights are a fixed policy table tuned
//! against the knowledge catalog; changing them changes ranking behavior.

use ahash::AHashSet;
use std::sync::OnceLock;

use crate::text::{contains_word, normalize};

/// Exact canonical equality of message and candidate.
pub const SCORE_EXACT: u32 = 15;
/// Candidate phrase wholly contained in a longer message.
pub const SCORE_MESSAGE_CONTAINS_TITLE: u32 = 12;
/// Short message contained in the candidate (gated by `MIN_FRAGMENT_CHARS`).
pub const SCORE_TITLE_CONTAINS_MESSAGE: u32 = 10;
/// Each candidate token matched in the message.
pub const SCORE_TOKEN_HIT: u32 = 4;
/// Every eligible token matched.
pub const SCORE_FULL_COVERAGE: u32 = 5;
/// Message equals one token of a multi-token candidate.
pub const SCORE_EXACT_TOKEN: u32 = 8;

/// Minimum token length to survive filtering.
pub const MIN_TOKEN_CHARS: usize = 3;
/// Minimum length for the substring-containment branches.
pub const MIN_FRAGMENT_CHARS: usize = 4;

static STOPWORDS: OnceLock<AHashSet<&'static str>> = OnceLock::new();

/// Italian articles/prepositions plus a few English function words.
/// Read-only for the process lifetime.
fn stopwords() -> &'static AHashSet<&'static str> {
    STOPWORDS.get_or_init(|| {
        [
            "della", "delle", "degli", "dello", "dell", "d", "del", "dei", "di", "da", "a", "al",
            "allo", "alla", "alle", "ai", "il", "lo", "la", "i", "gli", "le", "un", "uno", "una",
            "and", "or", "the", "of", "to", "in", "on", "for",
        ]
        .into_iter()
        .collect()
    })
}

/// Score a candidate title or keyword against a user message.
///
/// Both inputs are normalized first; the stages run in a fixed order and each
/// adds a non-negative contribution, so the result is deterministic and never
/// negative. Identical inputs always yield the identical score.
pub fn score_title(title: &str, user_message: &str) -> u32 {
    let msg_norm = normalize(user_message);
    let t = normalize(title);
    let msg_chars = msg_norm.chars().count();

    let mut score = 0u32;

    // 1) Exact match or full substring (high confidence); first branch wins.
    if msg_norm == t {
        score += SCORE_EXACT;
    } else if msg_norm.contains(&t) {
        score += SCORE_MESSAGE_CONTAINS_TITLE;
    } else if t.contains(&msg_norm) && msg_chars >= MIN_FRAGMENT_CHARS {
        score += SCORE_TITLE_CONTAINS_MESSAGE;
    }

    // 2) Token matching (word boundaries)
    let stop = stopwords();
    let tokens: Vec<&str> = t
        .split(' ')
        .filter(|tok| tok.chars().count() >= MIN_TOKEN_CHARS && !stop.contains(tok))
        .collect();

    let mut hits = 0usize;
    for tok in &tokens {
        if contains_word(tok, &msg_norm)
            || (msg_chars >= MIN_FRAGMENT_CHARS && tok.contains(&msg_norm))
            || (tok.chars().count() >= MIN_FRAGMENT_CHARS && msg_norm.contains(tok))
        {
            hits += 1;
            score += SCORE_TOKEN_HIT;
            tracing::debug!("token hit: {tok}");
        }
    }

    // 3) Bonus for covering every eligible token
    if hits > 0 && hits == tokens.len() {
        score += SCORE_FULL_COVERAGE;
    }

    // 4) Message is exactly one token of a multi-token candidate
    if tokens.len() > 1 && tokens.iter().any(|tok| *tok == msg_norm) {
        score += SCORE_EXACT_TOKEN;
    }

    score
}
