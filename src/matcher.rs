//! Knowledge-base lookup - scoring of user input against catalog entries

use crate::scoring::score_title;
use crate::types::{KbMatch, KnowledgeEntry, LookupResult};

/// Minimum score for a catalog hit; anything below falls back to the
/// caller's remote resolution path. Two token hits (or any substring-level
/// match) clear it.
pub const DEFAULT_MIN_SCORE: u32 = 8;

/// Match user input against every entry in the catalog.
///
/// An entry's score is the best `score_title` over its title and each of its
/// trigger keywords. Entries below `min_score` are dropped; ties between the
/// survivors are broken by declaration order (first entry wins).
pub fn lookup(message: &str, entries: &[KnowledgeEntry], min_score: u32) -> LookupResult {
    if entries.is_empty() {
        return LookupResult::None;
    }

    let mut scored: Vec<(KbMatch, u32)> = Vec::with_capacity(entries.len());

    for entry in entries {
        let mut best_score = score_title(&entry.title, message);
        let mut best_phrase = entry.title.as_str();

        for keyword in &entry.keywords {
            let keyword_score = score_title(keyword, message);
            if keyword_score > best_score {
                best_score = keyword_score;
                best_phrase = keyword.as_str();
            }
        }

        if best_score >= min_score {
            let kb_match = KbMatch::new(
                entry.id.clone(),
                entry.kind,
                best_score,
                best_phrase.to_string(),
                message.to_string(),
            );
            scored.push((kb_match, best_score));
        }
    }

    if scored.is_empty() {
        tracing::debug!("no entry cleared min_score={min_score}");
        return LookupResult::None;
    }

    // Stable sort keeps declaration order between equal scores.
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    let (winner, score) = scored.remove(0);
    tracing::debug!(entry = %winner.entry_id, score, "catalog hit");
    LookupResult::Match(winner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntryKind;

    fn entry(id: &str, title: &str, keywords: &[&str]) -> KnowledgeEntry {
        KnowledgeEntry::new(
            id.to_string(),
            EntryKind::Product,
            title.to_string(),
            keywords.iter().map(|k| k.to_string()).collect(),
            format!("info su {title}"),
            Vec::new(),
        )
    }

    fn catalog() -> Vec<KnowledgeEntry> {
        vec![
            entry("giallo", "Smoothie Giallo Passion", &[]),
            entry("rosso", "Smoothie Rosso Berry", &[]),
            entry("verde", "Smoothie Verde Boost", &[]),
        ]
    }

    #[test]
    fn test_best_entry_wins() {
        match lookup("smoothie berry", &catalog(), DEFAULT_MIN_SCORE) {
            LookupResult::Match(m) => {
                assert_eq!(m.entry_id, "rosso");
                assert_eq!(m.score, 8);
                assert_eq!(m.source, "knowledge_base");
            }
            LookupResult::None => panic!("Expected match"),
        }
    }

    #[test]
    fn test_below_threshold_is_none() {
        // A single token hit (4) stays under the default threshold
        match lookup("frullato verde", &catalog(), DEFAULT_MIN_SCORE) {
            LookupResult::None => {}
            LookupResult::Match(m) => panic!("Expected none, got {}", m.entry_id),
        }
    }

    #[test]
    fn test_keyword_beats_title() {
        let entries = vec![entry(
            "buontalenti",
            "Storia del gusto firma",
            &["buontalenti", "gelato storico"],
        )];

        match lookup("buontalenti", &entries, DEFAULT_MIN_SCORE) {
            LookupResult::Match(m) => {
                assert_eq!(m.matched_phrase, "buontalenti");
                assert!(m.score >= 15);
            }
            LookupResult::None => panic!("Expected match"),
        }
    }

    #[test]
    fn test_tie_prefers_first_declared() {
        let entries = vec![
            entry("primo", "Gelato Crema", &[]),
            entry("secondo", "Gelato Limone", &[]),
        ];

        // "gelato" scores both titles identically (one token hit + substring rule)
        match lookup("gelato", &entries, 1) {
            LookupResult::Match(m) => assert_eq!(m.entry_id, "primo"),
            LookupResult::None => panic!("Expected match"),
        }
    }

    #[test]
    fn test_empty_catalog() {
        match lookup("qualsiasi", &[], DEFAULT_MIN_SCORE) {
            LookupResult::None => {}
            _ => panic!("Expected none"),
        }
    }
}
