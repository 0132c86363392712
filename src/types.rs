//! Core data types for the knowledge catalog and lookup results

use serde::{Deserialize, Serialize};

/// Section of the knowledge catalog an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Product,
    Procedure,
    Faq,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Product => "product",
            EntryKind::Procedure => "procedure",
            EntryKind::Faq => "faq",
        }
    }
}

/// A single knowledge-base entry: a title, its trigger keywords and the
/// canned response shown when the entry wins a lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub id: String,
    pub kind: EntryKind,
    pub title: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub response: String,
    /// Optional step list substituted into the response template.
    #[serde(default)]
    pub steps: Vec<String>,
}

impl KnowledgeEntry {
    pub fn new(
        id: String,
        kind: EntryKind,
        title: String,
        keywords: Vec<String>,
        response: String,
        steps: Vec<String>,
    ) -> Self {
        Self {
            id,
            kind,
            title,
            keywords,
            response,
            steps,
        }
    }

    /// Response text with the `{steps}` placeholder expanded to the
    /// newline-joined step list. Entries without steps pass through unchanged.
    pub fn rendered_response(&self) -> String {
        if self.steps.is_empty() {
            return self.response.clone();
        }
        self.response.replace("{steps}", &self.steps.join("\n"))
    }
}

/// A winning catalog entry with its score and provenance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KbMatch {
    pub entry_id: String,
    pub kind: EntryKind,
    pub score: u32,
    /// The title or keyword that produced the entry's best score.
    pub matched_phrase: String,
    pub original_input: String,
    pub source: String, // "knowledge_base" or "llm"
}

impl KbMatch {
    pub fn new(
        entry_id: String,
        kind: EntryKind,
        score: u32,
        matched_phrase: String,
        original_input: String,
    ) -> Self {
        Self {
            entry_id,
            kind,
            score,
            matched_phrase,
            original_input,
            source: "knowledge_base".to_string(),
        }
    }
}

/// Result type for catalog lookups
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LookupResult {
    #[serde(rename = "match")]
    Match(KbMatch),
    #[serde(rename = "none")]
    None,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendered_response_substitutes_steps() {
        let entry = KnowledgeEntry::new(
            "apertura".to_string(),
            EntryKind::Procedure,
            "Apertura negozio".to_string(),
            vec!["apertura".to_string(), "setup".to_string()],
            "Procedura apertura:\n{steps}\nFatto!".to_string(),
            vec!["Controlla temperatura".to_string(), "Accendi POS".to_string()],
        );

        let rendered = entry.rendered_response();
        assert!(rendered.contains("Controlla temperatura\nAccendi POS"));
        assert!(!rendered.contains("{steps}"));
    }

    #[test]
    fn test_rendered_response_without_steps() {
        let entry = KnowledgeEntry::new(
            "coni".to_string(),
            EntryKind::Product,
            "Coni".to_string(),
            Vec::new(),
            "Coni: piccolo, medio, grande.".to_string(),
            Vec::new(),
        );
        assert_eq!(entry.rendered_response(), entry.response);
    }
}
