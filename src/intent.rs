//! Coarse intent classification of user messages

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::text::normalize;

/// High-level category of a user message, used by the host to route
/// between canned answers, catalog lookup and the remote fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    ProductInfo,
    Procedure,
    TrainingHelp,
    Greeting,
    Help,
    General,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::ProductInfo => "product_info",
            Intent::Procedure => "procedure",
            Intent::TrainingHelp => "training_help",
            Intent::Greeting => "greeting",
            Intent::Help => "help",
            Intent::General => "general",
        }
    }
}

/// Classifies a message into one of the fixed intent categories.
///
/// Patterns are compiled once and checked in declaration order; the first
/// match wins and anything unmatched is `General`.
pub struct IntentDetector {
    patterns: Vec<(Regex, Intent)>,
}

impl IntentDetector {
    pub fn new() -> Self {
        // Compile regex patterns once - these are literals and never fail
        let patterns = vec![
            (
                Regex::new(r"\b(coni|cono|gusti|grammi|buontalenti|gelato|prezzo|peso)\b")
                    .expect("Invalid regex pattern"),
                Intent::ProductInfo,
            ),
            (
                Regex::new(r"\b(apertura|chiusura|procedura|procedure|come\s+si|setup|pulizia|sanificazione)\b")
                    .expect("Invalid regex pattern"),
                Intent::Procedure,
            ),
            (
                Regex::new(r"\b(quiz|stelle|punti|modulo|capitolo|corso|token)\b")
                    .expect("Invalid regex pattern"),
                Intent::TrainingHelp,
            ),
            (
                Regex::new(r"\b(ciao|salve|buongiorno|buonasera|hey|hola|hello)\b")
                    .expect("Invalid regex pattern"),
                Intent::Greeting,
            ),
            (
                Regex::new(r"\b(aiuto|help|non\s+capisco|come\s+funziona)\b")
                    .expect("Invalid regex pattern"),
                Intent::Help,
            ),
        ];

        Self { patterns }
    }

    pub fn detect(&self, message: &str) -> Intent {
        let msg = normalize(message);

        for (pattern, intent) in &self.patterns {
            if pattern.is_match(&msg) {
                return *intent;
            }
        }
        Intent::General
    }
}

impl Default for IntentDetector {
    fn default() -> Self {
        Self::new()
    }
}
