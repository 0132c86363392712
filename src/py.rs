//! Python bindings for matcher core using PyO3

use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::config::EngineConfig;
use crate::intent::IntentDetector;
use crate::matcher::{lookup, DEFAULT_MIN_SCORE};
use crate::scoring::score_title;
use crate::text::normalize;
use crate::types::{EntryKind, KnowledgeEntry, LookupResult};

/// Normalize a value for comparison; None behaves as the empty string.
#[pyfunction]
#[pyo3(signature = (value=None))]
pub fn py_normalize(value: Option<&str>) -> String {
    normalize(value.unwrap_or(""))
}

/// Score a candidate title or keyword against a user message.
#[pyfunction]
pub fn py_score_title(title: &str, message: &str) -> u32 {
    score_title(title, message)
}

fn parse_kind(kind: &str) -> PyResult<EntryKind> {
    match kind {
        "product" => Ok(EntryKind::Product),
        "procedure" => Ok(EntryKind::Procedure),
        "faq" => Ok(EntryKind::Faq),
        other => Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
            "Unknown entry kind: {other}"
        ))),
    }
}

/// Python wrapper for the knowledge-base matcher
#[pyclass]
pub struct PyKnowledgeMatcher {
    entries: Vec<KnowledgeEntry>,
    min_score: u32,
}

#[pymethods]
impl PyKnowledgeMatcher {
    #[new]
    #[pyo3(signature = (min_score=DEFAULT_MIN_SCORE))]
    fn new(min_score: u32) -> Self {
        Self {
            entries: Vec::new(),
            min_score,
        }
    }

    /// Build a matcher from a JSON config blob (defaults on malformed input).
    #[staticmethod]
    fn from_config(raw: &str) -> Self {
        let config = EngineConfig::from_json(raw);
        Self {
            entries: Vec::new(),
            min_score: config.min_score,
        }
    }

    /// Add a catalog entry
    #[pyo3(signature = (id, kind, title, keywords, response, steps=Vec::new()))]
    fn add_entry(
        &mut self,
        id: String,
        kind: &str,
        title: String,
        keywords: Vec<String>,
        response: String,
        steps: Vec<String>,
    ) -> PyResult<()> {
        let kind = parse_kind(kind)?;
        self.entries
            .push(KnowledgeEntry::new(id, kind, title, keywords, response, steps));
        Ok(())
    }

    /// Match user input against the catalog
    fn lookup<'py>(&self, message: &str, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let result = lookup(message, &self.entries, self.min_score);

        match result {
            LookupResult::Match(m) => {
                let dict = PyDict::new_bound(py);
                dict.set_item("type", "match")?;
                dict.set_item("entry_id", &m.entry_id)?;
                dict.set_item("kind", m.kind.as_str())?;
                dict.set_item("score", m.score)?;
                dict.set_item("matched_phrase", m.matched_phrase)?;
                dict.set_item("original_input", m.original_input)?;
                dict.set_item("source", m.source)?;
                if let Some(entry) = self.entries.iter().find(|e| e.id == m.entry_id) {
                    dict.set_item("response", entry.rendered_response())?;
                }
                Ok(dict)
            }
            LookupResult::None => {
                let dict = PyDict::new_bound(py);
                dict.set_item("type", "none")?;
                Ok(dict)
            }
        }
    }

    /// Clear all entries
    fn clear(&mut self) {
        self.entries.clear();
    }

    /// Get number of entries
    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Python wrapper for the intent detector
#[pyclass]
pub struct PyIntentDetector {
    detector: IntentDetector,
}

#[pymethods]
impl PyIntentDetector {
    #[new]
    fn new() -> Self {
        Self {
            detector: IntentDetector::new(),
        }
    }

    /// Classify a message into one of the fixed intent categories
    fn detect(&self, message: &str) -> &'static str {
        self.detector.detect(message).as_str()
    }
}
