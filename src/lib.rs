//! Matcher core - Rule-based intent matching for a static knowledge base
//!
//! This crate normalizes user utterances, scores them against catalog entry
//! titles and trigger keywords, and picks the best entry - or signals the
//! caller to fall back to a remote completion API when nothing clears the
//! minimum score.

pub mod types;
pub mod text;
pub mod scoring;
pub mod matcher;
pub mod intent;
pub mod config;

pub use types::*;
pub use text::*;
pub use scoring::*;
pub use matcher::*;
pub use intent::*;
pub use config::*;

// Python bindings
#[cfg(feature = "extension-module")]
pub mod py;

#[cfg(feature = "extension-module")]
use pyo3::prelude::*;

#[cfg(feature = "extension-module")]
#[pymodule]
fn matcher_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use py::*;
    m.add_class::<PyKnowledgeMatcher>()?;
    m.add_class::<PyIntentDetector>()?;
    m.add_function(wrap_pyfunction!(py_normalize, m)?)?;
    m.add_function(wrap_pyfunction!(py_score_title, m)?)?;
    Ok(())
}
