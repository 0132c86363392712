//! Engine configuration

use serde::{Deserialize, Serialize};

use crate::matcher::DEFAULT_MIN_SCORE;

/// Where unanswered messages are resolved: locally (canned fallback text in
/// the host) or via a proxy endpoint in front of a completion API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Local,
    Proxy,
}

/// Configuration supplied by the embedding application.
///
/// Unknown or malformed input degrades to the defaults; the engine never
/// refuses to start over a bad config blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub provider: Provider,
    /// Only meaningful when `provider` is `Proxy`, e.g. "/api/assistant".
    pub proxy_endpoint: String,
    /// Catalog hits below this score are treated as "no match".
    pub min_score: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            provider: Provider::Local,
            proxy_endpoint: String::new(),
            min_score: DEFAULT_MIN_SCORE,
        }
    }
}

impl EngineConfig {
    /// Parse a JSON config blob, falling back to defaults on any error.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("invalid engine config, using defaults: {e}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.provider, Provider::Local);
        assert!(config.proxy_endpoint.is_empty());
        assert_eq!(config.min_score, DEFAULT_MIN_SCORE);
    }

    #[test]
    fn test_from_json_partial() {
        let config = EngineConfig::from_json(r#"{"provider":"proxy","proxy_endpoint":"/api/assistant"}"#);
        assert_eq!(config.provider, Provider::Proxy);
        assert_eq!(config.proxy_endpoint, "/api/assistant");
        assert_eq!(config.min_score, DEFAULT_MIN_SCORE);
    }

    #[test]
    fn test_from_json_malformed_falls_back() {
        assert_eq!(EngineConfig::from_json("not json at all"), EngineConfig::default());
        assert_eq!(EngineConfig::from_json(""), EngineConfig::default());
        assert_eq!(EngineConfig::from_json(r#"{"min_score":"high"}"#), EngineConfig::default());
    }
}
