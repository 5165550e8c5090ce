//! Internal API types for the Hugging Face Hub.
//!
//! These types are internal to `hfsnap-hf` and are not exposed to consumers.

use hfsnap_core::RepoKind;
use serde::Deserialize;
use url::Url;

use crate::config::DEFAULT_ENDPOINT;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration for the Hugging Face client.
#[derive(Debug, Clone)]
pub struct HfConfig {
    /// Hub endpoint, always without a trailing slash in its path
    pub endpoint: Url,
}

impl Default for HfConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default HF endpoint is valid"),
        }
    }
}

// ============================================================================
// Repository Reference
// ============================================================================

/// Reference to a hub repository of a given kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HfRepoRef {
    /// Repository kind
    pub kind: RepoKind,
    /// Namespaced ID (`owner/name`, or a bare name for legacy repos)
    pub id: String,
}

impl HfRepoRef {
    /// Create a new repository reference.
    pub fn new(kind: RepoKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }
}

impl std::fmt::Display for HfRepoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.kind.url_prefix(), self.id)
    }
}

// ============================================================================
// Repository Info
// ============================================================================

/// Response of the `/api/{kind}s/{id}/revision/{rev}` endpoint.
///
/// Only the fields a snapshot needs are decoded.
#[derive(Debug, Clone, Deserialize)]
pub struct HfRepoInfo {
    /// Repository ID as reported by the hub
    #[serde(default)]
    pub id: Option<String>,
    /// Commit the requested revision resolved to
    #[serde(default)]
    pub sha: Option<String>,
    /// Files at that commit
    #[serde(default)]
    pub siblings: Vec<HfSibling>,
}

/// A file entry in [`HfRepoInfo::siblings`].
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct HfSibling {
    /// Path relative to the repository root, `/`-separated
    pub rfilename: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_repo_ref_display() {
        let repo = HfRepoRef::new(RepoKind::Dataset, "wyzelabs/RuleRecommendation");
        assert_eq!(repo.to_string(), "datasets/wyzelabs/RuleRecommendation");

        let repo = HfRepoRef::new(RepoKind::Model, "gpt2");
        assert_eq!(repo.to_string(), "gpt2");
    }

    #[test]
    fn test_repo_info_deserialize() {
        let info: HfRepoInfo = serde_json::from_value(json!({
            "id": "wyzelabs/RuleRecommendation",
            "sha": "0123abcd",
            "private": false,
            "siblings": [
                {"rfilename": ".gitattributes"},
                {"rfilename": "README.md"}
            ]
        }))
        .unwrap();

        assert_eq!(info.sha.as_deref(), Some("0123abcd"));
        assert_eq!(info.siblings.len(), 2);
        assert_eq!(info.siblings[1].rfilename, "README.md");
    }

    #[test]
    fn test_repo_info_missing_siblings_defaults_empty() {
        let info: HfRepoInfo = serde_json::from_value(json!({"id": "org/set"})).unwrap();
        assert!(info.siblings.is_empty());
        assert!(info.sha.is_none());
    }
}
