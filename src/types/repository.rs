use serde::{Deserialize, Serialize};

/// One template repository known to the backend.
///
/// The `url` doubles as the unique identifier; the backend fetches the
/// template index from it. Records are read-only on this side — every change
/// goes through the backend API and is observed via a fresh list fetch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TemplateRepository {
    pub url: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub enabled: bool,
    /// Protected repositories cannot be deleted or disabled.
    #[serde(default)]
    pub protected: bool,
}

/// A single entry of an enablement batch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EnablementChange {
    /// Repository identifier — the repository URL.
    #[serde(rename = "repoID")]
    pub repo_id: String,
    pub enable: bool,
}
