use serde::Deserialize;

/// Default backend endpoint, matching a local dev-tooling backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub backend: BackendConfig,
}

// ---------------------------------------------------------------------------
// Backend endpoint
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the backend API; the repository collection lives under
    /// `<base_url>/template-repositories`.
    pub base_url: String,
    /// Optional bearer token sent with every request.
    pub token: Option<String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            token: None,
        }
    }
}
