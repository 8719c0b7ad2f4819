use async_trait::async_trait;
use serde::Serialize;
use url::Url;

use crate::config::types::BackendConfig;
use crate::types::{EnablementChange, TemplateRepository};

use super::error::BackendError;

/// Collection path under the backend base URL.
const REPOSITORIES_PATH: &str = "template-repositories";

/// Operations the panel performs against the backend repository API.
///
/// The panel controller only ever sees this trait, so tests can drive it with
/// a recording stub instead of a live backend.
#[async_trait]
pub trait RepositoryClient: Send + Sync {
    /// Fetch the current, ordered repository list. Never cached.
    async fn list(&self) -> Result<Vec<TemplateRepository>, BackendError>;

    /// Register a new repository. The backend rejects duplicates and
    /// unreachable URLs.
    async fn add(&self, url: &str, description: &str) -> Result<(), BackendError>;

    /// Remove a repository by URL. The backend rejects protected entries.
    async fn remove(&self, url: &str) -> Result<(), BackendError>;

    /// Apply an enablement batch. Failure is opaque: the backend may have
    /// applied none, some, or all entries.
    async fn set_enablement(&self, batch: &[EnablementChange]) -> Result<(), BackendError>;
}

#[derive(Serialize)]
struct AddRepositoryBody<'a> {
    url: &'a str,
    description: &'a str,
}

#[derive(Serialize)]
struct EnablementBody<'a> {
    repos: &'a [EnablementChange],
}

/// The real backend client, speaking JSON over HTTP via `reqwest`.
pub struct HttpRepositoryClient {
    http: reqwest::Client,
    base: Url,
    token: Option<String>,
}

impl HttpRepositoryClient {
    /// Build a client from config. Fails if the base URL does not parse or
    /// cannot carry path segments (e.g. a `mailto:` URL).
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let base = Url::parse(config.base_url.trim_end_matches('/')).map_err(|_| {
            BackendError::BaseUrl {
                url: config.base_url.clone(),
            }
        })?;
        if base.cannot_be_a_base() {
            return Err(BackendError::BaseUrl {
                url: config.base_url.clone(),
            });
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base,
            token: config.token.clone(),
        })
    }

    /// URL of the repository collection, with optional trailing segments.
    /// Segments are percent-encoded, so a full repository URL is safe as a
    /// single path segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, BackendError> {
        let mut url = self.base.clone();
        {
            let mut path = url.path_segments_mut().map_err(|()| BackendError::BaseUrl {
                url: self.base.to_string(),
            })?;
            path.push(REPOSITORIES_PATH);
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }

    fn request(&self, method: reqwest::Method, url: Url) -> reqwest::RequestBuilder {
        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

/// Turn a non-2xx response into `BackendError::Status`, keeping whatever
/// message body the backend sent.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    let message = message.trim().to_owned();
    Err(BackendError::Status { status, message })
}

#[async_trait]
impl RepositoryClient for HttpRepositoryClient {
    async fn list(&self) -> Result<Vec<TemplateRepository>, BackendError> {
        let url = self.endpoint(&[])?;
        tracing::debug!("backend: GET {url}");
        let response = self.request(reqwest::Method::GET, url).send().await?;
        let body = check_status(response).await?.text().await?;
        let repos = serde_json::from_str(&body)?;
        Ok(repos)
    }

    async fn add(&self, url: &str, description: &str) -> Result<(), BackendError> {
        let endpoint = self.endpoint(&[])?;
        tracing::debug!("backend: POST {endpoint} url={url}");
        let response = self
            .request(reqwest::Method::POST, endpoint)
            .json(&AddRepositoryBody { url, description })
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    async fn remove(&self, url: &str) -> Result<(), BackendError> {
        let endpoint = self.endpoint(&[url])?;
        tracing::debug!("backend: DELETE {endpoint}");
        let response = self.request(reqwest::Method::DELETE, endpoint).send().await?;
        check_status(response).await?;
        Ok(())
    }

    async fn set_enablement(&self, batch: &[EnablementChange]) -> Result<(), BackendError> {
        let endpoint = self.endpoint(&["enablement"])?;
        tracing::debug!("backend: POST {endpoint} entries={}", batch.len());
        let response = self
            .request(reqwest::Method::POST, endpoint)
            .json(&EnablementBody { repos: batch })
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}
