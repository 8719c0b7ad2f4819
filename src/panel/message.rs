use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::EnablementChange;

/// A message received from the panel UI surface.
///
/// Wire form is `{"type": ..., "data": ...}`; the payload shape is fixed per
/// type and decoded exactly once, here. Anything that does not match a known
/// variant is a [`ProtocolError`], which the host logs and drops without
/// touching the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
pub enum UiMessage {
    /// Prompt the user for a new repository URL and description.
    AddNew,
    /// Remove the repository with this URL.
    Delete(String),
    /// Apply an enablement batch.
    EnableDisable(EnablementBatch),
    /// Show the help content.
    Help,
    /// Re-fetch and re-render the repository list.
    Refresh,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EnablementBatch {
    pub repos: Vec<EnablementChange>,
}

/// An incoming message that does not decode to any known [`UiMessage`].
#[derive(Debug, Error)]
#[error("unrecognized panel message: {0}")]
pub struct ProtocolError(#[from] serde_json::Error);

impl UiMessage {
    pub fn decode(raw: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(raw)?)
    }
}
