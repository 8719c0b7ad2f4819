use crate::backend::RepositoryClient;

use super::message::{EnablementBatch, UiMessage};
use super::render::render;
use super::surface::{PanelSurface, PromptRequest};
use super::validate::validate_repository_url;

const URL_PROMPT: &str = "Repository URL";
const DESCRIPTION_PROMPT: &str = "Repository description";

/// Substituted when the user cancels the description prompt.
const NO_DESCRIPTION: &str = "(No description)";

pub const HELP_TEXT: &str = "\
Template repositories panel

A template repository is a URL-addressed index of project templates the
backend fetches from. Point entries at raw file links (for GitHub, use
raw.githubusercontent.com), not at a provider's web pages.

Actions:
  add-new         prompt for a URL and description, then register it
  delete          remove a repository (protected entries are refused)
  enable-disable  toggle which repositories the backend uses
  refresh         re-fetch the list from the backend";

/// Factory invoked each time a new panel session is opened.
pub type SurfaceFactory = Box<dyn Fn() -> Box<dyn PanelSurface> + Send>;

/// The single live panel instance and its associated state.
struct PanelSession {
    surface: Box<dyn PanelSurface>,
}

/// Owns the process-wide singleton panel session and dispatches UI messages
/// to the backend.
///
/// All methods are invoked serially by the host loop, so the manager needs no
/// internal locking. Dispatch never propagates an error: every failure is
/// reported to the user or logged, and the session stays responsive.
pub struct PanelManager {
    session: Option<PanelSession>,
    make_surface: SurfaceFactory,
}

impl PanelManager {
    pub fn new(make_surface: SurfaceFactory) -> Self {
        Self {
            session: None,
            make_surface,
        }
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Open the panel, or bring the existing one forward.
    ///
    /// Only the first call creates a session; it is populated with an initial
    /// refresh. Subsequent calls while the session is live just reveal it.
    pub async fn open_or_focus(&mut self, client: &dyn RepositoryClient) {
        if let Some(session) = self.session.as_mut() {
            tracing::debug!("panel: reusing live session");
            session.surface.reveal();
            return;
        }
        tracing::debug!("panel: opening new session");
        self.session = Some(PanelSession {
            surface: (self.make_surface)(),
        });
        self.refresh(client).await;
    }

    /// Drop the session. Called when the host delivers the panel's disposal
    /// event; a later `open_or_focus` starts from scratch.
    pub fn dispose(&mut self) {
        if self.session.take().is_some() {
            tracing::debug!("panel: session disposed");
        }
    }

    /// Re-fetch the repository list and replace the panel content wholesale.
    ///
    /// Requires a live session; a call without one is a controller invariant
    /// violation and is logged, not propagated. On fetch failure the last
    /// rendered content stays visible.
    pub async fn refresh(&mut self, client: &dyn RepositoryClient) {
        let Some(session) = self.session.as_mut() else {
            tracing::error!("panel: refresh requested with no live session");
            return;
        };
        match client.list().await {
            Ok(repositories) => {
                tracing::debug!("panel: rendering {} repositories", repositories.len());
                session.surface.set_content(&render(&repositories));
            }
            Err(e) => {
                tracing::debug!("panel: list fetch failed: {e}");
                session
                    .surface
                    .notify_error(&format!("Failed to load template repositories: {e}"));
            }
        }
    }

    /// Decode-side counterpart of the UI message protocol: one arm per
    /// message type, each performing at most one mutating backend call
    /// followed by a refresh.
    pub async fn dispatch(&mut self, msg: UiMessage, client: &dyn RepositoryClient) {
        if self.session.is_none() {
            tracing::error!("panel: message dispatched with no live session");
            return;
        }
        match msg {
            UiMessage::AddNew => self.handle_add_new(client).await,
            UiMessage::Delete(url) => self.handle_delete(&url, client).await,
            UiMessage::EnableDisable(batch) => self.handle_enablement(batch, client).await,
            UiMessage::Help => {
                if let Some(session) = self.session.as_mut() {
                    session.surface.show_help(HELP_TEXT);
                }
            }
            UiMessage::Refresh => self.refresh(client).await,
        }
    }

    async fn handle_add_new(&mut self, client: &dyn RepositoryClient) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        // Cancelling the URL prompt aborts the whole action.
        let Some(url) = session
            .surface
            .prompt(PromptRequest {
                label: URL_PROMPT,
                validate: Some(validate_repository_url),
            })
            .await
        else {
            tracing::debug!("panel: add-new cancelled at URL prompt");
            return;
        };
        // Cancelling the description prompt substitutes a default.
        let description = session
            .surface
            .prompt(PromptRequest {
                label: DESCRIPTION_PROMPT,
                validate: None,
            })
            .await
            .unwrap_or_else(|| NO_DESCRIPTION.to_owned());

        match client.add(&url, &description).await {
            Ok(()) => self.refresh(client).await,
            Err(e) => self.notify(&format!("Failed to add {url}: {e}")),
        }
    }

    async fn handle_delete(&mut self, url: &str, client: &dyn RepositoryClient) {
        match client.remove(url).await {
            Ok(()) => self.refresh(client).await,
            Err(e) => self.notify(&format!("Failed to delete {url}: {e}")),
        }
    }

    async fn handle_enablement(&mut self, batch: EnablementBatch, client: &dyn RepositoryClient) {
        match client.set_enablement(&batch.repos).await {
            Ok(()) => self.refresh(client).await,
            Err(e) => {
                // Which entries the backend applied is unknowable here, so
                // re-sync to true backend state instead of reconciling.
                self.notify(&format!("Failed to update repository enablement: {e}"));
                self.refresh(client).await;
            }
        }
    }

    fn notify(&mut self, message: &str) {
        if let Some(session) = self.session.as_mut() {
            session.surface.notify_error(message);
        }
    }
}
