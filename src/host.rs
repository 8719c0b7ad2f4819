use anyhow::Result;

use crate::backend::RepositoryClient;
use crate::panel::surface::SharedInput;
use crate::panel::{PanelManager, UiMessage};

/// Serial panel host loop.
///
/// Opens the panel, then reads one JSON UI message per line from the shared
/// input stream and dispatches it. Messages are delivered strictly in order;
/// the next line is not read until the previous dispatch completes. EOF or a
/// bare `quit` line disposes the session and returns.
pub async fn run(
    manager: &mut PanelManager,
    client: &dyn RepositoryClient,
    input: SharedInput,
) -> Result<()> {
    manager.open_or_focus(client).await;

    loop {
        let line = input.lock().await.next_line().await?;
        let Some(line) = line else {
            tracing::debug!("host: input closed, shutting down");
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" {
            tracing::debug!("host: quit requested");
            break;
        }
        match UiMessage::decode(line) {
            Ok(msg) => manager.dispatch(msg, client).await,
            // Forward compatibility: unknown messages are logged and dropped.
            Err(e) => tracing::warn!("host: {e}"),
        }
    }

    manager.dispose();
    Ok(())
}
