use std::io::Write;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

use super::render::Document;

/// Line input shared between the host event loop and interactive prompts.
/// Events are only read between dispatches, so the lock is never contended.
pub type SharedInput = Arc<Mutex<Lines<BufReader<Stdin>>>>;

pub fn shared_stdin() -> SharedInput {
    Arc::new(Mutex::new(BufReader::new(tokio::io::stdin()).lines()))
}

/// An interactive input request. The surface applies `validate` before
/// accepting a value, so the controller only ever sees valid input or a
/// cancellation.
pub struct PromptRequest<'a> {
    pub label: &'a str,
    pub validate: Option<fn(&str) -> Result<(), String>>,
}

/// The host UI surface behind the panel.
///
/// The production implementation is [`StdioSurface`]; tests drive the
/// controller through a recording fake.
#[async_trait]
pub trait PanelSurface: Send {
    /// Bring an already-open panel to the user's attention.
    fn reveal(&mut self);

    /// Replace the panel content wholesale.
    fn set_content(&mut self, doc: &Document);

    /// Show a failure notification without touching the panel content.
    fn notify_error(&mut self, message: &str);

    /// Show informational help content.
    fn show_help(&mut self, text: &str);

    /// Ask the user for one input value. `None` means cancelled.
    async fn prompt(&mut self, request: PromptRequest<'_>) -> Option<String>;
}

/// Terminal-backed surface: content and help go to stdout, notifications to
/// stderr, prompts read from the shared stdin line stream.
pub struct StdioSurface {
    input: SharedInput,
}

impl StdioSurface {
    pub fn new(input: SharedInput) -> Self {
        Self { input }
    }
}

#[async_trait]
impl PanelSurface for StdioSurface {
    fn reveal(&mut self) {
        println!("--- template repositories panel ---");
    }

    fn set_content(&mut self, doc: &Document) {
        println!("{}", doc.to_text());
    }

    fn notify_error(&mut self, message: &str) {
        eprintln!("error: {message}");
    }

    fn show_help(&mut self, text: &str) {
        println!("{text}");
    }

    async fn prompt(&mut self, request: PromptRequest<'_>) -> Option<String> {
        loop {
            print!("{} (empty to cancel): ", request.label);
            let _ = std::io::stdout().flush();
            let line = self.input.lock().await.next_line().await.ok().flatten()?;
            let value = line.trim().to_owned();
            if value.is_empty() {
                return None;
            }
            if let Some(validate) = request.validate
                && let Err(message) = validate(&value)
            {
                eprintln!("{message}");
                continue;
            }
            return Some(value);
        }
    }
}
