// panel module — singleton panel lifecycle and UI message dispatch

pub mod controller;
pub mod message;
pub mod render;
pub mod surface;
pub mod validate;

pub use controller::{HELP_TEXT, PanelManager, SurfaceFactory};
pub use message::{EnablementBatch, ProtocolError, UiMessage};
pub use render::{Document, render};
pub use surface::{PanelSurface, PromptRequest, StdioSurface};
pub use validate::validate_repository_url;
