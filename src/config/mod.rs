// config module — TOML configuration discovery and types

pub mod loader;
pub mod types;
