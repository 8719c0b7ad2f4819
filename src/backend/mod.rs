// backend module — repository API over HTTP

mod client;
mod error;

pub use client::{HttpRepositoryClient, RepositoryClient};
pub use error::BackendError;
