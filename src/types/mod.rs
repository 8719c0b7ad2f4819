// Shared domain types — used by both the backend layer and the panel layer.
// Neither layer depends on the other; both import from this module.

pub mod repository;

pub use repository::*;
