//! Shared error type.
//!
//! Sub-crates define their own error enums and wrap `ColonyError` as one
//! variant via `#[from]`, so configuration failures keep their message all
//! the way up to `Sim::build`.

use thiserror::Error;

/// The top-level error type for `colony-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum ColonyError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `colony-*` crates.
pub type ColonyResult<T> = Result<T, ColonyError>;
