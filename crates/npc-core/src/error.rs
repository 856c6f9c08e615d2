//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert `CoreError`
//! into them via `From` impls or wrap it as one variant.  Both patterns are
//! acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `npc-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `npc-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
