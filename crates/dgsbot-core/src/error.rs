//! dgsbot error types.

use thiserror::Error;

/// Errors produced by dgsbot components.
///
/// Every variant is a configuration-time concern: answering a query never
/// fails (an unmatched utterance is a normal outcome, served from the
/// fallback set, not an error).
#[derive(Debug, Error)]
pub enum DgsbotError {
    /// Config file problems (unreadable, unparsable).
    #[error("Config error: {0}")]
    Config(String),

    /// Malformed knowledge base detected at load time.
    #[error("Knowledge base error: {0}")]
    Knowledge(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DgsbotError>;
