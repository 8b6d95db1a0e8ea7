//! Error types for document operations
//!
//! Simple, flat error hierarchy. Serialization and lookup never fail;
//! only target-directed mutation and dynamic content loading do.

use thiserror::Error;

use crate::locator::Selector;

pub type Result<T> = std::result::Result<T, DomError>;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("No element matches target {0}")]
    TargetNotFound(Selector),

    #[error("The content needs to be provided as an array, got {0}")]
    InvalidContent(String),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}
