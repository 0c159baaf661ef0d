//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Failed to load prompts: {0}")]
    Load(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Clipboard is not available in this environment")]
    ClipboardUnavailable,

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity_type: T, id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }

    /// Short label for logging
    pub fn category(&self) -> &'static str {
        match self {
            DomainError::Load(_) => "load",
            DomainError::Validation(_) => "validation",
            DomainError::Repository(_) => "repository",
            DomainError::ClipboardUnavailable | DomainError::Clipboard(_) => "clipboard",
            DomainError::NotFound { .. } => "not_found",
            DomainError::InvalidState(_) => "state",
        }
    }
}
