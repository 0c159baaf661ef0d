//! Prompt Repository Port
//!
//! Abstract interface for the remote prompt store.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, NewPrompt, Prompt};

/// Repository interface for Prompt entities
#[async_trait]
pub trait PromptRepository: Send + Sync {
    /// All prompts, most recently updated first
    async fn list_recent(&self) -> Result<Vec<Prompt>, DomainError>;

    /// Persist a new prompt.
    ///
    /// Returns `None` when the store acknowledges the insert without
    /// echoing the persisted row. Not idempotent.
    async fn create(&self, new: &NewPrompt) -> Result<Option<Prompt>, DomainError>;
}
