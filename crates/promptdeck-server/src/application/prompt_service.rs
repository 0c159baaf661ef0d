//! Prompt Application Service (Use Case)
//!
//! Orchestrates domain operations for the prompt catalog.

use std::sync::Arc;

use promptdeck::{DomainError, NewPrompt, Prompt, PromptRepository};

/// Application service for Prompt operations
pub struct PromptService<R: PromptRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: PromptRepository + ?Sized> PromptService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Get all prompts, most recently updated first
    pub async fn list_all(&self) -> Result<Vec<Prompt>, DomainError> {
        self.repo.list_recent().await
    }

    /// Validate and persist a new prompt
    pub async fn create(&self, new: NewPrompt) -> Result<Prompt, DomainError> {
        new.validate()?;

        let prompt = self.repo.create(&new).await?.ok_or_else(|| {
            DomainError::Repository("store did not return the created prompt".to_string())
        })?;

        tracing::info!("Created prompt: {} ({})", prompt.title, prompt.id);

        Ok(prompt)
    }
}
