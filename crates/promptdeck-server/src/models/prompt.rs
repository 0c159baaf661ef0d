//! Prompt - Catalog entry DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use promptdeck::{DomainError, NewPrompt, Prompt};

// ============================================
// Request/Response DTOs
// ============================================

/// Create Prompt request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePromptRequest {
    pub title: String,
    pub body: String,
    pub use_case: String,
    /// At most 3 tags
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Prompt response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PromptResponse {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub use_case: String,
    pub tags: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<CreatePromptRequest> for NewPrompt {
    fn from(req: CreatePromptRequest) -> Self {
        NewPrompt::new(req.title, req.body, req.use_case, req.tags)
    }
}

impl TryFrom<Prompt> for PromptResponse {
    type Error = DomainError;

    fn try_from(prompt: Prompt) -> Result<Self, Self::Error> {
        let id = prompt.id.confirmed().ok_or_else(|| {
            DomainError::InvalidState(format!("prompt {} has no store id", prompt.id))
        })?;

        Ok(Self {
            id,
            title: prompt.title,
            body: prompt.body,
            use_case: prompt.use_case,
            tags: prompt.tags,
            updated_at: prompt.updated_at,
        })
    }
}
