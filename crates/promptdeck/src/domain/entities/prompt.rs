//! Prompt - A catalog entry
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{errors::DomainError, RecordId};

/// Maximum number of tags a prompt may carry when created
pub const MAX_TAGS: usize = 3;

/// Prompt - A reusable prompt with its intended use case
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Prompt {
    pub id: RecordId,
    pub title: String,
    /// The prompt content itself (multi-line)
    pub body: String,
    pub use_case: String,
    pub tags: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

/// NewPrompt - Fields submitted to the store on creation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewPrompt {
    pub title: String,
    pub body: String,
    pub use_case: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Prompt {
    /// Build a local record for a creation the store acknowledged without
    /// echoing the persisted row.
    pub fn pending(new: NewPrompt) -> Self {
        Self {
            id: RecordId::new_pending(),
            title: new.title,
            body: new.body,
            use_case: new.use_case,
            tags: new.tags,
            updated_at: Utc::now(),
        }
    }

    /// Whether the record carries the given tag (exact match)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl NewPrompt {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        use_case: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            use_case: use_case.into(),
            tags,
        }
    }

    /// Presence checks on the required fields.
    ///
    /// Checks are literal: a whitespace-only title is accepted.
    pub fn validate(&self) -> Result<(), DomainError> {
        let missing: Vec<&str> = [
            ("title", &self.title),
            ("body", &self.body),
            ("use case", &self.use_case),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect();

        if !missing.is_empty() {
            return Err(DomainError::Validation(format!(
                "Please fill in the required fields: {}",
                missing.join(", ")
            )));
        }

        if self.tags.len() > MAX_TAGS {
            return Err(DomainError::Validation(format!(
                "At most {} tags are allowed (got {})",
                MAX_TAGS,
                self.tags.len()
            )));
        }

        Ok(())
    }
}
