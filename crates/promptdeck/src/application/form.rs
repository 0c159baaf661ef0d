//! Creation Form - Closed / Open state machine for adding prompts

use serde::{Deserialize, Serialize};

use crate::domain::{parse_tags, DomainError, NewPrompt};

/// Raw field values as typed by the user
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormDraft {
    pub title: String,
    pub body: String,
    pub use_case: String,
    /// Comma-separated tags
    pub tags_input: String,
}

impl FormDraft {
    /// Validate the draft and build the create payload.
    ///
    /// Required fields are checked literally (no trimming); only tags are
    /// trimmed and capped.
    pub fn to_new_prompt(&self) -> Result<NewPrompt, DomainError> {
        let new = NewPrompt::new(
            self.title.clone(),
            self.body.clone(),
            self.use_case.clone(),
            parse_tags(&self.tags_input),
        );
        new.validate()?;
        Ok(new)
    }
}

/// How the form was dismissed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Cancel,
    Escape,
    ClickOutside,
    /// Closed after a successful save
    Saved,
}

/// Creation form state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CreationForm {
    #[default]
    Closed,
    Open(FormDraft),
}

impl CreationForm {
    /// Open with every field cleared
    pub fn open(&mut self) {
        *self = CreationForm::Open(FormDraft::default());
    }

    /// Close and discard the draft
    pub fn close(&mut self, reason: CloseReason) {
        if let CreationForm::Open(_) = self {
            tracing::debug!(?reason, "Creation form closed");
        }
        *self = CreationForm::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, CreationForm::Open(_))
    }

    pub fn draft(&self) -> Option<&FormDraft> {
        match self {
            CreationForm::Open(draft) => Some(draft),
            CreationForm::Closed => None,
        }
    }

    /// Editable draft, only while open
    pub fn draft_mut(&mut self) -> Option<&mut FormDraft> {
        match self {
            CreationForm::Open(draft) => Some(draft),
            CreationForm::Closed => None,
        }
    }
}
