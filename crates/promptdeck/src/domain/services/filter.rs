//! Prompt Filter - Client-side search and category filtering
//!
//! The whole set is re-scanned on every change; there is no index.

use serde::{Deserialize, Serialize};

use crate::domain::{Category, Prompt};

/// Active search term and category filter
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromptFilter {
    /// Free text, matched case-insensitively
    pub search_term: String,
    pub category: Category,
}

impl PromptFilter {
    pub fn new(search_term: impl Into<String>, category: Category) -> Self {
        Self {
            search_term: search_term.into(),
            category,
        }
    }

    /// Whether a prompt belongs in the filtered view
    pub fn matches(&self, prompt: &Prompt) -> bool {
        self.matches_category(prompt) && matches_term(&self.search_term.to_lowercase(), prompt)
    }

    /// Filter the full set, preserving order
    pub fn apply(&self, prompts: &[Prompt]) -> Vec<Prompt> {
        let term = self.search_term.to_lowercase();
        prompts
            .iter()
            .filter(|p| self.matches_category(p) && matches_term(&term, p))
            .cloned()
            .collect()
    }

    fn matches_category(&self, prompt: &Prompt) -> bool {
        match self.category.tag() {
            None => true,
            Some(tag) => prompt.has_tag(tag),
        }
    }
}

/// `term` must already be lower-cased
fn matches_term(term: &str, prompt: &Prompt) -> bool {
    term.is_empty()
        || [&prompt.title, &prompt.body, &prompt.use_case]
            .iter()
            .any(|field| field.to_lowercase().contains(term))
}
