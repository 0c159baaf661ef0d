//! Catalog State - The loaded prompt set and its filtered view
//!
//! All mutations go through [`CatalogState::reduce`]. The filtered view is
//! recomputed synchronously after every action, so readers always observe
//! the most recently committed set.

use crate::domain::{Category, Prompt, PromptFilter};

/// Message shown in place of cards when nothing matches
pub const NO_MATCHES_MESSAGE: &str = "No prompts match your search.";

/// State transitions for the catalog
#[derive(Debug, Clone)]
pub enum CatalogAction {
    /// Replace the full set with freshly loaded prompts
    Loaded(Vec<Prompt>),
    SearchChanged(String),
    CategoryChanged(Category),
    /// Put a newly created prompt at the head of the full set
    Prepended(Prompt),
}

/// Catalog state owned by the catalog view
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    full_set: Vec<Prompt>,
    filter: PromptFilter,
    filtered_view: Vec<Prompt>,
}

impl CatalogState {
    pub fn new(prompts: Vec<Prompt>) -> Self {
        let mut state = Self::default();
        state.reduce(CatalogAction::Loaded(prompts));
        state
    }

    /// Apply an action and recompute the filtered view
    pub fn reduce(&mut self, action: CatalogAction) {
        match action {
            CatalogAction::Loaded(prompts) => {
                self.full_set = prompts;
            }
            CatalogAction::SearchChanged(term) => {
                self.filter.search_term = term;
            }
            CatalogAction::CategoryChanged(category) => {
                self.filter.category = category;
            }
            CatalogAction::Prepended(prompt) => {
                let mut next = Vec::with_capacity(self.full_set.len() + 1);
                next.push(prompt);
                next.extend(std::mem::take(&mut self.full_set));
                self.full_set = next;
            }
        }
        self.recompute();
    }

    fn recompute(&mut self) {
        self.filtered_view = self.filter.apply(&self.full_set);
        tracing::debug!(
            total = self.full_set.len(),
            visible = self.filtered_view.len(),
            category = %self.filter.category,
            "Recomputed filtered view"
        );
    }

    pub fn full_set(&self) -> &[Prompt] {
        &self.full_set
    }

    pub fn filtered_view(&self) -> &[Prompt] {
        &self.filtered_view
    }

    pub fn filter(&self) -> &PromptFilter {
        &self.filter
    }

    /// Placeholder text when the filtered view is empty
    pub fn placeholder(&self) -> Option<&'static str> {
        self.filtered_view.is_empty().then_some(NO_MATCHES_MESSAGE)
    }
}
