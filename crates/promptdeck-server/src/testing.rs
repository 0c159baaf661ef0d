//! In-memory prompt store for tests

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use promptdeck::{DomainError, NewPrompt, Prompt, PromptRepository, RecordId};

#[derive(Default)]
pub struct InMemoryPromptRepository {
    rows: Mutex<Vec<Prompt>>,
}

#[async_trait]
impl PromptRepository for InMemoryPromptRepository {
    async fn list_recent(&self) -> Result<Vec<Prompt>, DomainError> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| {
            (b.updated_at, b.id.confirmed()).cmp(&(a.updated_at, a.id.confirmed()))
        });
        Ok(rows)
    }

    async fn create(&self, new: &NewPrompt) -> Result<Option<Prompt>, DomainError> {
        let mut rows = self.rows.lock().unwrap();
        let prompt = Prompt {
            id: RecordId::Confirmed(rows.len() as i64 + 1),
            title: new.title.clone(),
            body: new.body.clone(),
            use_case: new.use_case.clone(),
            tags: new.tags.clone(),
            updated_at: Utc::now(),
        };
        rows.push(prompt.clone());
        Ok(Some(prompt))
    }
}
