//! PromptDeck API Client

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use promptdeck::{DomainError, NewPrompt, Prompt, PromptRepository, RecordId};

/// API Client for the PromptDeck server
pub struct PromptDeckClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Response Types
// ============================================

/// Prompt as the server sends it; also the `list --json` output shape
#[derive(Debug, Serialize, Deserialize)]
pub struct PromptResponse {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub use_case: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct CreatePromptRequest {
    pub title: String,
    pub body: String,
    pub use_case: String,
    pub tags: Vec<String>,
}

impl From<PromptResponse> for Prompt {
    fn from(resp: PromptResponse) -> Self {
        Self {
            id: RecordId::Confirmed(resp.id),
            title: resp.title,
            body: resp.body,
            use_case: resp.use_case,
            tags: resp.tags,
            updated_at: resp.updated_at,
        }
    }
}

impl PromptResponse {
    /// Wire form of a stored prompt, `None` for one still pending
    pub fn from_prompt(prompt: &Prompt) -> Option<Self> {
        Some(Self {
            id: prompt.id.confirmed()?,
            title: prompt.title.clone(),
            body: prompt.body.clone(),
            use_case: prompt.use_case.clone(),
            tags: prompt.tags.clone(),
            updated_at: prompt.updated_at,
        })
    }
}

impl From<&NewPrompt> for CreatePromptRequest {
    fn from(new: &NewPrompt) -> Self {
        Self {
            title: new.title.clone(),
            body: new.body.clone(),
            use_case: new.use_case.clone(),
            tags: new.tags.clone(),
        }
    }
}

impl PromptDeckClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// List all prompts, newest first
    pub async fn list_prompts(&self) -> Result<Vec<PromptResponse>> {
        let url = format!("{}/prompts", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to PromptDeck API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        let prompts: Vec<PromptResponse> = resp.json().await.context("Failed to parse response")?;

        Ok(prompts)
    }

    /// Create a prompt
    ///
    /// Returns `None` when the server accepts the insert without a body.
    pub async fn create_prompt(&self, request: &CreatePromptRequest) -> Result<Option<PromptResponse>> {
        let url = format!("{}/prompts", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .context("Failed to connect to PromptDeck API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        let bytes = resp.bytes().await.context("Failed to read response")?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        let prompt: Option<PromptResponse> =
            serde_json::from_slice(&bytes).context("Failed to parse response")?;

        Ok(prompt)
    }
}

#[async_trait]
impl PromptRepository for PromptDeckClient {
    async fn list_recent(&self) -> Result<Vec<Prompt>, DomainError> {
        let prompts = self
            .list_prompts()
            .await
            .map_err(|e| DomainError::Repository(format!("{:#}", e)))?;

        Ok(prompts.into_iter().map(Into::into).collect())
    }

    async fn create(&self, new: &NewPrompt) -> Result<Option<Prompt>, DomainError> {
        let prompt = self
            .create_prompt(&new.into())
            .await
            .map_err(|e| DomainError::Repository(format!("{:#}", e)))?;

        Ok(prompt.map(Into::into))
    }
}
