//! Clipboard Service Port
//!
//! Abstract interface for writing text to the system clipboard.

use async_trait::async_trait;

use crate::domain::errors::DomainError;

/// Service interface for the system clipboard
#[async_trait]
pub trait ClipboardService: Send + Sync {
    /// Whether clipboard writes are possible in this environment
    fn is_available(&self) -> bool;

    /// Replace the clipboard contents with `text`
    async fn write_text(&self, text: &str) -> Result<(), DomainError>;
}
