//! PromptDeck API Models
//!
//! - Prompt: Request/response DTOs for the prompt catalog

mod prompt;

pub use prompt::*;
