//! PromptDeck API Routes
//!
//! - /prompts - Prompt catalog (list, create)

pub mod prompt;
pub mod swagger;
