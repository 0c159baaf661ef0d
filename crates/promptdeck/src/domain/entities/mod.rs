//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Prompt: A catalog entry (title, body, use case, tags)
//! - NewPrompt: The payload for creating a catalog entry

mod prompt;

pub use prompt::*;
