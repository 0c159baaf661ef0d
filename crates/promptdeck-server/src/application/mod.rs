//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and the HTTP layer.

mod prompt_service;

pub use prompt_service::PromptService;
