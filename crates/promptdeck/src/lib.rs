//! PromptDeck Domain Library
//!
//! Core domain types, interfaces and the catalog view for PromptDeck, a
//! searchable catalog of reusable prompts.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Prompt, NewPrompt)
//!   - `value_objects/`: Immutable value types (Category, RecordId)
//!   - `services/`: Pure domain services (filtering, tag parsing)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Prompt store interface
//!   - `services/`: Clipboard interface
//!
//! - **Application** (`application/`): The catalog view a front end owns
//!   (state reducer, creation form, copy feedback)
//!
//! # Usage
//!
//! ```rust,ignore
//! use promptdeck::{CatalogView, Category, ViewConfig};
//!
//! let mut view = CatalogView::load(repo, clipboard, ViewConfig::default()).await?;
//! view.set_category(Category::Admin);
//! for prompt in view.visible() {
//!     println!("{}", prompt.title);
//! }
//! ```

pub mod application;
pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use application::{
    CatalogAction, CatalogState, CatalogView, CloseReason, CopyFeedback, CopyOutcome,
    CreationForm, FormDraft, Notice, NoticeLevel, ViewConfig, COPIED_LABEL, FEEDBACK_DURATION,
    NO_MATCHES_MESSAGE,
};
pub use domain::{
    parse_tags, Category, DomainError, NewPrompt, Prompt, PromptFilter, RecordId, MAX_TAGS,
};
pub use ports::{ClipboardService, PromptRepository};
