//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with external systems (the prompt store, the clipboard).
//!
//! Implementations of these traits live in the server and CLI crates.

pub mod repositories;
pub mod services;

// Re-exports
pub use repositories::*;
pub use services::*;
