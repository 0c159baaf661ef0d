//! Service Ports
//!
//! Abstract interfaces for external services.

mod clipboard;

pub use clipboard::*;
