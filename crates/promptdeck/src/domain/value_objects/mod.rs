//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod category;
mod record_id;

pub use category::*;
pub use record_id::*;
