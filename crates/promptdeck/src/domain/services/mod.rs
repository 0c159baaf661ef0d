//! Domain Services
//!
//! Stateless logic over domain entities.

mod filter;
mod tags;

pub use filter::*;
pub use tags::*;
