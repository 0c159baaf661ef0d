//! Application Layer
//!
//! The catalog view a front end owns: state reducer, creation form,
//! copy feedback and user notices.

mod catalog_view;
mod feedback;
mod form;
mod notice;
mod state;

pub use catalog_view::*;
pub use feedback::*;
pub use form::*;
pub use notice::*;
pub use state::*;
