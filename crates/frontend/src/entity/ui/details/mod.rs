//! Create and edit screens
//!
//! - view_model.rs: draft state, field errors, load and save commands
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::EntityDetails;
pub use view_model::{apply_edit, EntityDetailsViewModel};
