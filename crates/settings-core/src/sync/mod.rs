//! Sync Layer - List Synchronizer
//!
//! Local copy of a settings collection, populated once on load and then
//! patched from mutation results instead of refetching.

mod actions;
mod list;

pub use actions::{delete_with_confirmation, toggle_status, DeleteOutcome};
pub use list::EntityList;
