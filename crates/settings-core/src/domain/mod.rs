//! Domain Layer
//!
//! Settings entities owned by the remote system of record.
//! This layer has NO I/O (only serde/chrono for the wire shape).

mod branch;
mod category;
mod entity;

pub use branch::{Branch, BranchDraft, BranchPatch};
pub use category::{Category, CategoryDraft, CategoryPatch};
pub use entity::{Entity, Resource};
