//! Settings Core
//!
//! Layered architecture:
//! - domain: Category and branch entities, drafts and patches
//! - remote: Typed REST client per settings collection
//! - sync: Local list state mirroring the server collection
//! - form: Create/edit sessions with client-side validation
//! - screen: Settings screen controller (initial load, access gate)

pub mod config;
pub mod domain;
pub mod form;
pub mod notice;
pub mod remote;
pub mod screen;
pub mod sync;

pub use config::ApiConfig;
pub use domain::{Branch, BranchDraft, BranchPatch, Category, CategoryDraft, CategoryPatch, Entity, Resource};
pub use form::{FormError, FormMode, FormPhase, FormSession, SubmitRequest, SubmitTicket, ValidationError};
pub use notice::{Notice, NoticeLevel, Operation};
pub use remote::{HttpResourceClient, RemoteError, RemoteResult, ResourceClient};
pub use screen::{AccessDenied, AccessGate, Role, SettingsScreen};
pub use sync::{delete_with_confirmation, toggle_status, DeleteOutcome, EntityList};

#[cfg(test)]
pub(crate) mod testing;
