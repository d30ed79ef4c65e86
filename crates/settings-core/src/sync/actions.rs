//! List Actions
//!
//! Mutations that go straight to the server and patch the list on success,
//! outside of a form session.

use crate::domain::Resource;
use crate::remote::{RemoteResult, ResourceClient};

use super::EntityList;

/// Result of a confirmation-gated delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined; nothing was sent
    Declined,
    /// The server confirmed the delete
    Deleted { message: String },
}

/// Deletes `id` after `confirm` returns `true`.
///
/// Declining makes no request. On failure the list is left untouched.
pub async fn delete_with_confirmation<T, C, F>(
    list: &mut EntityList<T>,
    client: &C,
    id: &T::Id,
    confirm: F,
) -> RemoteResult<DeleteOutcome>
where
    T: Resource,
    C: ResourceClient<T> + ?Sized,
    F: FnOnce() -> bool,
{
    if !confirm() {
        return Ok(DeleteOutcome::Declined);
    }

    match client.delete(id).await {
        Ok(message) => {
            list.apply_delete(id);
            log::info!("Deleted {} {}", T::SINGULAR, id);
            Ok(DeleteOutcome::Deleted { message })
        }
        Err(e) => {
            log::error!("Delete {} {} failed: {}", T::SINGULAR, id, e);
            Err(e)
        }
    }
}

/// Flips the active flag server-side and applies the returned entity
pub async fn toggle_status<T, C>(list: &mut EntityList<T>, client: &C, id: &T::Id) -> RemoteResult<T>
where
    T: Resource,
    C: ResourceClient<T> + ?Sized,
{
    match client.toggle_status(id).await {
        Ok(entity) => {
            list.apply_update(entity.clone());
            Ok(entity)
        }
        Err(e) => {
            log::error!("Toggle status of {} {} failed: {}", T::SINGULAR, id, e);
            Err(e)
        }
    }
}
