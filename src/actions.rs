//! Settings Actions
//!
//! UI-side drivers for the core operations. Each action does its
//! synchronous part (validation, state transitions) immediately and the
//! request inside `spawn_local`; the store is only touched again once the
//! response is in.

use leptos::prelude::*;
use leptos::task::spawn_local;
use settings_core::{
    Branch, Category, FormError, HttpResourceClient, Notice, Operation, Resource, ResourceClient, SettingsScreen,
};

use crate::api::Clients;
use crate::store::{store_push_notice, store_set_loading, AppStore, ResourceState};

/// Initial concurrent load of both collections
pub fn load_settings(
    store: AppStore,
    clients: Clients,
    categories: ResourceState<Category>,
    branches: ResourceState<Branch>,
) {
    store_set_loading(&store, true);
    spawn_local(async move {
        let mut screen = SettingsScreen::new();
        let notice = screen.load(&clients.categories, &clients.branches).await;
        categories.list.set(screen.categories);
        branches.list.set(screen.branches);
        store_set_loading(&store, false);
        if let Some(notice) = notice {
            store_push_notice(&store, notice);
        }
    });
}

/// Validates the open form and, if valid, sends it
pub fn submit_form<T: Resource>(store: AppStore, state: ResourceState<T>, client: HttpResourceClient<T>) {
    let op = form_operation(&state);
    let begun = state
        .form
        .try_update(|form| state.list.with_untracked(|list| form.begin_submit(list)));

    let ticket = match begun {
        Some(Ok(ticket)) => ticket,
        Some(Err(err)) => {
            store_push_notice(&store, Notice::from_form_error::<T>(op, &err));
            return;
        }
        None => return,
    };

    spawn_local(async move {
        let result = ticket.send(&client).await;

        let mut list = state.list.get_untracked();
        let finished = state
            .form
            .try_update(|form| form.finish_submit(ticket, result, &mut list));

        match finished {
            Some(Ok(_)) => {
                state.list.set(list);
                store_push_notice(&store, Notice::succeeded::<T>(op));
            }
            Some(Err(FormError::StaleTicket)) | None => {}
            Some(Err(err)) => store_push_notice(&store, Notice::from_form_error::<T>(op, &err)),
        }
    });
}

/// Deletes an entity the user has already confirmed
pub fn delete_entity<T: Resource>(store: AppStore, state: ResourceState<T>, client: HttpResourceClient<T>, id: T::Id) {
    spawn_local(async move {
        match client.delete(&id).await {
            Ok(_) => {
                state.list.update(|list| {
                    list.apply_delete(&id);
                });
                store_push_notice(&store, Notice::succeeded::<T>(Operation::Delete));
            }
            Err(e) => {
                log::error!("Delete {} error: {}", T::SINGULAR, e);
                store_push_notice(&store, Notice::failed::<T>(Operation::Delete));
            }
        }
    });
}

/// Flips an entity's active flag
pub fn toggle_entity<T: Resource>(store: AppStore, state: ResourceState<T>, client: HttpResourceClient<T>, id: T::Id) {
    spawn_local(async move {
        match client.toggle_status(&id).await {
            Ok(entity) => {
                state.list.update(|list| {
                    list.apply_update(entity);
                });
                store_push_notice(&store, Notice::succeeded::<T>(Operation::ToggleStatus));
            }
            Err(e) => {
                log::error!("Toggle {} error: {}", T::SINGULAR, e);
                store_push_notice(&store, Notice::failed::<T>(Operation::ToggleStatus));
            }
        }
    });
}

fn form_operation<T: Resource>(state: &ResourceState<T>) -> Operation {
    if state.form.with_untracked(|form| form.is_editing_existing()) {
        Operation::Update
    } else {
        Operation::Create
    }
}
