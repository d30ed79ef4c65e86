//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use settings_core::{Branch, Category};

use crate::api::Clients;
use crate::store::{AppStore, ResourceState, SettingsState};

/// Which settings tab is showing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsTab {
    Categories,
    Branches,
}

/// Provides the store, both collection states and the API clients
pub fn provide_settings_context(clients: Clients) {
    provide_context(AppStore::new(SettingsState::default()));
    provide_context(ResourceState::<Category>::new());
    provide_context(ResourceState::<Branch>::new());
    provide_context(clients);
}

/// Get the API clients from context
pub fn use_clients() -> Clients {
    expect_context::<Clients>()
}
