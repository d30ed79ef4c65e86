//! Global Application State Store
//!
//! Screen-level state lives in a `reactive_stores::Store`; each settings
//! collection gets its own list and form signals (`ResourceState`).

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use settings_core::{EntityList, FormSession, Notice, Resource};

/// How long a toast stays on screen
const TOAST_MILLIS: u32 = 4_000;

/// A notice currently displayed as a toast
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Global screen state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct SettingsState {
    /// True until both collections have loaded (or failed)
    pub loading: bool,
    /// Visible toasts, oldest first
    pub toasts: Vec<Toast>,
    /// Id handed to the next toast
    pub next_toast_id: u64,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            loading: true,
            toasts: Vec::new(),
            next_toast_id: 1,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<SettingsState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// List + form signals for one settings collection
pub struct ResourceState<T: Resource> {
    pub list: RwSignal<EntityList<T>>,
    pub form: RwSignal<FormSession<T>>,
}

impl<T: Resource> Clone for ResourceState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Resource> Copy for ResourceState<T> {}

impl<T: Resource> ResourceState<T> {
    pub fn new() -> Self {
        Self {
            list: RwSignal::new(EntityList::new()),
            form: RwSignal::new(FormSession::new()),
        }
    }
}

/// Get a collection's state from context
pub fn use_resource<T: Resource>() -> ResourceState<T> {
    expect_context::<ResourceState<T>>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_loading(store: &AppStore, loading: bool) {
    store.loading().set(loading);
}

/// Show a toast and schedule its dismissal
pub fn store_push_notice(store: &AppStore, notice: Notice) {
    if notice.is_error() {
        log::warn!("{}", notice.message);
    }
    let id = store.next_toast_id().get_untracked();
    store.next_toast_id().set(id + 1);
    store.toasts().write().push(Toast { id, notice });

    let store = *store;
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
        store_dismiss_notice(&store, id);
    });
}

/// Remove a toast by ID
pub fn store_dismiss_notice(store: &AppStore, id: u64) {
    store.toasts().write().retain(|toast| toast.id != id);
}
