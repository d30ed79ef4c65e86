//! Settings Page Component
//!
//! Tabs for categories and branches, shown once the initial load finishes.

use leptos::prelude::*;
use settings_core::{Branch, Category};

use crate::actions::load_settings;
use crate::components::{BranchPanel, CategoryPanel, ToastList};
use crate::context::{use_clients, SettingsTab};
use crate::store::{use_app_store, use_resource, SettingsStateStoreFields};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let store = use_app_store();
    let (tab, set_tab) = signal(SettingsTab::Categories);

    // Load both collections on mount
    load_settings(store, use_clients(), use_resource::<Category>(), use_resource::<Branch>());

    let tab_class = move |which: SettingsTab| {
        if tab.get() == which { "tab active" } else { "tab" }
    };

    view! {
        <div class="settings-page">
            <header class="settings-header">
                <h1>"Settings"</h1>
                <p>"Manage categories and branches"</p>
            </header>

            <Show
                when=move || !store.loading().get()
                fallback=|| view! {
                    <div class="loading">
                        <div class="spinner"></div>
                        <p>"Loading settings..."</p>
                    </div>
                }
            >
                <nav class="tab-list">
                    <button
                        class=move || tab_class(SettingsTab::Categories)
                        on:click=move |_| set_tab.set(SettingsTab::Categories)
                    >
                        "Categories"
                    </button>
                    <button
                        class=move || tab_class(SettingsTab::Branches)
                        on:click=move |_| set_tab.set(SettingsTab::Branches)
                    >
                        "Branches"
                    </button>
                </nav>

                <Show when=move || tab.get() == SettingsTab::Categories fallback=|| view! { <BranchPanel /> }>
                    <CategoryPanel />
                </Show>
            </Show>

            <ToastList />
        </div>
    }
}
