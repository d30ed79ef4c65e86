//! Settings Admin App
//!
//! Root component: admin gate, then the settings page.

use leptos::prelude::*;
use settings_core::AccessGate;

use crate::api::{self, Clients};
use crate::components::SettingsPage;
use crate::context::provide_settings_context;

#[component]
pub fn App() -> impl IntoView {
    match AccessGate::admin().check(api::current_role()) {
        Ok(()) => {
            provide_settings_context(Clients::new(api::config_from_page()));
            view! { <SettingsPage /> }.into_any()
        }
        Err(denied) => {
            log::warn!("Settings access denied: {}", denied);
            view! {
                <div class="access-denied">
                    <h1>"Access denied"</h1>
                    <p>{denied.to_string()}</p>
                </div>
            }
            .into_any()
        }
    }
}
