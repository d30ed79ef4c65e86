//! Toast List Component
//!
//! Transient notices in the corner of the screen; click to dismiss.

use leptos::prelude::*;
use settings_core::NoticeLevel;

use crate::store::{store_dismiss_notice, use_app_store, SettingsStateStoreFields};

#[component]
pub fn ToastList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toast-list">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.notice.level {
                        NoticeLevel::Success => "toast toast-success",
                        NoticeLevel::Error => "toast toast-error",
                    };
                    view! {
                        <div class=class role="status" on:click=move |_| store_dismiss_notice(&store, id)>
                            {toast.notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
