//! Category Panel Component
//!
//! Product category cards with the create/edit dialog.

use leptos::prelude::*;
use settings_core::Category;

use crate::actions::{delete_entity, submit_form, toggle_entity};
use crate::components::{DeleteConfirmButton, StatusBadge, TextField};
use crate::context::use_clients;
use crate::store::{use_app_store, use_resource};

/// Create / edit dialog bound to the category form session
#[component]
fn CategoryFormDialog() -> impl IntoView {
    let store = use_app_store();
    let client = use_clients().categories;
    let state = use_resource::<Category>();

    let is_open = move || state.form.with(|form| form.is_open());
    let editing = move || state.form.with(|form| form.is_editing_existing());
    let submitting = Signal::derive(move || state.form.with(|form| form.is_submitting()));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        submit_form(store, state, client.clone());
    };
    let on_cancel = move |_| {
        let _ = state.form.try_update(|form| form.cancel());
    };

    view! {
        <div class="dialog-backdrop" class:hidden=move || !is_open()>
            <form class="dialog" on:submit=on_submit>
                <h3 class="dialog-title">
                    {move || if editing() { "Edit Category" } else { "Create New Category" }}
                </h3>
                <p class="dialog-description">
                    {move || if editing() {
                        "Update the category information."
                    } else {
                        "Add a new product category to your inventory system."
                    }}
                </p>

                <TextField
                    id="category-name"
                    label="Name *"
                    placeholder="e.g., Frozen Products"
                    required=true
                    value=Signal::derive(move || state.form.with(|form| form.draft().name.clone()))
                    on_input=Callback::new(move |v: String| state.form.update(|form| form.draft_mut().name = v))
                    disabled=submitting
                />
                <TextField
                    id="category-value"
                    label="Value *"
                    placeholder="e.g., frozen-products"
                    required=true
                    hint="Use lowercase with hyphens (e.g., frozen-products)"
                    value=Signal::derive(move || state.form.with(|form| form.draft().value.clone()))
                    on_input=Callback::new(move |v: String| state.form.update(|form| form.draft_mut().value = v))
                    disabled=submitting
                />
                <TextField
                    id="category-description"
                    label="Description"
                    placeholder="Brief description of the category"
                    value=Signal::derive(move || state.form.with(|form| form.draft().description.clone()))
                    on_input=Callback::new(move |v: String| state.form.update(|form| form.draft_mut().description = v))
                    disabled=submitting
                />

                <div class="dialog-actions">
                    <button type="button" class="outline-btn" on:click=on_cancel prop:disabled=move || submitting.get()>
                        "Cancel"
                    </button>
                    <button type="submit" prop:disabled=move || submitting.get()>
                        {move || match (submitting.get(), editing()) {
                            (true, true) => "Updating...",
                            (true, false) => "Creating...",
                            (false, true) => "Update Category",
                            (false, false) => "Create Category",
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[component]
fn CategoryCard(category: Category) -> impl IntoView {
    let store = use_app_store();
    let client = use_clients().categories;
    let state = use_resource::<Category>();

    let on_edit = {
        let category = category.clone();
        move |_| {
            let _ = state.form.try_update(|form| form.open_edit(&category));
        }
    };
    let on_toggle = {
        let (client, id) = (client.clone(), category.id.clone());
        move |_| toggle_entity(store, state, client.clone(), id.clone())
    };
    let on_delete = {
        let id = category.id.clone();
        Callback::new(move |_| delete_entity(store, state, client.clone(), id.clone()))
    };

    view! {
        <div class="settings-card">
            <div class="card-header">
                <div>
                    <h3 class="card-title">{category.name.clone()}</h3>
                    <p class="card-subtitle">{category.value.clone()}</p>
                </div>
                <StatusBadge active=category.is_active />
            </div>
            {category.description.clone().map(|d| view! { <p class="card-description">{d}</p> })}
            <div class="card-actions">
                <button class="edit-btn" on:click=on_edit>"Edit"</button>
                <button class="toggle-btn" on:click=on_toggle>
                    {if category.is_active { "Deactivate" } else { "Activate" }}
                </button>
                <DeleteConfirmButton prompt="Delete this category?" on_confirm=on_delete />
            </div>
        </div>
    }
}

/// Categories tab content
#[component]
pub fn CategoryPanel() -> impl IntoView {
    let state = use_resource::<Category>();

    let open_create = move |_| {
        let _ = state.form.try_update(|form| form.open_create());
    };

    view! {
        <section class="settings-panel">
            <div class="panel-header">
                <div>
                    <h2>"Product Categories"</h2>
                    <p>"Manage product categories for your inventory"</p>
                </div>
                <button class="primary-btn" on:click=open_create>"+ Add Category"</button>
            </div>

            <CategoryFormDialog />

            <div class="card-grid">
                {move || state.list.with(|list| {
                    list.iter()
                        .map(|category| view! { <CategoryCard category=category.clone() /> })
                        .collect_view()
                })}
            </div>

            <Show when=move || state.list.with(|list| list.is_empty())>
                <p class="empty-message">"No categories yet"</p>
            </Show>
        </section>
    }
}
