//! Branch Panel Component
//!
//! Branch cards (with contact details) and the create/edit dialog.

use leptos::prelude::*;
use settings_core::{Branch, BranchDraft};

use crate::actions::{delete_entity, submit_form, toggle_entity};
use crate::components::{DeleteConfirmButton, StatusBadge, TextField};
use crate::context::use_clients;
use crate::store::{use_app_store, use_resource, ResourceState};

/// Signal + callback pair for one draft field
fn draft_field(
    state: ResourceState<Branch>,
    get: fn(&BranchDraft) -> &String,
    set: fn(&mut BranchDraft) -> &mut String,
) -> (Signal<String>, Callback<String>) {
    let value = Signal::derive(move || state.form.with(|form| get(form.draft()).clone()));
    let on_input = Callback::new(move |v: String| state.form.update(|form| *set(form.draft_mut()) = v));
    (value, on_input)
}

#[component]
fn BranchFormDialog() -> impl IntoView {
    let store = use_app_store();
    let client = use_clients().branches;
    let state = use_resource::<Branch>();

    let is_open = move || state.form.with(|form| form.is_open());
    let editing = move || state.form.with(|form| form.is_editing_existing());
    let submitting = Signal::derive(move || state.form.with(|form| form.is_submitting()));

    let (name, set_name) = draft_field(state, |d| &d.name, |d| &mut d.name);
    let (description, set_description) = draft_field(state, |d| &d.description, |d| &mut d.description);
    let (address, set_address) = draft_field(state, |d| &d.address, |d| &mut d.address);
    let (phone, set_phone) = draft_field(state, |d| &d.phone, |d| &mut d.phone);
    let (email, set_email) = draft_field(state, |d| &d.email, |d| &mut d.email);

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
                    {move || if editing() { "Edit Branch" } else { "Create New Branch" }}
                </h3>
                <p class="dialog-description">
                    {move || if editing() {
                        "Update the branch information."
                    } else {
                        "Add a new branch location to your system."
                    }}
                </p>

                <TextField id="branch-name" label="Name *" placeholder="e.g., Downtown Branch"
                    required=true value=name on_input=set_name disabled=submitting />
                <TextField id="branch-description" label="Description" placeholder="Brief description of the branch"
                    value=description on_input=set_description disabled=submitting />
                <TextField id="branch-address" label="Address" placeholder="Branch address"
                    value=address on_input=set_address disabled=submitting />
                <TextField id="branch-phone" label="Phone" placeholder="Phone number"
                    value=phone on_input=set_phone disabled=submitting />
                <TextField id="branch-email" label="Email" placeholder="branch@example.com"
                    value=email on_input=set_email disabled=submitting />

                <div class="dialog-actions">
                    <button type="button" class="outline-btn" on:click=on_cancel prop:disabled=move || submitting.get()>
                        "Cancel"
                    </button>
                    <button type="submit" prop:disabled=move || submitting.get()>
                        {move || match (submitting.get(), editing()) {
                            (true, true) => "Updating...",
                            (true, false) => "Creating...",
                            (false, true) => "Update Branch",
                            (false, false) => "Create Branch",
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[component]
fn BranchCard(branch: Branch) -> impl IntoView {
    let store = use_app_store();
    let client = use_clients().branches;
    let state = use_resource::<Branch>();

    let on_edit = {
        let branch = branch.clone();
        move |_| {
            let _ = state.form.try_update(|form| form.open_edit(&branch));
        }
    };
    let on_toggle = {
        let (client, id) = (client.clone(), branch.id.clone());
        move |_| toggle_entity(store, state, client.clone(), id.clone())
    };
    let on_delete = {
        let id = branch.id.clone();
        Callback::new(move |_| delete_entity(store, state, client.clone(), id.clone()))
    };

    let details = [
        ("Address", branch.address.clone()),
        ("Phone", branch.phone.clone()),
        ("Email", branch.email.clone()),
    ];

    view! {
        <div class="settings-card">
            <div class="card-header">
                <h3 class="card-title">{branch.name.clone()}</h3>
                <StatusBadge active=branch.is_active />
            </div>
            {branch.description.clone().map(|d| view! { <p class="card-description">{d}</p> })}
            <dl class="card-details">
                {details
                    .into_iter()
                    .filter_map(|(label, value)| value.map(|value| view! { <dt>{label}</dt><dd>{value}</dd> }))
                    .collect_view()}
            </dl>
            <div class="card-actions">
                <button class="edit-btn" on:click=on_edit>"Edit"</button>
                <button class="toggle-btn" on:click=on_toggle>
                    {if branch.is_active { "Deactivate" } else { "Activate" }}
                </button>
                <DeleteConfirmButton prompt="Delete this branch?" on_confirm=on_delete />
            </div>
        </div>
    }
}

/// Branches tab content
#[component]
pub fn BranchPanel() -> impl IntoView {
    let state = use_resource::<Branch>();

    let open_create = move |_| {
        let _ = state.form.try_update(|form| form.open_create());
    };

    view! {
        <section class="settings-panel">
            <div class="panel-header">
                <div>
                    <h2>"Branches"</h2>
                    <p>"Manage branch locations"</p>
                </div>
                <button class="primary-btn" on:click=open_create>"+ Add Branch"</button>
            </div>

            <BranchFormDialog />

            <div class="card-grid">
                {move || state.list.with(|list| {
                    list.iter()
                        .map(|branch| view! { <BranchCard branch=branch.clone() /> })
                        .collect_view()
                })}
            </div>

            <Show when=move || state.list.with(|list| list.is_empty())>
                <p class="empty-message">"No branches yet"</p>
            </Show>
        </section>
    }
}
