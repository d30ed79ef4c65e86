//! Text Field Component
//!
//! Labeled input bound to one draft field.

use leptos::prelude::*;

#[component]
pub fn TextField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into, optional)] placeholder: String,
    #[prop(optional)] required: bool,
    #[prop(into, optional)] hint: Option<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label for=id.clone()>{label}</label>
            <input
                id=id
                type="text"
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                prop:disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {hint.map(|hint| view! { <p class="form-hint">{hint}</p> })}
        </div>
    }
}
