use leptos::prelude::*;

/// Active/Inactive pill
#[component]
pub fn StatusBadge(active: bool) -> impl IntoView {
    let (class, text) = if active {
        ("badge badge-active", "Active")
    } else {
        ("badge badge-inactive", "Inactive")
    };
    view! { <span class=class>{text}</span> }
}
