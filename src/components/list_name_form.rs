//! List Name Form Component
//!
//! One-field inline form asking for a task-list name.

use leptos::prelude::*;

use crate::validate;

/// Inline name prompt used by "Create List" and "Delete List"
#[component]
pub fn ListNameForm(
    #[prop(into)] submit_label: String,
    #[prop(into, optional)] initial: String,
    #[prop(into)] on_submit: Callback<String>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let (name, set_name) = signal(initial);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Empty names are ignored
        if let Some(name) = validate::task_list_name(&name.get()) {
            on_submit.run(name.to_string());
        }
    };

    view! {
        <form class="list-name-form" on:submit=submit>
            <label>"Please enter the tasklist name: "</label>
            <input
                type="text"
                autofocus
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <button type="submit">{submit_label}</button>
            <button type="button" class="cancel-btn" on:click=move |_| on_cancel.run(())>
                "Cancel"
            </button>
        </form>
    }
}
