//! Error Text Component

use leptos::prelude::*;

/// Red message slot under a form; renders nothing when empty
#[component]
pub fn ErrorText(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|msg| view! {
            <div class="error" style="color: red;">{msg}</div>
        })
    }
}
