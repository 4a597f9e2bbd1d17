//! Title Bar Component
//!
//! App header; shows the logout control on pages that need a session.

use leptos::prelude::*;

use super::LogoutButton;
use crate::context::use_app_context;
use crate::route::Page;

#[component]
pub fn TitleBar() -> impl IntoView {
    let ctx = use_app_context();
    let in_session = move || ctx.page.get().requires_session();

    view! {
        <header class="titlebar">
            <span
                class="titlebar-title"
                on:click=move |_| ctx.navigate(if in_session() { Page::Main } else { Page::Home })
            >
                "TODO Lists"
            </span>
            <Show when=in_session>
                <div class="titlebar-controls">
                    <LogoutButton />
                </div>
            </Show>
        </header>
    }
}
