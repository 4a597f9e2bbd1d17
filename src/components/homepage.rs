//! Homepage Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::route::Page;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Homepage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    view! {
        <div class="welcome">
            <p>"Welcome to our website!"</p>
            <p>"Your personal TODO list manager."</p>
            <button class="goButton" on:click=move |_| ctx.navigate(Page::Login)>
                "Let's Go!"
            </button>
            <Show when=move || store.signed_in().get()>
                <button class="goButton secondary" on:click=move |_| ctx.navigate(Page::Main)>
                    "My lists"
                </button>
            </Show>
        </div>
    }
}
