//! Logout Button Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::ErrorText;
use crate::context::use_app_context;

/// Ends the session on the server, then forgets the token.
/// The stored token is kept when the server refuses.
#[component]
pub fn LogoutButton() -> impl IntoView {
    let ctx = use_app_context();
    let (error, set_error) = signal::<Option<String>>(None);
    let (pending, set_pending) = signal(false);

    let logout = move |_| {
        set_pending.set(true);
        set_error.set(None);
        let api = ctx.api();
        let auth = ctx.authorization();
        spawn_local(async move {
            let reply = api.logout(&auth).await;
            match ctx.finish_logout(reply) {
                Ok(()) => log::info!("[LOGOUT] Session closed"),
                Err(e) => set_error.set(Some(e.display_message())),
            }
            set_pending.set(false);
        });
    };

    view! {
        <span class="logout">
            <button class="logout-btn" disabled=move || pending.get() on:click=logout>
                "Log out"
            </button>
            <ErrorText message=error />
        </span>
    }
}
