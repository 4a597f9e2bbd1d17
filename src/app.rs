//! Task-List Manager App
//!
//! Root component: provides context and switches between pages.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::components::{Homepage, LoginForm, RegisterForm, TaskListDetail, TaskListsView, TitleBar};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::route::{self, Page};
use crate::session::{self, LocalStorageStore};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_env();
    let credentials = LocalStorageStore::new(config.token_key);
    log::info!("[APP] API base {}", config.base_url);

    let store = Store::new(AppState::new(session::is_signed_in(&credentials)));
    let (page, set_page) = signal(route::current_page());

    let ctx = AppContext::new((page, set_page), ApiClient::new(config), credentials, store);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Back / forward buttons
    let _ = window_event_listener(leptos::ev::popstate, move |_| ctx.sync_from_location());

    view! {
        <div class="app-layout">
            <TitleBar />
            <main class="main-content">
                {move || match page.get() {
                    Page::Home => view! { <Homepage /> }.into_any(),
                    Page::Login => view! { <LoginForm /> }.into_any(),
                    Page::Register => view! { <RegisterForm /> }.into_any(),
                    Page::Main => view! { <TaskListsView /> }.into_any(),
                    Page::TaskList(name) => view! { <TaskListDetail name=name /> }.into_any(),
                }}
            </main>
        </div>
    }
}
