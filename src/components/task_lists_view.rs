//! Task Lists View Component
//!
//! Main page: loads the user's task lists into a table and offers
//! create/delete.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{DeleteConfirmButton, ErrorText, ListNameForm};
use crate::context::{use_app_context, AppContext};
use crate::route::Page;
use crate::store::{
    store_add_task_list, store_check_deletable, store_clear_task_lists, store_load_task_lists,
    store_remove_task_list, use_app_store, AppStateStoreFields, AppStore,
};

/// Which inline prompt is open
#[derive(Clone, Copy, PartialEq)]
enum Prompt {
    None,
    Create,
    Delete,
}

fn delete_task_list(ctx: AppContext, store: AppStore, name: String, set_error: WriteSignal<Option<String>>) {
    if let Err(e) = store_check_deletable(&store, &name) {
        set_error.set(Some(e.display_message()));
        return;
    }
    let api = ctx.api();
    let auth = ctx.authorization();
    spawn_local(async move {
        match api.delete_task_list(&auth, &name).await {
            Ok(_) => {
                log::info!("[MAIN] Deleted task list {}", name);
                store_remove_task_list(&store, &name);
            }
            Err(e) => set_error.set(Some(e.display_message())),
        }
    });
}

#[component]
pub fn TaskListsView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (prompt, set_prompt) = signal(Prompt::None);
    let (error, set_error) = signal::<Option<String>>(None);

    // Load on mount; a failed load falls back to the homepage after a delay
    Effect::new(move |_| {
        let api = ctx.api();
        let auth = ctx.authorization();
        let delay = api.config().redirect_delay_ms;
        store_clear_task_lists(&store);
        store.loading().set(true);
        spawn_local(async move {
            match api.list_task_lists(&auth).await {
                Ok(loaded) => {
                    log::info!("[MAIN] Loaded {} task lists", loaded.as_ref().map_or(0, Vec::len));
                    store_load_task_lists(&store, loaded);
                    store.loading().set(false);
                }
                Err(e) => {
                    if e.is_auth() {
                        log::warn!("[MAIN] Stored credential rejected: {}", e);
                    } else {
                        log::error!("[MAIN] Could not load task lists: {}", e);
                    }
                    store.loading().set(false);
                    set_error.set(Some(e.display_message()));
                    TimeoutFuture::new(delay).await;
                    if let Some(next) = ctx.page.get_untracked().after_failed_load() {
                        ctx.navigate(next);
                    }
                }
            }
        });
    });

    let create = move |name: String| {
        set_prompt.set(Prompt::None);
        set_error.set(None);
        let api = ctx.api();
        let auth = ctx.authorization();
        spawn_local(async move {
            match api.create_task_list(&auth, &name).await {
                Ok(created) => {
                    log::info!("[MAIN] Created task list {}", created);
                    store_add_task_list(&store, created);
                }
                Err(e) => set_error.set(Some(e.display_message())),
            }
        });
    };

    let delete = move |name: String| {
        set_prompt.set(Prompt::None);
        set_error.set(None);
        delete_task_list(ctx, store, name, set_error);
    };

    view! {
        <div class="main-view">
            <div class="buttons">
                <button on:click=move |_| set_prompt.set(Prompt::Create)>"Create List"</button>
                <button on:click=move |_| set_prompt.set(Prompt::Delete)>"Delete List"</button>
            </div>

            {move || match prompt.get() {
                Prompt::Create => view! {
                    <ListNameForm
                        submit_label="Create"
                        initial="MyTasklist"
                        on_submit=create
                        on_cancel=move |_: ()| set_prompt.set(Prompt::None)
                    />
                }.into_any(),
                Prompt::Delete => view! {
                    <ListNameForm
                        submit_label="Delete"
                        initial="MyTasklist"
                        on_submit=delete
                        on_cancel=move |_: ()| set_prompt.set(Prompt::None)
                    />
                }.into_any(),
                Prompt::None => ().into_any(),
            }}

            <ErrorText message=error />

            <Show when=move || store.loading().get()>
                <p class="loading">"Loading..."</p>
            </Show>

            <table class="tasklists" id="tasklistsTable">
                <tbody>
                    <For
                        each=move || store.task_lists().get().into_iter().enumerate()
                        key=|(idx, name)| (*idx, name.clone())
                        children=move |(_, name)| {
                            let open = name.clone();
                            let remove = name.clone();
                            view! {
                                <tr>
                                    <td
                                        class="tasklist-name"
                                        on:click=move |_| ctx.navigate(Page::TaskList(open.clone()))
                                    >
                                        {name.clone()}
                                    </td>
                                    <td class="tasklist-actions">
                                        <DeleteConfirmButton
                                            label=name
                                            on_confirm=move |_: ()| {
                                                set_error.set(None);
                                                delete_task_list(ctx, store, remove.clone(), set_error);
                                            }
                                        />
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
