//! Task List Detail Component
//!
//! One task list: add tasks and look existing ones up by name.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{ErrorText, TaskForm};
use crate::context::use_app_context;
use crate::models::Task;
use crate::route::Page;

#[component]
fn TaskCard(task: Task) -> impl IntoView {
    let dates = match (task.start_date.is_empty(), task.end_date.is_empty()) {
        (false, false) => Some(format!("{} – {}", task.start_date, task.end_date)),
        _ => None,
    };

    view! {
        <div class="task-card">
            <div class="task-name">{task.name}</div>
            {(!task.content.is_empty()).then(|| view! { <p class="task-content">{task.content}</p> })}
            {dates.map(|d| view! { <div class="task-dates">{d}</div> })}
            {task.priority.map(|p| view! { <span class="task-priority">{p.label()}</span> })}
            {task.status.map(|s| view! { <span class="task-status">{s.as_str()}</span> })}
        </div>
    }
}

#[component]
fn TaskLookup(list: StoredValue<String>) -> impl IntoView {
    let ctx = use_app_context();
    let (query, set_query) = signal(String::new());
    let (found, set_found) = signal::<Option<Task>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let task_name = query.get().trim().to_string();
        if task_name.is_empty() { return; }

        set_error.set(None);
        set_found.set(None);
        let api = ctx.api();
        let auth = ctx.authorization();
        let list = list.get_value();
        spawn_local(async move {
            match api.get_task(&auth, &list, &task_name).await {
                Ok(task) => set_found.set(Some(task)),
                Err(e) => set_error.set(Some(e.display_message())),
            }
        });
    };

    view! {
        <form class="task-lookup" on:submit=on_submit>
            <div class="title">"Find Task"</div>
            <input
                type="text"
                placeholder="Task name"
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />
            <button type="submit">"Find"</button>
        </form>
        <ErrorText message=error />
        {move || found.get().map(|task| view! { <TaskCard task=task /> })}
    }
}

#[component]
pub fn TaskListDetail(#[prop(into)] name: String) -> impl IntoView {
    let ctx = use_app_context();
    let list = StoredValue::new(name.clone());
    let title = name.clone();

    view! {
        <div class="tasklist-detail">
            <button class="back-btn" on:click=move |_| ctx.navigate(Page::Main)>"← All lists"</button>
            <h2>{title}</h2>
            <TaskForm list=name />
            <TaskLookup list=list />
        </div>
    }
}
