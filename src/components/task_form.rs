//! New Task Form Component
//!
//! Form for creating a task inside one task list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::ErrorText;
use crate::context::use_app_context;
use crate::models::{Priority, Status, Task};
use crate::validate;

#[component]
pub fn TaskForm(#[prop(into)] list: String) -> impl IntoView {
    let ctx = use_app_context();
    let list = StoredValue::new(list);

    let (name, set_name) = signal(String::new());
    let (content, set_content) = signal(String::new());
    let (start_date, set_start_date) = signal(String::new());
    let (end_date, set_end_date) = signal(String::new());
    let (priority, set_priority) = signal::<Option<Priority>>(None);
    let (status, set_status) = signal::<Option<Status>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);

    let reset = move || {
        set_name.set(String::new());
        set_content.set(String::new());
        set_start_date.set(String::new());
        set_end_date.set(String::new());
        set_priority.set(None);
        set_status.set(None);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_notice.set(None);
        let task = Task {
            name: name.get().trim().to_string(),
            content: content.get(),
            start_date: start_date.get().trim().to_string(),
            end_date: end_date.get().trim().to_string(),
            priority: priority.get(),
            status: status.get(),
        };
        if let Err(e) = validate::task(&task) {
            set_error.set(Some(e.display_message()));
            return;
        }

        set_error.set(None);
        let api = ctx.api();
        let auth = ctx.authorization();
        let list = list.get_value();
        spawn_local(async move {
            match api.create_task(&auth, &list, &task).await {
                Ok(_) => {
                    log::info!("[TASKS] Created {} in {}", task.name, list);
                    set_notice.set(Some(format!("Created \"{}\"", task.name)));
                    reset();
                }
                Err(e) => set_error.set(Some(e.display_message())),
            }
        });
    };

    view! {
        <form class="task-form" on:submit=on_submit>
            <div class="title">"New Task"</div>
            <div class="input-container">
                <label>"Name "</label>
                <input
                    type="text"
                    required
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </div>
            <div class="input-container">
                <label>"Content "</label>
                <input
                    type="text"
                    prop:value=move || content.get()
                    on:input=move |ev| set_content.set(event_target_value(&ev))
                />
            </div>
            <div class="input-container">
                <label>"Start "</label>
                <input
                    type="text"
                    placeholder="MM/DD/YYYY"
                    prop:value=move || start_date.get()
                    on:input=move |ev| set_start_date.set(event_target_value(&ev))
                />
                <label>" End "</label>
                <input
                    type="text"
                    placeholder="MM/DD/YYYY"
                    prop:value=move || end_date.get()
                    on:input=move |ev| set_end_date.set(event_target_value(&ev))
                />
            </div>
            <div class="input-container">
                <label>"Priority "</label>
                <select
                    prop:value=move || priority.get().map(|p| u8::from(p).to_string()).unwrap_or_default()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        let parsed = value.parse::<u8>().ok().and_then(|v| Priority::try_from(v).ok());
                        set_priority.set(parsed);
                    }
                >
                    <option value="">"None"</option>
                    {Priority::ALL.into_iter().map(|p| view! {
                        <option value=u8::from(p).to_string()>{p.label()}</option>
                    }).collect_view()}
                </select>
                <label>" Status "</label>
                <select
                    prop:value=move || status.get().map(|s| s.as_str()).unwrap_or_default()
                    on:change=move |ev| set_status.set(Status::parse(&event_target_value(&ev)))
                >
                    <option value="">"None"</option>
                    {Status::ALL.into_iter().map(|s| view! {
                        <option value=s.as_str()>{s.as_str()}</option>
                    }).collect_view()}
                </select>
            </div>
            <ErrorText message=error />
            {move || notice.get().map(|msg| view! { <div class="notice">{msg}</div> })}
            <div class="button-container">
                <input type="submit" value="Add task" />
            </div>
        </form>
    }
}
