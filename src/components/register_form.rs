//! Register Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::ErrorText;
use crate::context::use_app_context;
use crate::route::Page;
use crate::validate;

/// Sign-up form; on success the user is sent to the login page
#[component]
pub fn RegisterForm() -> impl IntoView {
    let ctx = use_app_context();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (display_name, set_display_name) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitted, set_submitted) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let user = username.get();
        let pass = password.get();
        if let Err(e) = validate::register_credentials(&user, &pass) {
            set_error.set(Some(e.display_message()));
            return;
        }
        let name = display_name.get().trim().to_string();

        set_error.set(None);
        set_submitted.set(true);
        let api = ctx.api();
        spawn_local(async move {
            let name = (!name.is_empty()).then_some(name.as_str());
            match api.register(&user, &pass, name).await {
                Ok(_) => {
                    log::info!("[REGISTER] Account created for {}", user);
                    ctx.navigate(Page::Login);
                }
                Err(e) => {
                    log::warn!("[REGISTER] {}", e);
                    set_error.set(Some(e.display_message()));
                }
            }
            set_submitted.set(false);
        });
    };

    view! {
        <div class="app">
            <div class="register-form">
                <div class="title">"Sign Up"</div>
                <div class="form">
                    <form on:submit=on_submit>
                        <div class="input-container">
                            <label>"Username "</label>
                            <input
                                type="text"
                                name="uname"
                                required
                                prop:value=move || username.get()
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="input-container">
                            <label>"Password "</label>
                            <input
                                type="password"
                                name="pw"
                                required
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="input-container">
                            <label>"Display name (optional) "</label>
                            <input
                                type="text"
                                name="name"
                                prop:value=move || display_name.get()
                                on:input=move |ev| set_display_name.set(event_target_value(&ev))
                            />
                        </div>
                        <ErrorText message=error />
                        <div class="button-container">
                            <input type="submit" value="Submit" disabled=move || submitted.get() />
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
