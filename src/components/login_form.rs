//! Login Form Component
//!
//! Sign-in form. A successful login stores the returned token and opens
//! the task lists.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::ErrorText;
use crate::context::use_app_context;
use crate::route::Page;
use crate::validate;

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_app_context();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitted, set_submitted) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let user = username.get();
        let pass = password.get();
        if let Err(e) = validate::login_credentials(&user, &pass) {
            set_error.set(Some(e.display_message()));
            return;
        }

        set_error.set(None);
        set_submitted.set(true);
        let api = ctx.api();
        spawn_local(async move {
            let reply = api.login(&user, &pass).await;
            if let Err(e) = ctx.finish_login(reply) {
                log::warn!("[LOGIN] {}", e);
                set_error.set(Some(e.display_message()));
            }
            set_submitted.set(false);
        });
    };

    view! {
        <div class="app">
            <div class="login-form">
                <div class="title">"Sign In"</div>
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
                                name="pass"
                                required
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                            />
                        </div>
                        <ErrorText message=error />
                        <div class="button-container">
                            <input type="submit" value="Submit" disabled=move || submitted.get() />
                        </div>
                        <div class="sign-up">
                            <label>"Don't have an account? "</label>
                            <a
                                href="/Register"
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    ctx.navigate(Page::Register);
                                }
                            >
                                "Sign up"
                            </a>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
