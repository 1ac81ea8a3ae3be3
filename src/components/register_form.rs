//! Register Screen
//!
//! Account creation form. A successful registration logs straight in with
//! the same credentials.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::app::Screen;
use crate::auth::use_auth;

#[component]
pub fn RegisterForm(set_screen: WriteSignal<Screen>) -> impl IntoView {
    let auth = use_auth();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirmation, set_confirmation) = signal(String::new());
    let (error, set_error) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = name.get();
        let email = email.get();
        let password = password.get();
        let confirmation = confirmation.get();
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return;
        }
        if password != confirmation {
            set_error.set("Passwords do not match.".to_string());
            return;
        }
        spawn_local(async move {
            if let Err(err) = auth.register(&name, &email, &password, &confirmation).await {
                web_sys::console::error_1(
                    &format!("[AUTH] Registration failed: {err}").into(),
                );
                set_error.set("Failed to register. Please try again.".to_string());
            }
        });
    };

    view! {
        <div class="auth-screen">
            <div class="auth-card">
                <h1>"Register"</h1>
                <Show when=move || !error.get().is_empty()>
                    <div class="auth-error">{move || error.get()}</div>
                </Show>
                <form on:submit=on_submit>
                    <label class="field-label">"Name"</label>
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_name.set(input.value());
                        }
                    />
                    <label class="field-label">"Email"</label>
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_email.set(input.value());
                        }
                    />
                    <label class="field-label">"Password"</label>
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_password.set(input.value());
                        }
                    />
                    <label class="field-label">"Confirm Password"</label>
                    <input
                        type="password"
                        prop:value=move || confirmation.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_confirmation.set(input.value());
                        }
                    />
                    <button type="submit" class="primary">
                        "Register"
                    </button>
                </form>
                <div class="auth-links">
                    <button class="link-btn" on:click=move |_| set_screen.set(Screen::Login)>
                        "Back to login"
                    </button>
                </div>
            </div>
        </div>
    }
}
