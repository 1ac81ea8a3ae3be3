//! Login Screen
//!
//! Email/password form with an inline failure banner and links to the
//! register and forgot-password screens.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::app::Screen;
use crate::auth::use_auth;

#[component]
pub fn LoginForm(set_screen: WriteSignal<Screen>) -> impl IntoView {
    let auth = use_auth();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email = email.get();
        let password = password.get();
        if email.is_empty() || password.is_empty() {
            return;
        }
        spawn_local(async move {
            if let Err(err) = auth.login(&email, &password).await {
                web_sys::console::error_1(&format!("[AUTH] Login failed: {err}").into());
                set_error.set("Failed to login. Please check your credentials.".to_string());
            }
        });
    };

    view! {
        <div class="auth-screen">
            <div class="auth-card">
                <h1>"Login"</h1>
                <Show when=move || !error.get().is_empty()>
                    <div class="auth-error">{move || error.get()}</div>
                </Show>
                <form on:submit=on_submit>
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
                    <button type="submit" class="primary">
                        "Login"
                    </button>
                </form>
                <div class="auth-links">
                    <button class="link-btn" on:click=move |_| set_screen.set(Screen::Register)>
                        "Create an account"
                    </button>
                    <button
                        class="link-btn"
                        on:click=move |_| set_screen.set(Screen::ForgotPassword)
                    >
                        "Forgot password?"
                    </button>
                </div>
            </div>
        </div>
    }
}
