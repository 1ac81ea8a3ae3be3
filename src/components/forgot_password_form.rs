//! Forgot Password Screen
//!
//! Reset form. Success routes through the success registry, and confirming
//! that dialog returns to the login screen.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::app::Screen;
use crate::auth::use_auth;
use crate::modal::Modals;

#[component]
pub fn ForgotPasswordForm(set_screen: WriteSignal<Screen>) -> impl IntoView {
    let auth = use_auth();
    let modals = expect_context::<Modals>();

    let (email, set_email) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (error, set_error) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email = email.get();
        let new_password = new_password.get();
        let confirm_password = confirm_password.get();
        if email.is_empty() || new_password.is_empty() {
            return;
        }
        if new_password != confirm_password {
            set_error.set("Passwords do not match.".to_string());
            return;
        }
        spawn_local(async move {
            match auth
                .reset_password(&email, &new_password, &confirm_password)
                .await
            {
                Ok(()) => {
                    modals.show_success(
                        "Password reset successfully. Please log in with your new password.",
                        move || set_screen.set(Screen::Login),
                    );
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[AUTH] Password reset failed: {err}").into(),
                    );
                    modals.show_error(err.to_string());
                }
            }
        });
    };

    view! {
        <div class="auth-screen">
            <div class="auth-card">
                <h1>"Forgot Password"</h1>
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
                    <label class="field-label">"New Password"</label>
                    <input
                        type="password"
                        prop:value=move || new_password.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_new_password.set(input.value());
                        }
                    />
                    <label class="field-label">"Confirm Password"</label>
                    <input
                        type="password"
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_confirm_password.set(input.value());
                        }
                    />
                    <button type="submit" class="primary">
                        "Reset Password"
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
