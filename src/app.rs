//! Notewell Frontend App
//!
//! Root component: builds the shared contexts, restores any stored
//! session, and switches between the auth screens and the notes screen.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::{ApiClient, DEFAULT_BASE_URL};
use crate::auth::AuthContext;
use crate::components::{ForgotPasswordForm, LoginForm, ModalHost, NotesScreen, RegisterForm};
use crate::modal::Modals;
use crate::query::QueryClient;
use crate::store::AppState;

/// Which screen is mounted. No router; there are only four destinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Login,
    Register,
    ForgotPassword,
    Notes,
}

#[component]
pub fn App() -> impl IntoView {
    let api = ApiClient::new(DEFAULT_BASE_URL);
    let queries = QueryClient::new();
    let auth = AuthContext::new(api, queries);
    let modals = Modals::new();
    let store = Store::new(AppState::default());

    // Provide context to all children
    provide_context(api);
    provide_context(auth);
    provide_context(modals);
    provide_context(queries);
    provide_context(store);

    auth.restore_session();

    let (screen, set_screen) = signal(Screen::Login);
    let user = auth.user;
    let loading = auth.loading;

    // Session state drives the screen: logging in lands on Notes, losing
    // the session while there falls back to Login.
    Effect::new(move |_| match user.get() {
        Some(_) => set_screen.set(Screen::Notes),
        None => {
            if screen.get_untracked() == Screen::Notes {
                set_screen.set(Screen::Login);
            }
        }
    });

    view! {
        <ModalHost />
        <Show when=move || loading.get()>
            <div class="boot-gate">
                <div class="spinner"></div>
            </div>
        </Show>
        <Show when=move || !loading.get()>
            {move || match screen.get() {
                Screen::Login => view! { <LoginForm set_screen=set_screen /> }.into_any(),
                Screen::Register => view! { <RegisterForm set_screen=set_screen /> }.into_any(),
                Screen::ForgotPassword => {
                    view! { <ForgotPasswordForm set_screen=set_screen /> }.into_any()
                }
                Screen::Notes => view! { <NotesScreen /> }.into_any(),
            }}
        </Show>
    }
}
