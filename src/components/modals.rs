//! Modal Dialog Components
//!
//! The four dialog kinds rendered by the modal host: loading, success,
//! error, and confirmation. All visual state lives in the host; these
//! components just render it.

use leptos::callback::UnsyncCallback;
use leptos::prelude::*;

pub const LOADING_DESCRIPTION: &str = "Please wait...";
pub const SUCCESS_TITLE: &str = "Yeay!";
pub const ERROR_TITLE: &str = "Oops!";
pub const CONFIRMATION_TITLE: &str = "Attention!";

/// Spinner dialog with no actions beyond its close affordance.
#[component]
pub fn LoadingModal(
    open: ReadSignal<bool>,
    description: ReadSignal<String>,
    #[prop(into)] on_close: UnsyncCallback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay">
                <div class="modal modal-loading">
                    <button class="modal-close-btn" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                    <div class="spinner"></div>
                    <p class="modal-description">{move || description.get()}</p>
                </div>
            </div>
        </Show>
    }
}

/// Success/error dialog with a single action button. The host wires
/// `on_action` to invoke the stored callback and then close.
#[component]
pub fn MessageModal(
    /// "success" or "error"; only affects styling
    kind: &'static str,
    open: ReadSignal<bool>,
    title: ReadSignal<String>,
    description: ReadSignal<String>,
    #[prop(into)] on_action: UnsyncCallback<()>,
    #[prop(into)] on_close: UnsyncCallback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay">
                <div class=format!("modal modal-{kind}")>
                    <button class="modal-close-btn" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                    <div class=format!("modal-icon modal-icon-{kind}")></div>
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <p class="modal-description">{move || description.get()}</p>
                    <div class="modal-actions">
                        <button class="modal-primary-btn" on:click=move |_| on_action.run(())>
                            "Ok"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// Yes/No dialog. "Yes" invokes the stored callback then closes; "No"
/// and the close affordance just close.
#[component]
pub fn ConfirmModal(
    open: ReadSignal<bool>,
    title: ReadSignal<String>,
    description: ReadSignal<String>,
    #[prop(into)] on_confirm: UnsyncCallback<()>,
    #[prop(into)] on_close: UnsyncCallback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay">
                <div class="modal modal-confirmation">
                    <button class="modal-close-btn" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                    <div class="modal-icon modal-icon-warning"></div>
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <p class="modal-description">{move || description.get()}</p>
                    <div class="modal-actions">
                        <button class="modal-secondary-btn" on:click=move |_| on_close.run(())>
                            "No"
                        </button>
                        <button class="modal-primary-btn" on:click=move |_| on_confirm.run(())>
                            "Yes"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
