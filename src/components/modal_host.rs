//! Global Modal Host
//!
//! Mounts one instance of each dialog kind and registers show/hide
//! handles into the matching registries on mount. The registries are
//! cleared again on unmount, so calls arriving after teardown no-op
//! instead of reaching a dead subtree.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::components::modals::{
    ConfirmModal, LoadingModal, MessageModal, CONFIRMATION_TITLE, ERROR_TITLE,
    LOADING_DESCRIPTION, SUCCESS_TITLE,
};
use crate::modal::{DialogParams, ModalHandle, ModalRegistry, Modals};

/// Visual state for one message-style dialog kind, plus its registration.
struct DialogState {
    open: ReadSignal<bool>,
    title: ReadSignal<String>,
    description: ReadSignal<String>,
    /// Invoke the stored callback, then close. Ordering matters: the
    /// callback must observe the dialog still open.
    confirm_then_close: Rc<dyn Fn()>,
    close: Rc<dyn Fn()>,
}

fn dialog_state(registry: ModalRegistry<DialogParams>, default_title: &'static str) -> DialogState {
    let (open, set_open) = signal(false);
    let (title, set_title) = signal(default_title.to_string());
    let (description, set_description) = signal(String::new());
    let params: Rc<RefCell<DialogParams>> = Rc::new(RefCell::new(DialogParams::default()));

    let show_params = Rc::clone(&params);
    registry.register(ModalHandle {
        show: Rc::new(move |p: DialogParams| {
            set_title.set(p.title.clone().unwrap_or_else(|| default_title.to_string()));
            set_description.set(p.description.clone());
            *show_params.borrow_mut() = p;
            set_open.set(true);
        }),
        hide: Rc::new(move || set_open.set(false)),
    });
    on_cleanup(move || registry.unregister());

    let confirm_params = Rc::clone(&params);
    DialogState {
        open,
        title,
        description,
        confirm_then_close: Rc::new(move || {
            // Clone out first: the callback may re-enter the registry.
            let current = confirm_params.borrow().clone();
            current.run_confirm();
            set_open.set(false);
        }),
        close: Rc::new(move || set_open.set(false)),
    }
}

/// Single mounted host for the app-wide loading/success/error/confirmation
/// dialogs.
#[component]
pub fn ModalHost() -> impl IntoView {
    let modals = expect_context::<Modals>();

    // Loading dialog: show takes an optional description override.
    let (loading_open, set_loading_open) = signal(false);
    let (loading_desc, set_loading_desc) = signal(LOADING_DESCRIPTION.to_string());
    modals.loading.register(ModalHandle {
        show: Rc::new(move |desc: Option<String>| {
            set_loading_desc.set(desc.unwrap_or_else(|| LOADING_DESCRIPTION.to_string()));
            set_loading_open.set(true);
        }),
        hide: Rc::new(move || set_loading_open.set(false)),
    });
    on_cleanup(move || modals.loading.unregister());

    let success = dialog_state(modals.success, SUCCESS_TITLE);
    let error = dialog_state(modals.error, ERROR_TITLE);
    let confirmation = dialog_state(modals.confirmation, CONFIRMATION_TITLE);

    let success_action = Rc::clone(&success.confirm_then_close);
    let success_close = Rc::clone(&success.close);
    let error_action = Rc::clone(&error.confirm_then_close);
    let error_close = Rc::clone(&error.close);
    let confirm_action = Rc::clone(&confirmation.confirm_then_close);
    let confirm_close = Rc::clone(&confirmation.close);

    view! {
        <LoadingModal
            open=loading_open
            description=loading_desc
            on_close=move |_| set_loading_open.set(false)
        />
        <MessageModal
            kind="success"
            open=success.open
            title=success.title
            description=success.description
            on_action=move |_| success_action()
            on_close=move |_| success_close()
        />
        <MessageModal
            kind="error"
            open=error.open
            title=error.title
            description=error.description
            on_action=move |_| error_action()
            on_close=move |_| error_close()
        />
        <ConfirmModal
            open=confirmation.open
            title=confirmation.title
            description=confirmation.description
            on_confirm=move |_| confirm_action()
            on_close=move |_| confirm_close()
        />
    }
}
