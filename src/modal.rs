//! Global Modal Registries
//!
//! Routes "show/hide a dialog" requests from anywhere in the tree to the
//! currently mounted modal host. Registries are `Copy` handles bundled in
//! [`Modals`] and provided through context, so the subsystem can be built
//! and exercised without a DOM.
//!
//! Protocol: the host registers a show/hide handle on mount; the most
//! recent registration wins. Calls issued while no handle is registered
//! are dropped, never queued.

use std::rc::Rc;

use leptos::prelude::*;

/// Parameters for the message-style dialogs (success, error, confirmation).
#[derive(Clone, Default)]
pub struct DialogParams {
    pub description: String,
    /// Dialog-kind default applies when `None`.
    pub title: Option<String>,
    pub on_confirm: Option<Rc<dyn Fn()>>,
}

impl DialogParams {
    pub fn message(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_confirm(mut self, on_confirm: impl Fn() + 'static) -> Self {
        self.on_confirm = Some(Rc::new(on_confirm));
        self
    }

    /// Invoke the stored confirm callback, if any. Callers must run this
    /// before closing the dialog so the callback observes pre-close state
    /// exactly once.
    pub fn run_confirm(&self) {
        if let Some(on_confirm) = &self.on_confirm {
            on_confirm();
        }
    }
}

/// Show/hide pair registered by a mounted modal host.
pub struct ModalHandle<P> {
    pub show: Rc<dyn Fn(P)>,
    pub hide: Rc<dyn Fn()>,
}

impl<P> Clone for ModalHandle<P> {
    fn clone(&self) -> Self {
        Self {
            show: Rc::clone(&self.show),
            hide: Rc::clone(&self.hide),
        }
    }
}

/// One registry per dialog kind. Holds at most one live handle.
///
/// A `Copy` handle over an arena slot: the stored `Rc` closures are
/// single-threaded, the handle itself crosses `Send` bounds freely.
pub struct ModalRegistry<P: 'static> {
    handle: StoredValue<Option<ModalHandle<P>>, LocalStorage>,
}

impl<P: 'static> Clone for ModalRegistry<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: 'static> Copy for ModalRegistry<P> {}

impl<P: 'static> Default for ModalRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: 'static> ModalRegistry<P> {
    pub fn new() -> Self {
        Self {
            handle: StoredValue::new_local(None),
        }
    }

    /// Store the host's handle. Last writer wins, silently.
    pub fn register(&self, handle: ModalHandle<P>) {
        self.handle.set_value(Some(handle));
    }

    /// Clear the stored handle; later calls become no-ops.
    pub fn unregister(&self) {
        self.handle.set_value(None);
    }

    pub fn is_registered(&self) -> bool {
        self.handle.with_value(|handle| handle.is_some())
    }

    /// Forward to the registered handle's `show`. No-op when unregistered.
    pub fn show(&self, params: P) {
        // Clone out before calling: the handle may re-enter the registry.
        let handle = self.handle.with_value(|handle| handle.clone());
        if let Some(handle) = handle {
            (handle.show)(params);
        }
    }

    /// Forward to the registered handle's `hide`. No-op when unregistered.
    pub fn hide(&self) {
        let handle = self.handle.with_value(|handle| handle.clone());
        if let Some(handle) = handle {
            (handle.hide)();
        }
    }
}

/// The four app-wide dialog registries, provided via context.
#[derive(Clone, Copy, Default)]
pub struct Modals {
    /// `Some(text)` overrides the default "Please wait..." description.
    pub loading: ModalRegistry<Option<String>>,
    pub success: ModalRegistry<DialogParams>,
    pub error: ModalRegistry<DialogParams>,
    pub confirmation: ModalRegistry<DialogParams>,
}

impl Modals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_loading(&self) {
        self.loading.show(None);
    }

    pub fn hide_loading(&self) {
        self.loading.hide();
    }

    pub fn show_success(&self, message: impl Into<String>, on_confirm: impl Fn() + 'static) {
        self.success
            .show(DialogParams::message(message).with_confirm(on_confirm));
    }

    pub fn show_error(&self, message: impl Into<String>) {
        self.error.show(DialogParams::message(message));
    }

    pub fn show_confirmation(&self, message: impl Into<String>, on_confirm: impl Fn() + 'static) {
        self.confirmation
            .show(DialogParams::message(message).with_confirm(on_confirm));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// Minimal stand-in for a mounted host: an open flag plus the last
    /// description it was shown with.
    struct FakeHost {
        open: Rc<Cell<bool>>,
        shown: Rc<RefCell<Vec<String>>>,
    }

    impl FakeHost {
        fn new() -> Self {
            Self {
                open: Rc::new(Cell::new(false)),
                shown: Rc::new(RefCell::new(Vec::new())),
            }
        }

        fn handle(&self) -> ModalHandle<DialogParams> {
            let open = Rc::clone(&self.open);
            let shown = Rc::clone(&self.shown);
            let open_hide = Rc::clone(&self.open);
            ModalHandle {
                show: Rc::new(move |params: DialogParams| {
                    shown.borrow_mut().push(params.description.clone());
                    open.set(true);
                }),
                hide: Rc::new(move || open_hide.set(false)),
            }
        }
    }

    #[test]
    fn show_before_registration_is_dropped() {
        let registry: ModalRegistry<DialogParams> = ModalRegistry::new();
        registry.show(DialogParams::message("too early"));
        registry.hide();

        let host = FakeHost::new();
        registry.register(host.handle());

        // No replay of the early call.
        assert!(!host.open.get());
        assert!(host.shown.borrow().is_empty());
    }

    #[test]
    fn open_flag_follows_last_call() {
        let registry: ModalRegistry<DialogParams> = ModalRegistry::new();
        let host = FakeHost::new();
        registry.register(host.handle());

        registry.show(DialogParams::message("a"));
        assert!(host.open.get());
        registry.show(DialogParams::message("b"));
        assert!(host.open.get());
        registry.hide();
        assert!(!host.open.get());
        registry.show(DialogParams::message("c"));
        assert!(host.open.get());
        assert_eq!(*host.shown.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn last_registration_wins() {
        let registry: ModalRegistry<DialogParams> = ModalRegistry::new();
        let first = FakeHost::new();
        let second = FakeHost::new();
        registry.register(first.handle());
        registry.register(second.handle());

        registry.show(DialogParams::message("hello"));
        assert!(!first.open.get());
        assert!(second.open.get());
    }

    #[test]
    fn unregister_makes_late_calls_noops() {
        let registry: ModalRegistry<DialogParams> = ModalRegistry::new();
        let host = FakeHost::new();
        registry.register(host.handle());
        registry.unregister();

        registry.show(DialogParams::message("gone"));
        assert!(!host.open.get());
        assert!(!registry.is_registered());
    }

    #[test]
    fn confirm_runs_exactly_once_before_close() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let confirm_log = Rc::clone(&log);
        let params = DialogParams::message("done")
            .with_confirm(move || confirm_log.borrow_mut().push("confirm"));

        // Host-side action button wiring: invoke, then close.
        params.run_confirm();
        log.borrow_mut().push("close");

        assert_eq!(*log.borrow(), vec!["confirm", "close"]);
    }

    #[test]
    fn run_confirm_without_callback_is_noop() {
        DialogParams::message("plain").run_confirm();
    }

    #[test]
    fn loading_registry_forwards_description_override() {
        let modals = Modals::new();
        let seen: Rc<RefCell<Vec<Option<String>>>> = Rc::new(RefCell::new(Vec::new()));
        let seen_show = Rc::clone(&seen);
        modals.loading.register(ModalHandle {
            show: Rc::new(move |desc| seen_show.borrow_mut().push(desc)),
            hide: Rc::new(|| {}),
        });

        modals.show_loading();
        modals.loading.show(Some("Saving...".to_string()));
        assert_eq!(
            *seen.borrow(),
            vec![None, Some("Saving...".to_string())]
        );
    }
}
