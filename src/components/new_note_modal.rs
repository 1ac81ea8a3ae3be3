//! New Note Modal Component
//!
//! Creation dialog. Submit asks through the confirmation registry; on
//! mutation success the success registry reports it, and confirming that
//! dialog hands the created note back to the list, resets the form, and
//! closes this dialog.

use std::collections::HashSet;

use leptos::callback::UnsyncCallback;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::ApiClient;
use crate::modal::Modals;
use crate::models::{Note, NotePayload};
use crate::query::{use_query_client, QueryClient};
use crate::store::{use_app_store, AppStateStoreFields};

/// Invalidate the note-list cache, then raise the success dialog.
/// Invalidation cannot wait for the dialog's confirm: dismissing it via
/// the close affordance must not leave a fresh cache missing the note.
fn announce_created(queries: QueryClient, modals: Modals, on_confirm: impl Fn() + 'static) {
    queries.invalidate_notes();
    modals.show_success("Note created successfully!", on_confirm);
}

#[component]
pub fn NewNoteModal(
    open: ReadSignal<bool>,
    #[prop(into)] on_close: UnsyncCallback<()>,
    #[prop(into)] on_created: UnsyncCallback<Note>,
) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let modals = expect_context::<Modals>();
    let queries = use_query_client();
    let store = use_app_store();

    let (title_value, set_title_value) = signal(String::new());
    let (content_value, set_content_value) = signal(String::new());
    let (tag_ids, set_tag_ids) = signal(HashSet::<u32>::new());
    let (title_error, set_title_error) = signal(false);

    let reset_form = move || {
        set_title_value.set(String::new());
        set_content_value.set(String::new());
        set_tag_ids.set(HashSet::new());
        set_title_error.set(false);
    };

    let submit = UnsyncCallback::new(move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = title_value.get();
        if title.is_empty() {
            set_title_error.set(true);
            return;
        }
        set_title_error.set(false);
        let content = content_value.get();
        let mut tags: Vec<u32> = tag_ids.get().into_iter().collect();
        tags.sort_unstable();

        modals.show_confirmation("Are you sure you want to create this note?", move || {
            let title = title.clone();
            let content = content.clone();
            let tags = tags.clone();
            spawn_local(async move {
                let payload = NotePayload {
                    title: &title,
                    content: &content,
                    tags: &tags,
                };
                match api.create_note(&payload).await {
                    Ok(created) => {
                        web_sys::console::log_1(
                            &format!("[NOTES] Created note {}", created.id).into(),
                        );
                        announce_created(queries, modals, move || {
                            on_created.run(created.clone());
                            reset_form();
                            on_close.run(());
                        });
                    }
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("[NOTES] Failed to create note: {err}").into(),
                        );
                        modals.show_error(err.to_string());
                    }
                }
            });
        });
    });

    let cancel = move |_: web_sys::MouseEvent| {
        reset_form();
        on_close.run(());
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay">
                <div class="modal modal-new-note">
                    <button class="modal-close-btn" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                    <h2 class="modal-title">"Create New Note"</h2>
                    <form class="note-form" on:submit=move |ev| submit.run(ev)>
                        <label class="field-label">"Title"</label>
                        <input
                            type="text"
                            prop:value=move || title_value.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_title_value.set(input.value());
                            }
                        />
                        <Show when=move || title_error.get()>
                            <p class="field-error">"Title is required"</p>
                        </Show>
                        <label class="field-label">"Content"</label>
                        <textarea
                            placeholder="Write your note content here..."
                            prop:value=move || content_value.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let area = target
                                    .dyn_ref::<web_sys::HtmlTextAreaElement>()
                                    .unwrap();
                                set_content_value.set(area.value());
                            }
                        ></textarea>
                        <label class="field-label">"Tags"</label>
                        <div class="tag-options">
                            <For
                                each=move || store.tags().get()
                                key=|tag| tag.id
                                children=move |tag| {
                                    let id = tag.id;
                                    view! {
                                        <label class="tag-option">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || tag_ids.get().contains(&id)
                                                on:change=move |_| {
                                                    set_tag_ids
                                                        .update(|ids| {
                                                            if !ids.remove(&id) {
                                                                ids.insert(id);
                                                            }
                                                        });
                                                }
                                            />
                                            {tag.name.clone()}
                                        </label>
                                    }
                                }
                            />
                        </div>
                        <div class="form-actions">
                            <button type="button" on:click=cancel.clone()>
                                "Cancel"
                            </button>
                            <button type="submit" class="primary">
                                "Create Note"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::modal::ModalHandle;

    fn make_note(id: u32) -> Note {
        Note {
            id,
            title: format!("Note {id}"),
            content: String::new(),
            tags: Vec::new(),
            archived: false,
            last_edited: "2025-03-01T10:00:00Z".to_string(),
        }
    }

    #[test]
    fn cache_is_invalidated_before_the_success_dialog() {
        let queries = QueryClient::new();
        queries.store_notes(false, vec![make_note(1)]);

        // The success host records whether the cache was already empty
        // when the dialog came up.
        let modals = Modals::new();
        let cache_empty_at_show = Rc::new(Cell::new(None));
        let seen = Rc::clone(&cache_empty_at_show);
        modals.success.register(ModalHandle {
            show: Rc::new(move |_| seen.set(Some(queries.cached_notes(false).is_none()))),
            hide: Rc::new(|| {}),
        });

        announce_created(queries, modals, || {});

        assert_eq!(cache_empty_at_show.get(), Some(true));
    }

    #[test]
    fn dismissing_the_success_dialog_still_leaves_the_cache_invalidated() {
        let queries = QueryClient::new();
        queries.store_notes(false, vec![make_note(1)]);

        // No confirm ever runs; the host just closes again.
        let modals = Modals::new();
        modals.success.register(ModalHandle {
            show: Rc::new(|_| {}),
            hide: Rc::new(|| {}),
        });

        announce_created(queries, modals, || {});
        modals.success.hide();

        assert!(queries.cached_notes(false).is_none());
    }
}
