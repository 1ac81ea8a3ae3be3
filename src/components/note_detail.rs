//! Note Detail Component
//!
//! Right-hand pane for the selected note: read view with Edit / Archive /
//! Delete actions, and an edit form with title, content, and tag selection.
//! Destructive actions go through the confirmation registry; every mutation
//! failure routes through the error registry.

use std::collections::HashSet;

use leptos::callback::UnsyncCallback;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::ApiClient;
use crate::filter::format_edited_datetime;
use crate::modal::Modals;
use crate::models::{Note, NoteUpdate};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NoteDetail(
    note: Note,
    #[prop(into)] on_updated: UnsyncCallback<Note>,
    #[prop(into)] on_deleted: UnsyncCallback<u32>,
    #[prop(into)] on_archived: UnsyncCallback<u32>,
) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let modals = expect_context::<Modals>();
    let store = use_app_store();

    let note_id = note.id;
    let archived = note.archived;

    let (editing, set_editing) = signal(false);
    let (title_value, set_title_value) = signal(note.title.clone());
    let (content_value, set_content_value) = signal(note.content.clone());
    let (tag_ids, set_tag_ids) = signal(
        note.tags
            .iter()
            .map(|tag| tag.id)
            .collect::<HashSet<u32>>(),
    );
    let (title_error, set_title_error) = signal(false);

    let save_note = UnsyncCallback::new(move |ev: web_sys::SubmitEvent| {
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

        spawn_local(async move {
            let body = NoteUpdate {
                title: Some(&title),
                content: Some(&content),
                tags: Some(&tags),
                archived: None,
            };
            match api.update_note(note_id, &body).await {
                Ok(updated) => {
                    set_editing.set(false);
                    on_updated.run(updated);
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[NOTES] Failed to update note {note_id}: {err}").into(),
                    );
                    modals.show_error(err.to_string());
                }
            }
        });
    });

    let confirm_archive = UnsyncCallback::new(move |_: web_sys::MouseEvent| {
        let question = if archived {
            "Unarchive this note?"
        } else {
            "Archive this note?"
        };
        modals.show_confirmation(question, move || {
            spawn_local(async move {
                match api.archive_note(note_id, !archived).await {
                    Ok(_) => on_archived.run(note_id),
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("[NOTES] Failed to archive note {note_id}: {err}")
                                .into(),
                        );
                        modals.show_error(err.to_string());
                    }
                }
            });
        });
    });

    let confirm_delete = UnsyncCallback::new(move |_: web_sys::MouseEvent| {
        modals.show_confirmation(
            "Are you sure you want to delete this note? This action cannot be undone.",
            move || {
                spawn_local(async move {
                    match api.delete_note(note_id).await {
                        Ok(()) => on_deleted.run(note_id),
                        Err(err) => {
                            web_sys::console::error_1(
                                &format!("[NOTES] Failed to delete note {note_id}: {err}")
                                    .into(),
                            );
                            modals.show_error(err.to_string());
                        }
                    }
                });
            },
        );
    });

    let read_view = {
        let note = note.clone();
        move || {
            view! {
                <div class="note-read">
                    <h1 class="note-title">{note.title.clone()}</h1>
                    <div class="note-meta">
                        <div class="note-chips">
                            {note
                                .tags
                                .iter()
                                .map(|tag| view! { <span class="chip">{tag.name.clone()}</span> })
                                .collect_view()}
                        </div>
                        <p class="note-edited">
                            {format!("Last edited: {}", format_edited_datetime(&note.last_edited))}
                        </p>
                    </div>
                    <div class="note-content" inner_html=note.content.clone()></div>
                </div>
            }
        }
    };

    view! {
        <div class="note-detail">
            <Show when=move || !editing.get()>
                {read_view.clone()}
                <div class="note-actions">
                    <button class="action-btn" on:click=move |_| set_editing.set(true)>
                        "Edit Note"
                    </button>
                    <button class="action-btn" on:click=move |ev| confirm_archive.run(ev)>
                        {if archived { "Unarchive Note" } else { "Archive Note" }}
                    </button>
                    <button class="action-btn danger" on:click=move |ev| confirm_delete.run(ev)>
                        "Delete Note"
                    </button>
                </div>
            </Show>
            <Show when=move || editing.get()>
                <form class="note-form" on:submit=move |ev| save_note.run(ev)>
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
                        prop:value=move || content_value.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let area = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
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
                        <button type="button" on:click=move |_| set_editing.set(false)>
                            "Cancel"
                        </button>
                        <button type="submit" class="primary">
                            "Save"
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}
