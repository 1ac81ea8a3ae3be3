//! Notes Screen
//!
//! Main screen after login: sidebar, toolbar with search and logout, the
//! note list, the detail pane, and the creation dialog. Owns the query
//! effects that keep the displayed lists in sync with the cache.

use leptos::callback::UnsyncCallback;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::ApiClient;
use crate::auth::use_auth;
use crate::components::{NewNoteModal, NoteDetail, TagSidebar};
use crate::filter::{filter_notes, format_edited_date, selection_after_delete};
use crate::modal::Modals;
use crate::models::Note;
use crate::query::use_query_client;
use crate::store::{store_set_notes, store_set_tags, use_app_store, AppStateStoreFields};

#[component]
pub fn NotesScreen() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let modals = expect_context::<Modals>();
    let queries = use_query_client();
    let auth = use_auth();
    let store = use_app_store();

    let (selected_note, set_selected_note) = signal::<Option<Note>>(None);
    let (search_query, set_search_query) = signal(String::new());
    let (selected_tag, set_selected_tag) = signal::<Option<String>>(None);
    let (show_archived, set_show_archived) = signal(false);
    let (new_note_open, set_new_note_open) = signal(false);

    let (notes_loading, set_notes_loading) = signal(false);
    let (tags_loading, set_tags_loading) = signal(false);

    // One loading dialog over both list queries: visible while either is
    // in flight, hidden once both settle.
    Effect::new(move |_| {
        if notes_loading.get() || tags_loading.get() {
            modals.show_loading();
        } else {
            modals.hide_loading();
        }
    });

    // Load notes when the archive view changes or a mutation invalidates
    // the cache. A fresh cached list short-circuits the fetch.
    Effect::new(move |_| {
        let _ = queries.notes_version();
        let archived = show_archived.get();
        if let Some(cached) = queries.cached_notes(archived) {
            store_set_notes(&store, cached);
            return;
        }
        set_notes_loading.set(true);
        spawn_local(async move {
            match api.list_notes(archived).await {
                Ok(notes) => {
                    web_sys::console::log_1(
                        &format!(
                            "[NOTES] Loaded {} notes (archived={})",
                            notes.len(),
                            archived
                        )
                        .into(),
                    );
                    queries.store_notes(archived, notes.clone());
                    store_set_notes(&store, notes);
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[NOTES] Failed to load notes: {err}").into(),
                    );
                    modals.show_error(err.to_string());
                }
            }
            set_notes_loading.set(false);
        });
    });

    // Tags change rarely; fetch once unless the hour-long window lapsed.
    Effect::new(move |_| {
        if let Some(cached) = queries.cached_tags() {
            store_set_tags(&store, cached);
            return;
        }
        set_tags_loading.set(true);
        spawn_local(async move {
            match api.list_tags().await {
                Ok(tags) => {
                    queries.store_tags(tags.clone());
                    store_set_tags(&store, tags);
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[NOTES] Failed to load tags: {err}").into(),
                    );
                    modals.show_error(err.to_string());
                }
            }
            set_tags_loading.set(false);
        });
    });

    let filtered = Memo::new(move |_| {
        filter_notes(
            &store.notes().get(),
            &search_query.get(),
            selected_tag.get().as_deref(),
        )
    });

    // Creation invalidates the cache at mutation time; only the selection
    // moves here.
    let on_note_created = UnsyncCallback::new(move |note: Note| {
        set_selected_note.set(Some(note));
    });
    let on_note_updated = UnsyncCallback::new(move |note: Note| {
        queries.invalidate_notes();
        set_selected_note.set(Some(note));
    });
    let on_note_deleted = UnsyncCallback::new(move |deleted_id: u32| {
        queries.invalidate_notes();
        set_selected_note.update(|selected| {
            *selected = selection_after_delete(selected.take(), deleted_id);
        });
    });
    // The note left the current archive view, so the selection goes with it.
    let on_note_archived = UnsyncCallback::new(move |archived_id: u32| {
        queries.invalidate_notes();
        set_selected_note.update(|selected| {
            *selected = selection_after_delete(selected.take(), archived_id);
        });
    });

    let logout = move |_: web_sys::MouseEvent| auth.logout();

    view! {
        <div class="app-layout">
            <TagSidebar
                selected_tag=selected_tag
                set_selected_tag=set_selected_tag
                show_archived=show_archived
                set_show_archived=set_show_archived
            />
            <main class="main-content">
                <header class="toolbar">
                    <h1>{move || if show_archived.get() { "Archived Notes" } else { "All Notes" }}</h1>
                    <input
                        class="search-input"
                        type="text"
                        placeholder="Search notes and tags..."
                        prop:value=move || search_query.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_search_query.set(input.value());
                        }
                    />
                    <button class="logout-btn" on:click=logout>
                        "Logout"
                    </button>
                </header>
                <div class="content-row">
                    <section class="note-list-pane">
                        <button
                            class="create-note-btn"
                            on:click=move |_| set_new_note_open.set(true)
                        >
                            "+ Create New Note"
                        </button>
                        <For
                            each=move || filtered.get()
                            key=|note| note.id
                            children=move |note| {
                                let id = note.id;
                                let click_note = note.clone();
                                let is_selected = move || {
                                    selected_note.get().map(|n| n.id) == Some(id)
                                };
                                view! {
                                    <button
                                        class=move || {
                                            if is_selected() {
                                                "note-list-item selected"
                                            } else {
                                                "note-list-item"
                                            }
                                        }
                                        on:click=move |_| {
                                            set_selected_note.set(Some(click_note.clone()));
                                        }
                                    >
                                        <span class="note-item-title">{note.title.clone()}</span>
                                        <span class="note-item-tags">
                                            {note
                                                .tags
                                                .iter()
                                                .map(|tag| {
                                                    view! { <span class="chip">{tag.name.clone()}</span> }
                                                })
                                                .collect_view()}
                                        </span>
                                        <span class="note-item-date">
                                            {format_edited_date(&note.last_edited)}
                                        </span>
                                    </button>
                                }
                            }
                        />
                    </section>
                    <section class="note-detail-pane">
                        {move || match selected_note.get() {
                            Some(note) => {
                                view! {
                                    <NoteDetail
                                        note=note
                                        on_updated=on_note_updated
                                        on_deleted=on_note_deleted
                                        on_archived=on_note_archived
                                    />
                                }
                                    .into_any()
                            }
                            None => {
                                view! {
                                    <p class="empty-detail">"Select a note to view or edit"</p>
                                }
                                    .into_any()
                            }
                        }}
                    </section>
                </div>
            </main>
            <NewNoteModal
                open=new_note_open
                on_close=move |_| set_new_note_open.set(false)
                on_created=on_note_created
            />
        </div>
    }
}
