//! Tag Sidebar Component
//!
//! Left sidebar with the All Notes / Archived Notes switches and the tag
//! filter list, each with a badge count over the currently loaded list.

use leptos::prelude::*;

use crate::filter::{count_by_archived, count_with_tag};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TagSidebar(
    selected_tag: ReadSignal<Option<String>>,
    set_selected_tag: WriteSignal<Option<String>>,
    show_archived: ReadSignal<bool>,
    set_show_archived: WriteSignal<bool>,
) -> impl IntoView {
    let store = use_app_store();

    let all_selected = move || selected_tag.get().is_none() && !show_archived.get();
    let archived_selected = move || show_archived.get();

    view! {
        <aside class="sidebar">
            <div class="sidebar-logo">"Notewell"</div>
            <button
                class=move || if all_selected() { "sidebar-item selected" } else { "sidebar-item" }
                on:click=move |_| {
                    set_selected_tag.set(None);
                    set_show_archived.set(false);
                }
            >
                <span>"All Notes"</span>
                <span class="badge">
                    {move || count_by_archived(&store.notes().get(), false)}
                </span>
            </button>
            <button
                class=move || if archived_selected() { "sidebar-item selected" } else { "sidebar-item" }
                on:click=move |_| {
                    set_selected_tag.set(None);
                    set_show_archived.set(true);
                }
            >
                <span>"Archived Notes"</span>
                <span class="badge">
                    {move || count_by_archived(&store.notes().get(), true)}
                </span>
            </button>
            <div class="sidebar-divider"></div>
            <div class="sidebar-heading">"Tags"</div>
            <For
                each=move || store.tags().get()
                key=|tag| tag.id
                children=move |tag| {
                    let name = tag.name.clone();
                    let select_name = tag.name.clone();
                    let badge_name = tag.name.clone();
                    let is_selected =
                        move || selected_tag.get().as_deref() == Some(name.as_str());
                    view! {
                        <button
                            class=move || {
                                if is_selected() { "sidebar-item selected" } else { "sidebar-item" }
                            }
                            on:click=move |_| set_selected_tag.set(Some(select_name.clone()))
                        >
                            <span class="tag-label">{tag.name.clone()}</span>
                            <span class="badge">
                                {move || count_with_tag(&store.notes().get(), &badge_name)}
                            </span>
                        </button>
                    }
                }
            />
        </aside>
    }
}
