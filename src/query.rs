//! Query Cache
//!
//! Client-side cache for the note and tag list reads. Note lists are keyed
//! by the archived flag with a 5-minute freshness window; the tag list gets
//! an hour. Mutations invalidate every note-list entry and bump a reactive
//! version signal so mounted list effects refetch.

use std::collections::HashMap;

use leptos::prelude::*;

use crate::models::{Note, Tag};

pub const NOTES_STALE_MS: f64 = 5.0 * 60.0 * 1000.0;
pub const TAGS_STALE_MS: f64 = 60.0 * 60.0 * 1000.0;

struct CacheEntry<T> {
    data: T,
    fetched_at: f64,
}

impl<T> CacheEntry<T> {
    fn is_fresh(&self, now_ms: f64, ttl_ms: f64) -> bool {
        now_ms - self.fetched_at < ttl_ms
    }
}

/// Non-reactive cache bookkeeping, separated out so it can be tested with
/// explicit clocks.
#[derive(Default)]
pub struct QueryState {
    notes: HashMap<bool, CacheEntry<Vec<Note>>>,
    tags: Option<CacheEntry<Vec<Tag>>>,
}

impl QueryState {
    /// Fresh cached list for the given archive key, if any.
    pub fn notes(&self, archived: bool, now_ms: f64) -> Option<&[Note]> {
        self.notes
            .get(&archived)
            .filter(|entry| entry.is_fresh(now_ms, NOTES_STALE_MS))
            .map(|entry| entry.data.as_slice())
    }

    pub fn put_notes(&mut self, archived: bool, notes: Vec<Note>, now_ms: f64) {
        self.notes.insert(
            archived,
            CacheEntry {
                data: notes,
                fetched_at: now_ms,
            },
        );
    }

    pub fn tags(&self, now_ms: f64) -> Option<&[Tag]> {
        self.tags
            .as_ref()
            .filter(|entry| entry.is_fresh(now_ms, TAGS_STALE_MS))
            .map(|entry| entry.data.as_slice())
    }

    pub fn put_tags(&mut self, tags: Vec<Tag>, now_ms: f64) {
        self.tags = Some(CacheEntry {
            data: tags,
            fetched_at: now_ms,
        });
    }

    /// Drop every note-list entry. Tags are unaffected.
    pub fn invalidate_notes(&mut self) {
        self.notes.clear();
    }

    /// Drop everything, note lists and tags alike.
    pub fn clear(&mut self) {
        self.notes.clear();
        self.tags = None;
    }
}

fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as f64)
            .unwrap_or(0.0)
    }
}

/// Reactive handle around [`QueryState`], provided via context.
#[derive(Clone, Copy)]
pub struct QueryClient {
    state: StoredValue<QueryState>,
    notes_version: ReadSignal<u32>,
    set_notes_version: WriteSignal<u32>,
}

impl QueryClient {
    pub fn new() -> Self {
        let (notes_version, set_notes_version) = signal(0u32);
        Self {
            state: StoredValue::new(QueryState::default()),
            notes_version,
            set_notes_version,
        }
    }

    /// Reactive read; list effects depend on this so invalidation re-runs them.
    pub fn notes_version(&self) -> u32 {
        self.notes_version.get()
    }

    pub fn cached_notes(&self, archived: bool) -> Option<Vec<Note>> {
        self.state
            .with_value(|state| state.notes(archived, now_ms()).map(|notes| notes.to_vec()))
    }

    pub fn store_notes(&self, archived: bool, notes: Vec<Note>) {
        self.state
            .update_value(|state| state.put_notes(archived, notes, now_ms()));
    }

    pub fn cached_tags(&self) -> Option<Vec<Tag>> {
        self.state
            .with_value(|state| state.tags(now_ms()).map(|tags| tags.to_vec()))
    }

    pub fn store_tags(&self, tags: Vec<Tag>) {
        self.state.update_value(|state| state.put_tags(tags, now_ms()));
    }

    /// Called after every successful mutation: clears the keyed note lists
    /// and nudges subscribers to refetch.
    pub fn invalidate_notes(&self) {
        self.state.update_value(|state| state.invalidate_notes());
        self.set_notes_version.update(|v| *v += 1);
    }

    /// Drop the whole cache. Called when the session ends so the next
    /// login starts from the server, not the previous user's lists.
    pub fn clear(&self) {
        self.state.update_value(|state| state.clear());
        self.set_notes_version.update(|v| *v += 1);
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the query client from context.
pub fn use_query_client() -> QueryClient {
    expect_context::<QueryClient>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_note(id: u32, archived: bool) -> Note {
        Note {
            id,
            title: format!("Note {id}"),
            content: "<p>body</p>".to_string(),
            tags: Vec::new(),
            archived,
            last_edited: "2025-03-01T10:00:00Z".to_string(),
        }
    }

    #[test]
    fn notes_fresh_within_window() {
        let mut state = QueryState::default();
        state.put_notes(false, vec![make_note(1, false)], 1_000.0);

        let within = 1_000.0 + NOTES_STALE_MS - 1.0;
        assert!(state.notes(false, within).is_some());
    }

    #[test]
    fn notes_stale_after_window() {
        let mut state = QueryState::default();
        state.put_notes(false, vec![make_note(1, false)], 1_000.0);

        let past = 1_000.0 + NOTES_STALE_MS;
        assert!(state.notes(false, past).is_none());
    }

    #[test]
    fn note_lists_are_keyed_by_archive_flag() {
        let mut state = QueryState::default();
        state.put_notes(false, vec![make_note(1, false)], 0.0);

        assert!(state.notes(false, 1.0).is_some());
        assert!(state.notes(true, 1.0).is_none());

        state.put_notes(true, vec![make_note(2, true)], 0.0);
        assert_eq!(state.notes(true, 1.0).unwrap()[0].id, 2);
        assert_eq!(state.notes(false, 1.0).unwrap()[0].id, 1);
    }

    #[test]
    fn invalidation_clears_every_note_key_but_not_tags() {
        let mut state = QueryState::default();
        state.put_notes(false, vec![make_note(1, false)], 0.0);
        state.put_notes(true, vec![make_note(2, true)], 0.0);
        state.put_tags(
            vec![crate::models::Tag {
                id: 1,
                name: "work".to_string(),
            }],
            0.0,
        );

        state.invalidate_notes();

        assert!(state.notes(false, 1.0).is_none());
        assert!(state.notes(true, 1.0).is_none());
        assert!(state.tags(1.0).is_some());
    }

    #[test]
    fn clear_drops_notes_and_tags() {
        let mut state = QueryState::default();
        state.put_notes(false, vec![make_note(1, false)], 0.0);
        state.put_tags(
            vec![crate::models::Tag {
                id: 1,
                name: "work".to_string(),
            }],
            0.0,
        );

        state.clear();

        assert!(state.notes(false, 1.0).is_none());
        assert!(state.tags(1.0).is_none());
    }

    #[test]
    fn logout_clear_empties_the_client_cache() {
        let client = QueryClient::new();
        client.store_notes(false, vec![make_note(1, false)]);
        client.store_tags(vec![crate::models::Tag {
            id: 1,
            name: "work".to_string(),
        }]);

        client.clear();

        assert!(client.cached_notes(false).is_none());
        assert!(client.cached_tags().is_none());
    }

    #[test]
    fn tags_use_the_longer_window() {
        let mut state = QueryState::default();
        state.put_tags(Vec::new(), 0.0);

        assert!(state.tags(NOTES_STALE_MS + 1.0).is_some());
        assert!(state.tags(TAGS_STALE_MS).is_none());
    }
}
