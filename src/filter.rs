//! Note List Utilities
//!
//! Helper functions for list filtering, badge counts, and display.

use chrono::DateTime;

use crate::models::Note;

/// Filter notes by search text and selected tag.
///
/// The search matches title, content, or any tag name, case-insensitive.
/// A selected tag keeps only notes carrying a tag with that exact name.
pub fn filter_notes(notes: &[Note], query: &str, selected_tag: Option<&str>) -> Vec<Note> {
    let needle = query.to_lowercase();
    notes
        .iter()
        .filter(|note| {
            let matches_search = needle.is_empty()
                || note.title.to_lowercase().contains(&needle)
                || note.content.to_lowercase().contains(&needle)
                || note
                    .tags
                    .iter()
                    .any(|tag| tag.name.to_lowercase().contains(&needle));
            let matches_tag = match selected_tag {
                Some(name) => note.tags.iter().any(|tag| tag.name == name),
                None => true,
            };
            matches_search && matches_tag
        })
        .cloned()
        .collect()
}

/// Sidebar badge count for a tag name.
pub fn count_with_tag(notes: &[Note], tag_name: &str) -> usize {
    notes
        .iter()
        .filter(|note| note.tags.iter().any(|tag| tag.name == tag_name))
        .count()
}

/// Sidebar badge count for the archive views.
pub fn count_by_archived(notes: &[Note], archived: bool) -> usize {
    notes.iter().filter(|note| note.archived == archived).count()
}

/// Format a server timestamp as e.g. "Mar 01, 2025". Falls back to the
/// raw string when it does not parse.
pub fn format_edited_date(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%b %d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Same, with the time of day, for the detail pane.
pub fn format_edited_datetime(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%b %d, %Y %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Selection state after a note is deleted: deleting the selected note
/// clears the selection, deleting any other leaves it alone.
pub fn selection_after_delete(selected: Option<Note>, deleted_id: u32) -> Option<Note> {
    selected.filter(|note| note.id != deleted_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tag;

    fn make_note(id: u32, title: &str, content: &str, tags: &[&str]) -> Note {
        Note {
            id,
            title: title.to_string(),
            content: content.to_string(),
            tags: tags
                .iter()
                .enumerate()
                .map(|(i, name)| Tag {
                    id: i as u32 + 1,
                    name: name.to_string(),
                })
                .collect(),
            archived: false,
            last_edited: "2025-03-01T10:30:00Z".to_string(),
        }
    }

    #[test]
    fn empty_query_keeps_everything() {
        let notes = vec![make_note(1, "A", "x", &[]), make_note(2, "B", "y", &[])];
        assert_eq!(filter_notes(&notes, "", None).len(), 2);
    }

    #[test]
    fn search_matches_title_content_and_tags() {
        let notes = vec![
            make_note(1, "Groceries", "milk", &[]),
            make_note(2, "Plan", "buy milk too", &[]),
            make_note(3, "Other", "nothing", &["Milky Way"]),
            make_note(4, "Misc", "nothing", &[]),
        ];
        let hits = filter_notes(&notes, "MILK", None);
        let ids: Vec<u32> = hits.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn tag_filter_requires_exact_name() {
        let notes = vec![
            make_note(1, "A", "", &["work"]),
            make_note(2, "B", "", &["workout"]),
        ];
        let hits = filter_notes(&notes, "", Some("work"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
    }

    #[test]
    fn search_and_tag_filter_combine() {
        let notes = vec![
            make_note(1, "Standup notes", "", &["work"]),
            make_note(2, "Standup ideas", "", &["home"]),
            make_note(3, "Recipes", "", &["work"]),
        ];
        let hits = filter_notes(&notes, "standup", Some("work"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
    }

    #[test]
    fn badge_counts() {
        let mut archived = make_note(3, "C", "", &["work"]);
        archived.archived = true;
        let notes = vec![
            make_note(1, "A", "", &["work"]),
            make_note(2, "B", "", &[]),
            archived,
        ];
        assert_eq!(count_with_tag(&notes, "work"), 2);
        assert_eq!(count_by_archived(&notes, false), 2);
        assert_eq!(count_by_archived(&notes, true), 1);
    }

    #[test]
    fn date_formatting() {
        assert_eq!(format_edited_date("2025-03-01T10:30:00Z"), "Mar 01, 2025");
        assert_eq!(
            format_edited_datetime("2025-03-01T10:30:00Z"),
            "Mar 01, 2025 10:30"
        );
        assert_eq!(format_edited_date("not a date"), "not a date");
    }

    #[test]
    fn deleting_selected_note_clears_selection() {
        let selected = Some(make_note(7, "Selected", "", &[]));
        assert!(selection_after_delete(selected, 7).is_none());
    }

    #[test]
    fn deleting_other_note_keeps_selection() {
        let selected = Some(make_note(7, "Selected", "", &[]));
        let kept = selection_after_delete(selected, 8);
        assert_eq!(kept.unwrap().id, 7);
    }
}
