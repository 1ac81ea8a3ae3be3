//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Note data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: u32,
    pub title: String,
    /// Rich-text HTML body
    pub content: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub archived: bool,
    /// RFC 3339 timestamp set by the server
    pub last_edited: String,
}

/// Tag data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u32,
    pub name: String,
}

/// Authenticated account (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
}

// ========================
// Request Payload Structs
// ========================

#[derive(Serialize)]
pub struct NotePayload<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub tags: &'a [u32],
}

/// Partial update body for PUT /notes/:id. Absent fields are omitted
/// so the server leaves them untouched.
#[derive(Default, Serialize)]
pub struct NoteUpdate<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<&'a [u32]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

#[derive(Serialize)]
pub struct LoginArgs<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct RegisterArgs<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub password_confirmation: &'a str,
}

#[derive(Serialize)]
pub struct ResetPasswordArgs<'a> {
    pub email: &'a str,
    pub new_password: &'a str,
    pub confirm_password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_update_omits_absent_fields() {
        let body = NoteUpdate {
            archived: Some(true),
            ..Default::default()
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"archived":true}"#);
    }

    #[test]
    fn note_update_full_body() {
        let tags = [1u32, 3];
        let body = NoteUpdate {
            title: Some("A"),
            content: Some("<p>x</p>"),
            tags: Some(&tags),
            archived: None,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"title":"A","content":"<p>x</p>","tags":[1,3]}"#);
    }

    #[test]
    fn note_deserializes_with_defaults() {
        let json = r#"{"id":7,"title":"t","content":"c","last_edited":"2025-03-01T10:00:00Z"}"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert!(note.tags.is_empty());
        assert!(!note.archived);
    }
}
