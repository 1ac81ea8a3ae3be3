//! REST API Client
//!
//! Thin fetch wrapper over the notes backend. Attaches the bearer token
//! to every request once a session exists.

use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::models::{
    LoginArgs, LoginResponse, Note, NotePayload, NoteUpdate, RegisterArgs, ResetPasswordArgs, Tag,
    User,
};

pub const DEFAULT_BASE_URL: &str = "/api";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Transport(other.to_string()),
        }
    }
}

/// Shared HTTP client. A `Copy` handle; every copy sees the same token.
#[derive(Clone, Copy)]
pub struct ApiClient {
    base_url: StoredValue<String>,
    token: StoredValue<Option<String>>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: StoredValue::new(base_url.into()),
            token: StoredValue::new(None),
        }
    }

    /// Set or clear the bearer token attached to subsequent requests.
    pub fn set_token(&self, token: Option<String>) {
        self.token.set_value(token);
    }

    pub fn token(&self) -> Option<String> {
        self.token.get_value()
    }

    fn url(&self, path: &str) -> String {
        self.base_url.with_value(|base| format!("{base}{path}"))
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.token.get_value() {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    async fn check(&self, response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let message = response.text().await.unwrap_or_default();
        Err(ApiError::Status { status, message })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let builder = self.authorize(Request::get(&self.url(path)).query(query.iter().copied()));
        let response = self.check(builder.send().await?).await?;
        Ok(response.json::<T>().await?)
    }

    async fn send_body<B: Serialize>(
        &self,
        builder: RequestBuilder,
        body: &B,
    ) -> Result<Response, ApiError> {
        let response = self.authorize(builder).json(body)?.send().await?;
        self.check(response).await
    }

    // ========================
    // Notes
    // ========================

    pub async fn list_notes(&self, archived: bool) -> Result<Vec<Note>, ApiError> {
        let flag = if archived { "true" } else { "false" };
        self.get_json("/notes", &[("archived", flag)]).await
    }

    pub async fn list_tags(&self) -> Result<Vec<Tag>, ApiError> {
        self.get_json("/tags", &[]).await
    }

    pub async fn create_note(&self, args: &NotePayload<'_>) -> Result<Note, ApiError> {
        let response = self.send_body(Request::post(&self.url("/notes")), args).await?;
        Ok(response.json::<Note>().await?)
    }

    pub async fn update_note(&self, id: u32, args: &NoteUpdate<'_>) -> Result<Note, ApiError> {
        let response = self
            .send_body(Request::put(&self.url(&format!("/notes/{id}"))), args)
            .await?;
        Ok(response.json::<Note>().await?)
    }

    pub async fn delete_note(&self, id: u32) -> Result<(), ApiError> {
        let builder = self.authorize(Request::delete(&self.url(&format!("/notes/{id}"))));
        self.check(builder.send().await?).await?;
        Ok(())
    }

    /// Archive or unarchive a note via a partial update.
    pub async fn archive_note(&self, id: u32, archived: bool) -> Result<Note, ApiError> {
        let body = NoteUpdate {
            archived: Some(archived),
            ..Default::default()
        };
        self.update_note(id, &body).await
    }

    // ========================
    // Auth
    // ========================

    pub async fn login(&self, args: &LoginArgs<'_>) -> Result<LoginResponse, ApiError> {
        let response = self.send_body(Request::post(&self.url("/login")), args).await?;
        Ok(response.json::<LoginResponse>().await?)
    }

    pub async fn register(&self, args: &RegisterArgs<'_>) -> Result<(), ApiError> {
        self.send_body(Request::post(&self.url("/register")), args)
            .await?;
        Ok(())
    }

    pub async fn reset_password(&self, args: &ResetPasswordArgs<'_>) -> Result<(), ApiError> {
        self.send_body(Request::post(&self.url("/forgot-password")), args)
            .await?;
        Ok(())
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let builder = self.authorize(Request::post(&self.url("/logout")));
        self.check(builder.send().await?).await?;
        Ok(())
    }

    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.get_json("/user", &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_shared_across_copies() {
        let api = ApiClient::new(DEFAULT_BASE_URL);
        let copy = api;
        api.set_token(Some("abc".to_string()));
        assert_eq!(copy.token().as_deref(), Some("abc"));
        copy.set_token(None);
        assert_eq!(api.token(), None);
    }

    #[test]
    fn url_joins_base_and_path() {
        let api = ApiClient::new("https://example.test/api");
        assert_eq!(api.url("/notes/7"), "https://example.test/api/notes/7");
    }
}
