//! Session Context
//!
//! Current user state plus login/register/reset/logout operations.
//! The bearer token is persisted in both a cookie and local storage so a
//! reload can restore the session either way.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{ApiClient, ApiError};
use crate::models::{LoginArgs, RegisterArgs, ResetPasswordArgs, User};
use crate::query::QueryClient;

const TOKEN_KEY: &str = "token";
const TOKEN_MAX_AGE_SECS: u32 = 7 * 24 * 60 * 60;

/// App-wide session state provided via context
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub user: RwSignal<Option<User>>,
    /// True while the stored session is being restored on boot
    pub loading: RwSignal<bool>,
    api: ApiClient,
    queries: QueryClient,
}

impl AuthContext {
    pub fn new(api: ApiClient, queries: QueryClient) -> Self {
        Self {
            user: RwSignal::new(None),
            loading: RwSignal::new(true),
            api,
            queries,
        }
    }

    /// Restore a stored session on boot. A rejected `/user` call means the
    /// token is dead: clear it and stay logged out.
    pub fn restore_session(&self) {
        let auth = *self;
        spawn_local(async move {
            if let Some(token) = stored_token() {
                auth.api.set_token(Some(token.clone()));
                match auth.api.current_user().await {
                    Ok(user) => {
                        // Make sure both storage locations carry the token.
                        persist_token(&token);
                        auth.user.set(Some(user));
                    }
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("[AUTH] Session restore failed: {err}").into(),
                        );
                        auth.clear();
                    }
                }
            }
            auth.loading.set(false);
        });
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let response = self.api.login(&LoginArgs { email, password }).await?;
        persist_token(&response.token);
        self.api.set_token(Some(response.token));
        self.user.set(Some(response.user));
        Ok(())
    }

    /// Register, then log straight in with the same credentials.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        password_confirmation: &str,
    ) -> Result<(), ApiError> {
        self.api
            .register(&RegisterArgs {
                name,
                email,
                password,
                password_confirmation,
            })
            .await?;
        self.login(email, password).await
    }

    pub async fn reset_password(
        &self,
        email: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> Result<(), ApiError> {
        self.api
            .reset_password(&ResetPasswordArgs {
                email,
                new_password,
                confirm_password,
            })
            .await
    }

    /// Tell the server, then drop the session locally regardless of the
    /// server's answer.
    pub fn logout(&self) {
        let auth = *self;
        spawn_local(async move {
            if let Err(err) = auth.api.logout().await {
                web_sys::console::error_1(&format!("[AUTH] Logout failed: {err}").into());
            }
            auth.clear();
        });
    }

    /// Ending a session also drops the cached lists, so a later login
    /// cannot briefly show the previous session's notes.
    fn clear(&self) {
        clear_token();
        self.api.set_token(None);
        self.queries.clear();
        self.user.set(None);
    }
}

/// Get the session context from context.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

// ========================
// Token Storage
// ========================

/// Extract a cookie's value from a `Document.cookie` string.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

fn html_document() -> Option<web_sys::HtmlDocument> {
    web_sys::window()?.document()?.dyn_into().ok()
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Cookie first, local storage as fallback.
fn stored_token() -> Option<String> {
    if let Some(token) = html_document()
        .and_then(|doc| doc.cookie().ok())
        .and_then(|cookies| cookie_value(&cookies, TOKEN_KEY))
        .filter(|token| !token.is_empty())
    {
        return Some(token);
    }
    local_storage()?.get_item(TOKEN_KEY).ok().flatten()
}

fn persist_token(token: &str) {
    if let Some(doc) = html_document() {
        let _ = doc.set_cookie(&format!(
            "{TOKEN_KEY}={token}; max-age={TOKEN_MAX_AGE_SECS}; path=/; secure; samesite=strict"
        ));
    }
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

fn clear_token() {
    if let Some(doc) = html_document() {
        let _ = doc.set_cookie(&format!("{TOKEN_KEY}=; max-age=0; path=/"));
    }
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_value_finds_token() {
        let cookies = "theme=dark; token=abc123; lang=en";
        assert_eq!(cookie_value(cookies, "token").as_deref(), Some("abc123"));
    }

    #[test]
    fn cookie_value_ignores_prefix_matches() {
        let cookies = "old_token=zzz; token=abc";
        assert_eq!(cookie_value(cookies, "token").as_deref(), Some("abc"));
    }

    #[test]
    fn cookie_value_missing_name() {
        assert_eq!(cookie_value("a=1; b=2", "token"), None);
        assert_eq!(cookie_value("", "token"), None);
    }

    #[test]
    fn cookie_value_keeps_equals_in_value() {
        let cookies = "token=abc=def";
        assert_eq!(cookie_value(cookies, "token").as_deref(), Some("abc=def"));
    }
}
