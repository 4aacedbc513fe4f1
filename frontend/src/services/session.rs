//! Auth session context.
//!
//! The navigation chrome needs to know whether a user is signed in; it
//! gets that from an explicitly-injected [`SessionContext`] created at the
//! application root, never from ambient global state. Sign-in itself
//! happens on the auth provider's own pages; this module only restores a
//! persisted session and signs out.

use gloo_net::http::Request;
use gloo_storage::{LocalStorage, Storage};
use leptos::{create_rw_signal, spawn_local, RwSignal, SignalGetUntracked, SignalSet};
use serde::Deserialize;

use crate::config::{SESSION_STORAGE_KEY, SUPABASE_ANON_KEY, SUPABASE_URL};
use crate::error::AuthError;
use crate::types::UserSession;

// =============================================================================
// Auth endpoint client
// =============================================================================

/// User payload returned by the auth endpoint.
#[derive(Debug, Deserialize)]
struct AuthUser {
    email: Option<String>,
}

/// Thin client over the backend's auth endpoints.
#[derive(Clone, Debug)]
pub struct AuthClient {
    base_url: String,
    anon_key: String,
}

impl AuthClient {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            anon_key: anon_key.into(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(SUPABASE_URL, SUPABASE_ANON_KEY)
    }

    /// Resolve the user behind an access token. An expired or revoked
    /// token is `Ok(None)`, not an error.
    pub async fn current_user(&self, access_token: &str) -> Result<Option<UserSession>, AuthError> {
        let response = Request::get(&format!("{}/auth/v1/user", self.base_url))
            .header("apikey", &self.anon_key)
            .header("Authorization", &format!("Bearer {}", access_token))
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if response.status() == 401 || response.status() == 403 {
            return Ok(None);
        }
        if !response.ok() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(AuthError::Remote {
                status: response.status(),
                message,
            });
        }

        let user: AuthUser = response
            .json()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        Ok(Some(UserSession {
            access_token: access_token.to_string(),
            email: user.email,
        }))
    }

    /// Invalidate the token server-side.
    pub async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let response = Request::post(&format!("{}/auth/v1/logout", self.base_url))
            .header("apikey", &self.anon_key)
            .header("Authorization", &format!("Bearer {}", access_token))
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if !response.ok() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(AuthError::Remote {
                status: response.status(),
                message,
            });
        }
        Ok(())
    }
}

// =============================================================================
// Session context
// =============================================================================

/// Reactive session handle passed to components that need it.
#[derive(Clone)]
pub struct SessionContext {
    user: RwSignal<Option<UserSession>>,
    auth: AuthClient,
}

impl SessionContext {
    pub fn new(auth: AuthClient) -> Self {
        Self {
            user: create_rw_signal(None),
            auth,
        }
    }

    /// The authenticated-user observable consumed by the chrome.
    pub fn user(&self) -> RwSignal<Option<UserSession>> {
        self.user
    }

    /// Restore a persisted session, if local storage has one and the
    /// token is still good. Stale tokens are discarded silently.
    pub fn restore(&self) {
        let ctx = self.clone();
        spawn_local(async move {
            let token: String = match LocalStorage::get(SESSION_STORAGE_KEY) {
                Ok(token) => token,
                Err(_) => return,
            };
            match ctx.auth.current_user(&token).await {
                Ok(Some(user)) => ctx.user.set(Some(user)),
                Ok(None) => LocalStorage::delete(SESSION_STORAGE_KEY),
                Err(e) => log::warn!("session restore failed: {}", e),
            }
        });
    }

    /// Sign out remotely, then drop both the signal and the persisted
    /// token. The UI flips to anonymous even if the remote call failed.
    pub fn sign_out(&self) {
        let ctx = self.clone();
        spawn_local(async move {
            if let Some(user) = ctx.user.get_untracked() {
                if let Err(e) = ctx.auth.sign_out(&user.access_token).await {
                    log::warn!("sign-out request failed: {}", e);
                }
            }
            LocalStorage::delete(SESSION_STORAGE_KEY);
            ctx.user.set(None);
        });
    }
}
