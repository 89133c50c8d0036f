//! Session management for authentication

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

/// Identity claims issued at sign-in
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    /// The subject ID
    pub id: String,

    /// The user's email address
    pub email: String,

    /// The user's role
    #[serde(default)]
    pub role: String,

    /// First name claim
    #[serde(default)]
    pub first_name: Option<String>,

    /// Last name claim
    #[serde(default)]
    pub last_name: Option<String>,

    /// Phone claim
    #[serde(default)]
    pub phone: Option<String>,

    /// The creation time
    #[serde(default)]
    pub created_at: Option<String>,

    /// The update time
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Session data: the bearer token plus the claims issued with it.
///
/// Immutable snapshot; a new sign-in replaces it wholesale. The token is
/// opaque and forwarded verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// The bearer token
    pub token: String,

    /// The identity claims issued alongside the token
    pub user: SessionUser,
}

/// Cloneable handle to the active session, shared by the auth client and
/// every resource client.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<Option<Session>>>,
}

impl SessionStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// The active session; fails with `Unauthenticated` if none exists
    pub fn current(&self) -> Result<Session, Error> {
        let current_session = self.inner.lock().unwrap();
        current_session.clone().ok_or(Error::Unauthenticated)
    }

    /// Bearer token for an authenticated dispatch.
    ///
    /// Resolved before any request is built, so a missing session or empty
    /// token fails fast with zero network calls.
    pub fn bearer_token(&self) -> Result<String, Error> {
        let session = self.current()?;
        if session.token.is_empty() {
            return Err(Error::MissingToken);
        }
        Ok(session.token)
    }

    pub(crate) fn set(&self, session: Session) {
        let mut current_session = self.inner.lock().unwrap();
        *current_session = Some(session);
    }

    pub(crate) fn clear(&self) {
        let mut current_session = self.inner.lock().unwrap();
        *current_session = None;
    }
}
