//! Authentication and session management for the Lagos Property Map API

mod session;
mod types;

use reqwest::Client;
use std::collections::HashMap;

use crate::config::ClientOptions;
use crate::envelope::read_envelope;
use crate::error::Error;
use crate::fetch::Fetch;

pub use session::*;
pub use types::*;

/// Session provider: exchanges credentials for a bearer session and hands
/// the token to authenticated dispatches.
pub struct Auth {
    /// The base URL for the remote API
    url: String,

    /// HTTP client used for requests
    client: Client,

    /// The current session
    session: SessionStore,

    /// Client options
    options: ClientOptions,
}

impl Auth {
    /// Create a new Auth client
    pub(crate) fn new(
        url: &str,
        client: Client,
        session: SessionStore,
        options: ClientOptions,
    ) -> Self {
        Self {
            url: url.to_string(),
            client,
            session,
            options,
        }
    }

    fn get_auth_url(&self, path: &str) -> String {
        format!("{}/auth{}", self.url, path)
    }

    /// Sign in with email and password.
    ///
    /// Exchanges credentials with the login endpoint exactly once. On
    /// success the issued session replaces the active one and is returned.
    /// Any failure (non-2xx, transport error, tokenless payload) surfaces as
    /// [`Error::InvalidCredentials`]; the underlying detail is logged, never
    /// returned, and the active session is left untouched.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, Error> {
        let url = self.get_auth_url("/login");

        let mut body = HashMap::new();
        body.insert("email".to_string(), email.to_string());
        body.insert("password".to_string(), password.to_string());

        let result = async {
            let response = Fetch::post(&self.client, &url)
                .timeout(self.options.request_timeout)
                .json(&body)?
                .execute_raw()
                .await?;
            read_envelope::<Option<LoginData>>(response).await
        }
        .await;

        let envelope = match result {
            Ok(envelope) => envelope,
            Err(err) => {
                tracing::debug!(error = %err, "sign-in exchange failed");
                return Err(Error::InvalidCredentials);
            }
        };

        let data = match envelope.data {
            Some(data) if envelope.success && !data.token.is_empty() => data,
            _ => {
                tracing::debug!(message = %envelope.message, "sign-in rejected by server");
                return Err(Error::InvalidCredentials);
            }
        };

        let session = Session {
            token: data.token,
            user: data.user,
        };
        self.session.set(session.clone());
        Ok(session)
    }

    /// Sign out, clearing the stored session.
    ///
    /// Local only; the remote API keeps no session state beyond the token.
    pub fn sign_out(&self) {
        self.session.clear();
    }

    /// Get the current session; fails with `Unauthenticated` if none exists
    pub fn current_session(&self) -> Result<Session, Error> {
        self.session.current()
    }

    /// Install a session captured elsewhere, e.g. reconstructed per request
    /// in a server-rendered deployment.
    pub fn set_session(&self, session: Session) {
        self.session.set(session);
    }
}
