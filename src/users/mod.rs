//! User administration through the remote API

mod types;

use reqwest::Client;

use crate::auth::SessionStore;
use crate::config::ClientOptions;
use crate::envelope::{guard, read_envelope, require_data, Envelope};
use crate::fetch::{page_query, Fetch};

pub use types::*;

/// Client for user operations. Every operation requires an active session.
pub struct UsersClient {
    /// The base URL for the remote API
    url: String,

    /// HTTP client
    client: Client,

    /// Shared session handle
    session: SessionStore,

    /// Client options
    options: ClientOptions,
}

impl UsersClient {
    /// Create a new UsersClient
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

    fn get_url(&self, path: &str) -> String {
        format!("{}/user{}", self.url, path)
    }

    async fn list(&self, path: &str, fallback: &str, limit: u32, offset: u32) -> Envelope<UserPage> {
        guard(fallback, UserPage::empty(limit, offset), async {
            let token = self.session.bearer_token()?;
            let response = Fetch::get(&self.client, &self.get_url(path))
                .timeout(self.options.request_timeout)
                .bearer_auth(&token)
                .query(page_query(limit, offset))
                .execute_raw()
                .await?;
            read_envelope(response).await
        })
        .await
    }

    /// List users
    pub async fn get_all(&self, limit: u32, offset: u32) -> Envelope<UserPage> {
        self.list("/all", "Failed to fetch users", limit, offset).await
    }

    /// List admin users
    pub async fn admins(&self, limit: u32, offset: u32) -> Envelope<UserPage> {
        self.list("/admins", "Failed to fetch admins", limit, offset)
            .await
    }

    /// List agent users
    pub async fn agents(&self, limit: u32, offset: u32) -> Envelope<UserPage> {
        self.list("/agents", "Failed to fetch agents", limit, offset)
            .await
    }

    /// Fetch the signed-in user's own profile
    pub async fn profile(&self) -> Envelope<Option<User>> {
        guard("No user data found", None, async {
            let token = self.session.bearer_token()?;
            let response = Fetch::get(&self.client, &self.get_url("/profile"))
                .timeout(self.options.request_timeout)
                .bearer_auth(&token)
                .execute_raw()
                .await?;
            let envelope = read_envelope(response).await?;
            require_data(envelope, "No user data found")
        })
        .await
    }

    /// Fetch one user by id
    pub async fn get_by_id(&self, id: &str) -> Envelope<Option<User>> {
        guard("No user data found", None, async {
            let token = self.session.bearer_token()?;
            let response = Fetch::get(&self.client, &self.get_url(&format!("/one/{}", id)))
                .timeout(self.options.request_timeout)
                .bearer_auth(&token)
                .execute_raw()
                .await?;
            let envelope = read_envelope(response).await?;
            require_data(envelope, "No user data found")
        })
        .await
    }

    /// Update a user's profile fields or role
    pub async fn update(&self, id: &str, changes: &UserUpdate) -> Envelope<Option<User>> {
        guard("Failed to update user", None, async {
            let token = self.session.bearer_token()?;
            let response = Fetch::put(&self.client, &self.get_url(&format!("/update/{}", id)))
                .timeout(self.options.request_timeout)
                .bearer_auth(&token)
                .json(changes)?
                .execute_raw()
                .await?;
            read_envelope(response).await
        })
        .await
    }

    /// Change the signed-in user's password
    pub async fn set_new_password(
        &self,
        payload: &NewPassword,
    ) -> Envelope<Option<serde_json::Value>> {
        guard("Failed to set new password", None, async {
            let token = self.session.bearer_token()?;
            let response = Fetch::post(&self.client, &self.get_url("/set-new-password"))
                .timeout(self.options.request_timeout)
                .bearer_auth(&token)
                .json(payload)?
                .execute_raw()
                .await?;
            read_envelope(response).await
        })
        .await
    }
}
