//! Zone administration through the remote API
//!
//! Every operation here is total: a transport failure, a missing session, or
//! an empty by-id payload comes back as a failure envelope, never as an
//! error the caller has to catch.

mod types;

use reqwest::Client;

use crate::auth::SessionStore;
use crate::config::ClientOptions;
use crate::envelope::{guard, read_envelope, require_data, Envelope};
use crate::fetch::{page_query, Fetch};

pub use types::*;

/// Client for zone operations.
///
/// Reads (list, search, by-id, stats) are public; mutations require an
/// active session.
pub struct ZonesClient {
    /// The base URL for the remote API
    url: String,

    /// HTTP client
    client: Client,

    /// Shared session handle for authenticated operations
    session: SessionStore,

    /// Client options
    options: ClientOptions,
}

impl ZonesClient {
    /// Create a new ZonesClient
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
        format!("{}/zone{}", self.url, path)
    }

    /// Create a new zone. Authenticated.
    pub async fn create(&self, zone: &NewZone) -> Envelope<Option<Zone>> {
        guard("Failed to create zone", None, async {
            let token = self.session.bearer_token()?;
            let response = Fetch::post(&self.client, &self.get_url("/create"))
                .timeout(self.options.request_timeout)
                .bearer_auth(&token)
                .json(zone)?
                .execute_raw()
                .await?;
            read_envelope(response).await
        })
        .await
    }

    /// List zones. Public; failure echoes the requested window with an
    /// empty page.
    pub async fn get_all(&self, limit: u32, offset: u32) -> Envelope<ZonePage> {
        guard("Failed to fetch zones", ZonePage::empty(limit, offset), async {
            let response = Fetch::get(&self.client, &self.get_url("/all"))
                .timeout(self.options.request_timeout)
                .query(page_query(limit, offset))
                .execute_raw()
                .await?;
            read_envelope(response).await
        })
        .await
    }

    /// Free-text zone search. Public; the query value is percent-encoded.
    pub async fn search(&self, query: &str, limit: u32, offset: u32) -> Envelope<ZonePage> {
        guard("Failed to search zones", ZonePage::empty(limit, offset), async {
            let mut params = page_query(limit, offset);
            params.insert("query".to_string(), query.to_string());
            let response = Fetch::get(&self.client, &self.get_url("/search"))
                .timeout(self.options.request_timeout)
                .query(params)
                .execute_raw()
                .await?;
            read_envelope(response).await
        })
        .await
    }

    /// Fetch one zone by id. Public.
    ///
    /// A 200 response with an empty payload is reported as a not-found
    /// failure envelope, distinct from a transport failure.
    pub async fn get_by_id(&self, id: &str) -> Envelope<Option<Zone>> {
        guard("No zone data found", None, async {
            let response = Fetch::get(&self.client, &self.get_url(&format!("/one/{}", id)))
                .timeout(self.options.request_timeout)
                .execute_raw()
                .await?;
            let envelope = read_envelope(response).await?;
            require_data(envelope, "No zone data found")
        })
        .await
    }

    /// Update a zone's rates, classification, or status. Authenticated.
    pub async fn update(&self, id: &str, changes: &ZoneUpdate) -> Envelope<Option<Zone>> {
        guard("Failed to update zone", None, async {
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

    /// Aggregate zone figures. Public.
    pub async fn stats(&self) -> Envelope<Option<ZoneStats>> {
        guard("Failed to fetch zone stats", None, async {
            let response = Fetch::get(&self.client, &self.get_url("/stats"))
                .timeout(self.options.request_timeout)
                .execute_raw()
                .await?;
            read_envelope(response).await
        })
        .await
    }

    /// Soft-delete a zone. Authenticated.
    pub async fn delete(&self, id: &str) -> Envelope<Option<Zone>> {
        guard("Failed to delete zone", None, async {
            let token = self.session.bearer_token()?;
            let response = Fetch::delete(&self.client, &self.get_url(&format!("/delete/{}", id)))
                .timeout(self.options.request_timeout)
                .bearer_auth(&token)
                .execute_raw()
                .await?;
            read_envelope(response).await
        })
        .await
    }
}
