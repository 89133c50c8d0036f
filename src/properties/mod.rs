//! Property records and the map browser feed

mod types;

use reqwest::Client;

use crate::auth::SessionStore;
use crate::config::ClientOptions;
use crate::envelope::{guard, read_envelope, require_data, Envelope};
use crate::fetch::{page_query, Fetch};

pub use types::*;

/// Client for property operations.
///
/// Reads (list, search, by-id, stats) are public; mutations require an
/// active session.
pub struct PropertiesClient {
    /// The base URL for the remote API
    url: String,

    /// HTTP client
    client: Client,

    /// Shared session handle for authenticated operations
    session: SessionStore,

    /// Client options
    options: ClientOptions,
}

impl PropertiesClient {
    /// Create a new PropertiesClient
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
        format!("{}/property{}", self.url, path)
    }

    /// Register a new property. Authenticated.
    pub async fn create(&self, property: &NewProperty) -> Envelope<Option<Property>> {
        guard("Failed to create property", None, async {
            let token = self.session.bearer_token()?;
            let response = Fetch::post(&self.client, &self.get_url("/create"))
                .timeout(self.options.request_timeout)
                .bearer_auth(&token)
                .json(property)?
                .execute_raw()
                .await?;
            read_envelope(response).await
        })
        .await
    }

    /// List properties. Public; failure echoes the requested window with an
    /// empty page.
    pub async fn get_all(&self, limit: u32, offset: u32) -> Envelope<PropertyPage> {
        guard(
            "Failed to fetch properties",
            PropertyPage::empty(limit, offset),
            async {
                let response = Fetch::get(&self.client, &self.get_url("/all"))
                    .timeout(self.options.request_timeout)
                    .query(page_query(limit, offset))
                    .execute_raw()
                    .await?;
                read_envelope(response).await
            },
        )
        .await
    }

    /// Free-text property search. Public; the query value is percent-encoded.
    pub async fn search(&self, query: &str, limit: u32, offset: u32) -> Envelope<PropertyPage> {
        guard(
            "Failed to search properties",
            PropertyPage::empty(limit, offset),
            async {
                let mut params = page_query(limit, offset);
                params.insert("query".to_string(), query.to_string());
                let response = Fetch::get(&self.client, &self.get_url("/search"))
                    .timeout(self.options.request_timeout)
                    .query(params)
                    .execute_raw()
                    .await?;
                read_envelope(response).await
            },
        )
        .await
    }

    /// Fetch one property by id. Public.
    pub async fn get_by_id(&self, id: &str) -> Envelope<Option<Property>> {
        guard("No property data found", None, async {
            let response = Fetch::get(&self.client, &self.get_url(&format!("/one/{}", id)))
                .timeout(self.options.request_timeout)
                .execute_raw()
                .await?;
            let envelope = read_envelope(response).await?;
            require_data(envelope, "No property data found")
        })
        .await
    }

    /// Update a property record. Authenticated.
    pub async fn update(&self, id: &str, changes: &PropertyUpdate) -> Envelope<Option<Property>> {
        guard("Failed to update property", None, async {
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

    /// Aggregate property figures. Public.
    pub async fn stats(&self) -> Envelope<Option<PropertyStats>> {
        guard("Failed to fetch property stats", None, async {
            let response = Fetch::get(&self.client, &self.get_url("/stats"))
                .timeout(self.options.request_timeout)
                .execute_raw()
                .await?;
            read_envelope(response).await
        })
        .await
    }

    /// Remove a property record. Authenticated.
    pub async fn delete(&self, id: &str) -> Envelope<Option<Property>> {
        guard("Failed to delete property", None, async {
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
