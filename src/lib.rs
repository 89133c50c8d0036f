//! Lagos Property Map Client Library
//!
//! A Rust client for the Lagos Property Map API, providing credential
//! exchange, session-token propagation, and typed accessors for zones,
//! users, and property records.
//!
//! Every accessor result arrives in the `{success, message, data}` envelope;
//! accessor calls never fail past their boundary, so callers branch on
//! `.success` without a surrounding error handler. Resource clients are
//! cheap handles over one shared HTTP client and one shared session store;
//! concurrent calls are fully independent, with no caching and no ordering
//! guarantees between them.

pub mod auth;
pub mod config;
pub mod envelope;
pub mod error;
pub mod fetch;
pub mod properties;
pub mod users;
pub mod zones;

use reqwest::Client;

use crate::auth::{Auth, SessionStore};
use crate::config::{ClientOptions, API_URL_ENV};
use crate::error::Error;
use crate::properties::PropertiesClient;
use crate::users::UsersClient;
use crate::zones::ZonesClient;

/// The main entry point for the Lagos Property Map client
pub struct PropertyMap {
    /// The base URL for the remote API
    pub url: String,
    /// HTTP client used for requests
    pub http_client: Client,
    /// Auth client holding the active session
    pub auth: Auth,
    /// Client options
    pub options: ClientOptions,
    session: SessionStore,
}

impl PropertyMap {
    /// Create a new client against the given API base URL
    ///
    /// # Example
    ///
    /// ```
    /// use lagos_property_map::PropertyMap;
    ///
    /// let portal = PropertyMap::new("https://api.lagospropertymap.example");
    /// ```
    pub fn new(base_url: &str) -> Self {
        Self::new_with_options(base_url, ClientOptions::default())
    }

    /// Create a new client with custom options
    ///
    /// # Example
    ///
    /// ```
    /// use lagos_property_map::{config::ClientOptions, PropertyMap};
    /// use std::time::Duration;
    ///
    /// let options = ClientOptions::default().with_request_timeout(Duration::from_secs(3));
    /// let portal = PropertyMap::new_with_options("https://api.lagospropertymap.example", options);
    /// ```
    pub fn new_with_options(base_url: &str, options: ClientOptions) -> Self {
        let url = base_url.trim_end_matches('/').to_string();
        let http_client = Client::new();
        let session = SessionStore::new();

        let auth = Auth::new(&url, http_client.clone(), session.clone(), options.clone());

        Self {
            url,
            http_client,
            auth,
            options,
            session,
        }
    }

    /// Create a new client from the `PROPERTY_MAP_API_URL` environment
    /// variable, the single environment-level knob this crate reads.
    pub fn from_env() -> Result<Self, Error> {
        let base_url = std::env::var(API_URL_ENV)
            .map_err(|_| Error::Config(format!("{} is not set", API_URL_ENV)))?;
        Ok(Self::new(&base_url))
    }

    /// Get a reference to the auth client for sign-in and session management
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Create a client for zone operations
    pub fn zones(&self) -> ZonesClient {
        ZonesClient::new(
            &self.url,
            self.http_client.clone(),
            self.session.clone(),
            self.options.clone(),
        )
    }

    /// Create a client for user operations
    pub fn users(&self) -> UsersClient {
        UsersClient::new(
            &self.url,
            self.http_client.clone(),
            self.session.clone(),
            self.options.clone(),
        )
    }

    /// Create a client for property operations
    pub fn properties(&self) -> PropertiesClient {
        PropertiesClient::new(
            &self.url,
            self.http_client.clone(),
            self.session.clone(),
            self.options.clone(),
        )
    }
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::config::ClientOptions;
    pub use crate::envelope::{Envelope, Pagination};
    pub use crate::error::Error;
    pub use crate::PropertyMap;
}
