//! HTTP dispatcher for requests to the Lagos Property Map API
//!
//! Every outbound call, authenticated or public, passes through this module.
//! The dispatcher performs exactly one network attempt per call, bounded by a
//! fixed timeout, and returns the transport-level response on any HTTP
//! status; interpreting status and body semantics is the resource accessors'
//! job.

use crate::error::Error;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client, Method, RequestBuilder,
};
use serde::Serialize;
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

/// Helper for building and executing HTTP requests
pub struct FetchBuilder<'a> {
    client: &'a Client,
    url: String,
    method: Method,
    headers: HeaderMap,
    query_params: Option<HashMap<String, String>>,
    body: Option<Vec<u8>>,
    timeout: Option<Duration>,
}

impl<'a> FetchBuilder<'a> {
    /// Create a new FetchBuilder
    pub fn new(client: &'a Client, url: &str, method: Method) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));

        Self {
            client,
            url: url.to_string(),
            method,
            headers,
            query_params: None,
            body: None,
            timeout: None,
        }
    }

    /// Add a header to the request.
    ///
    /// An already-set Authorization header cannot be displaced through here;
    /// the token attached via [`bearer_auth`](Self::bearer_auth) is forwarded
    /// verbatim.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        if name.eq_ignore_ascii_case(AUTHORIZATION.as_str())
            && self.headers.contains_key(AUTHORIZATION)
        {
            return self;
        }
        if let Ok(value) = HeaderValue::from_str(value) {
            if let Ok(name) = name.parse::<reqwest::header::HeaderName>() {
                self.headers.insert(name, value);
            }
        }
        self
    }

    /// Add bearer token authentication to the request
    pub fn bearer_auth(mut self, token: &str) -> Self {
        if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", token)) {
            self.headers.insert(AUTHORIZATION, value);
        }
        self
    }

    /// Add query parameters to the request
    pub fn query(mut self, params: HashMap<String, String>) -> Self {
        self.query_params = Some(params);
        self
    }

    /// Add a JSON body to the request
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, Error> {
        let json = serde_json::to_vec(body)?;
        self.body = Some(json);
        Ok(self)
    }

    /// Bound the single network attempt with a fixed timeout
    pub fn timeout(mut self, bound: Duration) -> Self {
        self.timeout = Some(bound);
        self
    }

    /// Build the request
    fn build(&self) -> Result<RequestBuilder, Error> {
        let mut url = Url::parse(&self.url)?;

        // query_pairs_mut percent-encodes values
        if let Some(params) = &self.query_params {
            let mut query_pairs = url.query_pairs_mut();
            for (key, value) in params {
                query_pairs.append_pair(key, value);
            }
        }

        let mut req = self.client.request(self.method.clone(), url.as_str());
        req = req.headers(self.headers.clone());

        if let Some(bound) = self.timeout {
            req = req.timeout(bound);
        }

        if let Some(body) = &self.body {
            req = req.body(body.clone());
        }

        Ok(req)
    }

    /// Execute the request and return the raw response.
    ///
    /// One attempt, no retry. Any received response is returned unmodified
    /// regardless of status; only transport-level failures become errors.
    pub async fn execute_raw(&self) -> Result<reqwest::Response, Error> {
        let req = self.build()?;
        let response = req.send().await?;
        Ok(response)
    }
}

/// Query parameters for a paginated list request
pub(crate) fn page_query(limit: u32, offset: u32) -> HashMap<String, String> {
    let mut params = HashMap::new();
    params.insert("limit".to_string(), limit.to_string());
    params.insert("offset".to_string(), offset.to_string());
    params
}

/// Helper for creating HTTP requests
pub struct Fetch;

impl Fetch {
    /// Create a GET request
    pub fn get<'a>(client: &'a Client, url: &str) -> FetchBuilder<'a> {
        FetchBuilder::new(client, url, Method::GET)
    }

    /// Create a POST request
    pub fn post<'a>(client: &'a Client, url: &str) -> FetchBuilder<'a> {
        FetchBuilder::new(client, url, Method::POST)
    }

    /// Create a PUT request
    pub fn put<'a>(client: &'a Client, url: &str) -> FetchBuilder<'a> {
        FetchBuilder::new(client, url, Method::PUT)
    }

    /// Create a PATCH request
    pub fn patch<'a>(client: &'a Client, url: &str) -> FetchBuilder<'a> {
        FetchBuilder::new(client, url, Method::PATCH)
    }

    /// Create a DELETE request
    pub fn delete<'a>(client: &'a Client, url: &str) -> FetchBuilder<'a> {
        FetchBuilder::new(client, url, Method::DELETE)
    }
}
