//! The `{success, message, data}` envelope shared by every accessor result

use crate::error::Error;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::future::Future;

/// Standard wrapper around every resource accessor result.
///
/// Invariant: when `success` is false, `data` carries a safe default (empty
/// page, `None`), never a partial value, so callers can render the failure
/// path without null-checking nested fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: T,
}

/// Pagination window echoed back on every list result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub limit: u32,
    pub offset: u32,
}

impl Default for Pagination {
    // Route-table defaults
    fn default() -> Self {
        Self {
            limit: 10,
            offset: 0,
        }
    }
}

/// Interpret status and body semantics of a dispatched response.
///
/// Non-2xx responses become [`Error::Transport`] carrying the `message` field
/// of the error body when one can be extracted; 2xx responses are decoded as
/// an envelope.
pub(crate) async fn read_envelope<T>(response: reqwest::Response) -> Result<Envelope<T>, Error>
where
    T: DeserializeOwned + Default,
{
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_owned));
        return Err(Error::Transport {
            status: Some(status.as_u16()),
            message,
        });
    }

    let envelope = response.json::<Envelope<T>>().await?;
    Ok(envelope)
}

/// Run one accessor operation and convert any error into a local failure
/// envelope.
///
/// This is the single catch-and-default chokepoint: accessor calls never
/// propagate an error past this boundary, so presentation code can always
/// branch on `.success` without a surrounding handler. The server message
/// wins over `fallback` when one was extracted.
pub(crate) async fn guard<T, Fut>(fallback: &str, empty: T, op: Fut) -> Envelope<T>
where
    Fut: Future<Output = Result<Envelope<T>, Error>>,
{
    match op.await {
        Ok(envelope) => envelope,
        Err(err) => {
            tracing::warn!(error = %err, "request failed, returning failure envelope");
            let message = err
                .server_message()
                .map(str::to_owned)
                .unwrap_or_else(|| fallback.to_string());
            Envelope {
                success: false,
                message,
                data: empty,
            }
        }
    }
}

/// Translate a 200 response with an empty payload into a not-found error for
/// by-id lookups, distinct from a transport failure.
pub(crate) fn require_data<T>(
    envelope: Envelope<Option<T>>,
    missing: &str,
) -> Result<Envelope<Option<T>>, Error> {
    if envelope.data.is_none() {
        return Err(Error::NotFound(missing.to_string()));
    }
    Ok(envelope)
}
