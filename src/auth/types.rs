//! Types for authentication

use serde::{Deserialize, Serialize};

use super::session::SessionUser;

/// Payload issued by the login endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    /// The issued bearer token
    #[serde(default)]
    pub token: String,

    /// The identity claims issued with the token
    pub user: SessionUser,
}
