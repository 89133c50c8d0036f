//! Types for user administration

use serde::{Deserialize, Serialize};

use crate::envelope::Pagination;

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Agent,
    User,
}

/// A portal user as issued by the remote API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// The user ID
    pub id: String,

    /// The user's email address
    pub email: String,

    /// The user's role
    pub role: Role,

    /// First name
    #[serde(default)]
    pub first_name: Option<String>,

    /// Last name
    #[serde(default)]
    pub last_name: Option<String>,

    /// Phone number
    #[serde(default)]
    pub phone: Option<String>,

    /// The creation time
    #[serde(default)]
    pub created_at: Option<String>,

    /// The update time
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Payload for updating a user; unset fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Payload for the set-new-password operation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPassword {
    pub current_password: String,
    pub new_password: String,
}

/// One page of users
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPage {
    #[serde(default)]
    pub users: Vec<User>,

    #[serde(default)]
    pub count: u64,

    #[serde(default)]
    pub pagination: Pagination,
}

impl UserPage {
    /// Empty page echoing the requested window, used on failure paths
    pub(crate) fn empty(limit: u32, offset: u32) -> Self {
        Self {
            users: Vec::new(),
            count: 0,
            pagination: Pagination { limit, offset },
        }
    }
}
