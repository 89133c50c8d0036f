//! Types for zone administration

use serde::{Deserialize, Serialize};

use crate::envelope::Pagination;

/// Zone classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ZoneType {
    Premium,
    Standard,
    Developing,
}

/// Zone lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ZoneStatus {
    Active,
    Inactive,
}

/// A tax zone as issued by the remote API.
///
/// Immutable snapshot; mutations go through explicit update/delete calls and
/// replace the snapshot on the next fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    /// The zone ID
    pub id: String,

    /// Display name
    pub zone_name: String,

    /// Classification
    pub zone_type: ZoneType,

    /// Residential levy rate
    pub residential_rate: f64,

    /// Commercial levy rate
    pub commercial_rate: f64,

    /// Industrial levy rate
    pub industrial_rate: f64,

    /// Base tax rate
    pub tax_rate: f64,

    /// Average property valuation across the zone
    pub avg_property_value: f64,

    /// Lifecycle status
    pub status: ZoneStatus,

    /// The creation time
    #[serde(default)]
    pub created_at: Option<String>,

    /// The update time
    #[serde(default)]
    pub updated_at: Option<String>,

    /// The last rate revision time
    #[serde(default)]
    pub last_updated: Option<String>,

    /// Soft-delete marker, set only by the remote API
    #[serde(default)]
    pub deleted_at: Option<String>,
}

/// Payload for creating a zone
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewZone {
    pub zone_name: String,
    pub zone_type: ZoneType,
    pub residential_rate: f64,
    pub commercial_rate: f64,
    pub industrial_rate: f64,
    pub tax_rate: f64,
    pub avg_property_value: f64,
    pub status: ZoneStatus,
}

/// Payload for updating a zone; unset fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_type: Option<ZoneType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub residential_rate: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub commercial_rate: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub industrial_rate: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_property_value: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ZoneStatus>,
}

/// One page of zones.
///
/// `count` is the server's authoritative total, independent of how many
/// items this page holds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZonePage {
    #[serde(default)]
    pub zones: Vec<Zone>,

    #[serde(default)]
    pub count: u64,

    #[serde(default)]
    pub pagination: Pagination,
}

impl ZonePage {
    /// Empty page echoing the requested window, used on failure paths
    pub(crate) fn empty(limit: u32, offset: u32) -> Self {
        Self {
            zones: Vec::new(),
            count: 0,
            pagination: Pagination { limit, offset },
        }
    }
}

/// Aggregate zone figures rendered on the admin dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneStats {
    #[serde(default)]
    pub total_zones: u64,

    #[serde(default)]
    pub active_zones: u64,

    #[serde(default)]
    pub inactive_zones: u64,

    #[serde(default)]
    pub avg_property_value: f64,
}
