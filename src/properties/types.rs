//! Types for property records and the map browser

use serde::{Deserialize, Serialize};

use crate::envelope::Pagination;

/// Review workflow state of a property record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyStatus {
    Pending,
    Approved,
    Rejected,
    Verified,
}

/// A property record as issued by the remote API.
///
/// Valuation-derivation fields and the review workflow state are produced
/// and owned by the remote API; this client only displays and forwards them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// The property ID
    pub id: String,

    /// Registered owner
    #[serde(default)]
    pub owner_name: Option<String>,

    /// Street address
    pub address: String,

    /// The zone this property falls in
    pub zone_id: String,

    /// Latitude for the map browser
    #[serde(default)]
    pub latitude: Option<f64>,

    /// Longitude for the map browser
    #[serde(default)]
    pub longitude: Option<f64>,

    /// Location weighting used in valuation
    #[serde(default)]
    pub location_weight: Option<f64>,

    /// Use weighting used in valuation
    #[serde(default)]
    pub use_weight: Option<f64>,

    /// Type weighting used in valuation
    #[serde(default)]
    pub type_weight: Option<f64>,

    /// Building factor used in valuation
    #[serde(default)]
    pub building_factor: Option<f64>,

    /// Area factor used in valuation
    #[serde(default)]
    pub area_factor: Option<f64>,

    /// Derived valuation
    #[serde(default)]
    pub estimated_value: Option<f64>,

    /// Derived annual land-use charge
    #[serde(rename = "annualLUC", default)]
    pub annual_luc: Option<f64>,

    /// Review workflow state
    pub status: PropertyStatus,

    /// Set only when the record reaches VERIFIED
    #[serde(default)]
    pub verified_at: Option<String>,

    /// Set only when the record reaches VERIFIED
    #[serde(default)]
    pub verified_by: Option<String>,

    /// Set only when the record reaches REJECTED
    #[serde(default)]
    pub rejection_reason: Option<String>,

    /// The creation time
    #[serde(default)]
    pub created_at: Option<String>,

    /// The update time
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Payload for registering a property
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProperty {
    pub address: String,
    pub zone_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// Payload for updating a property; unset fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// One page of properties
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertyPage {
    #[serde(default)]
    pub properties: Vec<Property>,

    #[serde(default)]
    pub count: u64,

    #[serde(default)]
    pub pagination: Pagination,
}

impl PropertyPage {
    /// Empty page echoing the requested window, used on failure paths
    pub(crate) fn empty(limit: u32, offset: u32) -> Self {
        Self {
            properties: Vec::new(),
            count: 0,
            pagination: Pagination { limit, offset },
        }
    }
}

/// Aggregate property figures rendered on the admin dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyStats {
    #[serde(default)]
    pub total_properties: u64,

    #[serde(default)]
    pub pending_properties: u64,

    #[serde(default)]
    pub verified_properties: u64,

    #[serde(rename = "totalAnnualLUC", default)]
    pub total_annual_luc: f64,
}
