use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StatusType {
    #[serde(rename = "ACTIVE")]
    Active,
    #[serde(rename = "INACTIVE")]
    Inactive,
}

impl std::fmt::Display for StatusType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusType::Active => write!(f, "ACTIVE"),
            StatusType::Inactive => write!(f, "INACTIVE"),
        }
    }
}

impl TryFrom<String> for StatusType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "ACTIVE" => Ok(StatusType::Active),
            "INACTIVE" => Ok(StatusType::Inactive),
            _ => Err(format!("Invalid geo object status: {}", value)),
        }
    }
}

/// Depth criterion for object listings.
///
/// Listings use strict comparisons on both sides, so an object at depth 0
/// is only returned by [`DepthFilter::Any`]. The aggregate queries count
/// depth 0 as aboveground instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepthFilter {
    #[default]
    Any,
    Underground,
    Aboveground,
}

impl DepthFilter {
    /// Same predicate as the listing query. PostgreSQL orders NaN above
    /// every number, so a NaN depth counts as aboveground here too.
    pub fn matches(&self, depth: f64) -> bool {
        match self {
            DepthFilter::Any => true,
            DepthFilter::Underground => depth < 0.0,
            DepthFilter::Aboveground => depth > 0.0 || depth.is_nan(),
        }
    }
}

/// Maps the tri-state `is_negative` flag used by API callers.
impl From<Option<bool>> for DepthFilter {
    fn from(is_negative: Option<bool>) -> Self {
        match is_negative {
            None => DepthFilter::Any,
            Some(true) => DepthFilter::Underground,
            Some(false) => DepthFilter::Aboveground,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct GeoObject {
    pub id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct GeoObjectProperty {
    pub id: i32,
    pub geo_object_id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub material: Option<String>,
    pub depth: f64,
    pub status_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct GeoObjectGeometry {
    pub id: i32,
    pub geo_object_id: i32,
    /// GeoJSON geometry, stored and returned as-is
    pub geometry: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct GeoObjectStatus {
    pub id: i32,
    #[sqlx(try_from = "String")]
    pub name: StatusType,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct GlobalLayer {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct GlobalLayerGeoObject {
    pub id: i32,
    pub global_layer_id: i32,
    pub geo_object_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct UserGeoObject {
    pub id: i32,
    pub user_id: i32,
    pub geo_object_id: i32,
}

/// A geo object together with its property and geometry rows.
///
/// Every object is expected to own exactly one of each, but nothing in the
/// schema enforces it, so a missing row surfaces as `None` here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeoObjectItem {
    pub object: GeoObject,
    pub property: Option<GeoObjectProperty>,
    pub geometry: Option<GeoObjectGeometry>,
}

impl GeoObjectItem {
    pub fn id(&self) -> i32 {
        self.object.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct MaterialCount {
    pub material: Option<String>,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeoObjectStatistics {
    pub underground_count: i64,
    pub aboveground_count: i64,
    /// `None` when there are no aboveground objects
    pub avg_depth_aboveground: Option<f64>,
    /// `None` when there are no underground objects
    pub avg_depth_underground: Option<f64>,
    pub materials: Vec<MaterialCount>,
    pub active_count: i64,
    pub inactive_count: i64,
}
