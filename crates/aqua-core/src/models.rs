//! Core data models for the AquaTracker data layer.
//!
//! These types are shared across the client and query crates and represent
//! the domain entities owned by the remote API: algae specimens, collection
//! locations (in both historical wire shapes), pagination envelopes, and
//! account records. The remote API is the source of truth; nothing here is
//! persisted beyond the in-memory query cache.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{Error, Result};

// =============================================================================
// LOCATION TYPES
// =============================================================================

/// Coordinate pair on the wire: `[longitude, latitude]`.
///
/// Index 0 is longitude, index 1 is latitude. Normalization preserves the
/// pair verbatim; no axis reordering happens anywhere in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LngLat(pub [f64; 2]);

impl LngLat {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self([longitude, latitude])
    }

    pub fn longitude(&self) -> f64 {
        self.0[0]
    }

    pub fn latitude(&self) -> f64 {
        self.0[1]
    }

    /// Check the pair against valid WGS84 ranges.
    pub fn validate(&self) -> Result<()> {
        if !(-180.0..=180.0).contains(&self.longitude()) {
            return Err(Error::InvalidInput(format!(
                "longitude {} out of range [-180, 180]",
                self.longitude()
            )));
        }
        if !(-90.0..=90.0).contains(&self.latitude()) {
            return Err(Error::InvalidInput(format!(
                "latitude {} out of range [-90, 90]",
                self.latitude()
            )));
        }
        Ok(())
    }
}

/// Flat "backend" location shape: the plain-object representation the
/// original backend version emits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlatLocation {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub coordinates: LngLat,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Point geometry of a normalized location feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub geometry_type: String,
    pub coordinates: LngLat,
}

impl Geometry {
    pub fn point(coordinates: LngLat) -> Self {
        Self {
            geometry_type: "Point".to_string(),
            coordinates,
        }
    }
}

/// Properties of a normalized location feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureProperties {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// GeoJSON-like "feature" location shape used by map-facing consumers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationFeature {
    pub id: i64,
    #[serde(rename = "type")]
    pub feature_type: String,
    pub geometry: Geometry,
    pub properties: FeatureProperties,
}

/// A location as it may arrive on the wire: either shape.
///
/// Two representations coexist historically; rather than sniffing for a
/// `geometry` key at call sites, the union is explicit and
/// [`into_feature`](LocationRecord::into_feature) is total over it.
/// Variant order matters for untagged deserialization: the feature shape
/// is tried first since a flat record lacks `geometry` and a feature lacks
/// top-level `coordinates`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum LocationRecord {
    Feature(LocationFeature),
    Flat(FlatLocation),
}

impl LocationRecord {
    /// Convert either shape into the feature shape.
    ///
    /// A feature input is a no-op pass-through; a flat input is normalized.
    pub fn into_feature(self) -> LocationFeature {
        match self {
            LocationRecord::Feature(feature) => feature,
            LocationRecord::Flat(flat) => crate::normalize::normalize_location(&flat),
        }
    }
}

/// Request body for creating or updating a location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub coordinates: LngLat,
}

impl LocationInput {
    /// Client-side validation, applied before any request is issued.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().chars().count() < 2 {
            return Err(Error::InvalidInput(
                "location name must be at least 2 characters".to_string(),
            ));
        }
        self.coordinates.validate()
    }
}

// =============================================================================
// SPECIMEN TYPES
// =============================================================================

/// An algae specimen record as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Specimen {
    pub id: i64,
    pub scientific_name: String,
    #[serde(default)]
    pub common_name: Option<String>,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub order: Option<String>,
    #[serde(default)]
    pub family: Option<String>,
    #[serde(default)]
    pub genus: Option<String>,
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Associated collection locations, in either wire shape.
    #[serde(default)]
    pub locations: Vec<LocationRecord>,
    #[serde(default)]
    pub collection_date: Option<NaiveDate>,
    #[serde(default)]
    pub collector: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Specimen {
    /// Associated locations, all normalized to the feature shape.
    pub fn location_features(&self) -> Vec<LocationFeature> {
        self.locations
            .iter()
            .cloned()
            .map(LocationRecord::into_feature)
            .collect()
    }
}

/// Image file attached to a specimen create/update.
#[derive(Debug, Clone)]
pub struct ImageAttachment {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Request body for creating or updating a specimen.
///
/// When [`image`](SpecimenInput::image) is present the request is encoded as
/// multipart; otherwise as JSON. The encoding is a function of the payload,
/// never a caller flag.
#[derive(Debug, Clone, Serialize, Default)]
pub struct SpecimenInput {
    pub scientific_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genus: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub location_ids: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collector: Option<String>,
    /// Optional image file; not part of the JSON encoding.
    #[serde(skip)]
    pub image: Option<ImageAttachment>,
}

impl SpecimenInput {
    /// Client-side validation: scientific name and at least one location are
    /// required, everything else is optional free text.
    pub fn validate(&self) -> Result<()> {
        if self.scientific_name.trim().is_empty() {
            return Err(Error::InvalidInput(
                "scientific_name is required".to_string(),
            ));
        }
        if self.location_ids.is_empty() {
            return Err(Error::InvalidInput(
                "at least one location is required".to_string(),
            ));
        }
        Ok(())
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}

/// List filter query parameters for specimens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecimenFilter {
    pub class_name: Option<String>,
    pub order: Option<String>,
    pub family: Option<String>,
    pub location: Option<i64>,
    pub search: Option<String>,
}

impl SpecimenFilter {
    /// Query pairs in canonical field order, used for both the request and
    /// the cache key so invalidation provably matches reads.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(v) = &self.class_name {
            pairs.push(("class_name", v.clone()));
        }
        if let Some(v) = &self.order {
            pairs.push(("order", v.clone()));
        }
        if let Some(v) = &self.family {
            pairs.push(("family", v.clone()));
        }
        if let Some(v) = self.location {
            pairs.push(("location", v.to_string()));
        }
        if let Some(v) = &self.search {
            pairs.push(("search", v.clone()));
        }
        pairs
    }

    /// Canonical serialization for cache keys.
    pub fn cache_fragment(&self) -> String {
        self.query_pairs()
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Paginated list envelope: `{count, next, previous, results}`.
///
/// `next`/`previous` are full URLs whose `page` query parameter is the
/// cursor; [`next_cursor`](Page::next_cursor) extracts it once so callers
/// never re-parse URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub count: i64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Typed cursor for the following page, parsed from the `next` URL.
    /// `None` when there is no next page or its URL carries no `page`
    /// parameter.
    pub fn next_cursor(&self) -> Option<crate::cursor::PageCursor> {
        self.next
            .as_deref()
            .and_then(crate::cursor::PageCursor::from_next_url)
    }

    /// Map the results, preserving the envelope.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            count: self.count,
            next: self.next,
            previous: self.previous,
            results: self.results.into_iter().map(f).collect(),
        }
    }
}

// =============================================================================
// ACCOUNT TYPES
// =============================================================================

/// Login request body.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Registration request body.
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub first_name: String,
    pub last_name: String,
}

/// Bearer token pair issued by the auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Minimal user identity embedded in the login/register response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// Response of `/auth/login/` and `/auth/register/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub access: String,
    pub refresh: String,
    pub user: AuthUser,
}

impl AuthSession {
    pub fn token_pair(&self) -> TokenPair {
        TokenPair {
            access: self.access.clone(),
            refresh: self.refresh.clone(),
        }
    }
}

/// Account profile record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub date_joined: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
}

/// Partial profile update; absent fields are left unchanged server-side.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Password change request body.
#[derive(Debug, Clone, Serialize)]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
    pub new_password_confirm: String,
}

/// A recently collected specimen in the statistics summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentCollection {
    pub id: i64,
    pub scientific_name: String,
    #[serde(default)]
    pub collector: Option<String>,
    #[serde(default)]
    pub collection_date: Option<NaiveDate>,
}

/// Aggregate collection statistics from `/user/statistics/`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserStatistics {
    pub total_collections: u64,
    pub unique_locations: u64,
    pub unique_classes: u64,
    pub unique_families: u64,
    #[serde(default)]
    pub unique_collectors: u64,
    #[serde(default)]
    pub recent_collections: Vec<RecentCollection>,
    #[serde(default)]
    pub class_distribution: HashMap<String, u64>,
}
