//! Location normalization between the two wire shapes.
//!
//! The single authoritative converter from the flat backend shape to the
//! GeoJSON-like feature shape. Pure: no network, no mutation of the input.
//! Coordinates are carried over verbatim; index 0 stays longitude, index 1
//! stays latitude.

use crate::models::{FeatureProperties, FlatLocation, Geometry, LocationFeature};

/// Convert a flat backend location into the feature shape.
///
/// Total over validly-shaped flat records. A missing description becomes an
/// empty string in the feature properties.
pub fn normalize_location(flat: &FlatLocation) -> LocationFeature {
    LocationFeature {
        id: flat.id,
        feature_type: "Feature".to_string(),
        geometry: Geometry::point(flat.coordinates),
        properties: FeatureProperties {
            name: flat.name.clone(),
            description: flat.description.clone().unwrap_or_default(),
            created_at: flat.created_at,
            updated_at: flat.updated_at,
        },
    }
}

/// Element-wise normalization: preserves order and length, never filters.
pub fn normalize_locations(flat: &[FlatLocation]) -> Vec<LocationFeature> {
    flat.iter().map(normalize_location).collect()
}
