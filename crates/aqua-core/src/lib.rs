//! # aqua-core
//!
//! Core types, traits, and abstractions for the AquaTracker data layer.
//!
//! This crate provides the foundational data structures and trait definitions
//! that the HTTP client and query-cache crates depend on: domain models for
//! specimens and collection locations, the shared error taxonomy, location
//! normalization between the two wire shapes, typed page cursors, and typed
//! cache keys.

pub mod cursor;
pub mod defaults;
pub mod error;
pub mod key;
pub mod logging;
pub mod models;
pub mod normalize;
pub mod traits;

// Re-export commonly used types at crate root
pub use cursor::PageCursor;
pub use error::{Error, Result};
pub use key::{resource, QueryKey};
pub use models::*;
pub use normalize::{normalize_location, normalize_locations};
pub use traits::{LocationApi, SpecimenApi, StatisticsApi};
