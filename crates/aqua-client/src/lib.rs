//! # aqua-client
//!
//! HTTP layer for the AquaTracker API.
//!
//! This crate provides:
//! - A configurable [`ApiClient`] over `reqwest` with bounded per-request
//!   timeouts and bearer authentication
//! - Pluggable [`TokenStore`] and [`Navigator`] seams so the forced-logout
//!   side effects are mockable
//! - One service per REST resource: specimens, locations, account,
//!   statistics
//!
//! Services perform no caching and no retries; the cache-and-refetch layer
//! lives in `aqua-query`.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use aqua_client::{ApiClient, ClientConfig, MemoryTokenStore, RecordingNavigator};
//! use aqua_client::LocationService;
//! use aqua_core::LocationApi;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = ApiClient::new(
//!         &ClientConfig::default(),
//!         Arc::new(MemoryTokenStore::new()),
//!         Arc::new(RecordingNavigator::new("/")),
//!     )
//!     .unwrap();
//!     let locations = LocationService::new(Arc::new(client));
//!     let page = locations.list(None).await.unwrap();
//!     println!("{} locations", page.count);
//! }
//! ```

pub mod account;
pub mod auth;
pub mod config;
pub mod http;
pub mod locations;
pub mod specimens;
pub mod statistics;

// Re-export core types
pub use aqua_core::{Error, Result};

pub use account::AccountService;
pub use auth::{MemoryTokenStore, Navigator, RecordingNavigator, TokenStore};
pub use config::{ClientConfig, ConfigError};
pub use http::ApiClient;
pub use locations::LocationService;
pub use specimens::SpecimenService;
pub use statistics::StatisticsService;
