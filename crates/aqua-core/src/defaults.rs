//! Centralized default constants for the AquaTracker data layer.
//!
//! **This module is the single source of truth** for shared default values.
//! Cache freshness windows and the pagination cap are configuration, not
//! per-call-site magic numbers; clients override them through `ClientConfig`
//! and `CachePolicy`.

// =============================================================================
// HTTP CLIENT
// =============================================================================

/// Default API base URL.
pub const API_URL: &str = "http://localhost:8000/api";

/// Per-request timeout (seconds). Every request is bounded.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Requests slower than this are logged at warn level.
pub const SLOW_REQUEST_MS: u64 = 5000;

/// Route navigated to after a forced logout.
pub const LOGIN_ROUTE: &str = "/login";

/// Unauthenticated-page routes that never trigger a login redirect.
pub const UNAUTHENTICATED_ROUTES: [&str; 2] = ["/login", "/signup"];

// =============================================================================
// CACHING
// =============================================================================

/// Seconds a cached query result is considered fresh.
pub const STALE_SECS: u64 = 5 * 60;

/// Seconds an unused cache entry survives before eviction.
pub const EVICT_SECS: u64 = 10 * 60;

// =============================================================================
// PAGINATION
// =============================================================================

/// Hard cap on pages walked by a full-collection fetch. Guarantees
/// termination against a server that never returns a null `next`.
pub const MAX_PAGES: u32 = 50;

// =============================================================================
// ENVIRONMENT VARIABLES
// =============================================================================

/// Overrides the API base URL.
pub const ENV_API_URL: &str = "AQUA_API_URL";

/// Overrides the per-request timeout (seconds).
pub const ENV_TIMEOUT_SECS: &str = "AQUA_TIMEOUT_SECS";
