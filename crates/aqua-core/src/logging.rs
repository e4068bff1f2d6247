//! Structured logging field name constants for the AquaTracker data layer.
//!
//! All crates use these constants for consistent structured logging fields,
//! so log aggregation tools can query by standardized names across the
//! client and query layers.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Degraded service, requires attention |
//! | WARN  | Recoverable issue (slow request, revoke failure, page-cap hit) |
//! | INFO  | Lifecycle events (login, logout, client construction) |
//! | DEBUG | Request dispatch, cache decisions |
//! | TRACE | Per-record iteration |

/// Subsystem originating the log event.
/// Values: "client", "query"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "http", "specimens", "locations", "account", "cache"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "list", "get", "create", "update", "delete", "login"
pub const OPERATION: &str = "op";

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// HTTP status code of a response.
pub const STATUS: &str = "status";

/// Number of records returned.
pub const RESULT_COUNT: &str = "result_count";

/// Resource name a cache event concerns.
pub const RESOURCE: &str = "resource";

/// Page number being fetched.
pub const PAGE: &str = "page";

/// Whether a read was served from cache.
pub const CACHE_HIT: &str = "cache_hit";
