//! Auth token storage and navigation seams.
//!
//! Token persistence and the login redirect are side effects owned by the
//! embedding application. Both sit behind traits so the HTTP layer is
//! testable without a real storage backend or navigation target.

use std::sync::RwLock;

use aqua_core::models::TokenPair;

/// Persisted bearer token pair.
///
/// Implementations must be cheap to call; the HTTP client consults the
/// store on every request.
pub trait TokenStore: Send + Sync {
    /// Current token pair, if authenticated.
    fn get(&self) -> Option<TokenPair>;

    /// Persist a freshly issued token pair.
    fn set(&self, tokens: TokenPair);

    /// Drop any stored tokens.
    fn clear(&self);
}

/// In-memory token store.
#[derive(Default)]
pub struct MemoryTokenStore {
    inner: RwLock<Option<TokenPair>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<TokenPair> {
        self.inner.read().expect("token store poisoned").clone()
    }

    fn set(&self, tokens: TokenPair) {
        *self.inner.write().expect("token store poisoned") = Some(tokens);
    }

    fn clear(&self) {
        *self.inner.write().expect("token store poisoned") = None;
    }
}

/// Route awareness and navigation.
///
/// The client consults [`current_route`](Navigator::current_route) before a
/// forced-logout redirect so a user already on an unauthenticated page is
/// left alone.
pub trait Navigator: Send + Sync {
    /// Navigate to the given route.
    fn navigate(&self, route: &str);

    /// The route currently displayed.
    fn current_route(&self) -> String;
}

/// Navigator that records visits instead of navigating anywhere.
pub struct RecordingNavigator {
    route: RwLock<String>,
    visits: RwLock<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new(initial_route: &str) -> Self {
        Self {
            route: RwLock::new(initial_route.to_string()),
            visits: RwLock::new(Vec::new()),
        }
    }

    /// All routes navigated to, in order.
    pub fn visits(&self) -> Vec<String> {
        self.visits.read().expect("navigator poisoned").clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        *self.route.write().expect("navigator poisoned") = route.to_string();
        self.visits
            .write()
            .expect("navigator poisoned")
            .push(route.to_string());
    }

    fn current_route(&self) -> String {
        self.route.read().expect("navigator poisoned").clone()
    }
}
