//! Account and authentication service.
//!
//! Login and registration persist the issued token pair through the
//! client's [`TokenStore`](crate::auth::TokenStore); logout revokes the
//! refresh token best-effort and always clears the store.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, instrument, warn};

use aqua_core::models::{
    AuthSession, Credentials, PasswordChange, ProfileUpdate, Registration, UserProfile,
    UserStatistics,
};
use aqua_core::Result;

use crate::http::ApiClient;

#[derive(Serialize)]
struct LogoutRequest<'a> {
    refresh: &'a str,
}

/// Auth and profile operations against `/auth/` and `/user/`.
pub struct AccountService {
    api: Arc<ApiClient>,
}

impl AccountService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Exchange credentials for a session; the token pair is persisted.
    #[instrument(skip(self, credentials), fields(subsystem = "client", component = "account", op = "login"))]
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthSession> {
        let session: AuthSession = self.api.post_json("/auth/login/", credentials).await?;
        self.api.token_store().set(session.token_pair());
        info!(user = %session.user.username, "Logged in");
        Ok(session)
    }

    /// Register a new account; the issued token pair is persisted.
    #[instrument(skip(self, registration), fields(subsystem = "client", component = "account", op = "register"))]
    pub async fn register(&self, registration: &Registration) -> Result<AuthSession> {
        let session: AuthSession = self.api.post_json("/auth/register/", registration).await?;
        self.api.token_store().set(session.token_pair());
        info!(user = %session.user.username, "Registered");
        Ok(session)
    }

    /// Revoke the refresh token and clear the store.
    ///
    /// The store is cleared even when the revoke call fails; the failure is
    /// only logged.
    #[instrument(skip(self), fields(subsystem = "client", component = "account", op = "logout"))]
    pub async fn logout(&self) -> Result<()> {
        let store = self.api.token_store();
        if let Some(pair) = store.get() {
            let body = LogoutRequest {
                refresh: &pair.refresh,
            };
            if let Err(e) = self.api.post_unit("/auth/logout/", &body).await {
                warn!(error = %e, "Token revoke failed, clearing session anyway");
            }
        }
        store.clear();
        info!("Logged out");
        Ok(())
    }

    /// Whether a token pair is currently stored.
    pub fn is_authenticated(&self) -> bool {
        self.api.token_store().get().is_some()
    }

    /// Fetch the account profile.
    #[instrument(skip(self), fields(subsystem = "client", component = "account", op = "profile"))]
    pub async fn profile(&self) -> Result<UserProfile> {
        self.api.get_json("/user/profile/", &[]).await
    }

    /// Apply a partial profile update.
    #[instrument(skip(self, update), fields(subsystem = "client", component = "account", op = "update_profile"))]
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile> {
        self.api.put_json("/user/update-profile/", update).await
    }

    /// Change the account password.
    #[instrument(skip(self, change), fields(subsystem = "client", component = "account", op = "change_password"))]
    pub async fn change_password(&self, change: &PasswordChange) -> Result<()> {
        self.api.post_unit("/user/change-password/", change).await
    }

    /// Fetch the account's aggregate collection statistics.
    #[instrument(skip(self), fields(subsystem = "client", component = "account", op = "statistics"))]
    pub async fn statistics(&self) -> Result<UserStatistics> {
        self.api.get_json("/user/statistics/", &[]).await
    }
}
