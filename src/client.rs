//! Composition root.
//!
//! [`ApiClient`] owns the session store and the execution engine, wires the
//! authentication interceptor, and exposes the API as typed async
//! operations.

use std::sync::Arc;

use thiserror::Error;

use crate::error::{ApiError, SessionError};
use crate::executor::{perform, perform_raw};
use crate::request::DEFAULT_HOST;
use crate::requests;
use crate::session::ApiSession;
use crate::store::SessionStore;
use crate::types::{Credentials, Hero, Transformation};

/// Failure of the validated login operation.
#[derive(Debug, Error)]
pub enum LoginError {
    /// The username must contain `@`.
    #[error("invalid username")]
    InvalidUsername,
    /// The password must be at least four characters.
    #[error("invalid password")]
    InvalidPassword,
    /// The login request itself failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Typed client for the Dragon Ball Heroes API.
pub struct ApiClient {
    session: ApiSession,
    store: Arc<SessionStore>,
    host: String,
}

impl ApiClient {
    /// Client against the default host.
    pub fn new() -> Result<Self, SessionError> {
        Self::with_host(DEFAULT_HOST)
    }

    /// Client against an explicit host, or a full `scheme://host:port` base.
    pub fn with_host(host: impl Into<String>) -> Result<Self, SessionError> {
        let store = SessionStore::shared();
        let session = ApiSession::new(Arc::clone(&store))?;
        Ok(Self {
            session,
            store,
            host: host.into(),
        })
    }

    /// The shared token store, for callers wiring their own components.
    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    /// Log in and keep the returned token for subsequent requests.
    ///
    /// Credentials are validated before any network activity: the username
    /// must contain `@`, the password must be at least four characters.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), LoginError> {
        if credentials.username.is_empty() || !credentials.username.contains('@') {
            return Err(LoginError::InvalidUsername);
        }
        if credentials.password.chars().count() < 4 {
            return Err(LoginError::InvalidPassword);
        }

        let request = requests::login(&self.host, credentials);
        let token = perform_raw(&self.session, &request).await?;
        self.store.store(token);
        tracing::debug!(target: "dbheroes::api", "session token stored");
        Ok(())
    }

    /// Heroes matching `name`; `None` lists every hero.
    pub async fn heroes(&self, name: Option<&str>) -> Result<Vec<Hero>, ApiError> {
        let request = requests::get_heroes(&self.host, name);
        perform(&self.session, &request).await
    }

    /// First hero whose name matches `name`, ignoring case.
    pub async fn hero_by_name(&self, name: &str) -> Result<Option<Hero>, ApiError> {
        let heroes = self.heroes(Some(name)).await?;
        let lowered = name.to_lowercase();
        Ok(heroes
            .into_iter()
            .find(|hero| hero.name.to_lowercase() == lowered))
    }

    /// Transformations of the hero with `hero_id`.
    pub async fn transformations(
        &self,
        hero_id: Option<&str>,
    ) -> Result<Vec<Transformation>, ApiError> {
        let request = requests::get_transformations(&self.host, hero_id);
        perform(&self.session, &request).await
    }

    /// The transformation of `hero_id` with id `transformation_id`.
    pub async fn transformation_by_id(
        &self,
        hero_id: &str,
        transformation_id: &str,
    ) -> Result<Option<Transformation>, ApiError> {
        let transformations = self.transformations(Some(hero_id)).await?;
        Ok(transformations
            .into_iter()
            .find(|transformation| transformation.id == transformation_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn login_rejects_a_username_without_at_sign() {
        // Unroutable host: validation must fail before any network activity.
        let client = ApiClient::with_host("http://127.0.0.1:1").unwrap();
        let err = client
            .login(&Credentials::new("goku", "kamehameha"))
            .await
            .unwrap_err();
        assert!(matches!(err, LoginError::InvalidUsername));
    }

    #[tokio::test]
    async fn login_rejects_a_short_password() {
        let client = ApiClient::with_host("http://127.0.0.1:1").unwrap();
        let err = client
            .login(&Credentials::new("goku@capsule.corp", "ki"))
            .await
            .unwrap_err();
        assert!(matches!(err, LoginError::InvalidPassword));
    }
}
