//! Request interceptors.
//!
//! An interceptor is a synchronous mutation of the outgoing request, applied
//! in registration order immediately before transmission. No network calls,
//! no blocking I/O.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, HeaderValue};

use crate::store::SessionStore;

/// Pluggable request-mutation step.
pub trait RequestInterceptor: Send + Sync {
    /// Mutate the request in place. Runs after default-header merge and
    /// after every previously registered interceptor.
    fn intercept(&self, request: &mut reqwest::Request);
}

/// Attaches `Authorization: Bearer <token>` from a [`SessionStore`].
///
/// Without a stored token this is a no-op. The token bytes are passed
/// through as-is, not re-encoded; a blob that cannot form a legal header
/// value leaves the request untouched.
pub struct AuthenticationInterceptor {
    store: Arc<SessionStore>,
}

impl AuthenticationInterceptor {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }
}

impl RequestInterceptor for AuthenticationInterceptor {
    fn intercept(&self, request: &mut reqwest::Request) {
        let Some(token) = self.store.get() else {
            return;
        };
        let mut value = Vec::with_capacity("Bearer ".len() + token.len());
        value.extend_from_slice(b"Bearer ");
        value.extend_from_slice(&token);
        if let Ok(value) = HeaderValue::from_bytes(&value) {
            request.headers_mut().insert(AUTHORIZATION, value);
        }
    }
}

/// Logs each outgoing request at debug level. No sensitive data.
#[derive(Clone, Default)]
pub struct LoggingInterceptor;

impl RequestInterceptor for LoggingInterceptor {
    fn intercept(&self, request: &mut reqwest::Request) {
        tracing::debug!(
            target: "dbheroes::http",
            method = %request.method(),
            url = %request.url(),
            "sending request"
        );
    }
}
