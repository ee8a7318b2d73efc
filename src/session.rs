//! The execution engine.
//!
//! [`ApiSession::request`] is the single point every API call flows through:
//! lower the descriptor, run the interceptor chain, transmit, validate the
//! status, hand back the raw body bytes.

use std::sync::Arc;

use bytes::Bytes;
use reqwest::StatusCode;

use crate::error::{ApiError, SessionError};
use crate::interceptor::{AuthenticationInterceptor, LoggingInterceptor, RequestInterceptor};
use crate::request::ApiRequest;
use crate::store::SessionStore;
use crate::transport::{HttpTransport, ReqwestTransport};

/// Executes [`ApiRequest`] descriptors over a transport.
///
/// The interceptor list is fixed at construction time; its order is the
/// application order. The session holds no per-request state, so one
/// instance serves any number of concurrent calls.
pub struct ApiSession {
    transport: Arc<dyn HttpTransport>,
    interceptors: Vec<Arc<dyn RequestInterceptor>>,
}

impl ApiSession {
    /// Session with the default transport and interceptor chain: an
    /// [`AuthenticationInterceptor`] wired to `store`, then a
    /// [`LoggingInterceptor`] so the logged request is the transmitted one.
    pub fn new(store: Arc<SessionStore>) -> Result<Self, SessionError> {
        let transport = ReqwestTransport::new()?;
        Ok(Self::with_parts(
            Arc::new(transport),
            vec![
                Arc::new(AuthenticationInterceptor::new(store)),
                Arc::new(LoggingInterceptor),
            ],
        ))
    }

    /// Session over an explicit transport and interceptor chain.
    pub fn with_parts(
        transport: Arc<dyn HttpTransport>,
        interceptors: Vec<Arc<dyn RequestInterceptor>>,
    ) -> Self {
        Self {
            transport,
            interceptors,
        }
    }

    /// Execute `descriptor` with exactly one network call.
    ///
    /// Build failures yield a classified error before any interceptor or
    /// network activity. Transport failures pass through unmodified. A
    /// status other than 200 collapses to [`ApiError::network`] with the
    /// descriptor's path; a 200 yields the body bytes, empty when the
    /// response had none.
    pub async fn request(&self, descriptor: &ApiRequest) -> Result<Bytes, SessionError> {
        let mut request = descriptor.build_http()?;

        for interceptor in &self.interceptors {
            interceptor.intercept(&mut request);
        }

        let response = self.transport.execute(request).await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::debug!(
                target: "dbheroes::http",
                path = %descriptor.path(),
                status = status.as_u16(),
                "request rejected"
            );
            return Err(ApiError::network(descriptor.path()).into());
        }

        let bytes = response.bytes().await?;
        Ok(bytes)
    }
}
