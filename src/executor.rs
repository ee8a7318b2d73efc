//! Typed decode layer over [`ApiSession`].
//!
//! The three entry points cover the three response shapes an endpoint can
//! declare: decoded JSON, raw bytes, or no content. The shape is chosen
//! where the endpoint is bound, never inferred from the payload. This layer
//! is also the single normalization point: every failure leaving it is an
//! [`ApiError`].

use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, SessionError};
use crate::request::ApiRequest;
use crate::session::ApiSession;

/// Collapse a session failure into the classified taxonomy. Classified
/// errors pass through verbatim; transport and body-encoding failures become
/// `unknown(path)`.
fn normalize(error: SessionError, path: &str) -> ApiError {
    match error {
        SessionError::Api(error) => error,
        other => {
            tracing::debug!(
                target: "dbheroes::http",
                path,
                error = %other,
                "unclassified failure"
            );
            ApiError::unknown(path)
        }
    }
}

/// Perform `descriptor` and decode the JSON body into `T`.
///
/// A body that fails to decode yields `unknown(path)`.
pub async fn perform<T: DeserializeOwned>(
    session: &ApiSession,
    descriptor: &ApiRequest,
) -> Result<T, ApiError> {
    let bytes = perform_raw(session, descriptor).await?;
    serde_json::from_slice(&bytes).map_err(|error| {
        tracing::debug!(
            target: "dbheroes::http",
            path = %descriptor.path(),
            error = %error,
            "response decode failed"
        );
        ApiError::unknown(descriptor.path())
    })
}

/// Perform `descriptor` and return the body bytes untouched.
pub async fn perform_raw(
    session: &ApiSession,
    descriptor: &ApiRequest,
) -> Result<Bytes, ApiError> {
    session
        .request(descriptor)
        .await
        .map_err(|error| normalize(error, descriptor.path()))
}

/// Perform `descriptor`, discarding whatever body arrives.
pub async fn perform_empty(session: &ApiSession, descriptor: &ApiRequest) -> Result<(), ApiError> {
    perform_raw(session, descriptor).await.map(|_| ())
}
