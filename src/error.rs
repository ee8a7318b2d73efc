//! Error types for the request pipeline.
//!
//! Two layers exist on purpose. [`ApiError`] is the classified taxonomy every
//! caller-facing operation resolves to. [`SessionError`] is what the execution
//! engine itself yields: build-stage failures arrive already classified,
//! transport failures pass through unmodified and are only folded into the
//! taxonomy by the executor layer.

use bytes::Bytes;
use thiserror::Error;

/// A classified API failure carrying the source URL or path, a numeric code,
/// the payload when one was received, and a human-readable message.
///
/// Values are terminal: they are built once by one of the canonical
/// constructors and never mutated. Equality compares all fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} ({url})")]
pub struct ApiError {
    pub url: String,
    pub status_code: i32,
    pub data: Option<Bytes>,
    pub message: String,
}

impl ApiError {
    pub fn new(
        url: impl Into<String>,
        status_code: i32,
        data: Option<Bytes>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            status_code,
            data,
            message: message.into(),
        }
    }

    /// Connectivity failure or non-success status.
    pub fn network(url: impl Into<String>) -> Self {
        Self::new(url, -1, None, "Network connection error")
    }

    /// Response payload could not be parsed.
    pub fn parse_data(url: impl Into<String>) -> Self {
        Self::new(url, -2, None, "Cannot parse data")
    }

    /// Anything that does not fit the other categories.
    pub fn unknown(url: impl Into<String>) -> Self {
        Self::new(url, -3, None, "Unknown error")
    }

    /// Response arrived without a payload where one was required.
    pub fn empty(url: impl Into<String>) -> Self {
        Self::new(url, -4, None, "Empty response")
    }

    /// The descriptor could not produce a valid URL.
    pub fn malformed_url(url: impl Into<String>) -> Self {
        Self::new(url, -5, None, "Can't generate the URL")
    }
}

/// Failure surfaced by [`crate::session::ApiSession::request`].
///
/// Build-stage problems are already classified; transport problems keep their
/// original [`reqwest::Error`] shape. The executor is the single point that
/// normalizes both into [`ApiError`].
#[derive(Debug, Error)]
pub enum SessionError {
    /// Classified failure raised while building the request or validating
    /// the response status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The request body could not be serialized.
    #[error("request body encoding failed: {0}")]
    Encode(#[from] serde_json::Error),

    /// The transport failed before a usable response arrived (DNS,
    /// connection refused, timeout).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}
