//! HTTP transport abstraction.
//!
//! The execution engine dispatches over an injectable [`HttpTransport`] so a
//! synthetic transport can stand in for the network. [`ReqwestTransport`] is
//! the production implementation.

use std::time::Duration;

use async_trait::async_trait;

/// Configuration for the underlying HTTP client.
///
/// The per-request timeout is fixed by the descriptor builder and is not
/// configurable here.
#[derive(Debug, Clone, Default)]
pub struct TransportConfig {
    /// Connection timeout.
    pub connect_timeout: Option<Duration>,
    /// User agent.
    pub user_agent: Option<String>,
}

/// Build a `reqwest::Client` from a [`TransportConfig`].
pub fn build_http_client(config: &TransportConfig) -> Result<reqwest::Client, reqwest::Error> {
    let mut builder = reqwest::Client::builder();

    if let Some(connect_timeout) = config.connect_timeout {
        builder = builder.connect_timeout(connect_timeout);
    }

    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent);
    }

    builder.build()
}

/// Executes one already-built request against the wire.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(
        &self,
        request: reqwest::Request,
    ) -> Result<reqwest::Response, reqwest::Error>;
}

/// Default transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_config(&TransportConfig::default())
    }

    pub fn with_config(config: &TransportConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(
        &self,
        request: reqwest::Request,
    ) -> Result<reqwest::Response, reqwest::Error> {
        self.client.execute(request).await
    }
}
