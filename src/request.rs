//! Declarative request descriptors.
//!
//! An [`ApiRequest`] is an inert description of one API call: host, method,
//! path, headers, query parameters and optional JSON body. It is constructed
//! per call site, lowered once into a transmittable [`reqwest::Request`] by
//! [`ApiRequest::build_http`], and discarded.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::Url;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

use crate::error::{ApiError, SessionError};

/// Default API host.
pub const DEFAULT_HOST: &str = "dragonball.keepcoding.education";

/// Fixed per-request timeout. There is no per-request override.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP method of an [`ApiRequest`].
///
/// `Update` is not a registered verb but is part of the upstream wire
/// contract, so it is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Update,
    Head,
    Patch,
    Delete,
    Options,
}

impl HttpMethod {
    fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Update => {
                reqwest::Method::from_bytes(b"UPDATE").expect("UPDATE is a valid method token")
            }
            Self::Head => reqwest::Method::HEAD,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
            Self::Options => reqwest::Method::OPTIONS,
        }
    }
}

/// Declarative description of one API call.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    host: String,
    method: HttpMethod,
    path: String,
    headers: HashMap<String, String>,
    query: HashMap<String, String>,
    body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// Builder for a request against `path`, targeting [`DEFAULT_HOST`] with
    /// method GET until told otherwise.
    pub fn builder(path: impl Into<String>) -> ApiRequestBuilder {
        ApiRequestBuilder {
            host: DEFAULT_HOST.to_string(),
            method: HttpMethod::Get,
            path: path.into(),
            headers: HashMap::new(),
            query: HashMap::new(),
            body: None,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Absolute URL for this descriptor.
    ///
    /// The scheme is `https` unless `host` already carries an explicit
    /// `scheme://` base, which is used as-is so local servers can be
    /// targeted. Query parameters are percent-encoded and only attached when
    /// present.
    fn build_url(&self) -> Result<Url, ApiError> {
        let base = if self.host.contains("://") {
            self.host.clone()
        } else {
            format!("https://{}", self.host)
        };
        let mut url = Url::parse(&base).map_err(|_| ApiError::malformed_url(&self.path))?;
        if url.cannot_be_a_base() {
            return Err(ApiError::malformed_url(&self.path));
        }
        url.set_path(&self.path);
        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Lower the descriptor into a transmittable request.
    ///
    /// Default headers `Accept`/`Content-Type: application/json` are merged
    /// with the descriptor's own headers, caller values winning on collision;
    /// the merge happens here, before any interceptor runs. The body is
    /// serialized and attached only when the method is not GET.
    pub fn build_http(&self) -> Result<reqwest::Request, SessionError> {
        let url = self.build_url()?;
        let mut request = reqwest::Request::new(self.method.as_reqwest(), url);

        let headers = request.headers_mut();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        merge_headers(headers, &self.headers);

        if self.method != HttpMethod::Get {
            if let Some(body) = &self.body {
                *request.body_mut() = Some(serde_json::to_vec(body)?.into());
            }
        }

        *request.timeout_mut() = Some(REQUEST_TIMEOUT);
        Ok(request)
    }
}

/// Builder for [`ApiRequest`].
#[derive(Debug, Clone)]
pub struct ApiRequestBuilder {
    host: String,
    method: HttpMethod,
    path: String,
    headers: HashMap<String, String>,
    query: HashMap<String, String>,
    body: Option<serde_json::Value>,
}

impl ApiRequestBuilder {
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    pub fn json_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn build(self) -> ApiRequest {
        ApiRequest {
            host: self.host,
            method: self.method,
            path: self.path,
            headers: self.headers,
            query: self.query,
            body: self.body,
        }
    }
}

/// Insert `extra` into `base`, overriding existing values. Entries that
/// cannot form a legal header name or value are skipped.
fn merge_headers(base: &mut HeaderMap, extra: &HashMap<String, String>) {
    for (key, value) in extra {
        if let (Ok(name), Ok(val)) = (
            HeaderName::from_bytes(key.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            base.insert(name, val);
        }
    }
}
