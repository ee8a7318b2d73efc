//! Endpoint request constructors.
//!
//! One function per API call, each producing the [`ApiRequest`] descriptor
//! for it. The typed decode happens where the endpoint is bound (see
//! [`crate::client`]).

use base64::Engine;
use serde_json::json;

use crate::request::{ApiRequest, HttpMethod};
use crate::types::Credentials;

/// `POST /api/heros/all` — heroes matching `name`; an empty name matches all.
pub fn get_heroes(host: &str, name: Option<&str>) -> ApiRequest {
    ApiRequest::builder("/api/heros/all")
        .host(host)
        .method(HttpMethod::Post)
        .json_body(json!({ "name": name.unwrap_or("") }))
        .build()
}

/// `POST /api/heros/tranformations` — transformations of one hero.
///
/// The path spelling is the upstream API's own.
pub fn get_transformations(host: &str, id: Option<&str>) -> ApiRequest {
    ApiRequest::builder("/api/heros/tranformations")
        .host(host)
        .method(HttpMethod::Post)
        .json_body(json!({ "id": id.unwrap_or("any") }))
        .build()
}

/// `POST /api/auth/login` — Basic credentials in, session token bytes out.
pub fn login(host: &str, credentials: &Credentials) -> ApiRequest {
    let encoded = base64::engine::general_purpose::STANDARD
        .encode(format!("{}:{}", credentials.username, credentials.password));
    ApiRequest::builder("/api/auth/login")
        .host(host)
        .method(HttpMethod::Post)
        .header("Authorization", format!("Basic {encoded}"))
        .build()
}
