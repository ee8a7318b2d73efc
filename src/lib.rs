//! # dbheroes — a typed async client for the Dragon Ball Heroes API
//!
//! The crate is built around a small request pipeline:
//!
//! - [`request::ApiRequest`] — a declarative descriptor of one API call;
//! - [`session::ApiSession`] — the single execution point: builds the
//!   transmittable request, applies [`interceptor::RequestInterceptor`]s in
//!   registration order, dispatches over an injectable
//!   [`transport::HttpTransport`], validates the HTTP status;
//! - [`executor`] — decodes the raw bytes into the typed result and
//!   guarantees every failure reaching a caller is a classified
//!   [`error::ApiError`];
//! - [`client::ApiClient`] — the composition root exposing the concrete
//!   endpoints.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dbheroes::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new()?;
//!     client
//!         .login(&Credentials::new("user@example.com", "secret"))
//!         .await?;
//!
//!     let heroes = client.heroes(None).await?;
//!     for hero in heroes {
//!         println!("{}", hero.name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Futures resolve exactly once; callers needing a particular execution
//! context simply await on it. There is no retry, caching or cancellation
//! machinery in this layer — dropping a future is the caller's cancellation.

#![deny(unsafe_code)]

pub mod client;
pub mod error;
pub mod executor;
pub mod interceptor;
pub mod request;
pub mod requests;
pub mod session;
pub mod store;
pub mod transport;
pub mod types;

pub use client::{ApiClient, LoginError};
pub use error::{ApiError, SessionError};
pub use request::{ApiRequest, DEFAULT_HOST, HttpMethod};
pub use session::ApiSession;
pub use store::SessionStore;

/// Commonly used types in one import.
pub mod prelude {
    pub use crate::client::{ApiClient, LoginError};
    pub use crate::error::ApiError;
    pub use crate::request::{ApiRequest, HttpMethod};
    pub use crate::types::{Credentials, Hero, Transformation};
}
