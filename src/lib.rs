//! A thin configuration-and-delegation layer for HTTP-like requests.
//!
//! The crate performs no I/O of its own. An application registers a pair of
//! pluggable async functions — a request handler that performs the actual
//! request and a response handler that post-processes the result — in a
//! [`ConfigScope`]. Any code holding a scope derives a reusable
//! [`HttpClientCaller`] bound to an optional base URL; each call resolves
//! the final URL, delegates to the registered (or per-call overridden)
//! request handler, and pipes the result through the response handler
//! unless the call opts out.
//!
//! Without a provided configuration, calls resolve to the sentinel
//! `{status: 500, data: None, error: None}` rather than failing hard.
//!
//! ```
//! use http_dispatch::{
//!     ConfigScope, HttpClientCallerOptions, HttpClientConfiguration, HttpClientResponse,
//! };
//!
//! # async fn demo() -> Result<(), http_dispatch::HttpClientError> {
//! let config = HttpClientConfiguration::new(
//!     |url, _options: serde_json::Value| async move {
//!         // Hand the URL to any HTTP library here.
//!         Ok(HttpClientResponse {
//!             status: http::StatusCode::OK,
//!             data: Some(serde_json::json!({ "requested": url })),
//!             error: None,
//!         })
//!     },
//!     |response| async move {
//!         // React to 4xx/5xx statuses, refresh sessions, and so on.
//!         Ok(response)
//!     },
//! );
//!
//! let scope = ConfigScope::root().provide(config);
//! let api = scope.invoker(Some("https://api.xyz.com"));
//! let response = api
//!     .call(HttpClientCallerOptions::builder().path("/todos").build())
//!     .await?;
//! assert_eq!(response.status, http::StatusCode::OK);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]

mod caller;
mod config;
mod error;
mod response;
mod scope;
mod url;

pub use caller::{HttpClientCaller, HttpClientCallerOptions};
pub use config::{
    HandlerFuture, HttpClientConfiguration, RequestHandler, ResponseHandler, default_config,
};
pub use error::{BoxedError, HttpClientError};
pub use response::{ErrorCode, ErrorResponse, HttpClientResponse};
pub use scope::ConfigScope;
pub use url::is_valid_url;

/// Documentation
pub mod _documentation {
    #[doc = include_str!("../README.md")]
    mod readme {}
    #[doc = include_str!("../CHANGELOG.md")]
    pub mod changelog {}
}
