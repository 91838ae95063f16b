//! The reusable request caller and its per-call options.
//!
//! [`HttpClientCaller`] binds an optional base URL to the handler pair that
//! was active when it was built. Each [`call`](HttpClientCaller::call)
//! resolves the final URL, delegates the request to the active (or per-call
//! overridden) request handler, and pipes the result through the response
//! handler unless the call opts out.

use std::sync::Arc;

use bon::Builder;
use serde_json::Value;
use snafu::ensure;

use crate::config::{HttpClientConfiguration, RequestHandler, ResponseHandler};
use crate::error::{EmptyUrlSnafu, HttpClientError};
use crate::response::HttpClientResponse;

/// Per-call options accepted by [`HttpClientCaller::call`].
///
/// Everything is optional; the empty record (see [`Default`]) performs the
/// request against the caller's base URL with the captured handler pair.
#[derive(Builder)]
pub struct HttpClientCallerOptions<O = Value, D = Value> {
    /// Opaque options forwarded verbatim to the request handler.
    /// Defaults to `O::default()` when absent.
    pub options: Option<O>,

    /// A path appended to the caller's base URL, or a full URL when the
    /// caller has none.
    #[builder(into)]
    pub path: Option<String>,

    /// Skip the response handler and return the request handler's result
    /// unchanged.
    #[builder(default)]
    pub ignore_response_handler: bool,

    /// Overrides the captured request handler for this call only.
    pub request_handler: Option<RequestHandler<O, D>>,

    /// Overrides the captured response handler for this call only.
    pub response_handler: Option<ResponseHandler<D>>,
}

impl<O, D> Default for HttpClientCallerOptions<O, D> {
    fn default() -> Self {
        Self {
            options: None,
            path: None,
            ignore_response_handler: false,
            request_handler: None,
            response_handler: None,
        }
    }
}

impl<O, D> std::fmt::Debug for HttpClientCallerOptions<O, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClientCallerOptions")
            .field("path", &self.path)
            .field("ignore_response_handler", &self.ignore_response_handler)
            .field("request_handler", &self.request_handler.is_some())
            .field("response_handler", &self.response_handler.is_some())
            .finish_non_exhaustive()
    }
}

/// A reusable caller bound to an optional base URL.
///
/// The handler pair is captured once at construction; later configuration
/// changes never affect an existing caller. Calls are independent of each
/// other — the captured state is immutable and URL resolution is a pure
/// function of each call's arguments — so a caller may be shared and invoked
/// concurrently without coordination.
pub struct HttpClientCaller<O = Value, D = Value> {
    base_url: Option<String>,
    request_handler: RequestHandler<O, D>,
    response_handler: ResponseHandler<D>,
}

impl<O, D> HttpClientCaller<O, D> {
    /// Binds `base_url` and captures the handler pair from `config`.
    ///
    /// `base_url` may be a full URL or a prefix completed by each call's
    /// `path`; `None` requires every call to carry a full URL in `path`.
    #[must_use]
    pub fn new(config: &HttpClientConfiguration<O, D>, base_url: Option<&str>) -> Self {
        Self {
            base_url: base_url.map(str::to_owned),
            request_handler: Arc::clone(&config.request_handler),
            response_handler: Arc::clone(&config.response_handler),
        }
    }

    /// The bound base URL, if any.
    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Performs one request.
    ///
    /// Resolves the final URL (`base_url` + `path`, trimmed), invokes the
    /// selected request handler with the URL and the call's options, then —
    /// unless `ignore_response_handler` is set — pipes the result through
    /// the selected response handler.
    ///
    /// # Errors
    ///
    /// [`HttpClientError::EmptyUrl`] when the resolved URL is empty after
    /// trimming; neither handler has run at that point. Any other error is a
    /// handler failure surfaced unmodified.
    pub async fn call(
        &self,
        caller_options: HttpClientCallerOptions<O, D>,
    ) -> Result<HttpClientResponse<D>, HttpClientError>
    where
        O: Default,
    {
        let HttpClientCallerOptions {
            options,
            path,
            ignore_response_handler,
            request_handler,
            response_handler,
        } = caller_options;

        let resolved = match &path {
            Some(path) => format!("{}{path}", self.base_url.as_deref().unwrap_or_default()),
            None => self.base_url.clone().unwrap_or_default(),
        };
        let url = resolved.trim();
        ensure!(!url.is_empty(), EmptyUrlSnafu);

        let request_handler = request_handler.as_ref().unwrap_or(&self.request_handler);
        let response_handler = response_handler.as_ref().unwrap_or(&self.response_handler);

        tracing::debug!(url, ignore_response_handler, "dispatching request");
        let response = (**request_handler)(url.to_owned(), options.unwrap_or_default()).await?;

        if ignore_response_handler {
            tracing::trace!(url, "skipping response handler");
            return Ok(response);
        }

        (**response_handler)(response).await
    }
}

impl<O, D> Clone for HttpClientCaller<O, D> {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            request_handler: Arc::clone(&self.request_handler),
            response_handler: Arc::clone(&self.response_handler),
        }
    }
}

impl<O, D> std::fmt::Debug for HttpClientCaller<O, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClientCaller")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
